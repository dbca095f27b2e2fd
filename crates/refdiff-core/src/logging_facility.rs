//! Structured logging facility for refdiff
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The library never installs a subscriber on its own. Hosts that want to
//! see the events call [`init`] once at startup; everything else is a no-op
//! until they do.
//!
//! # Usage
//!
//! ```rust
//! use refdiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
