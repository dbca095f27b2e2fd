//! Core types shared across refdiff facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by error reporting, so that field keys and event names
//! stay identical everywhere they are emitted or asserted on.

pub mod schema;
