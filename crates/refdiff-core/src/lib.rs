//! refdiff core - collection diffing and path-based field resolution
//!
//! This crate provides two groups of helpers:
//! - Set-like differences between two collections, keyed either by the
//!   elements' own equality or by a content fingerprint
//! - Read access to registered object graphs: resolving a value by a
//!   dot-delimited field path, and aggregating fields by capability
//!
//! All operations are synchronous, allocate their results fresh and keep no
//! state between calls.

pub mod capability;
pub mod diff;
pub mod errors;
pub mod fingerprint;
pub mod introspect;
pub mod logging_facility;
pub mod path;

#[doc(hidden)]
pub use tracing;

pub use refdiff_core_types::schema;

// Re-export commonly used types
pub use capability::{collect_by_capability, flatten_lists_by_capability};
pub use diff::{get_diff, get_diff_any, Difference, KeyedMapping};
pub use errors::{RdError, RdErrorKind, RefDiffError, Result};
pub use fingerprint::{FingerprintProvider, JsonSha256Fingerprinter};
pub use introspect::{Capability, Reflect, TypeDescriptor, Typed};
pub use path::{resolve_from, resolve_path, resolve_with_type, FieldPath};
