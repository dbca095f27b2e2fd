//! Set-like differences between two collections.
//!
//! Both collections are first folded into a [`KeyedMapping`] (by the
//! element itself, or by its content fingerprint), then compared key by key.
//!
//! ## Entry points
//!
//! ```
//! use refdiff_core::diff::get_diff;
//!
//! let diff = get_diff(vec!["apple", "banana"], vec!["banana", "date"]);
//! assert_eq!(diff.added, vec!["date"]);
//! assert_eq!(diff.removed, vec!["apple"]);
//! assert_eq!(diff.equal, vec!["banana"]);
//! ```
//!
//! ## Guarantees
//!
//! - **Set semantics**: duplicates inside one collection fold into a single
//!   key; the last occurrence supplies the value.
//! - **Determinism**: mappings keep first-insertion order, so `added` and
//!   `equal` follow the second collection and `removed` follows the first.
//! - **First side wins**: `equal` carries the value from the first
//!   collection, even when the second side's value differs in fields that do
//!   not contribute to the key.

pub mod engine;
pub mod index;
pub mod model;

pub use engine::{diff, get_diff, get_diff_any, get_diff_any_with};
pub use index::{index_by_fingerprint, index_by_fingerprint_with, index_natural};
pub use model::{Difference, KeyedMapping};
