//! Content fingerprints for values without usable equality.
//!
//! A fingerprint is a fixed-length lowercase hex digest of a value's
//! canonical serialized form. It stands in for `Eq + Hash` when diffing
//! collections whose element type cannot provide them.
//!
//! ## Canonical form
//!
//! Values are first converted to a `serde_json::Value` and then rendered
//! compactly. `serde_json` object maps are key-ordered, so two maps with the
//! same entries produce the same text regardless of their own iteration
//! order.
//!
//! ## Not a security primitive
//!
//! Digests are only used as equality keys.

use crate::errors::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Default digest width: 128 bits.
pub const DEFAULT_DIGEST_BYTES: usize = 16;

/// Widest digest SHA-256 can produce.
pub const MAX_DIGEST_BYTES: usize = 32;

/// Turns arbitrary serializable values into fingerprint strings.
pub trait FingerprintProvider {
    /// Render `value` into canonical text.
    ///
    /// # Errors
    ///
    /// Returns `RefDiffError::Serialization` if the value graph contains
    /// constructs the canonical form cannot express.
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String>;

    /// Hash canonical text into a fixed-length hex string.
    fn digest(&self, text: &str) -> String;

    /// `digest(serialize(value))`
    ///
    /// # Errors
    ///
    /// Propagates serialization failures from [`FingerprintProvider::serialize`].
    fn fingerprint<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let canonical = self.serialize(value)?;
        Ok(self.digest(&canonical))
    }
}

/// serde_json canonical text hashed with SHA-256, truncated to a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonSha256Fingerprinter {
    digest_bytes: usize,
}

impl JsonSha256Fingerprinter {
    pub fn new() -> Self {
        Self {
            digest_bytes: DEFAULT_DIGEST_BYTES,
        }
    }

    /// Select the digest width in bytes, clamped to `1..=32`.
    pub fn with_digest_bytes(mut self, digest_bytes: usize) -> Self {
        self.digest_bytes = digest_bytes.clamp(1, MAX_DIGEST_BYTES);
        self
    }

    /// Digest width in bytes; the hex string is twice as long.
    pub fn digest_bytes(&self) -> usize {
        self.digest_bytes
    }
}

impl Default for JsonSha256Fingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

impl FingerprintProvider for JsonSha256Fingerprinter {
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let canonical = serde_json::to_value(value)?;
        Ok(serde_json::to_string(&canonical)?)
    }

    fn digest(&self, text: &str) -> String {
        let full = Sha256::digest(text.as_bytes());
        hex::encode(&full[..self.digest_bytes])
    }
}

/// Fingerprint `value` with the default provider.
///
/// # Errors
///
/// Returns `RefDiffError::Serialization` if `value` cannot be serialized.
///
/// # Example
///
/// ```
/// use refdiff_core::fingerprint::fingerprint;
///
/// let fp = fingerprint(&vec!["a", "b"]).unwrap();
/// assert_eq!(fp.len(), 32);
/// ```
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    JsonSha256Fingerprinter::default().fingerprint(value)
}
