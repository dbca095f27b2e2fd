//! Diff computation engine.
//!
//! [`diff`] compares two keyed mappings. [`get_diff`] and [`get_diff_any`]
//! compose it with the indexers for the two keying modes.

use crate::diff::index::{index_by_fingerprint_with, index_natural};
use crate::diff::model::{Difference, KeyedMapping};
use crate::errors::Result;
use crate::fingerprint::{FingerprintProvider, JsonSha256Fingerprinter};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use std::hash::Hash;
use std::time::Instant;

/// Partition two keyed mappings into added, removed and equal.
///
/// 1. Walk `second` in order: keys missing from `first` go to `added`
///    (second's value), keys present in both go to `equal` (first's value).
/// 2. Whatever is left of `first` goes to `removed`, in `first`'s order.
pub fn diff<K, V>(first: KeyedMapping<K, V>, second: KeyedMapping<K, V>) -> Difference<V>
where
    K: Eq + Hash,
{
    let (first_entries, first_positions) = first.into_parts();
    let mut first_values: Vec<Option<V>> =
        first_entries.into_iter().map(|(_, v)| Some(v)).collect();

    let mut difference = Difference::new();
    for (key, value) in second.into_entries() {
        match first_positions.get(&key).copied() {
            // keys in `second` are unique, so each slot is taken at most once
            Some(i) => difference.equal.extend(first_values[i].take()),
            None => difference.added.push(value),
        }
    }
    difference.removed = first_values.into_iter().flatten().collect();
    difference
}

/// Diff two collections using the elements' own `Eq` and `Hash`.
///
/// Elements must override equality meaningfully; duplicates fold into one.
pub fn get_diff<T, A, B>(first: A, second: B) -> Difference<T>
where
    T: Eq + Hash + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let start = Instant::now();
    log_op_start!("get_diff");

    let difference = diff(index_natural(first), index_natural(second));

    log_op_end!(
        "get_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        added_len = difference.added.len(),
        removed_len = difference.removed.len(),
        equal_len = difference.equal.len()
    );
    difference
}

/// Diff two collections by content fingerprint, for element types without
/// usable equality. Slower than [`get_diff`].
///
/// # Errors
///
/// Returns `RefDiffError::Serialization` if any element of either collection
/// cannot be serialized.
pub fn get_diff_any<T, A, B>(first: A, second: B) -> Result<Difference<T>>
where
    T: Serialize,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    get_diff_any_with(&JsonSha256Fingerprinter::default(), first, second)
}

/// [`get_diff_any`] with an explicit fingerprint provider.
///
/// # Errors
///
/// Returns `RefDiffError::Serialization` if any element cannot be serialized.
pub fn get_diff_any_with<P, T, A, B>(provider: &P, first: A, second: B) -> Result<Difference<T>>
where
    P: FingerprintProvider,
    T: Serialize,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let start = Instant::now();
    log_op_start!("get_diff_any");

    let result = index_by_fingerprint_with(provider, first).and_then(|a| {
        let b = index_by_fingerprint_with(provider, second)?;
        Ok(diff(a, b))
    });

    match result {
        Ok(difference) => {
            log_op_end!(
                "get_diff_any",
                duration_ms = start.elapsed().as_millis() as u64,
                added_len = difference.added.len(),
                removed_len = difference.removed.len(),
                equal_len = difference.equal.len()
            );
            Ok(difference)
        }
        Err(e) => {
            log_op_error!(
                "get_diff_any",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}
