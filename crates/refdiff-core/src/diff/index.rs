//! Collection indexing: folding an ordered sequence into a keyed mapping.

use crate::diff::model::KeyedMapping;
use crate::errors::Result;
use crate::fingerprint::{FingerprintProvider, JsonSha256Fingerprinter};
use serde::Serialize;
use std::hash::Hash;

/// Key every element by itself.
///
/// Later duplicates overwrite earlier ones. Only meaningful when `T`'s
/// `Eq` and `Hash` agree with the notion of equality the caller wants;
/// otherwise use [`index_by_fingerprint`].
pub fn index_natural<T, I>(items: I) -> KeyedMapping<T, T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().map(|item| (item.clone(), item)).collect()
}

/// Key every element by its content fingerprint, using the default provider.
///
/// # Errors
///
/// Returns `RefDiffError::Serialization` for the first element that cannot
/// be serialized; nothing is indexed past it.
pub fn index_by_fingerprint<T, I>(items: I) -> Result<KeyedMapping<String, T>>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    index_by_fingerprint_with(&JsonSha256Fingerprinter::default(), items)
}

/// Key every element by its content fingerprint under `provider`.
///
/// # Errors
///
/// Returns `RefDiffError::Serialization` for the first element that cannot
/// be serialized.
pub fn index_by_fingerprint_with<P, T, I>(provider: &P, items: I) -> Result<KeyedMapping<String, T>>
where
    P: FingerprintProvider,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let iter = items.into_iter();
    let mut mapping = KeyedMapping::with_capacity(iter.size_hint().0);
    for item in iter {
        let key = provider.fingerprint(&item)?;
        mapping.insert(key, item);
    }
    Ok(mapping)
}
