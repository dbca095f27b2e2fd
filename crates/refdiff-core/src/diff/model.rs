//! Diff data types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from a derived key to an element, iterated in first-insertion order.
///
/// Inserting a key that is already present replaces the stored value but
/// keeps the original key and its position.
#[derive(Debug, Clone)]
pub struct KeyedMapping<K, V> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> KeyedMapping<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.positions.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }
}

impl<K, V> KeyedMapping<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Consume the mapping, yielding entries in insertion order.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Consume the mapping into its entries and the key-to-position index.
    pub(crate) fn into_parts(self) -> (Vec<(K, V)>, HashMap<K, usize>) {
        (self.entries, self.positions)
    }
}

impl<K, V> Default for KeyedMapping<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for KeyedMapping<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut mapping = Self::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

/// Result of diffing two collections.
///
/// All three partitions are always populated (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference<V> {
    /// Present in the second collection, absent from the first
    pub added: Vec<V>,
    /// Present in the first collection, absent from the second
    pub removed: Vec<V>,
    /// Present in both; values taken from the first collection
    pub equal: Vec<V>,
}

impl<V> Difference<V> {
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            equal: Vec::new(),
        }
    }

    /// True when nothing was added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// True when all three partitions are empty (both inputs were empty).
    pub fn is_empty(&self) -> bool {
        self.is_unchanged() && self.equal.is_empty()
    }
}

impl<V> Default for Difference<V> {
    fn default() -> Self {
        Self::new()
    }
}
