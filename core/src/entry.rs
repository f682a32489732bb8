//! Immutable key-value pair.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::hash_code::entry_hash_code;

/// An immutable `(key, value)` pair.
///
/// Two entries are equal when both keys and both values are equal. The hash
/// code is the key digest XOR the value digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapEntry<K, V> {
    key: K,
    value: V,
}

/// Shorthand for [`MapEntry::new`].
pub fn entry<K, V>(key: K, value: V) -> MapEntry<K, V> {
    MapEntry::new(key, value)
}

impl<K, V> MapEntry<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        MapEntry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Always fails: entries never change once built.
    pub fn set_value(&self, _value: V) -> Result<V> {
        Err(Error::unsupported("set_value"))
    }
}

impl<K: Hash, V: Hash> MapEntry<K, V> {
    pub fn hash_code(&self) -> u64 {
        entry_hash_code(&self.key, &self.value)
    }
}

impl<K: Hash, V: Hash> Hash for MapEntry<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq<(K, V)> for MapEntry<K, V> {
    fn eq(&self, (key, value): &(K, V)) -> bool {
        self.key == *key && self.value == *value
    }
}

impl<K, V> From<(K, V)> for MapEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        MapEntry::new(key, value)
    }
}

impl<K, V> From<MapEntry<K, V>> for (K, V) {
    fn from(entry: MapEntry<K, V>) -> Self {
        entry.into_pair()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
