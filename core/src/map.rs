//! Read-only map stored as an array of entries.
//!
//! Lookups are linear scans in entry order and the first matching key wins.
//! Key uniqueness is the caller's contract: nothing here rejects duplicates,
//! a later duplicate is simply unreachable through [`ImmutableMap::get`].

use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::base::Backing;
use crate::capability::{KeyedLookup, map_eq};
use crate::entry::MapEntry;
use crate::error::Result;

pub struct ImmutableMap<K, V> {
    backing: Backing<MapEntry<K, V>>,
}

/// Index of the first entry in `entries` whose key equals `key`.
pub fn find_key<K: PartialEq, V>(entries: &[MapEntry<K, V>], key: &K) -> Option<usize> {
    entries.iter().position(|entry| entry.key() == key)
}

/// Whether any entry in `entries` has a key equal to `key`.
pub fn contains_key_in<K: PartialEq, V>(entries: &[MapEntry<K, V>], key: &K) -> bool {
    find_key(entries, key).is_some()
}

/// Builds a map from `(key, value)` pairs with distinct keys.
pub fn map_of<K, V>(pairs: Vec<(K, V)>) -> ImmutableMap<K, V> {
    pairs.into_iter().collect()
}

impl<K, V> ImmutableMap<K, V> {
    /// The canonical empty map. Allocates nothing.
    pub const fn empty() -> Self {
        ImmutableMap {
            backing: Backing::empty(),
        }
    }

    /// Takes every entry slot.
    pub fn new(entries: impl Into<Arc<[MapEntry<K, V>]>>) -> Self {
        ImmutableMap {
            backing: Backing::new(entries),
        }
    }

    /// Takes the first `length` entry slots.
    pub fn with_length(entries: impl Into<Arc<[MapEntry<K, V>]>>, length: usize) -> Result<Self> {
        Ok(ImmutableMap {
            backing: Backing::with_length(entries, length)?,
        })
    }

    pub fn from_entries(entries: Vec<MapEntry<K, V>>) -> Self {
        Self::new(entries)
    }

    /// Copies the pairs of any keyed source, in its iteration order.
    pub fn from_lookup(source: &(impl KeyedLookup<K, V> + ?Sized)) -> Self
    where
        K: Clone,
        V: Clone,
    {
        source
            .pairs()
            .map(|(key, value)| MapEntry::new(key.clone(), value.clone()))
            .collect()
    }

    pub fn as_entries(&self) -> &[MapEntry<K, V>] {
        self.backing.as_slice()
    }

    /// Whether both maps view the same entry slots.
    pub fn shares_storage(&self, other: &Self) -> bool {
        self.backing.shares_storage(&other.backing)
    }
}

map_reads!(ImmutableMap);

impl<K, V, S> PartialEq<ImmutableMap<K, V>> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &ImmutableMap<K, V>) -> bool {
        map_eq(other, self)
    }
}

impl<K: Ord, V: PartialEq> PartialEq<ImmutableMap<K, V>> for BTreeMap<K, V> {
    fn eq(&self, other: &ImmutableMap<K, V>) -> bool {
        map_eq(other, self)
    }
}

impl<K, V> Clone for ImmutableMap<K, V> {
    fn clone(&self) -> Self {
        ImmutableMap {
            backing: self.backing.clone(),
        }
    }
}

impl<K, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, V> From<Vec<MapEntry<K, V>>> for ImmutableMap<K, V> {
    fn from(entries: Vec<MapEntry<K, V>>) -> Self {
        Self::new(entries)
    }
}

impl<K, V> FromIterator<MapEntry<K, V>> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = MapEntry<K, V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(key, value)| MapEntry::new(key, value))
            .collect()
    }
}
