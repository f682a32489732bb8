//! Borrowed views over a map's entries.
//!
//! A view holds nothing but a reference to the owning map's entry slots, so
//! building one is free and it can never observe a change. [`KeySet`] and
//! [`EntrySet`] have set semantics; [`Values`] is a plain collection because
//! values may repeat.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::borrow::Borrow;

use crate::capability::{Container, Iterable, Membership, set_eq};
use crate::entry::MapEntry;
use crate::error::{Error, Result};
use crate::hash_code::element_hash;
use crate::iter::{Iter, KeyIter, ValueIter};
use crate::mutation::RejectsMutation;
use crate::render::write_elements;

fn key_of<K, V>(entry: &MapEntry<K, V>) -> &K {
    entry.key()
}

fn value_of<K, V>(entry: &MapEntry<K, V>) -> &V {
    entry.value()
}

// Same contract as the collections' `copy_into`: a short `dest` is an
// `OutOfRange` error, never a reallocation.
fn copy_projected<'a, T: Clone + 'a>(
    source: impl ExactSizeIterator<Item = &'a T>,
    dest: &mut [T],
) -> Result<usize> {
    let len = source.len();
    let bound = dest.len();
    let target = dest.get_mut(..len).ok_or(Error::OutOfRange { index: len, bound })?;
    for (slot, value) in target.iter_mut().zip(source) {
        slot.clone_from(value);
    }
    Ok(len)
}

// =============================================================================
// KeySet
// =============================================================================

/// The keys of a map, as a set.
pub struct KeySet<'a, K, V> {
    entries: &'a [MapEntry<K, V>],
}

impl<'a, K, V> KeySet<'a, K, V> {
    pub(crate) fn new(entries: &'a [MapEntry<K, V>]) -> Self {
        KeySet { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> KeyIter<'a, K, V> {
        KeyIter::projecting(self.entries, key_of)
    }
}

impl<K: PartialEq, V> KeySet<'_, K, V> {
    pub fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|entry| entry.key() == key)
    }

    pub fn contains_all<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        keys.into_iter().all(|key| self.contains(key.borrow()))
    }
}

impl<K: Clone, V> KeySet<'_, K, V> {
    pub fn to_vec(&self) -> Vec<K> {
        self.iter().cloned().collect()
    }

    /// Clones the keys into the front of `dest`; a short `dest` is an error.
    pub fn copy_into(&self, dest: &mut [K]) -> Result<usize> {
        copy_projected(self.iter(), dest)
    }
}

impl<K: Hash, V> KeySet<'_, K, V> {
    /// Sum of key digests.
    pub fn hash_code(&self) -> u64 {
        self.iter()
            .fold(0u64, |code, key| code.wrapping_add(element_hash(key)))
    }
}

impl<K, V> Container for KeySet<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> Iterable<K> for KeySet<'_, K, V> {
    fn elements<'b>(&'b self) -> impl Iterator<Item = &'b K> + 'b
    where
        K: 'b,
    {
        let entries: &'b [MapEntry<K, V>] = self.entries;
        KeyIter::projecting(entries, key_of)
    }
}

impl<K: PartialEq, V> Membership<K> for KeySet<'_, K, V> {
    fn contains_element(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K, V, O> PartialEq<O> for KeySet<'_, K, V>
where
    K: PartialEq,
    O: Membership<K> + ?Sized,
{
    fn eq(&self, other: &O) -> bool {
        set_eq(self, other)
    }
}

impl<K: Eq, V> Eq for KeySet<'_, K, V> {}

impl<K: Hash, V> Hash for KeySet<'_, K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<K, V> RejectsMutation<K> for KeySet<'_, K, V> {}

impl<'a, K, V> IntoIterator for KeySet<'a, K, V> {
    type Item = &'a K;
    type IntoIter = KeyIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Clone for KeySet<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for KeySet<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for KeySet<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V> fmt::Display for KeySet<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}

// =============================================================================
// Values
// =============================================================================

/// The values of a map in entry order. Duplicates are kept.
pub struct Values<'a, K, V> {
    entries: &'a [MapEntry<K, V>],
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(entries: &'a [MapEntry<K, V>]) -> Self {
        Values { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> ValueIter<'a, K, V> {
        ValueIter::projecting(self.entries, value_of)
    }
}

impl<K, V: PartialEq> Values<'_, K, V> {
    pub fn contains(&self, value: &V) -> bool {
        self.entries.iter().any(|entry| entry.value() == value)
    }

    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<V>,
    {
        values.into_iter().all(|value| self.contains(value.borrow()))
    }
}

impl<K, V: Clone> Values<'_, K, V> {
    pub fn to_vec(&self) -> Vec<V> {
        self.iter().cloned().collect()
    }

    pub fn copy_into(&self, dest: &mut [V]) -> Result<usize> {
        copy_projected(self.iter(), dest)
    }
}

impl<K, V> Container for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> Iterable<V> for Values<'_, K, V> {
    fn elements<'b>(&'b self) -> impl Iterator<Item = &'b V> + 'b
    where
        V: 'b,
    {
        let entries: &'b [MapEntry<K, V>] = self.entries;
        ValueIter::projecting(entries, value_of)
    }
}

impl<K, V> RejectsMutation<V> for Values<'_, K, V> {}

impl<'a, K, V> IntoIterator for Values<'a, K, V> {
    type Item = &'a V;
    type IntoIter = ValueIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Values<'_, K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K, V: fmt::Display> fmt::Display for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}

// =============================================================================
// EntrySet
// =============================================================================

/// The entries of a map, as a set.
pub struct EntrySet<'a, K, V> {
    entries: &'a [MapEntry<K, V>],
}

impl<'a, K, V> EntrySet<'a, K, V> {
    pub(crate) fn new(entries: &'a [MapEntry<K, V>]) -> Self {
        EntrySet { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'a, MapEntry<K, V>> {
        Iter::over(self.entries)
    }

    pub fn as_slice(&self) -> &'a [MapEntry<K, V>] {
        self.entries
    }
}

impl<K: PartialEq, V: PartialEq> EntrySet<'_, K, V> {
    pub fn contains(&self, entry: &MapEntry<K, V>) -> bool {
        self.entries.contains(entry)
    }

    pub fn contains_all<I>(&self, entries: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<MapEntry<K, V>>,
    {
        entries.into_iter().all(|entry| self.contains(entry.borrow()))
    }
}

impl<K: Clone, V: Clone> EntrySet<'_, K, V> {
    pub fn to_vec(&self) -> Vec<MapEntry<K, V>> {
        self.entries.to_vec()
    }

    pub fn copy_into(&self, dest: &mut [MapEntry<K, V>]) -> Result<usize> {
        copy_projected(self.iter(), dest)
    }
}

impl<K: Hash, V: Hash> EntrySet<'_, K, V> {
    /// Sum of entry codes, the same value the owning map reports.
    pub fn hash_code(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |code, entry| code.wrapping_add(entry.hash_code()))
    }
}

impl<K, V> Container for EntrySet<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> Iterable<MapEntry<K, V>> for EntrySet<'_, K, V> {
    fn elements<'b>(&'b self) -> impl Iterator<Item = &'b MapEntry<K, V>> + 'b
    where
        MapEntry<K, V>: 'b,
    {
        let entries: &'b [MapEntry<K, V>] = self.entries;
        entries.iter()
    }
}

impl<K: PartialEq, V: PartialEq> Membership<MapEntry<K, V>> for EntrySet<'_, K, V> {
    fn contains_element(&self, entry: &MapEntry<K, V>) -> bool {
        self.contains(entry)
    }
}

impl<K, V, O> PartialEq<O> for EntrySet<'_, K, V>
where
    K: PartialEq,
    V: PartialEq,
    O: Membership<MapEntry<K, V>> + ?Sized,
{
    fn eq(&self, other: &O) -> bool {
        set_eq(self, other)
    }
}

impl<K: Eq, V: Eq> Eq for EntrySet<'_, K, V> {}

impl<K: Hash, V: Hash> Hash for EntrySet<'_, K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<K, V> RejectsMutation<MapEntry<K, V>> for EntrySet<'_, K, V> {}

impl<'a, K, V> IntoIterator for EntrySet<'a, K, V> {
    type Item = &'a MapEntry<K, V>;
    type IntoIter = Iter<'a, MapEntry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Clone for EntrySet<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for EntrySet<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntrySet<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for EntrySet<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.entries)
    }
}
