//! Minimal capability traits for cross-container interop.
//!
//! Equality between a collection from this crate and "any other" list, set or
//! map is defined purely in terms of these capabilities, so std containers
//! (and hashbrown's, with the `hashbrown` feature) compare equal to ours when
//! they hold the same elements.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Anything with a known element count.
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container whose elements can be visited by reference.
pub trait Iterable<T>: Container {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a;
}

/// An [`Iterable`] whose iteration order is meaningful (lists, arrays).
pub trait Sequence<T>: Iterable<T> {}

/// A container that answers membership queries (sets).
pub trait Membership<T>: Container {
    fn contains_element(&self, value: &T) -> bool;
}

/// A container mapping keys to values.
pub trait KeyedLookup<K, V>: Container {
    fn lookup(&self, key: &K) -> Option<&V>;

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        K: 'a,
        V: 'a;
}

// =============================================================================
// Cross-type equality
// =============================================================================

/// Ordered equality: same length and pairwise-equal elements.
pub fn sequence_eq<T: PartialEq>(
    a: &(impl Iterable<T> + ?Sized),
    b: &(impl Iterable<T> + ?Sized),
) -> bool {
    a.len() == b.len() && a.elements().eq(b.elements())
}

/// Set equality: same size and every element of `a` is in `b`.
pub fn set_eq<T>(a: &(impl Iterable<T> + ?Sized), b: &(impl Membership<T> + ?Sized)) -> bool {
    a.len() == b.len() && a.elements().all(|value| b.contains_element(value))
}

/// Map equality: same size and `b` maps every key of `a` to an equal value.
///
/// A single mismatched value makes the maps unequal.
pub fn map_eq<K, V: PartialEq>(
    a: &(impl KeyedLookup<K, V> + ?Sized),
    b: &(impl KeyedLookup<K, V> + ?Sized),
) -> bool {
    a.len() == b.len() && a.pairs().all(|(key, value)| b.lookup(key) == Some(value))
}

/// Whether every item yielded by `items` is a member of `container`.
pub fn contains_all<T, I>(container: &(impl Membership<T> + ?Sized), items: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    items.into_iter().all(|item| container.contains_element(item.borrow()))
}

// =============================================================================
// std impls
// =============================================================================

impl<T> Container for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Iterable<T> for [T] {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Sequence<T> for [T] {}

impl<T, const N: usize> Container for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Iterable<T> for [T; N] {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {}

impl<T> Container for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Iterable<T> for Vec<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Sequence<T> for Vec<T> {}

impl<T> Container for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Iterable<T> for VecDeque<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Sequence<T> for VecDeque<T> {}

impl<T, S> Container for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<T, S> Iterable<T> for HashSet<T, S> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    fn contains_element(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T> Container for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<T> Iterable<T> for BTreeSet<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    fn contains_element(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<K, V, S> Container for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> KeyedLookup<K, V> for HashMap<K, V, S> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K: Ord, V> KeyedLookup<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

// =============================================================================
// hashbrown impls
// =============================================================================

#[cfg(feature = "hashbrown")]
mod hashbrown_impls {
    use super::{Container, Iterable, KeyedLookup, Membership};
    use core::hash::{BuildHasher, Hash};

    impl<T, S> Container for hashbrown::HashSet<T, S> {
        fn len(&self) -> usize {
            hashbrown::HashSet::len(self)
        }
    }

    impl<T, S> Iterable<T> for hashbrown::HashSet<T, S> {
        fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
        where
            T: 'a,
        {
            self.iter()
        }
    }

    impl<T: Eq + Hash, S: BuildHasher> Membership<T> for hashbrown::HashSet<T, S> {
        fn contains_element(&self, value: &T) -> bool {
            self.contains(value)
        }
    }

    impl<K, V, S> Container for hashbrown::HashMap<K, V, S> {
        fn len(&self) -> usize {
            hashbrown::HashMap::len(self)
        }
    }

    impl<K: Eq + Hash, V, S: BuildHasher> KeyedLookup<K, V> for hashbrown::HashMap<K, V, S> {
        fn lookup(&self, key: &K) -> Option<&V> {
            self.get(key)
        }

        fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
        where
            K: 'a,
            V: 'a,
        {
            self.iter()
        }
    }
}
