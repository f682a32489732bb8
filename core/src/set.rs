//! Read-only set backed by a slot array.

use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::base::Backing;
use crate::capability::{Iterable, set_eq};
use crate::error::Result;

/// A set stored as a plain array of distinct elements.
///
/// Membership is a linear scan, so this is meant for small sets. The caller
/// guarantees the elements are pairwise distinct; nothing here checks.
/// Equality is order-insensitive and works against any
/// [`Membership`](crate::capability::Membership) container, std sets included.
pub struct ImmutableSet<T> {
    backing: Backing<T>,
}

/// Shorthand for [`ImmutableSet::new`] over a `Vec` of distinct elements.
pub fn set_of<T>(values: Vec<T>) -> ImmutableSet<T> {
    ImmutableSet::new(values)
}

impl<T> ImmutableSet<T> {
    /// The canonical empty set. Allocates nothing.
    pub const fn empty() -> Self {
        ImmutableSet {
            backing: Backing::empty(),
        }
    }

    /// Takes every slot; the slots must hold distinct elements.
    pub fn new(slots: impl Into<Arc<[T]>>) -> Self {
        ImmutableSet {
            backing: Backing::new(slots),
        }
    }

    /// Takes the first `length` slots.
    pub fn with_length(slots: impl Into<Arc<[T]>>, length: usize) -> Result<Self> {
        Ok(ImmutableSet {
            backing: Backing::with_length(slots, length)?,
        })
    }

    /// Copies the elements of any iterable source, in its iteration order.
    pub fn from_iterable(source: &(impl Iterable<T> + ?Sized)) -> Self
    where
        T: Clone,
    {
        source.elements().cloned().collect()
    }

    pub fn as_slice(&self) -> &[T] {
        self.backing.as_slice()
    }

    pub fn shares_storage(&self, other: &Self) -> bool {
        self.backing.shares_storage(&other.backing)
    }
}

slot_reads!(ImmutableSet);
set_semantics!(ImmutableSet);

impl<T: Eq + Hash, S: BuildHasher> PartialEq<ImmutableSet<T>> for HashSet<T, S> {
    fn eq(&self, other: &ImmutableSet<T>) -> bool {
        set_eq(other, self)
    }
}

impl<T: Ord> PartialEq<ImmutableSet<T>> for BTreeSet<T> {
    fn eq(&self, other: &ImmutableSet<T>) -> bool {
        set_eq(other, self)
    }
}

impl<T> Clone for ImmutableSet<T> {
    fn clone(&self) -> Self {
        ImmutableSet {
            backing: self.backing.clone(),
        }
    }
}

impl<T> Default for ImmutableSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for ImmutableSet<T> {
    fn from(slots: Vec<T>) -> Self {
        Self::new(slots)
    }
}

impl<T> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
