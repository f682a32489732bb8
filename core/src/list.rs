//! Ordered, indexable, read-only list.

use core::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::base::Backing;
use crate::capability::{Iterable, Sequence, sequence_eq};
use crate::error::{Error, Result};
use crate::hash_code::sequence_hash_code;
use crate::iter::ListIter;
use crate::mutation::RejectsListMutation;

/// An ordered sequence with positional access.
///
/// Equality is ordered and works against any [`Sequence`]: a list equals a
/// `Vec`, slice or array holding equal elements in the same order. Sub-lists
/// share their parent's slots.
pub struct ImmutableList<T> {
    backing: Backing<T>,
}

/// Shorthand for [`ImmutableList::new`] over a `Vec`.
pub fn list_of<T>(values: Vec<T>) -> ImmutableList<T> {
    ImmutableList::new(values)
}

impl<T> ImmutableList<T> {
    /// The canonical empty list. Allocates nothing.
    pub const fn empty() -> Self {
        ImmutableList {
            backing: Backing::empty(),
        }
    }

    /// Takes every slot.
    pub fn new(slots: impl Into<Arc<[T]>>) -> Self {
        ImmutableList {
            backing: Backing::new(slots),
        }
    }

    /// Takes the first `length` slots.
    pub fn with_length(slots: impl Into<Arc<[T]>>, length: usize) -> Result<Self> {
        Ok(ImmutableList {
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

    /// Whether both lists view the same window of the same slots.
    pub fn shares_storage(&self, other: &Self) -> bool {
        self.backing.shares_storage(&other.backing)
    }

    /// Element at `index`; fails unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or(Error::out_of_range(index, self.len()))
    }

    /// Cursor positioned before the first element.
    pub fn list_iter(&self) -> ListIter<'_, T> {
        ListIter::starting_at(self.as_slice(), 0)
    }

    /// Cursor positioned before `index`; `index == len` starts at the end.
    pub fn list_iter_at(&self, index: usize) -> Result<ListIter<'_, T>> {
        if index > self.len() {
            return Err(Error::out_of_range(index, self.len()));
        }
        Ok(ListIter::starting_at(self.as_slice(), index))
    }

    /// Zero-copy view of `[from, to)`.
    ///
    /// The full range returns a list sharing this one's storage; an empty
    /// range returns the empty list.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Self> {
        Ok(ImmutableList {
            backing: self.backing.slice(from, to)?,
        })
    }
}

impl<T: PartialEq> ImmutableList<T> {
    /// Index of the first equal element.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.backing.position(value)
    }

    /// Index of the last equal element.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.backing.last_position(value)
    }
}

impl<T: Hash> ImmutableList<T> {
    /// Ordered hash code; equal sequences of any kind agree.
    pub fn hash_code(&self) -> u64 {
        sequence_hash_code(self)
    }
}

slot_reads!(ImmutableList);

impl<T> Sequence<T> for ImmutableList<T> {}

impl<T> RejectsListMutation<T> for ImmutableList<T> {}

impl<T, O> PartialEq<O> for ImmutableList<T>
where
    T: PartialEq,
    O: Sequence<T> + ?Sized,
{
    fn eq(&self, other: &O) -> bool {
        sequence_eq(self, other)
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: PartialEq> PartialEq<ImmutableList<T>> for Vec<T> {
    fn eq(&self, other: &ImmutableList<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<ImmutableList<T>> for [T] {
    fn eq(&self, other: &ImmutableList<T>) -> bool {
        self == other.as_slice()
    }
}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        ImmutableList {
            backing: self.backing.clone(),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(slots: Vec<T>) -> Self {
        Self::new(slots)
    }
}

impl<T, const N: usize> From<[T; N]> for ImmutableList<T> {
    fn from(slots: [T; N]) -> Self {
        Self::new(Vec::from(slots))
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
