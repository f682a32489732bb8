//! Iterators over backing slots.
//!
//! [`SlotIter`] walks the active slots front to back and projects each slot
//! to the element a caller sees: the slot itself for collections, the key or
//! the value for map views. [`ListIter`] is a bidirectional cursor for lists.
//!
//! Both implement [`Iterator`]; the `try_*` methods are the checked forms
//! that report exhaustion as [`Error::Exhausted`]. Mutating methods exist only
//! to reject the call.

use core::fmt;
use core::iter::FusedIterator;

use crate::entry::MapEntry;
use crate::error::{Error, Result};

pub struct SlotIter<'a, S, T> {
    slots: &'a [S],
    index: usize,
    project: fn(&S) -> &T,
}

/// Iterator over the elements of a collection, list or set.
pub type Iter<'a, T> = SlotIter<'a, T, T>;

/// Iterator over the keys of a map.
pub type KeyIter<'a, K, V> = SlotIter<'a, MapEntry<K, V>, K>;

/// Iterator over the values of a map.
pub type ValueIter<'a, K, V> = SlotIter<'a, MapEntry<K, V>, V>;

fn identity<T>(value: &T) -> &T {
    value
}

impl<'a, T> SlotIter<'a, T, T> {
    pub(crate) fn over(slots: &'a [T]) -> Self {
        SlotIter::projecting(slots, identity)
    }
}

impl<'a, S, T> SlotIter<'a, S, T> {
    pub(crate) fn projecting(slots: &'a [S], project: fn(&S) -> &T) -> Self {
        SlotIter {
            slots,
            index: 0,
            project,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.slots.len()
    }

    /// Like [`Iterator::next`], but fails with [`Error::Exhausted`] at the end.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(Error::Exhausted)
    }

    /// Always fails: elements cannot be removed through the iterator.
    pub fn remove(&mut self) -> Result<()> {
        Err(Error::unsupported("iterator remove"))
    }
}

impl<'a, S, T: 'a> Iterator for SlotIter<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.slots.get(self.index)?;
        self.index += 1;
        Some((self.project)(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, S, T: 'a> ExactSizeIterator for SlotIter<'a, S, T> {}

impl<'a, S, T: 'a> FusedIterator for SlotIter<'a, S, T> {}

impl<S, T> Clone for SlotIter<'_, S, T> {
    fn clone(&self) -> Self {
        SlotIter {
            slots: self.slots,
            index: self.index,
            project: self.project,
        }
    }
}

impl<S, T> fmt::Debug for SlotIter<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotIter")
            .field("index", &self.index)
            .field("len", &self.slots.len())
            .finish()
    }
}

/// Bidirectional cursor over a list.
///
/// The cursor sits between elements: `next` returns the element after it and
/// moves forward, `previous` returns the element before it and moves back.
#[derive(Debug)]
pub struct ListIter<'a, T> {
    slots: &'a [T],
    index: usize,
}

impl<'a, T> ListIter<'a, T> {
    pub(crate) fn starting_at(slots: &'a [T], index: usize) -> Self {
        debug_assert!(index <= slots.len());
        ListIter { slots, index }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.slots.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Index of the element `next` would return (the list length at the end).
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Index of the element `previous` would return, `None` at the start.
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    pub fn previous(&mut self) -> Option<&'a T> {
        let index = self.index.checked_sub(1)?;
        self.index = index;
        Some(&self.slots[index])
    }

    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(Error::Exhausted)
    }

    pub fn try_previous(&mut self) -> Result<&'a T> {
        self.previous().ok_or(Error::Exhausted)
    }

    pub fn remove(&mut self) -> Result<()> {
        Err(Error::unsupported("list iterator remove"))
    }

    pub fn set(&mut self, _value: T) -> Result<()> {
        Err(Error::unsupported("list iterator set"))
    }

    pub fn add(&mut self, _value: T) -> Result<()> {
        Err(Error::unsupported("list iterator add"))
    }
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.slots.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

impl<T> Clone for ListIter<'_, T> {
    fn clone(&self) -> Self {
        ListIter {
            slots: self.slots,
            index: self.index,
        }
    }
}
