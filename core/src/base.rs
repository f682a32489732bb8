//! Backing store shared by the array-backed collections.
//!
//! A [`Backing`] is a window `[start, start + len)` over shared, immutable
//! slots. The physical slot count may exceed the active length, which lets a
//! caller hand over an over-allocated buffer and lets sub-lists reuse their
//! parent's slots without copying.
//!
//! ```text
//! slots: Arc<[T]>   [ a | b | c | d | e | f ]
//!                         └─────────┘
//!                    start=1, len=3  ->  [b, c, d]
//! ```

use std::sync::Arc;

use crate::error::{Error, Result, check_length};

pub struct Backing<T> {
    // `None` is the canonical empty store and never allocates.
    slots: Option<Arc<[T]>>,
    start: usize,
    len: usize,
}

impl<T> Backing<T> {
    pub const fn empty() -> Self {
        Backing {
            slots: None,
            start: 0,
            len: 0,
        }
    }

    /// Use every slot.
    pub fn new(slots: impl Into<Arc<[T]>>) -> Self {
        let slots = slots.into();
        let len = slots.len();
        Self::from_parts(slots, len)
    }

    /// Use the first `length` slots; fails if `length` exceeds the slot count.
    pub fn with_length(slots: impl Into<Arc<[T]>>, length: usize) -> Result<Self> {
        let slots = slots.into();
        let len = check_length(length, slots.len())?;
        Ok(Self::from_parts(slots, len))
    }

    fn from_parts(slots: Arc<[T]>, len: usize) -> Self {
        if len == 0 {
            return Self::empty();
        }
        Backing {
            slots: Some(slots),
            start: 0,
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active slots.
    pub fn as_slice(&self) -> &[T] {
        match &self.slots {
            Some(slots) => &slots[self.start..self.start + self.len],
            None => &[],
        }
    }

    /// A zero-copy window over `[from, to)` of the active slots.
    ///
    /// Requires `from <= to <= len`. An empty range yields the empty store.
    pub fn slice(&self, from: usize, to: usize) -> Result<Self> {
        if to > self.len {
            return Err(Error::out_of_range(to, self.len));
        }
        if from > to {
            return Err(Error::out_of_range(from, to));
        }
        if from == to {
            return Ok(Self::empty());
        }
        Ok(Backing {
            slots: self.slots.clone(),
            start: self.start + from,
            len: to - from,
        })
    }

    /// Whether both stores are the same window over the same slots.
    pub fn shares_storage(&self, other: &Self) -> bool {
        match (&self.slots, &other.slots) {
            (Some(a), Some(b)) => {
                Arc::ptr_eq(a, b) && self.start == other.start && self.len == other.len
            }
            (None, None) => true,
            _ => false,
        }
    }

    /// Always fails: a backing store never becomes mutable.
    pub fn clear(&self) -> Result<()> {
        Err(Error::unsupported("clear"))
    }
}

impl<T: PartialEq> Backing<T> {
    /// Linear scan for an equal element.
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    pub fn position(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|slot| slot == value)
    }

    pub fn last_position(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().rposition(|slot| slot == value)
    }
}

impl<T> Clone for Backing<T> {
    fn clone(&self) -> Self {
        Backing {
            slots: self.slots.clone(),
            start: self.start,
            len: self.len,
        }
    }
}

impl<T> Default for Backing<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Backing<T> {
    fn from(slots: Vec<T>) -> Self {
        Self::new(slots)
    }
}

impl<T> From<Arc<[T]>> for Backing<T> {
    fn from(slots: Arc<[T]>) -> Self {
        Self::new(slots)
    }
}
