//! Inline sets of at most five elements, and the factory choosing between
//! them and the array-backed set.
//!
//! A [`MiniSet`] keeps its elements in a [`TeenyArray`] inside the value
//! itself: building, cloning or dropping one never touches the heap when the
//! elements don't. Every arity from 0 to 5 is the same type; the arity is the
//! runtime count.
//!
//! [`SmallSet`] dispatches on cardinality at construction:
//!
//! | elements | representation |
//! |----------|----------------|
//! | 0        | empty [`MiniSet`] |
//! | 1 ..= 5  | [`MiniSet`] |
//! | 6 ..     | [`ImmutableSet`] |

use rocoll_teeny_array::TeenyArray;
use smallvec::SmallVec;
use tracing::trace;

use crate::capability::Iterable;
use crate::error::{Error, Result};
use crate::set::ImmutableSet;

const MINI_SET_CAPACITY: usize = 5;

/// A set of up to [`MiniSet::MAX_ARITY`] distinct elements stored inline.
pub struct MiniSet<T> {
    values: TeenyArray<T, MINI_SET_CAPACITY>,
}

static_assertions::assert_eq_size!(MiniSet<u64>, [u64; 6]);

impl<T> MiniSet<T> {
    pub const MAX_ARITY: usize = MINI_SET_CAPACITY;

    pub const fn empty() -> Self {
        MiniSet {
            values: TeenyArray::new(),
        }
    }

    /// Builds a set of exactly `M` elements; `M > 5` is a compile error.
    ///
    /// ```
    /// use rocoll_core::MiniSet;
    ///
    /// let set = MiniSet::of(["v0", "v1", "v2"]);
    /// assert_eq!(set.arity(), 3);
    /// assert!(set.contains(&"v1"));
    /// ```
    pub fn of<const M: usize>(values: [T; M]) -> Self {
        const { assert!(M <= MINI_SET_CAPACITY, "a MiniSet holds at most 5 elements") };
        Self::filled(values)
    }

    /// Copies a source that must hold exactly `arity` elements.
    pub fn with_arity(arity: usize, source: &(impl Iterable<T> + ?Sized)) -> Result<Self>
    where
        T: Clone,
    {
        let mismatch = || Error::IllegalArgument(format!("MiniSet{arity} size must be {arity}"));
        if arity > Self::MAX_ARITY || source.len() != arity {
            return Err(mismatch());
        }
        let values = TeenyArray::try_from_iter(source.elements().take(arity).cloned())
            .map_err(|_| mismatch())?;
        // The source may report a length its iterator doesn't honour.
        if values.len() != arity {
            return Err(mismatch());
        }
        Ok(MiniSet { values })
    }

    /// Collects at most [`MiniSet::MAX_ARITY`] elements.
    pub fn try_from_iter(values: impl IntoIterator<Item = T>) -> Result<Self> {
        TeenyArray::try_from_iter(values)
            .map(|values| MiniSet { values })
            .map_err(|_| {
                let message = format!("a MiniSet holds at most {MINI_SET_CAPACITY} elements");
                Error::IllegalArgument(message)
            })
    }

    // Callers guarantee at most MINI_SET_CAPACITY values.
    fn filled(values: impl IntoIterator<Item = T>) -> Self {
        let mut inline = TeenyArray::new();
        for value in values {
            let pushed = inline.try_push(value);
            debug_assert!(pushed.is_ok());
        }
        MiniSet { values: inline }
    }

    /// Number of elements; the same as [`MiniSet::len`].
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    pub fn as_slice(&self) -> &[T] {
        self.values.as_slice()
    }
}

slot_reads!(MiniSet);
set_semantics!(MiniSet);

impl<T: Clone> Clone for MiniSet<T> {
    fn clone(&self) -> Self {
        MiniSet {
            values: self.values.clone(),
        }
    }
}

impl<T> Default for MiniSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// SmallSet
// =============================================================================

/// A set that is inline up to five elements and array-backed beyond.
pub enum SmallSet<T> {
    Mini(MiniSet<T>),
    Array(ImmutableSet<T>),
}

impl<T> SmallSet<T> {
    pub const fn empty() -> Self {
        SmallSet::Mini(MiniSet::empty())
    }

    /// Picks the representation from the number of `values`, which must be
    /// distinct.
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        let gathered: SmallVec<[T; MINI_SET_CAPACITY]> = values.into_iter().collect();
        if gathered.len() <= MINI_SET_CAPACITY {
            trace!(len = gathered.len(), "small set stored inline");
            SmallSet::Mini(MiniSet::filled(gathered))
        } else {
            trace!(len = gathered.len(), "small set spilled to array");
            SmallSet::Array(ImmutableSet::new(gathered.into_vec()))
        }
    }

    /// Whether the elements live inline.
    pub fn is_inline(&self) -> bool {
        matches!(self, SmallSet::Mini(_))
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            SmallSet::Mini(set) => set.as_slice(),
            SmallSet::Array(set) => set.as_slice(),
        }
    }
}

slot_reads!(SmallSet);
set_semantics!(SmallSet);

impl<T: Clone> Clone for SmallSet<T> {
    fn clone(&self) -> Self {
        match self {
            SmallSet::Mini(set) => SmallSet::Mini(set.clone()),
            SmallSet::Array(set) => SmallSet::Array(set.clone()),
        }
    }
}

impl<T> Default for SmallSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<MiniSet<T>> for SmallSet<T> {
    fn from(set: MiniSet<T>) -> Self {
        SmallSet::Mini(set)
    }
}

impl<T> From<ImmutableSet<T>> for SmallSet<T> {
    fn from(set: ImmutableSet<T>) -> Self {
        SmallSet::Array(set)
    }
}

impl<T> FromIterator<T> for SmallSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}
