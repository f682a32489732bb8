//! General-purpose read-only collection.

use std::sync::Arc;

use crate::base::Backing;
use crate::capability::Iterable;
use crate::error::Result;

/// A fixed group of elements with no ordering or uniqueness contract beyond
/// iteration order.
///
/// Clones share the backing slots. There is no equality beyond identity; use
/// [`ImmutableList`](crate::ImmutableList) or
/// [`ImmutableSet`](crate::ImmutableSet) for value semantics.
pub struct ImmutableCollection<T> {
    backing: Backing<T>,
}

impl<T> ImmutableCollection<T> {
    /// The canonical empty collection. Allocates nothing.
    pub const fn empty() -> Self {
        ImmutableCollection {
            backing: Backing::empty(),
        }
    }

    /// Takes every slot.
    pub fn new(slots: impl Into<Arc<[T]>>) -> Self {
        ImmutableCollection {
            backing: Backing::new(slots),
        }
    }

    /// Takes the first `length` slots.
    pub fn with_length(slots: impl Into<Arc<[T]>>, length: usize) -> Result<Self> {
        Ok(ImmutableCollection {
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

    /// Whether both collections view the same slots.
    pub fn shares_storage(&self, other: &Self) -> bool {
        self.backing.shares_storage(&other.backing)
    }
}

slot_reads!(ImmutableCollection);

impl<T> Clone for ImmutableCollection<T> {
    fn clone(&self) -> Self {
        ImmutableCollection {
            backing: self.backing.clone(),
        }
    }
}

impl<T> Default for ImmutableCollection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for ImmutableCollection<T> {
    fn from(slots: Vec<T>) -> Self {
        Self::new(slots)
    }
}

impl<T> FromIterator<T> for ImmutableCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
