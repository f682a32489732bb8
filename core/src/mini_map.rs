//! Inline maps of at most three entries, and the factory choosing between
//! them and the array-backed map.

use rocoll_teeny_array::TeenyArray;
use smallvec::SmallVec;
use tracing::trace;

use crate::capability::KeyedLookup;
use crate::entry::MapEntry;
use crate::error::{Error, Result};
use crate::map::ImmutableMap;

const MINI_MAP_CAPACITY: usize = 3;

/// A map of up to [`MiniMap::MAX_ARITY`] entries with distinct keys, stored
/// inline.
pub struct MiniMap<K, V> {
    entries: TeenyArray<MapEntry<K, V>, MINI_MAP_CAPACITY>,
}

static_assertions::assert_eq_size!(MiniMap<u64, u64>, [u64; 7]);

impl<K, V> MiniMap<K, V> {
    pub const MAX_ARITY: usize = MINI_MAP_CAPACITY;

    pub const fn empty() -> Self {
        MiniMap {
            entries: TeenyArray::new(),
        }
    }

    /// Builds a map of exactly `M` pairs; `M > 3` is a compile error.
    pub fn of<const M: usize>(pairs: [(K, V); M]) -> Self {
        const { assert!(M <= MINI_MAP_CAPACITY, "a MiniMap holds at most 3 entries") };
        Self::filled(pairs.into_iter().map(|(key, value)| MapEntry::new(key, value)))
    }

    pub fn of_entries<const M: usize>(entries: [MapEntry<K, V>; M]) -> Self {
        const { assert!(M <= MINI_MAP_CAPACITY, "a MiniMap holds at most 3 entries") };
        Self::filled(entries)
    }

    /// Copies a source that must hold exactly `arity` entries.
    pub fn with_arity(arity: usize, source: &(impl KeyedLookup<K, V> + ?Sized)) -> Result<Self>
    where
        K: Clone,
        V: Clone,
    {
        let mismatch = || Error::IllegalArgument(format!("MiniMap{arity} size must be {arity}"));
        if arity > Self::MAX_ARITY || source.len() != arity {
            return Err(mismatch());
        }
        let entries = TeenyArray::try_from_iter(
            source
                .pairs()
                .take(arity)
                .map(|(key, value)| MapEntry::new(key.clone(), value.clone())),
        )
        .map_err(|_| mismatch())?;
        if entries.len() != arity {
            return Err(mismatch());
        }
        Ok(MiniMap { entries })
    }

    /// Collects at most [`MiniMap::MAX_ARITY`] entries.
    pub fn try_from_iter(entries: impl IntoIterator<Item = MapEntry<K, V>>) -> Result<Self> {
        TeenyArray::try_from_iter(entries)
            .map(|entries| MiniMap { entries })
            .map_err(|_| {
                let message = format!("a MiniMap holds at most {MINI_MAP_CAPACITY} entries");
                Error::IllegalArgument(message)
            })
    }

    // Callers guarantee at most MINI_MAP_CAPACITY entries.
    fn filled(entries: impl IntoIterator<Item = MapEntry<K, V>>) -> Self {
        let mut inline = TeenyArray::new();
        for entry in entries {
            let pushed = inline.try_push(entry);
            debug_assert!(pushed.is_ok());
        }
        MiniMap { entries: inline }
    }

    pub fn arity(&self) -> usize {
        self.entries.len()
    }

    pub fn as_entries(&self) -> &[MapEntry<K, V>] {
        self.entries.as_slice()
    }
}

map_reads!(MiniMap);

impl<K: Clone, V: Clone> Clone for MiniMap<K, V> {
    fn clone(&self) -> Self {
        MiniMap {
            entries: self.entries.clone(),
        }
    }
}

impl<K, V> Default for MiniMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// SmallMap
// =============================================================================

/// A map that is inline up to three entries and array-backed beyond.
pub enum SmallMap<K, V> {
    Mini(MiniMap<K, V>),
    Array(ImmutableMap<K, V>),
}

impl<K, V> SmallMap<K, V> {
    pub const fn empty() -> Self {
        SmallMap::Mini(MiniMap::empty())
    }

    /// Picks the representation from the number of `pairs`, whose keys must
    /// be distinct.
    pub fn of(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::of_entries(pairs.into_iter().map(|(key, value)| MapEntry::new(key, value)))
    }

    pub fn of_entries(entries: impl IntoIterator<Item = MapEntry<K, V>>) -> Self {
        let gathered: SmallVec<[MapEntry<K, V>; MINI_MAP_CAPACITY]> = entries.into_iter().collect();
        if gathered.len() <= MINI_MAP_CAPACITY {
            trace!(len = gathered.len(), "small map stored inline");
            SmallMap::Mini(MiniMap::filled(gathered))
        } else {
            trace!(len = gathered.len(), "small map spilled to array");
            SmallMap::Array(ImmutableMap::new(gathered.into_vec()))
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, SmallMap::Mini(_))
    }

    pub fn as_entries(&self) -> &[MapEntry<K, V>] {
        match self {
            SmallMap::Mini(map) => map.as_entries(),
            SmallMap::Array(map) => map.as_entries(),
        }
    }
}

map_reads!(SmallMap);

impl<K: Clone, V: Clone> Clone for SmallMap<K, V> {
    fn clone(&self) -> Self {
        match self {
            SmallMap::Mini(map) => SmallMap::Mini(map.clone()),
            SmallMap::Array(map) => SmallMap::Array(map.clone()),
        }
    }
}

impl<K, V> Default for SmallMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K, V> From<MiniMap<K, V>> for SmallMap<K, V> {
    fn from(map: MiniMap<K, V>) -> Self {
        SmallMap::Mini(map)
    }
}

impl<K, V> From<ImmutableMap<K, V>> for SmallMap<K, V> {
    fn from(map: ImmutableMap<K, V>) -> Self {
        SmallMap::Array(map)
    }
}

impl<K, V> FromIterator<(K, V)> for SmallMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<K, V> FromIterator<MapEntry<K, V>> for SmallMap<K, V> {
    fn from_iter<I: IntoIterator<Item = MapEntry<K, V>>>(iter: I) -> Self {
        Self::of_entries(iter)
    }
}
