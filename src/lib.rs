//! rocoll - Array-backed immutable collections
//!
//! # Overview
//!
//! rocoll provides read-only lists, sets and maps that are built once and
//! then shared freely. Lookups are linear scans over a contiguous array,
//! which beats hashing for the handful of elements these containers are
//! meant for:
//!
//! - Configuration snapshots and lookup tables
//! - Small keyword or flag sets
//! - Values handed across threads without locking
//!
//! # Quick Start
//!
//! ```
//! use rocoll::{ImmutableMap, entry};
//!
//! let map = ImmutableMap::from_entries(vec![
//!     entry("alpha", 123),
//!     entry("beta", 456),
//!     entry("gamma", 789),
//! ]);
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get(&"alpha"), Some(&123));
//! assert_eq!(map.get(&"missing"), None);
//! assert!(map.contains_key(&"beta"));
//! assert_eq!(map.to_string(), "{alpha=123, beta=456, gamma=789}");
//! ```
//!
//! # Small Collections
//!
//! Sets of up to five elements and maps of up to three entries can live
//! inline with no heap allocation. [`SmallSet`] and [`SmallMap`] pick the
//! inline or the array-backed form from the input size:
//!
//! ```
//! use rocoll::{MiniSet, SmallSet};
//!
//! let tiny = SmallSet::of(["v0", "v1", "v2"]);
//! assert!(tiny.is_inline());
//! assert_eq!(tiny, MiniSet::of(["v2", "v1", "v0"]));
//!
//! let big: SmallSet<u32> = (0..100).collect();
//! assert!(!big.is_inline());
//! ```
//!
//! # Interop
//!
//! Equality is defined through the [`capability`] traits, so a list equals
//! a `Vec` with the same elements and a set equals a `HashSet`:
//!
//! ```
//! use std::collections::HashSet;
//! use rocoll::{list_of, set_of};
//!
//! assert_eq!(list_of(vec![1, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(set_of(vec![3, 1, 2]), HashSet::from([1, 2, 3]));
//! ```
//!
//! # Mutation
//!
//! Mutating calls are present but always fail:
//!
//! ```
//! use rocoll::{Error, RejectsListMutation, list_of};
//!
//! let list = list_of(vec![1, 2, 3]);
//! assert_eq!(list.set(0, 9), Err(Error::Unsupported { operation: "set" }));
//! assert_eq!(list, [1, 2, 3]);
//! ```

pub use rocoll_core::{
    Backing, Container, Error, ImmutableCollection, ImmutableList, ImmutableMap, ImmutableSet,
    Iterable, KeyedLookup, MapEntry, Membership, MiniMap, MiniSet, RejectsListMutation,
    RejectsMapMutation, RejectsMutation, Result, Sequence, SmallMap, SmallSet, entry, list_of,
    map_of, set_of,
};

// Modules kept whole for the iterator, view and helper types they hold.
pub use rocoll_core::{capability, hash_code, iter, map, mutation, views};
