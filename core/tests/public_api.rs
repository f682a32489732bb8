//! Integration tests for the public API.
//!
//! These tests go through the crate root only, the way a downstream user
//! would, and exercise interop with containers the crate knows nothing about.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use rocoll_core::capability::{Container, Iterable, KeyedLookup, Membership, Sequence};
use rocoll_core::{
    Error, ImmutableList, ImmutableMap, ImmutableSet, MiniMap, MiniSet, RejectsMutation, SmallMap,
    SmallSet, entry, list_of, map_of, set_of,
};

/// A downstream set type: a bitmask over `0..64`.
#[derive(Debug)]
struct Bits(u64);

impl Container for Bits {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Membership<u8> for Bits {
    fn contains_element(&self, value: &u8) -> bool {
        *value < 64 && self.0 & (1u64 << value) != 0
    }
}

/// A downstream ordered container.
#[derive(Debug)]
struct Countdown(Vec<u32>);

impl Container for Countdown {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Iterable<u32> for Countdown {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a u32> + 'a
    where
        u32: 'a,
    {
        self.0.iter()
    }
}

impl Sequence<u32> for Countdown {}

/// A downstream map with a single entry.
#[derive(Debug)]
struct Single(&'static str, i32);

impl Container for Single {
    fn len(&self) -> usize {
        1
    }
}

impl KeyedLookup<&'static str, i32> for Single {
    fn lookup(&self, key: &&'static str) -> Option<&i32> {
        (*key == self.0).then_some(&self.1)
    }

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a &'static str, &'a i32)> + 'a
    where
        &'static str: 'a,
        i32: 'a,
    {
        std::iter::once((&self.0, &self.1))
    }
}

#[test]
fn test_sets_compare_with_foreign_membership() {
    let bits = Bits(0b1011);
    assert_eq!(set_of(vec![0u8, 1, 3]), bits);
    assert_eq!(MiniSet::of([3u8, 1, 0]), bits);
    assert_eq!(SmallSet::of([1u8, 0, 3]), bits);
    assert!(set_of(vec![0u8, 1, 2]) != bits);
}

#[test]
fn test_lists_compare_with_foreign_sequences() {
    let countdown = Countdown(vec![3, 2, 1]);
    assert_eq!(list_of(vec![3u32, 2, 1]), countdown);
    assert!(list_of(vec![1u32, 2, 3]) != countdown);
    assert_eq!(
        ImmutableList::from_iterable(&countdown).hash_code(),
        list_of(vec![3u32, 2, 1]).hash_code()
    );
}

#[test]
fn test_maps_compare_with_foreign_lookup() {
    let single = Single("alpha", 123);
    assert_eq!(map_of(vec![("alpha", 123)]), single);
    assert_eq!(MiniMap::of([("alpha", 123)]), single);
    assert!(map_of(vec![("alpha", 124)]) != single);
    assert!(map_of(vec![("alpha", 123), ("beta", 456)]) != single);
}

#[test]
fn test_alpha_beta_gamma() {
    let map = ImmutableMap::from_entries(vec![
        entry("alpha", 123),
        entry("beta", 456),
        entry("gamma", 789),
    ]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&"alpha"), Some(&123));
    assert_eq!(map.get(&"missing"), None);
    assert!(map.contains_key(&"beta"));
    assert_eq!(map.to_string(), "{alpha=123, beta=456, gamma=789}");
}

#[test]
fn test_shared_across_threads() {
    let list = Arc::new(list_of((0..100).collect::<Vec<u32>>()));
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let list = Arc::clone(&list);
            thread::spawn(move || list.iter().skip(offset).step_by(4).sum::<u32>())
        })
        .collect();
    let total: u32 = handles.into_iter().map(|handle| handle.join().unwrap()).sum();
    assert_eq!(total, (0..100).sum());

    let sub = list.sub_list(10, 20).unwrap();
    let moved = thread::spawn(move || sub.to_vec()).join().unwrap();
    assert_eq!(moved, (10..20).collect::<Vec<u32>>());
}

#[test]
fn test_every_mutation_is_rejected() {
    let set = set_of(vec![1, 2]);
    let results = [
        set.add(3).map(drop),
        set.remove(&1).map(drop),
        set.add_all([3]).map(drop),
        set.remove_all([1]).map(drop),
        set.retain_all([1]).map(drop),
        set.clear(),
    ];
    for result in results {
        assert!(matches!(result, Err(Error::Unsupported { .. })));
    }
    assert_eq!(set, HashSet::from([1, 2]));
}

#[test]
fn test_empty_instances_do_not_allocate() {
    const LIST: ImmutableList<String> = ImmutableList::empty();
    const SET: ImmutableSet<String> = ImmutableSet::empty();
    const MAP: ImmutableMap<String, String> = ImmutableMap::empty();
    const SMALL_SET: SmallSet<String> = SmallSet::empty();
    const SMALL_MAP: SmallMap<String, String> = SmallMap::empty();
    assert!(LIST.is_empty() && SET.is_empty() && MAP.is_empty());
    assert!(SMALL_SET.is_inline() && SMALL_MAP.is_inline());
}

#[cfg(feature = "hashbrown")]
#[test]
fn test_hashbrown_interop() {
    let set: hashbrown::HashSet<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(set_of(vec![3, 2, 1]), set);

    let map: hashbrown::HashMap<&str, i32> = [("a", 1)].into_iter().collect();
    assert_eq!(map_of(vec![("a", 1)]), map);
}
