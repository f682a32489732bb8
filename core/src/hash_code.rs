//! Container hash codes that agree across container kinds.
//!
//! Every element is first digested with a fixed-key hasher, then combined:
//!
//! | Container | Combination |
//! |-----------|-------------|
//! | list      | `h = 31 * h + e`, seeded at 1, left to right |
//! | set       | sum of element digests |
//! | entry     | key digest XOR value digest |
//! | map       | sum of entry codes |
//!
//! All arithmetic wraps. Sets and maps are order-insensitive, so equal
//! containers produce equal codes no matter which type holds them.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::capability::{Iterable, KeyedLookup};

/// Digest of a single element.
///
/// Uses a hasher with fixed keys, so the result is stable for a given build.
/// Absent elements are `None` values and get a real digest rather than zero.
pub fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn sequence_hash_code<T: Hash>(sequence: &(impl Iterable<T> + ?Sized)) -> u64 {
    sequence
        .elements()
        .fold(1u64, |code, value| code.wrapping_mul(31).wrapping_add(element_hash(value)))
}

pub fn set_hash_code<T: Hash>(set: &(impl Iterable<T> + ?Sized)) -> u64 {
    set.elements()
        .fold(0u64, |code, value| code.wrapping_add(element_hash(value)))
}

pub fn entry_hash_code<K: Hash + ?Sized, V: Hash + ?Sized>(key: &K, value: &V) -> u64 {
    element_hash(key) ^ element_hash(value)
}

pub fn map_hash_code<K: Hash, V: Hash>(map: &(impl KeyedLookup<K, V> + ?Sized)) -> u64 {
    map.pairs()
        .fold(0u64, |code, (key, value)| code.wrapping_add(entry_hash_code(key, value)))
}
