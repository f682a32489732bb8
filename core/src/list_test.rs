//! Tests for ImmutableList

use std::collections::{HashSet, VecDeque};

use crate::capability::sequence_eq;
use crate::error::Error;
use crate::hash_code::{element_hash, sequence_hash_code};
use crate::mutation::{RejectsListMutation, RejectsMutation};
use crate::{ImmutableList, list_of};
use pretty_assertions::assert_eq;

fn letters() -> ImmutableList<char> {
    list_of(vec!['a', 'b', 'c', 'b', 'e'])
}

#[test]
fn test_get() {
    let list = letters();
    assert_eq!(list.get(0), Ok(&'a'));
    assert_eq!(list.get(4), Ok(&'e'));
    assert_eq!(list.get(5), Err(Error::OutOfRange { index: 5, bound: 5 }));
}

#[test]
fn test_get_respects_active_length() {
    let list = ImmutableList::with_length(vec![1, 2, 3], 2).unwrap();
    assert_eq!(list.get(1), Ok(&2));
    assert!(list.get(2).is_err());
}

#[test]
fn test_index_searches() {
    let list = letters();
    assert_eq!(list.index_of(&'b'), Some(1));
    assert_eq!(list.last_index_of(&'b'), Some(3));
    assert_eq!(list.index_of(&'z'), None);
    assert_eq!(list.last_index_of(&'z'), None);
}

#[test]
fn test_index_of_none_element() {
    let list = list_of(vec![Some(1), None, Some(2), None]);
    assert_eq!(list.index_of(&None), Some(1));
    assert_eq!(list.last_index_of(&None), Some(3));
}

// ============================================================================
// List iterator
// ============================================================================

#[test]
fn test_list_iter_forward_and_back() {
    let list = list_of(vec![10, 20, 30]);
    let mut cursor = list.list_iter();
    assert!(!cursor.has_previous());
    assert_eq!(cursor.previous_index(), None);
    assert_eq!(cursor.next(), Some(&10));
    assert_eq!(cursor.next(), Some(&20));
    assert_eq!(cursor.next_index(), 2);
    assert_eq!(cursor.previous_index(), Some(1));
    assert_eq!(cursor.previous(), Some(&20));
    assert_eq!(cursor.previous(), Some(&10));
    assert_eq!(cursor.previous(), None);
    assert_eq!(cursor.try_previous(), Err(Error::Exhausted));
}

#[test]
fn test_list_iter_at() {
    let list = list_of(vec![10, 20, 30]);
    let mut cursor = list.list_iter_at(3).unwrap();
    assert!(!cursor.has_next());
    assert_eq!(cursor.try_next(), Err(Error::Exhausted));
    assert_eq!(cursor.previous(), Some(&30));

    assert!(matches!(
        list.list_iter_at(4),
        Err(Error::OutOfRange { index: 4, bound: 3 })
    ));
}

#[test]
fn test_list_iter_mutations_are_rejected() {
    let list = list_of(vec![1]);
    let mut cursor = list.list_iter();
    assert!(cursor.set(9).unwrap_err().is_unsupported());
    assert!(cursor.add(9).unwrap_err().is_unsupported());
    assert!(cursor.remove().unwrap_err().is_unsupported());
    assert_eq!(list.as_slice(), &[1]);
}

// ============================================================================
// Sub-lists
// ============================================================================

#[test]
fn test_sub_list_is_a_view() {
    let list = letters();
    let middle = list.sub_list(1, 4).unwrap();
    assert_eq!(middle, ['b', 'c', 'b']);
    assert_eq!(middle.get(0), Ok(&'b'));
    assert_eq!(middle.index_of(&'c'), Some(1));

    let nested = middle.sub_list(1, 3).unwrap();
    assert_eq!(nested, ['c', 'b']);
}

#[test]
fn test_whole_sub_list_equals_and_shares() {
    let list = letters();
    let whole = list.sub_list(0, list.len()).unwrap();
    assert_eq!(whole, list);
    assert!(whole.shares_storage(&list));
}

#[test]
fn test_empty_sub_list_is_canonical_empty() {
    let list = letters();
    let none = list.sub_list(3, 3).unwrap();
    assert!(none.is_empty());
    assert!(none.shares_storage(&ImmutableList::empty()));
}

#[test]
fn test_sub_list_bounds() {
    let list = letters();
    assert_eq!(
        list.sub_list(0, 6).err(),
        Some(Error::OutOfRange { index: 6, bound: 5 })
    );
    assert_eq!(
        list.sub_list(3, 2).err(),
        Some(Error::OutOfRange { index: 3, bound: 2 })
    );
}

// ============================================================================
// Equality and hashing
// ============================================================================

#[test]
fn test_equality_against_other_sequences() {
    let list = list_of(vec![1, 2, 3]);
    assert_eq!(list, vec![1, 2, 3]);
    assert_eq!(list, [1, 2, 3]);
    assert!(list == *[1, 2, 3].as_slice());
    assert_eq!(list, VecDeque::from([1, 2, 3]));
    assert_eq!(vec![1, 2, 3], list);
    assert!(list != vec![3, 2, 1]);
    assert!(list != vec![1, 2]);
}

#[test]
fn test_equality_laws() {
    let a = list_of(vec!["x", "y"]);
    let b = ImmutableList::with_length(vec!["x", "y", "z"], 2).unwrap();
    let c = letters_to_strs();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

fn letters_to_strs() -> ImmutableList<&'static str> {
    ["x", "y"].into_iter().collect()
}

#[test]
fn test_equal_lists_hash_equally() {
    let a = list_of(vec![1, 2, 3]);
    let b = list_of(vec![0, 1, 2, 3]).sub_list(1, 4).unwrap();
    assert_eq!(a.hash_code(), b.hash_code());
    assert_eq!(a.hash_code(), sequence_hash_code(&vec![1, 2, 3]));

    let mut seen = HashSet::new();
    seen.insert(a);
    assert!(seen.contains(&b));
}

#[test]
fn test_hash_code_is_polynomial() {
    let list = list_of(vec![7u8, 9u8]);
    let expected = 1u64
        .wrapping_mul(31)
        .wrapping_add(element_hash(&7u8))
        .wrapping_mul(31)
        .wrapping_add(element_hash(&9u8));
    assert_eq!(list.hash_code(), expected);
    assert_eq!(ImmutableList::<u8>::empty().hash_code(), 1);
}

#[test]
fn test_hash_code_is_order_sensitive() {
    assert_ne!(list_of(vec![1, 2]).hash_code(), list_of(vec![2, 1]).hash_code());
}

#[test]
fn test_sequence_eq_helper() {
    assert!(sequence_eq(&vec!['a'], &['a']));
    assert!(!sequence_eq(&vec!['a'], &['b']));
}

// ============================================================================
// Mutation and formatting
// ============================================================================

#[test]
fn test_list_mutations_are_rejected() {
    let list = list_of(vec![1, 2, 3]);
    assert!(list.set(0, 9).unwrap_err().is_unsupported());
    assert!(list.insert(0, 9).unwrap_err().is_unsupported());
    assert!(list.insert_all(0, [9]).unwrap_err().is_unsupported());
    assert!(list.remove_at(0).unwrap_err().is_unsupported());
    assert!(list.add(4).unwrap_err().is_unsupported());
    assert!(list.clear().unwrap_err().is_unsupported());
    assert_eq!(list, [1, 2, 3]);
}

#[test]
fn test_display() {
    assert_eq!(letters().to_string(), "[a, b, c, b, e]");
    assert_eq!(format!("{:?}", list_of(vec![1, 2])), "[1, 2]");
}
