#![cfg(test)]

use super::chain::Chain;
use super::*;
use crate::collections::traits::{Container, Insert};
use crate::error::{
    CapacityError, IndexOutOfBounds, KindMismatch, NotFound, OutOfCapacity, RemoveError,
};
use crate::util::panic::assert_panics;
use crate::value::{Tofu, TofuKind};

fn ints(values: &[i64]) -> Vec<Tofu> {
    values.iter().copied().map(Tofu::from_integer).collect()
}

fn collect<'a>(iter: impl Iterator<Item = &'a Tofu>) -> Vec<i64> {
    iter.map(|value| value.get_integer().expect("integer")).collect()
}

#[test]
fn test_chain_positions() {
    let mut chain: Chain<u8> = (1..=3).collect();
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    chain.push_back(4);
    chain.push_front(0);
    assert_eq!(chain.insert_at(2, 9), Ok(()));
    assert_eq!(chain.insert_at(7, 9), Err(9), "Inserting past the end should fail.");
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [0, 1, 9, 2, 3, 4]);

    assert_eq!(chain.remove_at(2), Some(9));
    assert_eq!(chain.remove_at(5), None);
    assert_eq!(chain.remove_first(|v| *v == 4), Some(4));
    assert_eq!(chain.len(), 4);

    chain.reverse();
    assert_eq!(chain.into_iter().collect::<Vec<_>>(), [3, 2, 1, 0]);
}

#[test]
fn test_chain_insert_before() {
    let mut chain: Chain<u8> = Chain::new();
    chain.insert_before(5, |v| *v > 5);
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), [5], "An empty chain takes the value.");

    chain.insert_before(1, |v| *v > 1);
    chain.insert_before(9, |v| *v > 9);
    chain.insert_before(5, |v| *v > 5);
    assert_eq!(
        chain.iter().copied().collect::<Vec<_>>(),
        [1, 5, 5, 9],
        "Values should land in front of the first match, or at the back."
    );
    assert_eq!(chain.len(), 4);
}

#[test]
fn test_chain_long_drop() {
    // Dropping shouldn't recurse once per node.
    let chain: Chain<usize> = (0..200_000).collect();
    assert_eq!(chain.len(), 200_000);
    drop(chain);
}

#[test]
fn test_doubly_push_pop() {
    let mut list = DoublyLinkedList::new(TofuKind::Integer);
    list.push_back(Tofu::from_integer(2)).expect("integer");
    list.push_front(Tofu::from_integer(1)).expect("integer");
    list.push_back(Tofu::from_integer(3)).expect("integer");
    list.verify_double_links();

    assert_eq!(list.front(), Some(&Tofu::from_integer(1)));
    assert_eq!(list.back(), Some(&Tofu::from_integer(3)));
    assert_eq!(list.pop_back(), Some(Tofu::from_integer(3)));
    assert_eq!(list.pop_front(), Some(Tofu::from_integer(1)));
    assert_eq!(list.pop_front(), Some(Tofu::from_integer(2)));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
    list.verify_double_links();
}

#[test]
fn test_doubly_kind_enforcement() {
    let mut list = DoublyLinkedList::new(TofuKind::Text);
    list.push_back(Tofu::from_text("a")).expect("text");

    assert_eq!(
        list.push_back(Tofu::from_integer(1)),
        Err(KindMismatch {
            expected: TofuKind::Text,
            found: TofuKind::Integer,
        }),
        "An integer shouldn't be accepted by a text list."
    );
    assert!(list.push_front(Tofu::from_boolean(true)).is_err());
    assert!(list.insert_at(0, Tofu::from_null()).is_err());
    assert!(list.set(0, Tofu::from_null()).is_err());
    assert_eq!(list.len(), 1, "Rejected values shouldn't change the length.");
}

#[test]
fn test_doubly_positional() {
    let mut list = DoublyLinkedList::new(TofuKind::Integer);
    list.insert_all(ints(&[0, 1, 2, 3, 4, 5])).expect("integers");

    assert_eq!(list[4], Tofu::from_integer(4), "Seeking from the back should work.");
    assert_eq!(list.get(1), Some(&Tofu::from_integer(1)));
    assert_eq!(list.try_get(6), Err(IndexOutOfBounds { index: 6, len: 6 }));

    list.insert_at(3, Tofu::from_integer(30)).expect("in bounds");
    list.insert_at(7, Tofu::from_integer(70)).expect("appending");
    list.insert_at(0, Tofu::from_integer(-1)).expect("prepending");
    assert!(
        list.insert_at(10, Tofu::from_integer(0))
            .expect_err("past the end")
            .is_index_out_of_bounds()
    );
    list.verify_double_links();
    assert_eq!(collect(list.iter()), [-1, 0, 1, 2, 30, 3, 4, 5, 70]);

    assert_eq!(list.remove_at(4), Ok(Tofu::from_integer(30)));
    assert_eq!(list.set(0, Tofu::from_integer(-2)), Ok(Tofu::from_integer(-1)));
    assert_eq!(list.index_of(&Tofu::from_integer(5)), Some(6));
    list.verify_double_links();

    assert_panics!({
        let list = DoublyLinkedList::new(TofuKind::Integer);
        let _ = &list[0];
    });
}

#[test]
fn test_doubly_remove_by_value() {
    let mut list = DoublyLinkedList::new(TofuKind::Integer);
    list.insert_all(ints(&[5, 6, 7, 6])).expect("integers");

    assert_eq!(list.remove(&Tofu::from_integer(6)), Ok(Tofu::from_integer(6)));
    assert_eq!(collect(list.iter()), [5, 7, 6], "Only the first match should be removed.");
    assert_eq!(list.remove(&Tofu::from_integer(9)), Err(RemoveError::NotFound(NotFound)));
    assert!(list.remove(&Tofu::from_text("6")).expect_err("wrong kind").is_kind_mismatch());

    assert_eq!(list.remove(&Tofu::from_integer(5)), Ok(Tofu::from_integer(5)));
    assert_eq!(list.remove(&Tofu::from_integer(6)), Ok(Tofu::from_integer(6)));
    assert_eq!(list.front(), list.back(), "A single node is both the head and the tail.");
    list.verify_double_links();
}

#[test]
fn test_doubly_reverse() {
    let mut list = DoublyLinkedList::new(TofuKind::Integer);
    list.reverse();
    assert!(list.is_empty(), "Reversing an empty list should be a no-op.");

    list.push_back(Tofu::from_integer(1)).expect("integer");
    list.reverse();
    assert_eq!(collect(list.iter()), [1], "Reversing one element should be a no-op.");

    list.insert_all(ints(&[2, 3, 4])).expect("integers");
    let original = list.clone();
    list.reverse();
    list.verify_double_links();
    assert_eq!(collect(list.iter()), [4, 3, 2, 1]);
    assert_eq!(collect(list.iter().rev()), [1, 2, 3, 4]);
    assert_eq!(list.front(), Some(&Tofu::from_integer(4)));
    assert_eq!(list.back(), Some(&Tofu::from_integer(1)));

    list.reverse();
    assert_eq!(list, original, "Reversing twice should restore the original order.");
}

#[test]
fn test_doubly_append() {
    let mut a = DoublyLinkedList::new(TofuKind::Integer);
    let mut b = DoublyLinkedList::new(TofuKind::Integer);
    a.insert_all(ints(&[1, 2])).expect("integers");
    b.insert_all(ints(&[3, 4])).expect("integers");
    a.append(b).expect("same kind");
    a.verify_double_links();
    assert_eq!(collect(a.iter()), [1, 2, 3, 4]);

    let mut empty = DoublyLinkedList::new(TofuKind::Integer);
    empty.append(a.clone()).expect("same kind");
    assert_eq!(empty, a);

    assert!(a.append(DoublyLinkedList::new(TofuKind::Null)).is_err());
    assert_eq!(a.len(), 4);
}

#[test]
fn test_doubly_iterators() {
    let mut list = DoublyLinkedList::new(TofuKind::Integer);
    list.insert_all(ints(&[1, 2, 3, 4])).expect("integers");

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&Tofu::from_integer(1)));
    assert_eq!(iter.next_back(), Some(&Tofu::from_integer(4)));
    assert_eq!(iter.next(), Some(&Tofu::from_integer(2)));
    assert_eq!(iter.next_back(), Some(&Tofu::from_integer(3)));
    assert_eq!(iter.next(), None, "Both ends meeting should end iteration.");
    assert_eq!(iter.next_back(), None);

    assert_eq!(list.to_string(), "(1) <-> (2) <-> (3) <-> (4)");
    let owned: Vec<Tofu> = list.into_iter().rev().collect();
    assert_eq!(owned, ints(&[4, 3, 2, 1]));
}

#[test]
fn test_singly_operations() {
    let mut list = SinglyLinkedList::new(TofuKind::Integer);
    assert!(list.is_empty());
    list.insert_all(ints(&[1, 2, 3])).expect("integers");
    list.push_front(Tofu::from_integer(0)).expect("integer");

    assert_eq!(list.len(), 4);
    assert_eq!(list[3], Tofu::from_integer(3));
    assert!(list.contains(&Tofu::from_integer(2)));
    assert!(!list.contains(&Tofu::from_text("2")), "Other kinds are never contained.");

    list.insert_at(2, Tofu::from_integer(15)).expect("in bounds");
    assert!(list.insert_at(9, Tofu::from_integer(15)).is_err());
    assert_eq!(collect(list.iter()), [0, 1, 15, 2, 3]);
    assert_eq!(list.remove_at(0), Ok(Tofu::from_integer(0)));
    assert_eq!(list.remove(&Tofu::from_integer(15)), Ok(Tofu::from_integer(15)));
    assert_eq!(list.index_of(&Tofu::from_integer(3)), Some(2));

    list.reverse();
    assert_eq!(collect(list.iter()), [3, 2, 1]);
    assert_eq!(list.to_string(), "(3) -> (2) -> (1)");

    assert!(list.push_back(Tofu::from_double(1.0)).is_err());
    assert_eq!(list.len(), 3);
}

#[test]
fn test_fixed_list_capacity() {
    let mut list = FixedList::new(TofuKind::Character, 2);
    list.push_back(Tofu::from_character('a')).expect("room");
    list.push_back(Tofu::from_character('b')).expect("room");
    assert!(list.is_full());

    assert_eq!(
        list.push_back(Tofu::from_character('c')),
        Err(CapacityError::OutOfCapacity(OutOfCapacity { capacity: 2 })),
        "A full list should refuse to grow."
    );
    assert!(
        list.push_front(Tofu::from_integer(1)).expect_err("wrong kind").is_kind_mismatch(),
        "The kind should be checked before the capacity."
    );

    list.reverse();
    assert_eq!(
        list.iter().cloned().collect::<Vec<_>>(),
        [Tofu::from_character('b'), Tofu::from_character('a')]
    );

    list.remove(&Tofu::from_character('b')).expect("present");
    list.insert(Tofu::from_character('z')).expect("room again");
    assert_eq!(list.len(), 2);
}

#[test]
fn test_ternary_duplicates() {
    let mut list = TernaryList::new(TofuKind::Integer);
    list.insert_all(ints(&[1, 2, 1, 3, 2, 1])).expect("integers");

    assert_eq!(list.len(), 6);
    assert_eq!(list.distinct_len(), 3);
    assert_eq!(list.count(&Tofu::from_integer(1)), 3);
    assert_eq!(list.count(&Tofu::from_integer(4)), 0);
    assert_eq!(
        collect(list.iter()),
        [1, 1, 1, 2, 2, 3],
        "Duplicates should follow their node through the middle chain."
    );
    assert_eq!(list.to_string(), "(1, 1, 1) -> (2, 2) -> (3)");

    list.remove(&Tofu::from_integer(2)).expect("present");
    assert_eq!(list.distinct_len(), 3, "A duplicate should be removed before its node.");
    list.remove(&Tofu::from_integer(2)).expect("present");
    assert_eq!(list.distinct_len(), 2);
    assert!(!list.contains(&Tofu::from_integer(2)));
    assert!(list.remove(&Tofu::from_integer(2)).expect_err("gone").is_not_found());

    assert_eq!(collect(list.iter()), [1, 1, 1, 3]);
    assert_eq!(list.iter().len(), list.len());
}
