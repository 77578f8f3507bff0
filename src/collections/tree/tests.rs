#![cfg(test)]

use super::*;
use crate::collections::traits::Insert;
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

fn int(value: i64) -> Tofu {
    Tofu::from_integer(value)
}

fn tree_of(values: &[i64]) -> BinarySearchTree {
    let mut tree = BinarySearchTree::new(TofuKind::Integer);
    tree.insert_all(values.iter().copied().map(int)).expect("integers");
    tree
}

fn contents(tree: &BinarySearchTree) -> Vec<i64> {
    tree.iter().map(|value| value.get_integer().expect("integer")).collect()
}

#[test]
fn test_insert_orders_values() {
    let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
    assert_eq!(tree.len(), 7);
    assert_eq!(contents(&tree), [20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.min(), Some(&int(20)));
    assert_eq!(tree.max(), Some(&int(80)));
    assert_eq!(tree.to_string(), "{20, 30, 40, 50, 60, 70, 80}");
}

#[test]
fn test_duplicates_are_ignored() {
    let mut tree = tree_of(&[2, 1, 3]);
    assert_eq!(tree.insert(int(2)), Ok(false), "An equal value shouldn't be inserted again.");
    assert_eq!(tree.insert(int(4)), Ok(true));
    assert_eq!(tree.len(), 4);
    assert_eq!(contents(&tree), [1, 2, 3, 4]);
}

#[test]
fn test_kind_enforcement() {
    let mut tree = tree_of(&[1]);
    assert_eq!(
        tree.insert(Tofu::from_double(1.0)),
        Err(KindMismatch {
            expected: TofuKind::Integer,
            found: TofuKind::Double,
        })
    );
    assert!(!tree.contains(&Tofu::from_double(1.0)));
    assert!(tree.remove(&Tofu::from_text("1")).expect_err("wrong kind").is_kind_mismatch());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_remove_cases() {
    let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 65]);

    assert_eq!(tree.remove(&int(20)), Ok(int(20)), "Removing a leaf should work.");
    assert_eq!(
        tree.remove(&int(60)),
        Ok(int(60)),
        "Removing a node with one child should work."
    );
    assert_eq!(contents(&tree), [30, 40, 50, 65, 70, 80]);

    assert_eq!(
        tree.remove(&int(50)),
        Ok(int(50)),
        "Removing the root with two children should work."
    );
    assert_eq!(contents(&tree), [30, 40, 65, 70, 80]);
    assert_eq!(
        tree.root.0.as_ref().map(|node| node.value.clone()),
        Some(int(65)),
        "The successor should replace the root."
    );

    assert_eq!(tree.remove(&int(50)), Err(RemoveError::NotFound(NotFound)));
    assert_eq!(tree.len(), 5);
    assert!(!tree.contains(&int(50)));
    assert!(tree.contains(&int(65)));
}

#[test]
fn test_remove_everything() {
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    for value in [4, 2, 6, 1, 3, 5, 7] {
        tree.remove(&int(value)).expect("present");
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_text_ordering() {
    let mut tree = BinarySearchTree::new(TofuKind::Text);
    for word in ["pear", "apple", "fig", "Banana"] {
        tree.insert(Tofu::from_text(word)).expect("text");
    }
    let words: Vec<_> = tree.iter().map(|value| value.get_text().expect("text")).collect();
    assert_eq!(words, ["Banana", "apple", "fig", "pear"], "Text should compare byte-wise.");
}

#[test]
fn test_degenerate_tree() {
    // Sorted inserts make a single right spine.
    let mut tree = tree_of(&(0..2_000).collect::<Vec<_>>());
    assert_eq!(tree.height(), 2_000);
    assert_eq!(tree.iter().len(), 2_000);
    assert!(tree.contains(&int(1_999)));

    let copy = tree.clone();
    assert_eq!(copy.height(), 2_000, "A clone should keep the shape of the original.");
    assert_eq!(copy, tree);

    assert_eq!(tree.remove(&int(1_999)), Ok(int(1_999)), "The deepest leaf should be removable.");
    assert_eq!(tree.remove(&int(1_000)), Ok(int(1_000)));
    assert_eq!(tree.pop_min(), Some(int(0)));
    assert_eq!(tree.len(), 1_997);
    assert!(!tree.contains(&int(1_000)));
    assert_eq!(copy.len(), 2_000, "Removing from the original shouldn't touch the clone.");

    let owned: Vec<Tofu> = copy.into_iter().collect();
    assert_eq!(owned.len(), 2_000);
    assert!(owned.windows(2).all(|pair| pair[0] < pair[1]));
    drop(tree);
}

#[test]
fn test_degenerate_left_spine() {
    let mut tree = tree_of(&(0..2_000).rev().collect::<Vec<_>>());
    assert_eq!(tree.height(), 2_000);
    assert_eq!(tree.min(), Some(&int(0)));

    let copy = tree.clone();
    assert_eq!(tree.remove(&int(0)), Ok(int(0)));
    assert_eq!(tree.pop_min(), Some(int(1)));
    assert_eq!(contents(&copy).len(), 2_000);
    assert_eq!(copy.into_iter().next(), Some(int(0)));
}

#[test]
fn test_into_iter_and_clone() {
    let tree = tree_of(&[3, 1, 2]);
    let copy = tree.clone();
    assert_eq!(tree, copy);

    let owned: Vec<Tofu> = tree.into_iter().collect();
    assert_eq!(owned, [int(1), int(2), int(3)]);
    assert_eq!(copy.len(), 3, "The clone should be independent of the original.");
}

#[test]
fn test_debug_layout() {
    let tree = tree_of(&[2, 1, 3]);
    let expected = "┌    ┌    -\n\
        ┌    (Integer(1))\n\
        ┌    └    -\n\
        (Integer(2))\n\
        └    ┌    -\n\
        └    (Integer(3))\n\
        └    └    -";
    assert_eq!(format!("{tree:?}"), expected);
}
