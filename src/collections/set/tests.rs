#![cfg(test)]

use super::*;
use crate::collections::traits::{Container, Insert, SetAlgebra};
use crate::error::KindMismatch;
use crate::value::{Tofu, TofuKind};

fn int(value: i64) -> Tofu {
    Tofu::from_integer(value)
}

fn set_of(values: &[i64]) -> Set {
    let mut set = Set::new(TofuKind::Integer);
    set.insert_all(values.iter().copied().map(int)).expect("integers");
    set
}

fn sorted<'a>(values: impl Iterator<Item = &'a Tofu>) -> Vec<i64> {
    let mut values: Vec<_> = values.map(|value| value.get_integer().expect("integer")).collect();
    values.sort_unstable();
    values
}

#[test]
fn test_uniqueness() {
    let mut set = Set::new(TofuKind::Integer);
    assert_eq!(set.insert(int(1)), Ok(true));
    assert_eq!(set.insert(int(1)), Ok(false), "An equal value shouldn't be added twice.");
    set.insert_all([int(2), int(1), int(3)]).expect("integers");

    assert_eq!(set.len(), 3);
    assert_eq!(set.to_string(), "{1, 2, 3}");
}

#[test]
fn test_insert_then_remove() {
    let mut set = set_of(&[4, 5]);
    set.insert(int(6)).expect("integer");
    assert!(set.contains(&int(6)));

    assert_eq!(set.remove(&int(6)), Ok(int(6)));
    assert!(!set.contains(&int(6)), "A removed value shouldn't be contained.");
    assert_eq!(set.len(), 2);
    assert!(set.remove(&int(6)).expect_err("removed").is_not_found());
    assert!(set.remove(&Tofu::from_null()).expect_err("wrong kind").is_kind_mismatch());
    assert!(set.insert(Tofu::from_null()).is_err());
}

#[test]
fn test_algebra() {
    let a = set_of(&[1, 2, 3, 4]);
    let b = set_of(&[3, 4, 5]);

    assert_eq!(sorted(a.union(&b).expect("same kind")), [1, 2, 3, 4, 5]);
    assert_eq!(sorted(a.intersection(&b)), [3, 4]);
    assert_eq!(sorted(a.difference(&b)), [1, 2]);
    assert_eq!(sorted(b.difference(&a)), [5]);
    assert_eq!(sorted(a.symmetric_difference(&b).expect("same kind")), [1, 2, 5]);

    assert!(set_of(&[3, 4]).is_subset(&a));
    assert!(a.is_superset(&set_of(&[])), "Every set is a superset of the empty set.");
    assert!(!a.is_subset(&b));

    assert_eq!(
        a.to_union(&b),
        Ok(set_of(&[5, 4, 3, 2, 1])),
        "Set equality shouldn't depend on order."
    );
    assert_eq!(a.to_symmetric_difference(&b), Ok(set_of(&[1, 2, 5])));
    assert_eq!(a.to_intersection(&b), set_of(&[3, 4]));
    assert_eq!(a.to_difference(&b).len(), 2);
}

#[test]
fn test_different_kinds_are_disjoint() {
    let ints = set_of(&[1]);
    let mut texts = Set::new(TofuKind::Text);
    texts.insert(Tofu::from_text("1")).expect("text");

    assert_eq!(ints.intersection(&texts).count(), 0, "Values of different kinds are never equal.");
    assert!(!ints.contains(&Tofu::from_text("1")));
    assert_ne!(ints, Set::new(TofuKind::Integer));
}

#[test]
fn test_different_kinds_are_not_combined() {
    let ints = set_of(&[1]);
    let mut texts = Set::new(TofuKind::Text);
    texts.insert(Tofu::from_text("x")).expect("text");

    let mismatch = KindMismatch {
        expected: TofuKind::Integer,
        found: TofuKind::Text,
    };
    assert_eq!(ints.to_union(&texts), Err(mismatch), "A union can't hold two kinds.");
    assert_eq!(ints.to_symmetric_difference(&texts), Err(mismatch));
    assert!(ints.union(&texts).is_err());
    assert!(ints.symmetric_difference(&texts).is_err());

    assert_eq!(ints.to_difference(&texts), ints, "Nothing of another kind can be subtracted.");
    assert!(ints.to_intersection(&texts).is_empty());
    assert_eq!(ints.to_difference(&texts).kind(), TofuKind::Integer);
}
