#![cfg(test)]

use std::num::NonZeroUsize;

use super::*;
use crate::collections::traits::Container;
use crate::error::NotFound;
use crate::value::{Tofu, TofuKind};

#[test]
fn test_polynomial_hash() {
    assert_eq!(polynomial_hash(""), 0);
    assert_eq!(polynomial_hash("a"), 97);
    assert_eq!(polynomial_hash("abc"), (97 * 31 + 98) * 31 + 99);
    // Long keys wrap instead of overflowing.
    let _ = polynomial_hash(&"z".repeat(1_000));
}

#[test]
fn test_insert_get_remove() {
    let mut table = HashTable::new(TofuKind::Text);
    assert_eq!(table.bucket_count(), DEFAULT_BUCKETS);

    assert_eq!(table.insert("name", Tofu::from_text("John")), Ok(None));
    assert_eq!(table.get("name"), Some(&Tofu::from_text("John")));
    assert_eq!(
        table.insert("name", Tofu::from_text("Jane")),
        Ok(Some(Tofu::from_text("John"))),
        "Inserting an existing key should overwrite it."
    );
    assert_eq!(table.len(), 1);

    assert!(table.insert("age", Tofu::from_integer(3)).is_err());
    assert_eq!(table.remove("name"), Ok(Tofu::from_text("Jane")));
    assert!(!table.contains_key("name"));
    assert_eq!(table.remove("name"), Err(NotFound));
    assert!(table.is_empty());
}

#[test]
fn test_collisions_chain_newest_first() {
    let mut table =
        HashTable::with_buckets(TofuKind::Integer, NonZeroUsize::MIN).expect("one bucket");
    for (index, key) in ["a", "b", "c"].into_iter().enumerate() {
        table.insert(key, Tofu::from_integer(index as i64)).expect("integer");
    }

    assert_eq!(
        table.keys().collect::<Vec<_>>(),
        ["c", "b", "a"],
        "Every key shares the only bucket."
    );
    assert_eq!(table.get("b"), Some(&Tofu::from_integer(1)));

    table.remove("b").expect("present");
    assert_eq!(table.keys().collect::<Vec<_>>(), ["c", "a"]);
    assert_eq!(table.to_string(), "#{\"c\": 2, \"a\": 0}");
}

#[test]
fn test_bucket_then_chain_order() {
    let buckets = NonZeroUsize::new(4).expect("non-zero");
    let mut table = HashTable::with_buckets(TofuKind::Integer, buckets).expect("four buckets");
    // "a" = 97 and "e" = 101 share bucket 1, "c" = 99 is in bucket 3 and "d" = 100 in bucket 0.
    for key in ["a", "c", "d", "e"] {
        table.insert(key, Tofu::from_integer(0)).expect("integer");
    }

    assert_eq!(table.keys().collect::<Vec<_>>(), ["d", "e", "a", "c"]);
    assert_eq!(table.iter().len(), 4);
    assert_eq!(table.values().count(), table.len());
}

#[test]
fn test_replace_clear_and_equality() {
    let mut table = HashTable::new(TofuKind::Double);
    table.insert("x", Tofu::from_double(1.25)).expect("double");
    table.insert("y", Tofu::from_double(2.25)).expect("double");

    assert_eq!(table.replace("x", Tofu::from_double(1.5)), Ok(Tofu::from_double(1.25)));
    assert!(table.replace("z", Tofu::from_double(4.0)).expect_err("absent").is_not_found());
    assert!(table.contains(&Tofu::from_double(2.25)));
    assert_eq!(table["x"], Tofu::from_double(1.5));

    let mut other =
        HashTable::with_buckets(TofuKind::Double, NonZeroUsize::MIN).expect("one bucket");
    other.insert("y", Tofu::from_double(2.25)).expect("double");
    other.insert("x", Tofu::from_double(1.5)).expect("double");
    assert_eq!(table, other, "Equality shouldn't depend on the bucket layout.");

    let copy = table.clone();
    table.clear();
    assert!(table.is_empty());
    assert_eq!(copy.len(), 2);
}
