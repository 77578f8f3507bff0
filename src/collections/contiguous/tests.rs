#![cfg(test)]

use super::*;
use crate::collections::traits::{Container, Insert};
use crate::error::{CapacityError, IndexOutOfBounds, KindMismatch, OutOfCapacity};
use crate::util::panic::assert_panics;
use crate::value::{Tofu, TofuKind};

fn int(value: i64) -> Tofu {
    Tofu::from_integer(value)
}

#[test]
fn test_vector_growth() {
    let mut vec = Vector::with_cap(TofuKind::Integer, 10).expect("small allocation");
    assert_eq!(vec.cap(), 10);

    vec.insert_all((0..10).map(int)).expect("integers");
    assert_eq!(vec.cap(), 10, "Filling to capacity shouldn't grow the buffer.");

    vec.push(int(10)).expect("integer");
    assert_eq!(vec.len(), 11);
    assert_eq!(vec.cap(), 20, "A full Vector should double its capacity.");

    let mut empty = Vector::new(TofuKind::Integer);
    assert_eq!(empty.cap(), 0);
    empty.push(int(0)).expect("integer");
    assert_eq!(empty.cap(), 2, "The first growth should use the minimum capacity.");
}

#[test]
fn test_vector_kind_enforcement() {
    let mut vec = Vector::new(TofuKind::Text);
    assert!(vec.push(int(1)).expect_err("wrong kind").is_kind_mismatch());
    assert_eq!(vec.cap(), 0, "A rejected push shouldn't allocate.");

    vec.push(Tofu::from_text("a")).expect("text");
    assert!(vec.set(0, Tofu::from_boolean(true)).is_err());
    assert!(vec.insert_at(0, Tofu::from_null()).expect_err("wrong kind").is_kind_mismatch());
    assert_eq!(&*vec, [Tofu::from_text("a")]);
}

#[test]
fn test_vector_positional() {
    let mut vec = Vector::new(TofuKind::Integer);
    vec.insert_all([int(1), int(3)]).expect("integers");
    vec.insert_at(1, int(2)).expect("in bounds");
    vec.insert_at(3, int(4)).expect("appending");
    assert!(vec.insert_at(9, int(9)).expect_err("past the end").is_index_out_of_bounds());
    assert_eq!(vec.to_string(), "[1, 2, 3, 4]");

    assert_eq!(vec[2], int(3));
    assert_eq!(vec.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(vec.set(0, int(0)), Ok(int(1)));
    assert_eq!(vec.remove_at(1), Ok(int(2)));
    assert_eq!(vec.remove(&int(4)), Ok(int(4)));
    assert!(vec.remove(&int(4)).expect_err("removed").is_not_found());
    assert_eq!(vec.pop(), Some(int(3)));
    assert_eq!(vec.index_of(&int(0)), Some(0));

    assert_panics!({
        let vec = Vector::new(TofuKind::Integer);
        let _ = &vec[0];
    });
}

#[test]
fn test_vector_capacity_management() {
    let mut vec = Vector::new(TofuKind::Boolean);
    vec.reserve(5).expect("small allocation");
    assert_eq!(vec.cap(), 5);
    vec.reserve(3).expect("no-op");
    assert_eq!(vec.cap(), 5, "Reserving less than the current capacity shouldn't shrink.");

    vec.push(Tofu::from_boolean(true)).expect("boolean");
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 1);

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 1, "Clearing should keep the capacity.");

    assert!(
        Vector::with_cap(TofuKind::Integer, usize::MAX)
            .expect_err("too large")
            .requested
            == usize::MAX,
        "An impossible allocation should be reported, not abort."
    );
}

#[test]
fn test_vector_clone_is_deep() {
    let mut vec = Vector::new(TofuKind::Array);
    vec.push(Tofu::from_array([int(1)])).expect("array");
    let copy = vec.clone();

    vec.set(0, Tofu::from_empty_array()).expect("array");
    assert_eq!(copy[0], Tofu::from_array([int(1)]), "The clone shouldn't see later writes.");
    assert_ne!(vec, copy);
    assert_eq!(copy.cap(), vec.cap());
}

#[test]
fn test_fixed_array() {
    let mut arr = FixedArray::new(TofuKind::Double, 2).expect("small allocation");
    arr.push(Tofu::from_double(1.5)).expect("room");
    arr.insert(Tofu::from_double(2.5)).expect("room");

    assert!(arr.is_full());
    assert_eq!(
        arr.push(Tofu::from_double(3.5)),
        Err(CapacityError::OutOfCapacity(OutOfCapacity { capacity: 2 })),
        "A full array should refuse to grow."
    );
    assert_eq!(
        arr.push(int(1)),
        Err(CapacityError::KindMismatch(KindMismatch {
            expected: TofuKind::Double,
            found: TofuKind::Integer,
        })),
        "The kind should be checked before the capacity."
    );
    assert_eq!(arr.cap(), 2);
    assert_eq!(arr.to_string(), "[1.5, 2.5] [2/2]");

    arr.remove(&Tofu::from_double(1.5)).expect("present");
    arr.push(Tofu::from_double(0.5)).expect("room again");
    assert_eq!(arr[1], Tofu::from_double(0.5));
}

#[test]
fn test_tuple() {
    let tuple =
        Tuple::new(TofuKind::Text, [Tofu::from_text("x"), Tofu::from_text("y")]).expect("text");
    assert_eq!(tuple.len(), 2);
    assert_eq!(tuple[1], Tofu::from_text("y"));
    assert!(tuple.get(2).is_none());
    assert_eq!(tuple.to_string(), "(x, y)");
    assert!(tuple.contains(&Tofu::from_text("x")));

    assert_eq!(
        Tuple::new(TofuKind::Text, [Tofu::from_text("x"), int(1)]),
        Err(KindMismatch {
            expected: TofuKind::Text,
            found: TofuKind::Integer,
        })
    );
    assert!(Tuple::new(TofuKind::Null, []).expect("empty").is_empty());
}

#[test]
fn test_matrix() {
    let mut matrix = Matrix::new(TofuKind::Integer, 2, 3).expect("small allocation");
    assert_eq!(matrix.len(), 6);
    assert!(matrix.iter().all(|cell| *cell == int(0)), "A new matrix should hold default values.");

    for row in 0..2 {
        for col in 0..3 {
            matrix.set(row, col, int((row * 3 + col) as i64)).expect("in bounds");
        }
    }
    assert_eq!(matrix[(1, 2)], int(5));
    assert_eq!(matrix.row(1), Some(&[int(3), int(4), int(5)][..]));
    assert!(matrix.row(2).is_none());
    assert!(matrix.set(0, 3, int(0)).expect_err("past the last column").is_index_out_of_bounds());
    assert!(matrix.set(0, 0, Tofu::from_text("0")).expect_err("wrong kind").is_kind_mismatch());
    assert_eq!(matrix.to_string(), "[0, 1, 2]\n[3, 4, 5]");

    let transposed = matrix.transpose().expect("small allocation");
    assert_eq!((transposed.rows(), transposed.cols()), (3, 2));
    assert_eq!(transposed.get(2, 1), Some(&int(5)));
    assert_eq!(transposed.transpose().expect("small allocation"), matrix);

    assert!(Matrix::new(TofuKind::Integer, usize::MAX, 2).is_err());
}
