use std::error::Error;

use crate::error::{KindMismatch, RemoveError};
use crate::value::{Tofu, TofuKind};

/// The contract shared by every container: each one is bound to a single [`TofuKind`] when it is
/// created and only ever holds values of that kind.
///
/// Dropping a container releases all of its storage. There is no separate destroy operation.
pub trait Container {
    type Iter<'a>: Iterator<Item = &'a Tofu> where Self: 'a;

    /// Returns the kind that every element of this container has.
    fn kind(&self) -> TofuKind;

    /// Returns the exact number of elements currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all elements, in the order defined by the container's topology.
    /// The iterator borrows the container and can be recreated at any time.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns true if any element is equal to `value`. A value of another kind is never
    /// contained.
    fn contains(&self, value: &Tofu) -> bool {
        value.kind() == self.kind() && self.iter().any(|item| item == value)
    }

    /// Checks that `value` could be stored in this container.
    fn check_kind(&self, value: &Tofu) -> Result<(), KindMismatch> {
        self.kind().check(value)
    }
}

/// Containers that accept a single value with no other placement information.
pub trait Insert: Container {
    type Error: Error + From<KindMismatch>;

    /// Places `value` according to the container's policy. A value with a kind other than
    /// [`Container::kind`] is always rejected and leaves the container unchanged.
    fn insert(&mut self, value: Tofu) -> Result<(), Self::Error>;

    /// Inserts every value in order, stopping at the first failure.
    fn insert_all<I: IntoIterator<Item = Tofu>>(&mut self, values: I) -> Result<(), Self::Error> {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }
}

/// Containers that can remove a single element equal to a provided value.
pub trait Remove: Container {
    /// Removes one element equal to `value` and returns it.
    ///
    /// # Errors
    /// Returns [`RemoveError::KindMismatch`] if `value` is of the wrong kind and
    /// [`RemoveError::NotFound`] if no equal element exists.
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError>;
}
