use std::fmt::{self, Debug, Display, Formatter};

use super::singly_linked_list::{Iter, SinglyLinkedList};
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{CapacityError, IndexOutOfBounds, OutOfCapacity, RemoveError};
use crate::value::{Tofu, TofuKind};

/// A [`SinglyLinkedList`] that refuses to grow past a fixed number of elements.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedList {
    pub(crate) list: SinglyLinkedList,
    pub(crate) capacity: usize,
}

impl FixedList {
    pub const fn new(kind: TofuKind, capacity: usize) -> FixedList {
        FixedList {
            list: SinglyLinkedList::new(kind),
            capacity,
        }
    }

    pub const fn kind(&self) -> TofuKind {
        self.list.kind()
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.capacity
    }

    pub const fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    /// Fails with [`CapacityError::OutOfCapacity`] when the list already holds `capacity`
    /// elements. The kind is checked first.
    pub fn push_back(&mut self, value: Tofu) -> Result<(), CapacityError> {
        self.check_room(&value)?;
        Ok(self.list.push_back(value)?)
    }

    pub fn push_front(&mut self, value: Tofu) -> Result<(), CapacityError> {
        self.check_room(&value)?;
        Ok(self.list.push_front(value)?)
    }

    pub fn pop_front(&mut self) -> Option<Tofu> {
        self.list.pop_front()
    }

    pub fn get(&self, index: usize) -> Option<&Tofu> {
        self.list.get(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Tofu, IndexOutOfBounds> {
        self.list.remove_at(index)
    }

    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.list.remove(value)
    }

    pub fn index_of(&self, value: &Tofu) -> Option<usize> {
        self.list.index_of(value)
    }

    /// Reverses the list in place, relinking each node once.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        self.list.iter()
    }

    fn check_room(&self, value: &Tofu) -> Result<(), CapacityError> {
        self.list.kind().check(value)?;
        if self.is_full() {
            return Err(OutOfCapacity { capacity: self.capacity }.into());
        }
        Ok(())
    }
}

impl Container for FixedList {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.list.kind()
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn iter(&self) -> Iter<'_> {
        self.list.iter()
    }
}

impl Insert for FixedList {
    type Error = CapacityError;

    fn insert(&mut self, value: Tofu) -> Result<(), CapacityError> {
        self.push_back(value)
    }
}

impl Remove for FixedList {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.list.remove(value)
    }
}

impl Debug for FixedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedList")
            .field("list", &self.list)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl Display for FixedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]", self.list, self.len(), self.capacity)
    }
}
