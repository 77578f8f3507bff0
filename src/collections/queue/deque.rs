use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::DoublyLinkedList;
use crate::collections::linked::doubly_linked_list::Iter;
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{KindMismatch, RemoveError};
use crate::value::{Tofu, TofuKind};

/// A double-ended queue, which can be pushed to and popped from at either end.
#[derive(Clone, PartialEq, Eq)]
pub struct Deque {
    pub(crate) list: DoublyLinkedList,
}

impl Deque {
    pub const fn new(kind: TofuKind) -> Deque {
        Deque {
            list: DoublyLinkedList::new(kind),
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

    pub fn push_front(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.list.push_front(value)
    }

    pub fn push_back(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.list.push_back(value)
    }

    pub fn pop_front(&mut self) -> Option<Tofu> {
        self.list.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<Tofu> {
        self.list.pop_back()
    }

    pub fn front(&self) -> Option<&Tofu> {
        self.list.front()
    }

    pub fn back(&self) -> Option<&Tofu> {
        self.list.back()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        self.list.iter()
    }
}

impl Container for Deque {
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

impl Insert for Deque {
    type Error = KindMismatch;

    /// Pushes at the rear.
    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.push_back(value)
    }
}

impl Remove for Deque {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.list.remove(value)
    }
}

impl Debug for Deque {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("kind", &self.kind())
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Deque {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
