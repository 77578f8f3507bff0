use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::DoublyLinkedList;
use crate::collections::linked::doubly_linked_list::Iter;
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{KindMismatch, RemoveError};
use crate::value::{Tofu, TofuKind};

/// A first-in, first-out queue. Values are enqueued at the rear and dequeued from the front.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue {
    pub(crate) list: DoublyLinkedList,
}

impl Queue {
    pub const fn new(kind: TofuKind) -> Queue {
        Queue {
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

    /// Adds `value` at the rear of the queue.
    pub fn enqueue(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.list.push_back(value)
    }

    /// Removes the value at the front of the queue.
    pub fn dequeue(&mut self) -> Option<Tofu> {
        self.list.pop_front()
    }

    /// Returns the value that would be dequeued next.
    pub fn front(&self) -> Option<&Tofu> {
        self.list.front()
    }

    /// Returns the most recently enqueued value.
    pub fn rear(&self) -> Option<&Tofu> {
        self.list.back()
    }

    /// Removes the value equal to `value` that is closest to the front, wherever it is queued.
    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.list.remove(value)
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from front to rear, in the order values will be dequeued.
    pub fn iter(&self) -> Iter<'_> {
        self.list.iter()
    }
}

impl Container for Queue {
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

impl Insert for Queue {
    type Error = KindMismatch;

    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.enqueue(value)
    }
}

impl Remove for Queue {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        Queue::remove(self, value)
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("kind", &self.kind())
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "front ")?;
        for value in self.iter() {
            write!(f, "[{value}] ")?;
        }
        write!(f, "rear")
    }
}
