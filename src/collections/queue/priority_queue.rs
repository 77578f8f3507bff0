use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use crate::collections::linked::chain::{self, Chain};
use crate::collections::traits::{Container, Remove};
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

/// A queue that always dequeues the value with the lowest priority first.
///
/// Values are kept in a chain sorted by priority. Among equal priorities, the value enqueued
/// first is dequeued first.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(n)` |
/// | `dequeue/peek` | `O(1)` |
/// | `remove/contains` | `O(n)` |
pub struct PriorityQueue {
    pub(crate) kind: TofuKind,
    pub(crate) chain: Chain<Prioritized>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prioritized {
    pub priority: i64,
    pub value: Tofu,
}

impl PriorityQueue {
    pub const fn new(kind: TofuKind) -> PriorityQueue {
        PriorityQueue {
            kind,
            chain: Chain::new(),
        }
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds `value` with the given `priority`, behind every value with a priority less than or
    /// equal to it.
    pub fn enqueue(&mut self, value: Tofu, priority: i64) -> Result<(), KindMismatch> {
        self.kind.check(&value)?;

        self.chain
            .insert_before(Prioritized { priority, value }, |item| item.priority > priority);
        Ok(())
    }

    /// Removes and returns the value with the lowest priority.
    pub fn dequeue(&mut self) -> Option<Tofu> {
        self.chain.pop_front().map(|item| item.value)
    }

    /// Removes the value with the lowest priority, returning it along with that priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(Tofu, i64)> {
        self.chain.pop_front().map(|item| (item.value, item.priority))
    }

    pub fn peek(&self) -> Option<&Tofu> {
        self.chain.front().map(|item| &item.value)
    }

    pub fn peek_priority(&self) -> Option<i64> {
        self.chain.front().map(|item| item.priority)
    }

    /// Removes the first queued value equal to `value`, regardless of its priority.
    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        Ok(self.chain.remove_first(|item| item.value == *value).ok_or(NotFound)?.value)
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Iterates in dequeue order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.chain.iter())
    }

    /// Iterates in dequeue order, pairing each value with its priority.
    pub fn iter_with_priority(&self) -> impl Iterator<Item = (&Tofu, i64)> {
        self.chain.iter().map(|item| (&item.value, item.priority))
    }
}

impl Container for PriorityQueue {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn iter(&self) -> Iter<'_> {
        PriorityQueue::iter(self)
    }
}

impl Remove for PriorityQueue {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        PriorityQueue::remove(self, value)
    }
}

impl Clone for PriorityQueue {
    fn clone(&self) -> Self {
        PriorityQueue {
            kind: self.kind,
            chain: self.chain.clone(),
        }
    }
}

impl Debug for PriorityQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("kind", &self.kind)
            .field("contents", &self.iter_with_priority().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for PriorityQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, (value, priority)) in self.iter_with_priority().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value} @ {priority})")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a Tofu;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a>(pub(crate) chain::Iter<'a, Prioritized>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|item| &item.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
