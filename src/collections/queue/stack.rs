use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use crate::collections::linked::chain::{self, Chain};
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

/// A last-in, first-out stack. The top of the stack is the head of a singly linked chain, so
/// every operation is `O(1)`.
///
/// Iteration starts at the top, in the order values would be popped.
pub struct Stack {
    pub(crate) kind: TofuKind,
    pub(crate) chain: Chain<Tofu>,
}

impl Stack {
    pub const fn new(kind: TofuKind) -> Stack {
        Stack {
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

    pub fn push(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.kind.check(&value)?;
        self.chain.push_front(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Tofu> {
        self.chain.pop_front()
    }

    /// Returns the value on top of the stack without removing it.
    pub fn peek(&self) -> Option<&Tofu> {
        self.chain.front()
    }

    /// Removes the value equal to `value` that is closest to the top.
    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        Ok(self.chain.remove_first(|item| item == value).ok_or(NotFound)?)
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.chain.iter())
    }
}

impl Container for Stack {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn iter(&self) -> Iter<'_> {
        Stack::iter(self)
    }
}

impl Insert for Stack {
    type Error = KindMismatch;

    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.push(value)
    }
}

impl Remove for Stack {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        Stack::remove(self, value)
    }
}

impl Clone for Stack {
    fn clone(&self) -> Self {
        Stack {
            kind: self.kind,
            chain: self.chain.clone(),
        }
    }
}

impl PartialEq for Stack {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.iter().eq(other.iter())
    }
}

impl Eq for Stack {}

impl Debug for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("kind", &self.kind)
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            writeln!(f, "| {value} |")?;
        }
        write!(f, "+---+")
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Tofu;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a>(pub(crate) chain::Iter<'a, Tofu>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
