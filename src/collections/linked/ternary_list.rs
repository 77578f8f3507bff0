use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use super::chain::{self, Chain};
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

/// A singly linked list in which every node has a second, `middle` link holding the values equal
/// to it.
///
/// The main chain only ever contains distinct values, in the order they were first inserted.
/// Inserting a value equal to an existing node appends it to that node's middle chain instead of
/// the tail of the list. Iteration visits each node followed by its middle chain, so equal values
/// are grouped together.
#[derive(Clone)]
pub struct TernaryList {
    pub(crate) kind: TofuKind,
    pub(crate) nodes: Chain<TernaryNode>,
    pub(crate) len: usize,
}

#[derive(Clone)]
pub(crate) struct TernaryNode {
    pub value: Tofu,
    pub middle: Chain<Tofu>,
}

impl TernaryList {
    pub const fn new(kind: TofuKind) -> TernaryList {
        TernaryList {
            kind,
            nodes: Chain::new(),
            len: 0,
        }
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    /// Returns the total number of values, including those held in middle chains.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct values, which is the length of the main chain.
    pub const fn distinct_len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` to the middle chain of an equal node, or to the tail of the list if there
    /// is none.
    pub fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.kind.check(&value)?;

        match self.nodes.iter_mut().find(|node| node.value == value) {
            Some(node) => node.middle.push_back(value),
            None => self.nodes.push_back(TernaryNode {
                value,
                middle: Chain::new(),
            }),
        }
        self.len += 1;
        Ok(())
    }

    /// Returns the number of values equal to `value`.
    pub fn count(&self, value: &Tofu) -> usize {
        self.nodes
            .iter()
            .find(|node| node.value == *value)
            .map_or(0, |node| node.middle.len() + 1)
    }

    /// Removes one value equal to `value`. Values are taken from the middle chain first, so the
    /// node only leaves the main chain along with its last copy.
    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;

        let index = self.nodes.position(|node| node.value == *value).ok_or(NotFound)?;
        let duplicate = self.nodes.iter_mut().nth(index).and_then(|node| node.middle.pop_front());
        let removed = match duplicate {
            Some(removed) => removed,
            None => self.nodes.remove_at(index).ok_or(NotFound)?.value,
        };

        self.len -= 1;
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: self.nodes.iter(),
            middle: None,
            len: self.len,
        }
    }
}

impl Container for TernaryList {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_> {
        TernaryList::iter(self)
    }

    fn contains(&self, value: &Tofu) -> bool {
        self.count(value) > 0
    }
}

impl Insert for TernaryList {
    type Error = KindMismatch;

    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        TernaryList::insert(self, value)
    }
}

impl Remove for TernaryList {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        TernaryList::remove(self, value)
    }
}

impl Debug for TernaryList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TernaryList")
            .field("kind", &self.kind)
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .field("distinct_len", &self.distinct_len())
            .finish()
    }
}

impl Display for TernaryList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, node) in self.nodes.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({}", node.value)?;
            for duplicate in node.middle.iter() {
                write!(f, ", {duplicate}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TernaryList {
    type Item = &'a Tofu;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) nodes: chain::Iter<'a, TernaryNode>,
    pub(crate) middle: Option<chain::Iter<'a, Tofu>>,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(middle) = &mut self.middle {
            if let Some(value) = middle.next() {
                self.len -= 1;
                return Some(value);
            }
        }

        let node = self.nodes.next()?;
        self.middle = Some(node.middle.iter());
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
