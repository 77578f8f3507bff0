use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::ops::Index;

use super::chain::{self, Chain};
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{AccessError, IndexOutOfBounds, KindMismatch, NotFound, RemoveError};
use crate::util::result::ResultExtension;
use crate::value::{Tofu, TofuKind};

/// A list with links in one direction only, bound to a single [`TofuKind`].
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `get/insert_at/remove_at` | `O(i)` |
/// | `remove/contains` | `O(n)` |
/// | `reverse` | `O(n)` |
pub struct SinglyLinkedList {
    pub(crate) kind: TofuKind,
    pub(crate) chain: Chain<Tofu>,
}

impl SinglyLinkedList {
    pub const fn new(kind: TofuKind) -> SinglyLinkedList {
        SinglyLinkedList {
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

    pub fn front(&self) -> Option<&Tofu> {
        self.chain.front()
    }

    pub fn push_front(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.kind.check(&value)?;
        self.chain.push_front(value);
        Ok(())
    }

    /// Appends `value` at the tail of the list.
    pub fn push_back(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.kind.check(&value)?;
        self.chain.push_back(value);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<Tofu> {
        self.chain.pop_front()
    }

    pub fn get(&self, index: usize) -> Option<&Tofu> {
        self.chain.get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&Tofu, IndexOutOfBounds> {
        self.chain.get(index).ok_or(IndexOutOfBounds { index, len: self.len() })
    }

    /// Inserts `value` so that it ends up at position `index`.
    pub fn insert_at(&mut self, index: usize, value: Tofu) -> Result<(), AccessError> {
        self.kind.check(&value)?;
        let len = self.len();
        self.chain
            .insert_at(index, value)
            .map_err(|_| IndexOutOfBounds { index, len }.into())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Tofu, IndexOutOfBounds> {
        let len = self.len();
        self.chain.remove_at(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        Ok(self.chain.remove_first(|item| item == value).ok_or(NotFound)?)
    }

    pub fn index_of(&self, value: &Tofu) -> Option<usize> {
        self.chain.position(|item| item == value)
    }

    /// Reverses the list in place, relinking each node once.
    pub fn reverse(&mut self) {
        self.chain.reverse();
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.chain.iter())
    }
}

impl Container for SinglyLinkedList {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn iter(&self) -> Iter<'_> {
        SinglyLinkedList::iter(self)
    }
}

impl Insert for SinglyLinkedList {
    type Error = KindMismatch;

    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.push_back(value)
    }
}

impl Remove for SinglyLinkedList {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        SinglyLinkedList::remove(self, value)
    }
}

impl Index<usize> for SinglyLinkedList {
    type Output = Tofu;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl Clone for SinglyLinkedList {
    fn clone(&self) -> Self {
        SinglyLinkedList {
            kind: self.kind,
            chain: self.chain.clone(),
        }
    }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("kind", &self.kind)
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_chain(f, self.iter())
    }
}

/// Writes elements as `(a) -> (b) -> (c)`.
pub(crate) fn write_chain<'a>(
    f: &mut Formatter<'_>,
    values: impl Iterator<Item = &'a Tofu>,
) -> fmt::Result {
    for (index, value) in values.enumerate() {
        if index > 0 {
            write!(f, " -> ")?;
        }
        write!(f, "({value})")?;
    }
    Ok(())
}

impl<'a> IntoIterator for &'a SinglyLinkedList {
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
