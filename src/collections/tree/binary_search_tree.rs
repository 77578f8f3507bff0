use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use tracing::debug;

use super::node::{Branch, Node};
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

/// An unbalanced binary search tree holding distinct values of one kind.
///
/// Values are ordered by [`Tofu::cmp`]. Smaller values go left, larger values go right and a value
/// equal to one already present is ignored. Iteration is in ascending order.
///
/// # Time Complexity
/// For this analysis of time complexity, `h` is the height of the tree, which is `log2 n` for a
/// balanced tree and `n` when values are inserted in sorted order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert/remove/contains` | `O(h)` |
/// | `min/max` | `O(h)` |
/// | `height` | `O(n)` |
pub struct BinarySearchTree {
    pub(crate) kind: TofuKind,
    pub(crate) root: Branch,
    pub(crate) len: usize,
}

impl BinarySearchTree {
    pub const fn new(kind: TofuKind) -> BinarySearchTree {
        BinarySearchTree {
            kind,
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value`, returning whether it was added. An equal value already in the tree leaves
    /// it unchanged.
    pub fn insert(&mut self, value: Tofu) -> Result<bool, KindMismatch> {
        self.kind.check(&value)?;
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        let removed = self.root.remove(value).ok_or(NotFound)?;
        self.len -= 1;
        debug!(%removed, len = self.len, "removed value from tree");
        Ok(removed)
    }

    pub fn contains(&self, value: &Tofu) -> bool {
        value.kind() == self.kind && self.root.contains(value)
    }

    /// Returns the smallest value.
    pub fn min(&self) -> Option<&Tofu> {
        self.root.first()
    }

    /// Returns the largest value.
    pub fn max(&self) -> Option<&Tofu> {
        self.root.last()
    }

    /// Removes and returns the smallest value.
    pub fn pop_min(&mut self) -> Option<Tofu> {
        let value = self.root.take_first()?;
        self.len -= 1;
        Some(value)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, which is 0 for an
    /// empty tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn clear(&mut self) {
        self.root.clear();
        self.len = 0;
    }

    /// Iterates in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.len,
        };
        iter.push_left(&self.root);
        iter
    }
}

impl Container for BinarySearchTree {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_> {
        BinarySearchTree::iter(self)
    }

    fn contains(&self, value: &Tofu) -> bool {
        BinarySearchTree::contains(self, value)
    }
}

impl Insert for BinarySearchTree {
    type Error = KindMismatch;

    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        BinarySearchTree::insert(self, value).map(|_| ())
    }
}

impl Remove for BinarySearchTree {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        BinarySearchTree::remove(self, value)
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        self.root.clear();
    }
}

impl Clone for BinarySearchTree {
    fn clone(&self) -> Self {
        BinarySearchTree {
            kind: self.kind,
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl PartialEq for BinarySearchTree {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.iter().eq(other.iter())
    }
}

impl Eq for BinarySearchTree {}

impl Debug for BinarySearchTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.root)
    }
}

impl Display for BinarySearchTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

impl IntoIterator for BinarySearchTree {
    type Item = Tofu;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

pub struct IntoIter(BinarySearchTree);

impl Iterator for IntoIter {
    type Item = Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        // Each call walks down the left spine again, O(h) per item.
        self.0.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = &'a Tofu;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator, holding the path of nodes whose values are still to be visited.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) stack: Vec<&'a Node>,
    pub(crate) len: usize,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut branch: &'a Branch) {
        while let Some(node) = branch.0.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
