use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ops::Index;

use super::{Link, Node, NodePtr};
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{AccessError, IndexOutOfBounds, KindMismatch, NotFound, RemoveError};
use crate::util::result::ResultExtension;
use crate::value::{Tofu, TofuKind};

/// A list with links in both directions, bound to a single [`TofuKind`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the list.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert_at` | `O(min(i, n-i))` |
/// | `remove_at` | `O(min(i, n-i))` |
/// | `remove` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `append` | `O(1)` |
pub struct DoublyLinkedList {
    pub(crate) kind: TofuKind,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node>>,
}

impl DoublyLinkedList {
    /// Creates a new, empty list which only accepts values of `kind`.
    pub const fn new(kind: TofuKind) -> DoublyLinkedList {
        DoublyLinkedList {
            kind,
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
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

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&Tofu> {
        // SAFETY: head is owned by this list, which is borrowed immutably for the lifetime of the
        // returned reference.
        self.head.map(|ptr| unsafe { &ptr.node().value })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&Tofu> {
        // SAFETY: As above, for tail.
        self.tail.map(|ptr| unsafe { &ptr.node().value })
    }

    /// Adds `value` to the front of the list.
    pub fn push_front(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.kind.check(&value)?;

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            // SAFETY: head is owned by this list and no references to it are live.
            Some(head) => unsafe { head.node_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Adds `value` to the back of the list.
    pub fn push_back(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.kind.check(&value)?;
        self.link_back(value);
        Ok(())
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<Tofu> {
        let head = self.head?;
        // SAFETY: head is a node of this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<Tofu> {
        let tail = self.tail?;
        // SAFETY: tail is a node of this list.
        Some(unsafe { self.unlink(tail) })
    }

    pub fn get(&self, index: usize) -> Option<&Tofu> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics instead.
    pub fn try_get(&self, index: usize) -> Result<&Tofu, IndexOutOfBounds> {
        let ptr = self.checked_seek(index)?;
        // SAFETY: ptr is a node of this list, which is borrowed for the returned lifetime.
        Ok(unsafe { &ptr.node().value })
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    pub fn set(&mut self, index: usize, value: Tofu) -> Result<Tofu, AccessError> {
        self.kind.check(&value)?;
        let ptr = self.checked_seek(index)?;
        // SAFETY: ptr is a node of this list, which is borrowed mutably.
        Ok(mem::replace(unsafe { &mut ptr.node_mut().value }, value))
    }

    /// Inserts `value` so that it ends up at position `index`. An `index` equal to the length of
    /// the list appends.
    pub fn insert_at(&mut self, index: usize, value: Tofu) -> Result<(), AccessError> {
        self.kind.check(&value)?;

        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        if index == 0 {
            self.push_front(value)?;
        } else if index == self.len {
            self.link_back(value);
        } else {
            let next = self.seek(index);
            // SAFETY: For this branch, we aren't adding at the front or back, so the node at index
            // has a previous node.
            let prev = unsafe { next.node().prev.unwrap_unchecked() };

            let node = NodePtr::from_node(Node {
                value,
                prev: Some(prev),
                next: Some(next),
            });

            // SAFETY: Both neighbours are nodes of this list with no live references.
            unsafe {
                prev.node_mut().next = Some(node);
                next.node_mut().prev = Some(node);
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Tofu, IndexOutOfBounds> {
        let ptr = self.checked_seek(index)?;
        // SAFETY: ptr is a node of this list.
        Ok(unsafe { self.unlink(ptr) })
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        let ptr = self.find(value).ok_or(NotFound)?;
        // SAFETY: find only returns nodes of this list.
        Ok(unsafe { self.unlink(ptr) })
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &Tofu) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Reverses the order of the list in place, in a single pass without allocating.
    pub fn reverse(&mut self) {
        let mut curr = self.head;
        while let Some(ptr) = curr {
            // SAFETY: Every node visited belongs to this list, which is borrowed mutably, and only
            // one node is referenced at a time.
            let node = unsafe { ptr.node_mut() };
            mem::swap(&mut node.prev, &mut node.next);
            // After the swap, prev holds what used to be the next node.
            curr = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Moves all elements of `other` onto the back of this list.
    ///
    /// # Errors
    /// Returns [`KindMismatch`] if `other` holds a different kind, in which case `other` is dropped
    /// and this list is left unchanged.
    pub fn append(&mut self, mut other: DoublyLinkedList) -> Result<(), KindMismatch> {
        self.kind.check_kind(other.kind)?;

        match (self.tail, other.head) {
            (_, None) => {},
            (None, Some(_)) => mem::swap(self, &mut other),
            (Some(tail), Some(head)) => {
                // SAFETY: tail and head are distinct nodes, owned by self and other respectively.
                unsafe {
                    tail.node_mut().next = Some(head);
                    head.node_mut().prev = Some(tail);
                }
                self.tail = other.tail;
                self.len += other.len;

                // The nodes now belong to self, other must not free them.
                other.head = None;
                other.tail = None;
                other.len = 0;
            },
        }
        Ok(())
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            front: self.head,
            back: self.tail,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl DoublyLinkedList {
    /// Appends a value whose kind has already been checked.
    pub(crate) fn link_back(&mut self, value: Tofu) {
        let node = NodePtr::from_node(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            // SAFETY: tail is owned by this list and no references to it are live.
            Some(tail) => unsafe { tail.node_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Detaches `ptr` from its neighbours and frees it, returning its value.
    ///
    /// # Safety
    /// `ptr` must be a node of this list.
    pub(crate) unsafe fn unlink(&mut self, ptr: NodePtr) -> Tofu {
        // SAFETY: The node belongs to this list, so it was created by from_node and is reclaimed
        // exactly once here.
        let node = unsafe { ptr.take_node() };

        match node.prev {
            // SAFETY: Neighbouring nodes belong to this list and aren't referenced elsewhere.
            Some(prev) => unsafe { prev.node_mut().next = node.next },
            None => self.head = node.next,
        }
        match node.next {
            // SAFETY: As above.
            Some(next) => unsafe { next.node_mut().prev = node.prev },
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }

    pub(crate) fn find(&self, value: &Tofu) -> Option<NodePtr> {
        let mut curr = self.head;
        while let Some(ptr) = curr {
            // SAFETY: Nodes reachable from head belong to this list, which is borrowed.
            let node = unsafe { ptr.node() };
            if node.value == *value {
                return Some(ptr);
            }
            curr = node.next;
        }
        None
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr, IndexOutOfBounds> {
        if index < self.len {
            Ok(self.seek(index))
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Walks to the node at `index` from whichever end is closer. `index` must be less than len.
    pub(crate) fn seek(&self, index: usize) -> NodePtr {
        if index < self.len / 2 {
            // SAFETY: index < len, so there is a node at index.
            let mut node = unsafe { self.head.unwrap_unchecked() };
            for _ in 0..index {
                // SAFETY: Fewer than index nodes have been visited, so next exists.
                node = unsafe { node.node().next.unwrap_unchecked() };
            }
            node
        } else {
            // SAFETY: As above, from the back.
            let mut node = unsafe { self.tail.unwrap_unchecked() };
            for _ in 0..(self.len - 1 - index) {
                // SAFETY: As above.
                node = unsafe { node.node().prev.unwrap_unchecked() };
            }
            node
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut prev: Link = None;
        let mut curr = self.head;
        let mut count = 0;
        while let Some(ptr) = curr {
            // SAFETY: Nodes reachable from head belong to this list.
            let node = unsafe { ptr.node() };
            assert!(node.prev == prev, "Each node should point back to its predecessor.");
            prev = curr;
            curr = node.next;
            count += 1;
        }
        assert!(self.tail == prev, "The tail should be the last node reachable from the head.");
        assert_eq!(count, self.len, "The tracked length should match the node count.");
    }
}

impl Container for DoublyLinkedList {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_> {
        DoublyLinkedList::iter(self)
    }
}

impl Insert for DoublyLinkedList {
    type Error = KindMismatch;

    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        self.push_back(value)
    }
}

impl Remove for DoublyLinkedList {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        DoublyLinkedList::remove(self, value)
    }
}

impl Index<usize> for DoublyLinkedList {
    type Output = Tofu;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl Drop for DoublyLinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for DoublyLinkedList {
    fn clone(&self) -> Self {
        let mut list = DoublyLinkedList::new(self.kind);
        for value in self.iter() {
            list.link_back(value.clone());
        }
        list
    }
}

impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DoublyLinkedList {}

// SAFETY: The list uniquely owns its nodes, the raw pointers are never shared outside of it.
unsafe impl Send for DoublyLinkedList {}
// SAFETY: The safe API only hands out shared references through &self, there is no interior
// mutability.
unsafe impl Sync for DoublyLinkedList {}

impl Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("kind", &self.kind)
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl Display for DoublyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "({value})")?;
        }
        Ok(())
    }
}

impl IntoIterator for DoublyLinkedList {
    type Item = Tofu;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter {
    // The iterator holds the list and pops from either end.
    pub(crate) list: DoublyLinkedList,
}

impl Iterator for IntoIter {
    type Item = Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a DoublyLinkedList {
    type Item = &'a Tofu;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    // Walks inwards from both ends, using len to know when they meet.
    pub(crate) front: Link,
    pub(crate) back: Link,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let ptr = self.front?;
        // SAFETY: The list is borrowed immutably for 'a and ptr is one of its nodes.
        let node: &'a Node = unsafe { ptr.node() };
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let ptr = self.back?;
        // SAFETY: As above.
        let node: &'a Node = unsafe { ptr.node() };
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}
