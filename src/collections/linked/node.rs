use std::ptr::NonNull;

use crate::value::Tofu;

pub(crate) type Link = Option<NodePtr>;

// NOTE: Nodes are allocated through Box, so that taking a node back out of the list can move the
// value off the heap by dereferencing the Box.

/// A pointer to a node of a [`DoublyLinkedList`](super::DoublyLinkedList). The `next` link of a
/// node (or the list's `head`) owns the node it points to; `prev` links are non-owning back
/// references used only for reverse traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodePtr(NonNull<Node>);

pub(crate) struct Node {
    pub value: Tofu,
    pub prev: Link,
    pub next: Link,
}

impl NodePtr {
    pub fn from_node(node: Node) -> NodePtr {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back onto the stack, deallocating it.
    ///
    /// # Safety
    /// The pointer must have been created by [`NodePtr::from_node`] and not already taken. No
    /// other copy of this pointer may be used afterwards.
    pub unsafe fn take_node(self) -> Node {
        // SAFETY: The pointer came from Box::leak and is uniquely reclaimed here, as required by
        // the caller.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The node must still be allocated, and not mutably borrowed for the returned lifetime.
    pub unsafe fn node<'a>(self) -> &'a Node {
        // SAFETY: Upheld by the caller.
        unsafe { self.0.as_ref() }
    }

    /// # Safety
    /// The node must still be allocated, and not otherwise borrowed for the returned lifetime.
    pub unsafe fn node_mut<'a>(mut self) -> &'a mut Node {
        // SAFETY: Upheld by the caller.
        unsafe { self.0.as_mut() }
    }
}
