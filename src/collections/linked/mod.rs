//! Linked container types. [`SinglyLinkedList`] and [`DoublyLinkedList`] are the two basic
//! topologies; [`FixedList`] and [`TernaryList`] are policies layered over the singly linked one.
//!
//! The singly linked chain in this module also backs the stack, priority queue, set, map and the
//! buckets of the hash table.

pub(crate) mod chain;
pub mod doubly_linked_list;
pub mod fixed_list;
mod node;
pub mod singly_linked_list;
pub mod ternary_list;
mod tests;

pub(crate) use node::*;

#[doc(inline)]
pub use doubly_linked_list::DoublyLinkedList;
#[doc(inline)]
pub use fixed_list::FixedList;
#[doc(inline)]
pub use singly_linked_list::SinglyLinkedList;
#[doc(inline)]
pub use ternary_list::TernaryList;
