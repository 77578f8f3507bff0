//! Containers that restrict where values enter and leave: [`Queue`] (first in, first out),
//! [`Deque`] (either end), [`Stack`] (last in, first out) and [`PriorityQueue`] (lowest priority
//! first).

pub mod deque;
pub mod priority_queue;
pub mod queue;
pub mod stack;
mod tests;

#[doc(inline)]
pub use deque::Deque;
#[doc(inline)]
pub use priority_queue::PriorityQueue;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
