//! Directed graphs over values.

pub mod graph;

#[doc(inline)]
pub use graph::Graph;
