//! Sorted containers built from binary tree nodes.

pub mod binary_search_tree;
mod node;
mod tests;

#[doc(inline)]
pub use binary_search_tree::BinarySearchTree;
