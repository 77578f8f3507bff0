//! Traits describing the behaviour shared between containers.

mod container;
mod set;

pub use container::*;
pub use set::*;
