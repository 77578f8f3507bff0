//! Collections of distinct values.

pub mod set;
mod tests;

#[doc(inline)]
pub use set::Set;
