//! Keyed storage distributed over buckets by a polynomial string hash.

pub mod hash_table;
mod tests;

#[doc(inline)]
pub use hash_table::{DEFAULT_BUCKETS, HashTable, polynomial_hash};
