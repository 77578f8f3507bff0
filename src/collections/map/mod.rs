//! Keyed storage in insertion order.

pub mod map;

#[doc(inline)]
pub use map::Map;
