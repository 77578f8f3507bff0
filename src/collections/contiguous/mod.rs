//! Containers backed by a single contiguous buffer: the growable [`Vector`], the
//! capacity-bound [`FixedArray`], the immutable [`Tuple`] and the two dimensional [`Matrix`].
//!
//! Buffer allocation is fallible. Growth goes through [`Vec::try_reserve_exact`], so running out
//! of memory is reported as [`AllocationFailure`](crate::error::AllocationFailure) rather than
//! aborting.

pub mod fixed_array;
pub mod matrix;
pub mod tuple;
pub mod vector;
mod tests;

#[doc(inline)]
pub use fixed_array::FixedArray;
#[doc(inline)]
pub use matrix::Matrix;
#[doc(inline)]
pub use tuple::Tuple;
#[doc(inline)]
pub use vector::Vector;
