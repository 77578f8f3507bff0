//! A dynamically typed value, [`Tofu`], and a family of containers that each hold values of
//! exactly one kind.
//!
//! # Values
//! A [`Tofu`] is one of seven kinds: integer, double, text, character, boolean, null or an array
//! of further values. Its [`TofuKind`] can be inspected at runtime and every accessor checks it,
//! returning a [`KindMismatch`](error::KindMismatch) instead of reinterpreting the payload.
//!
//! # Containers
//! Each container in [`collections`] is created for one [`TofuKind`] and enforces it on every
//! insertion. The topologies range from linked lists, queues and stacks through vectors,
//! matrices and tuples to sets, maps, hash tables, search trees and graphs. All of them implement
//! [`Container`](collections::traits::Container), and most implement
//! [`Insert`](collections::traits::Insert) and [`Remove`](collections::traits::Remove) as well.
//!
//! # Error Handling
//! Every fallible operation returns a [`Result`] with a strongly typed error from [`error`]. Leaf
//! errors are small structs; operations that can fail in several ways return an enum over exactly
//! those leaves, and [`TofuError`](error::TofuError) absorbs all of them. Buffer growth uses
//! fallible allocation, so running out of memory is an
//! [`AllocationFailure`](error::AllocationFailure) rather than an abort.
//!
//! # Logging
//! The crate emits [`tracing`] events for buffer growth, allocation failures, hash collisions and
//! structural removals. It never installs a subscriber.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod error;
pub mod value;

pub(crate) mod util;

#[doc(inline)]
pub use error::TofuError;
#[doc(inline)]
pub use value::{Tofu, TofuKind};
