//! Homogeneous containers of [`Tofu`](crate::value::Tofu) values.
//!
//! Every container is created for a single [`TofuKind`](crate::value::TofuKind) and rejects
//! values of any other kind, so its contents are uniformly typed even though the values
//! themselves are dynamic. The shared contract lives in [`traits`]; each family of containers is
//! gated behind a Cargo feature of the same name.
//!
//! # Method
//! Values are moved into containers and borrowed back out. [`Clone`] on a container is a deep
//! copy. Operations that can fail return a [`Result`] with an error from [`crate::error`], and
//! panicking shortcuts such as [`Index`](std::ops::Index) are only offered alongside a fallible
//! `try_*` method.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(any(feature = "hash", feature = "map"))]
pub(crate) mod entry;
#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "map")]
pub mod map;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "set")]
pub mod set;
pub mod traits;
#[cfg(feature = "tree")]
pub mod tree;
