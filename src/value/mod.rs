//! The [`Tofu`] value type and its [`TofuKind`] discriminator.
//!
//! Tofu is the only element type of every container in this crate. It is a closed sum type: no
//! kinds can be added by users, but Array values may nest any other kind.

mod kind;
mod tofu;

pub use kind::*;
pub use tofu::*;
