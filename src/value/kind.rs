use derive_more::{Display, IsVariant};

use super::Tofu;
use crate::error::KindMismatch;

/// The discriminator of a [`Tofu`] value. Every container is bound to exactly one kind when it is
/// created.
///
/// Kinds are ordered in declaration order, which is the order used when values of different kinds
/// need to be arranged relative to each other (such as the elements of an Array).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum TofuKind {
    #[display("integer")]
    Integer,
    #[display("double")]
    Double,
    #[display("text")]
    Text,
    #[display("character")]
    Character,
    #[display("boolean")]
    Boolean,
    #[display("null")]
    Null,
    #[display("array")]
    Array,
}

impl TofuKind {
    pub const ALL: [TofuKind; 7] = [
        TofuKind::Integer,
        TofuKind::Double,
        TofuKind::Text,
        TofuKind::Character,
        TofuKind::Boolean,
        TofuKind::Null,
        TofuKind::Array,
    ];

    /// Checks that `value` is of this kind, returning a [`KindMismatch`] describing both kinds if
    /// it isn't.
    pub const fn check(self, value: &Tofu) -> Result<(), KindMismatch> {
        self.check_kind(value.kind())
    }

    pub const fn check_kind(self, found: TofuKind) -> Result<(), KindMismatch> {
        // PartialEq isn't usable in a const fn, the discriminants are.
        if self as u8 == found as u8 {
            Ok(())
        } else {
            Err(KindMismatch {
                expected: self,
                found,
            })
        }
    }

    /// Returns the zero value of this kind: `0`, `0.0`, an empty string, `'\0'`, `false`, null or
    /// an empty array.
    pub fn default_value(self) -> Tofu {
        match self {
            TofuKind::Integer => Tofu::Integer(0),
            TofuKind::Double => Tofu::Double(0.0),
            TofuKind::Text => Tofu::Text(String::new()),
            TofuKind::Character => Tofu::Character('\0'),
            TofuKind::Boolean => Tofu::Boolean(false),
            TofuKind::Null => Tofu::Null,
            TofuKind::Array => Tofu::Array(Vec::new()),
        }
    }
}
