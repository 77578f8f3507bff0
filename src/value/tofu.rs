use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use derive_more::IsVariant;

use super::TofuKind;
use crate::error::KindMismatch;

/// A dynamically typed value drawn from a closed set of kinds. Every container in this crate
/// stores Tofu and is bound to a single [`TofuKind`].
///
/// Text and Array values own their heap buffers. Cloning a Tofu performs a deep copy, so no two
/// values ever share a buffer. Containers take values by move; clone first to keep a copy.
///
/// # Ordering
/// Tofu implements [`Ord`] as a total order, which containers rely on internally:
/// - Integers, characters and booleans compare by their ordinal value.
/// - Doubles compare by [`f64::total_cmp`], so `NaN` is equal to itself and `-0.0 < 0.0`.
/// - Text compares lexicographically by bytes.
/// - Null is equal to Null.
/// - Arrays compare lexicographically by element, shorter arrays first on a common prefix. Arrays
///   only have a natural notion of equality; this ordering is an extension so that arrays can be
///   stored in ordered containers such as the binary search tree. Two arrays compare
///   [`Equal`](Ordering::Equal) exactly when they are structurally equal.
/// - Values of different kinds are ordered by [`TofuKind`].
///
/// [`Tofu::compare`] is the checked form, which refuses to compare values of different kinds.
#[derive(Debug, Clone, IsVariant)]
pub enum Tofu {
    Integer(i64),
    Double(f64),
    Text(String),
    Character(char),
    Boolean(bool),
    Null,
    Array(Vec<Tofu>),
}

use Tofu::*;

impl Tofu {
    pub const fn from_integer(value: i64) -> Tofu {
        Integer(value)
    }

    pub const fn from_double(value: f64) -> Tofu {
        Double(value)
    }

    /// Creates a Text value holding its own copy of `value`. There is no maximum length.
    pub fn from_text(value: impl Into<String>) -> Tofu {
        Text(value.into())
    }

    pub const fn from_character(value: char) -> Tofu {
        Character(value)
    }

    pub const fn from_boolean(value: bool) -> Tofu {
        Boolean(value)
    }

    pub const fn from_null() -> Tofu {
        Null
    }

    pub const fn from_empty_array() -> Tofu {
        Array(Vec::new())
    }

    pub fn from_array(values: impl IntoIterator<Item = Tofu>) -> Tofu {
        Array(values.into_iter().collect())
    }

    /// Returns the kind of the active variant.
    pub const fn kind(&self) -> TofuKind {
        match self {
            Integer(_) => TofuKind::Integer,
            Double(_) => TofuKind::Double,
            Text(_) => TofuKind::Text,
            Character(_) => TofuKind::Character,
            Boolean(_) => TofuKind::Boolean,
            Null => TofuKind::Null,
            Array(_) => TofuKind::Array,
        }
    }

    pub const fn get_integer(&self) -> Result<i64, KindMismatch> {
        match self {
            Integer(value) => Ok(*value),
            other => Err(other.mismatch(TofuKind::Integer)),
        }
    }

    pub const fn get_double(&self) -> Result<f64, KindMismatch> {
        match self {
            Double(value) => Ok(*value),
            other => Err(other.mismatch(TofuKind::Double)),
        }
    }

    pub fn get_text(&self) -> Result<&str, KindMismatch> {
        match self {
            Text(value) => Ok(value),
            other => Err(other.mismatch(TofuKind::Text)),
        }
    }

    pub const fn get_character(&self) -> Result<char, KindMismatch> {
        match self {
            Character(value) => Ok(*value),
            other => Err(other.mismatch(TofuKind::Character)),
        }
    }

    pub const fn get_boolean(&self) -> Result<bool, KindMismatch> {
        match self {
            Boolean(value) => Ok(*value),
            other => Err(other.mismatch(TofuKind::Boolean)),
        }
    }

    pub const fn get_null(&self) -> Result<(), KindMismatch> {
        match self {
            Null => Ok(()),
            other => Err(other.mismatch(TofuKind::Null)),
        }
    }

    pub fn get_array(&self) -> Result<&[Tofu], KindMismatch> {
        match self {
            Array(values) => Ok(values),
            other => Err(other.mismatch(TofuKind::Array)),
        }
    }

    /// Returns the elements of an Array value for modification. Nested arrays are heterogeneous,
    /// so elements of any kind may be pushed.
    pub fn get_array_mut(&mut self) -> Result<&mut Vec<Tofu>, KindMismatch> {
        match self {
            Array(values) => Ok(values),
            other => Err(other.mismatch(TofuKind::Array)),
        }
    }

    /// Releases the payload of this value, returning it and leaving Null in its place. Erasing a
    /// value which has already been erased does nothing and returns Null.
    pub fn erase(&mut self) -> Tofu {
        mem::replace(self, Null)
    }

    /// Compares two values of the same kind. See the type level documentation for the order used
    /// by each kind, including the extended ordering of arrays.
    ///
    /// # Errors
    /// Returns [`KindMismatch`] if `other` has a different kind to `self`.
    pub fn compare(&self, other: &Tofu) -> Result<Ordering, KindMismatch> {
        self.kind().check(other)?;
        Ok(self.cmp(other))
    }

    const fn mismatch(&self, expected: TofuKind) -> KindMismatch {
        KindMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl PartialEq for Tofu {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tofu {}

impl PartialOrd for Tofu {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tofu {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Double(a), Double(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Character(a), Character(b)) => a.cmp(b),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Null, Null) => Ordering::Equal,
            (Array(a), Array(b)) => a.iter().cmp(b.iter()),
            (a, b) => a.kind().cmp(&b.kind()),
        }
    }
}

impl Hash for Tofu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Integer(value) => value.hash(state),
            // Consistent with total_cmp, which only reports Equal for identical bits.
            Double(value) => value.to_bits().hash(state),
            Text(value) => value.hash(state),
            Character(value) => value.hash(state),
            Boolean(value) => value.hash(state),
            Null => {},
            Array(values) => values.hash(state),
        }
    }
}

impl Display for Tofu {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Integer(value) => write!(f, "{value}"),
            Double(value) => write!(f, "{value:?}"),
            Text(value) => write!(f, "{value}"),
            Character(value) => write!(f, "{value}"),
            Boolean(value) => write!(f, "{value}"),
            Null => write!(f, "null"),
            Array(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    match value {
                        Text(text) => write!(f, "{text:?}")?,
                        Character(c) => write!(f, "{c:?}")?,
                        other => write!(f, "{other}")?,
                    }
                }
                write!(f, "]")
            },
        }
    }
}

impl From<i64> for Tofu {
    fn from(value: i64) -> Self {
        Integer(value)
    }
}

impl From<f64> for Tofu {
    fn from(value: f64) -> Self {
        Double(value)
    }
}

impl From<String> for Tofu {
    fn from(value: String) -> Self {
        Text(value)
    }
}

impl From<&str> for Tofu {
    fn from(value: &str) -> Self {
        Text(value.to_owned())
    }
}

impl From<char> for Tofu {
    fn from(value: char) -> Self {
        Character(value)
    }
}

impl From<bool> for Tofu {
    fn from(value: bool) -> Self {
        Boolean(value)
    }
}

impl From<()> for Tofu {
    fn from(_: ()) -> Self {
        Null
    }
}

impl From<Vec<Tofu>> for Tofu {
    fn from(value: Vec<Tofu>) -> Self {
        Array(value)
    }
}
