use std::fmt::{self, Formatter};

use crate::value::Tofu;

/// A key-value pair stored by the keyed containers. Keys are text; values are bound to the
/// container's kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Entry {
    pub key: String,
    pub value: Tofu,
}

impl Entry {
    pub fn pair(&self) -> (&str, &Tofu) {
        (&self.key, &self.value)
    }
}

/// Writes entries as `{"a": 1, "b": 2}`.
pub(crate) fn write_entries<'a>(
    f: &mut Formatter<'_>,
    entries: impl Iterator<Item = (&'a str, &'a Tofu)>,
) -> fmt::Result {
    write!(f, "{{")?;
    for (index, (key, value)) in entries.enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{key:?}: {value}")?;
    }
    write!(f, "}}")
}
