use std::fmt::{self, Display, Formatter};
use std::ops::Index;
use std::slice;

use crate::collections::traits::Container;
use crate::error::{IndexOutOfBounds, KindMismatch};
use crate::util::result::ResultExtension;
use crate::value::{Tofu, TofuKind};

/// An immutable, fixed-length sequence of values of one kind. Every value is checked when the
/// tuple is built and the contents never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple {
    pub(crate) kind: TofuKind,
    pub(crate) values: Box<[Tofu]>,
}

impl Tuple {
    /// Builds a tuple from `values`, in order.
    ///
    /// # Errors
    /// Returns the first [`KindMismatch`] found, in which case all of `values` is dropped.
    pub fn new<I: IntoIterator<Item = Tofu>>(
        kind: TofuKind,
        values: I,
    ) -> Result<Tuple, KindMismatch> {
        let values = values
            .into_iter()
            .map(|value| kind.check(&value).map(|()| value))
            .collect::<Result<Box<[Tofu]>, KindMismatch>>()?;
        Ok(Tuple { kind, values })
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tofu> {
        self.values.get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&Tofu, IndexOutOfBounds> {
        self.values.get(index).ok_or(IndexOutOfBounds { index, len: self.len() })
    }

    pub fn as_slice(&self) -> &[Tofu] {
        &self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.values.iter()
    }

    pub fn into_values(self) -> Vec<Tofu> {
        self.values.into_vec()
    }
}

impl Container for Tuple {
    type Iter<'a> = slice::Iter<'a, Tofu>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.values.iter()
    }
}

impl Index<usize> for Tuple {
    type Output = Tofu;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Tofu;

    type IntoIter = slice::Iter<'a, Tofu>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
