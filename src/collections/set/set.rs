use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use crate::collections::linked::chain::{self, Chain};
use crate::collections::traits::{Container, Insert, Remove, SetAlgebra};
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

/// An unordered collection of distinct values of one kind, kept in insertion order.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert/remove/contains` | `O(n)` |
/// | `union/intersection/difference` | `O(n * m)` |
pub struct Set {
    pub(crate) kind: TofuKind,
    pub(crate) chain: Chain<Tofu>,
}

impl Set {
    pub const fn new(kind: TofuKind) -> Set {
        Set {
            kind,
            chain: Chain::new(),
        }
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds `value` unless an equal value is already present, returning whether it was added.
    pub fn insert(&mut self, value: Tofu) -> Result<bool, KindMismatch> {
        self.kind.check(&value)?;
        if self.chain.iter().any(|item| *item == value) {
            return Ok(false);
        }
        self.chain.push_back(value);
        Ok(true)
    }

    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        Ok(self.chain.remove_first(|item| item == value).ok_or(NotFound)?)
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.chain.iter())
    }

    /// Collects the union into a new set.
    ///
    /// # Errors
    /// Returns [`KindMismatch`] if `other` holds a different kind.
    pub fn to_union(&self, other: &Set) -> Result<Set, KindMismatch> {
        Ok(self.collect_from(self.union(other)?))
    }

    /// Collects the symmetric difference into a new set.
    ///
    /// # Errors
    /// Returns [`KindMismatch`] if `other` holds a different kind.
    pub fn to_symmetric_difference(&self, other: &Set) -> Result<Set, KindMismatch> {
        Ok(self.collect_from(self.symmetric_difference(other)?))
    }

    /// Collects the intersection into a new set.
    pub fn to_intersection(&self, other: &Set) -> Set {
        self.collect_from(self.intersection(other))
    }

    /// Collects the difference into a new set.
    pub fn to_difference(&self, other: &Set) -> Set {
        self.collect_from(self.difference(other))
    }

    fn collect_from<'a>(&self, values: impl Iterator<Item = &'a Tofu>) -> Set {
        Set {
            kind: self.kind,
            chain: values.cloned().collect(),
        }
    }
}

impl Container for Set {
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn iter(&self) -> Iter<'_> {
        Set::iter(self)
    }
}

impl Insert for Set {
    type Error = KindMismatch;

    /// Inserting a value that is already present succeeds without changing the set.
    fn insert(&mut self, value: Tofu) -> Result<(), KindMismatch> {
        Set::insert(self, value).map(|_| ())
    }
}

impl Remove for Set {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        Set::remove(self, value)
    }
}

impl SetAlgebra for Set {}

impl Clone for Set {
    fn clone(&self) -> Self {
        Set {
            kind: self.kind,
            chain: self.chain.clone(),
        }
    }
}

/// Sets are equal when they hold the same values, in any order.
impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for Set {}

impl Debug for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field("kind", &self.kind)
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Tofu;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a>(pub(crate) chain::Iter<'a, Tofu>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
