use std::iter::{Chain, FusedIterator};

use super::Container;
use crate::error::KindMismatch;
use crate::value::Tofu;

/// Set operations for containers in which every element is unique. All operations are lazy and
/// borrow both sets.
///
/// Sets of different kinds share no elements, so their intersection is always empty and the
/// difference is the whole of `self`. Operations that would yield elements of `other` refuse to
/// mix kinds and return a [`KindMismatch`] instead.
pub trait SetAlgebra: Container + Sized {
    /// Creates an iterator over all items that are in `self` but not `other`. (`self \ other`)
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates an iterator over all items that are in `self` or `other` but not both. (`self △
    /// other`)
    ///
    /// # Errors
    /// Returns [`KindMismatch`] if `other` is bound to a different kind.
    fn symmetric_difference<'a>(
        &'a self,
        other: &'a Self,
    ) -> Result<SymmetricDifference<'a, Self>, KindMismatch> {
        self.kind().check_kind(other.kind())?;
        Ok(SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        })
    }

    /// Creates an iterator over all items that are in both `self` and `other`. (`self ∩ other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates an iterator over all items that are in either `self` or `other`, yielding the
    /// elements of `self` first. (`self ∪ other`)
    ///
    /// # Errors
    /// Returns [`KindMismatch`] if `other` is bound to a different kind.
    fn union<'a>(&'a self, other: &'a Self) -> Result<Union<'a, Self>, KindMismatch> {
        self.kind().check_kind(other.kind())?;
        Ok(Union {
            inner: self.iter().chain(other.difference(self)),
        })
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|item| self.contains(item))
    }
}

pub struct Difference<'a, S: SetAlgebra + 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: SetAlgebra + 'a> Iterator for Difference<'a, S> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: SetAlgebra + 'a> FusedIterator for Difference<'a, S> {}

pub struct SymmetricDifference<'a, S: SetAlgebra + 'a> {
    pub(crate) inner: Chain<Difference<'a, S>, Difference<'a, S>>,
}

impl<'a, S: SetAlgebra + 'a> Iterator for SymmetricDifference<'a, S> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: SetAlgebra + 'a> FusedIterator for SymmetricDifference<'a, S> {}

pub struct Intersection<'a, S: SetAlgebra + 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: SetAlgebra + 'a> Iterator for Intersection<'a, S> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: SetAlgebra + 'a> FusedIterator for Intersection<'a, S> {}

pub struct Union<'a, S: SetAlgebra + 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S>>,
}

impl<'a, S: SetAlgebra + 'a> Iterator for Union<'a, S> {
    type Item = &'a Tofu;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: SetAlgebra + 'a> FusedIterator for Union<'a, S> {}
