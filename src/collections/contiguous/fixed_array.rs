use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, Index};
use std::slice;

use super::vector::Vector;
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{
    AccessError, AllocationFailure, CapacityError, IndexOutOfBounds, OutOfCapacity, RemoveError,
};
use crate::value::{Tofu, TofuKind};

/// A contiguous container with a capacity fixed at construction. The whole buffer is allocated up
/// front and never reallocated; pushing onto a full array fails with [`OutOfCapacity`].
#[derive(Clone, PartialEq, Eq)]
pub struct FixedArray {
    pub(crate) vec: Vector,
}

impl FixedArray {
    /// # Errors
    /// Returns [`AllocationFailure`] if the buffer can't be allocated.
    pub fn new(kind: TofuKind, cap: usize) -> Result<FixedArray, AllocationFailure> {
        Ok(FixedArray {
            vec: Vector::with_cap(kind, cap)?,
        })
    }

    pub const fn kind(&self) -> TofuKind {
        self.vec.kind()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.vec.cap()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.cap()
    }

    pub fn push(&mut self, value: Tofu) -> Result<(), CapacityError> {
        self.vec.kind.check(&value)?;
        if self.is_full() {
            return Err(OutOfCapacity { capacity: self.cap() }.into());
        }
        // The buffer was reserved in full by `new`, so this never reallocates.
        self.vec.buf.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Tofu> {
        self.vec.pop()
    }

    pub fn get(&self, index: usize) -> Option<&Tofu> {
        self.vec.get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&Tofu, IndexOutOfBounds> {
        self.vec.try_get(index)
    }

    pub fn set(&mut self, index: usize, value: Tofu) -> Result<Tofu, AccessError> {
        self.vec.set(index, value)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Tofu, IndexOutOfBounds> {
        self.vec.remove_at(index)
    }

    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.vec.remove(value)
    }

    pub fn index_of(&self, value: &Tofu) -> Option<usize> {
        self.vec.index_of(value)
    }

    pub fn clear(&mut self) {
        self.vec.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.vec.iter()
    }
}

impl Container for FixedArray {
    type Iter<'a> = slice::Iter<'a, Tofu>;

    fn kind(&self) -> TofuKind {
        self.vec.kind()
    }

    fn len(&self) -> usize {
        self.vec.len()
    }

    fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.vec.iter()
    }
}

impl Insert for FixedArray {
    type Error = CapacityError;

    fn insert(&mut self, value: Tofu) -> Result<(), CapacityError> {
        self.push(value)
    }
}

impl Remove for FixedArray {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.vec.remove(value)
    }
}

impl Index<usize> for FixedArray {
    type Output = Tofu;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vec[index]
    }
}

impl Deref for FixedArray {
    type Target = [Tofu];

    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl Debug for FixedArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("kind", &self.kind())
            .field("contents", &self.vec.buf)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for FixedArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]", self.vec, self.len(), self.cap())
    }
}
