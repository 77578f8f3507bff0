use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Deref, Index};
use std::slice;
use std::vec;

use tracing::{trace, warn};

use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{
    AccessError, AllocationFailure, IndexOutOfBounds, InsertAtError, InsertError, NotFound,
    RemoveError,
};
use crate::util::result::ResultExtension;
use crate::value::{Tofu, TofuKind};

pub(crate) const MIN_CAP: usize = 2;

pub(crate) const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous container bound to a single [`TofuKind`].
///
/// The capacity is tracked separately from the underlying buffer, so it is always exactly the
/// value produced by the last growth or capacity adjustment. A full Vector doubles its capacity
/// on the next push.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get/set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert_at/remove_at` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `remove/contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector {
    pub(crate) kind: TofuKind,
    pub(crate) buf: Vec<Tofu>,
    pub(crate) cap: usize,
}

impl Vector {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    pub const fn new(kind: TofuKind) -> Vector {
        Vector {
            kind,
            buf: Vec::new(),
            cap: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the buffer can't be allocated.
    pub fn with_cap(kind: TofuKind, cap: usize) -> Result<Vector, AllocationFailure> {
        let mut vec = Vector::new(kind);
        vec.realloc_with_cap(cap)?;
        Ok(vec)
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Pushes the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Errors
    /// Fails with [`InsertError::KindMismatch`] for a value of another kind, and with
    /// [`InsertError::AllocationFailure`] if the buffer can't grow. Either way the Vector is left
    /// unchanged.
    pub fn push(&mut self, value: Tofu) -> Result<(), InsertError> {
        self.kind.check(&value)?;
        if self.len() == self.cap {
            self.grow()?;
        }
        self.buf.push(value);
        Ok(())
    }

    /// Pops the last value off the end of the Vector.
    pub fn pop(&mut self) -> Option<Tofu> {
        self.buf.pop()
    }

    pub fn get(&self, index: usize) -> Option<&Tofu> {
        self.buf.get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&Tofu, IndexOutOfBounds> {
        self.buf.get(index).ok_or(IndexOutOfBounds { index, len: self.len() })
    }

    /// Replaces the value at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: Tofu) -> Result<Tofu, AccessError> {
        self.kind.check(&value)?;
        let len = self.len();
        let slot = self.buf.get_mut(index).ok_or(IndexOutOfBounds { index, len })?;
        Ok(mem::replace(slot, value))
    }

    /// Inserts `value` at `index`, shifting every later element back by one. An `index` equal to
    /// the length appends.
    pub fn insert_at(&mut self, index: usize, value: Tofu) -> Result<(), InsertAtError> {
        self.kind.check(&value)?;
        if index > self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() }.into());
        }
        if self.len() == self.cap {
            self.grow()?;
        }
        self.buf.insert(index, value);
        Ok(())
    }

    /// Removes the value at `index`, shifting every later element forward by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Tofu, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.buf.remove(index))
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        self.kind.check(value)?;
        let index = self.index_of(value).ok_or(NotFound)?;
        Ok(self.buf.remove(index))
    }

    pub fn index_of(&self, value: &Tofu) -> Option<usize> {
        self.buf.iter().position(|item| item == value)
    }

    /// Ensures there is room for at least `extra` more elements without reallocating.
    pub fn reserve(&mut self, extra: usize) -> Result<(), AllocationFailure> {
        let new_cap = self
            .len()
            .checked_add(extra)
            .ok_or(AllocationFailure { requested: usize::MAX })?;

        if new_cap <= self.cap {
            return Ok(());
        }

        self.realloc_with_cap(new_cap)
    }

    /// Reduces the capacity to the current length.
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
        self.cap = self.len();
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.buf.iter()
    }

    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), AllocationFailure> {
        let extra = new_cap.saturating_sub(self.len());
        self.buf.try_reserve_exact(extra).map_err(|error| {
            warn!(requested = new_cap, %error, "vector allocation failed");
            AllocationFailure { requested: new_cap }
        })?;
        self.cap = new_cap;
        Ok(())
    }

    pub(crate) fn grow(&mut self) -> Result<(), AllocationFailure> {
        let new_cap = cmp::max(self.cap.saturating_mul(GROWTH_FACTOR), MIN_CAP);
        trace!(from = self.cap, to = new_cap, "growing vector");
        self.realloc_with_cap(new_cap)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() });
        }
        Ok(())
    }
}

impl Container for Vector {
    type Iter<'a> = slice::Iter<'a, Tofu>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.buf.len()
    }

    fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.buf.iter()
    }
}

impl Insert for Vector {
    type Error = InsertError;

    fn insert(&mut self, value: Tofu) -> Result<(), InsertError> {
        self.push(value)
    }
}

impl Remove for Vector {
    fn remove(&mut self, value: &Tofu) -> Result<Tofu, RemoveError> {
        Vector::remove(self, value)
    }
}

impl Index<usize> for Vector {
    type Output = Tofu;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

/// Read-only slice access. There is no `DerefMut`, since writing through a slice would bypass the
/// kind check.
impl Deref for Vector {
    type Target = [Tofu];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl AsRef<[Tofu]> for Vector {
    fn as_ref(&self) -> &[Tofu] {
        &self.buf
    }
}

impl Clone for Vector {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend(self.buf.iter().cloned());
        Vector {
            kind: self.kind,
            buf,
            cap: self.cap,
        }
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.buf == other.buf
    }
}

impl Eq for Vector {}

impl Debug for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("kind", &self.kind)
            .field("contents", &self.buf)
            .field("len", &self.len())
            .field("cap", &self.cap)
            .finish()
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_slice(f, &self.buf)
    }
}

/// Writes elements as `[a, b, c]`.
pub(crate) fn write_slice(f: &mut Formatter<'_>, values: &[Tofu]) -> fmt::Result {
    write!(f, "[")?;
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "]")
}

impl IntoIterator for Vector {
    type Item = Tofu;

    type IntoIter = vec::IntoIter<Tofu>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Tofu;

    type IntoIter = slice::Iter<'a, Tofu>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
