//! Error types shared by every container.
//!
//! Leaf errors are small structs, each describing exactly one failure. Operations that can fail
//! in more than one way return a union enum over the relevant leaves, which derive [`From`] so
//! that `?` lifts a leaf into the union. [`TofuError`] absorbs everything, for callers that don't
//! care which operation failed.

use derive_more::{Display, Error, From, IsVariant};

use crate::value::TofuKind;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected a value of kind {expected}, found {found}")]
pub struct KindMismatch {
    pub expected: TofuKind,
    pub found: TofuKind,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no matching element in collection")]
pub struct NotFound;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection is full at capacity {capacity}")]
pub struct OutOfCapacity {
    pub capacity: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unable to allocate storage for {requested} elements")]
pub struct AllocationFailure {
    pub requested: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("graph has no vertex with the provided value")]
pub struct NodeNotFound;

/// Returned when inserting into a container that grows its buffer.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum InsertError {
    KindMismatch(KindMismatch),
    AllocationFailure(AllocationFailure),
}

/// Returned when inserting into a container with a fixed capacity.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum CapacityError {
    KindMismatch(KindMismatch),
    OutOfCapacity(OutOfCapacity),
}

/// Returned when removing by value. A value of the wrong kind can never be present, but it is
/// still reported as a mismatch rather than as absent.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum RemoveError {
    KindMismatch(KindMismatch),
    NotFound(NotFound),
}

/// Returned when writing to a position.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum AccessError {
    KindMismatch(KindMismatch),
    IndexOutOfBounds(IndexOutOfBounds),
}

/// Returned when inserting at a position of a growable buffer.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum InsertAtError {
    KindMismatch(KindMismatch),
    IndexOutOfBounds(IndexOutOfBounds),
    AllocationFailure(AllocationFailure),
}

impl From<InsertError> for InsertAtError {
    fn from(value: InsertError) -> Self {
        match value {
            InsertError::KindMismatch(e) => e.into(),
            InsertError::AllocationFailure(e) => e.into(),
        }
    }
}

impl From<AccessError> for InsertAtError {
    fn from(value: AccessError) -> Self {
        match value {
            AccessError::KindMismatch(e) => e.into(),
            AccessError::IndexOutOfBounds(e) => e.into(),
        }
    }
}

/// Returned by graph edge operations.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum GraphError {
    KindMismatch(KindMismatch),
    NodeNotFound(NodeNotFound),
}

/// Every failure this crate reports.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum TofuError {
    KindMismatch(KindMismatch),
    NotFound(NotFound),
    IndexOutOfBounds(IndexOutOfBounds),
    OutOfCapacity(OutOfCapacity),
    AllocationFailure(AllocationFailure),
    NodeNotFound(NodeNotFound),
}

impl From<InsertError> for TofuError {
    fn from(value: InsertError) -> Self {
        match value {
            InsertError::KindMismatch(e) => e.into(),
            InsertError::AllocationFailure(e) => e.into(),
        }
    }
}

impl From<CapacityError> for TofuError {
    fn from(value: CapacityError) -> Self {
        match value {
            CapacityError::KindMismatch(e) => e.into(),
            CapacityError::OutOfCapacity(e) => e.into(),
        }
    }
}

impl From<RemoveError> for TofuError {
    fn from(value: RemoveError) -> Self {
        match value {
            RemoveError::KindMismatch(e) => e.into(),
            RemoveError::NotFound(e) => e.into(),
        }
    }
}

impl From<AccessError> for TofuError {
    fn from(value: AccessError) -> Self {
        match value {
            AccessError::KindMismatch(e) => e.into(),
            AccessError::IndexOutOfBounds(e) => e.into(),
        }
    }
}

impl From<InsertAtError> for TofuError {
    fn from(value: InsertAtError) -> Self {
        match value {
            InsertAtError::KindMismatch(e) => e.into(),
            InsertAtError::IndexOutOfBounds(e) => e.into(),
            InsertAtError::AllocationFailure(e) => e.into(),
        }
    }
}

impl From<GraphError> for TofuError {
    fn from(value: GraphError) -> Self {
        match value {
            GraphError::KindMismatch(e) => e.into(),
            GraphError::NodeNotFound(e) => e.into(),
        }
    }
}
