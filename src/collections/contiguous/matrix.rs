use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Index;
use std::slice;

use tracing::warn;

use super::vector::write_slice;
use crate::collections::traits::Container;
use crate::error::{AccessError, AllocationFailure, IndexOutOfBounds};
use crate::util::result::ResultExtension;
use crate::value::{Tofu, TofuKind};

/// A rectangular grid of values of one kind, stored row by row in a single buffer.
///
/// A new matrix is filled with [`TofuKind::default_value`]. Its shape never changes; cells can
/// only be overwritten with [`set`](Matrix::set).
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    pub(crate) kind: TofuKind,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<Tofu>,
}

impl Matrix {
    /// Creates a `rows` by `cols` matrix filled with the default value of `kind`.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if `rows * cols` cells can't be allocated.
    pub fn new(kind: TofuKind, rows: usize, cols: usize) -> Result<Matrix, AllocationFailure> {
        let cells = Matrix::alloc_cells(rows, cols)?;
        let mut matrix = Matrix { kind, rows, cols, cells };
        matrix.cells.resize(rows * cols, kind.default_value());
        Ok(matrix)
    }

    pub const fn kind(&self) -> TofuKind {
        self.kind
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tofu> {
        self.offset(row, col).ok().map(|offset| &self.cells[offset])
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<&Tofu, IndexOutOfBounds> {
        Ok(&self.cells[self.offset(row, col)?])
    }

    /// Overwrites the cell at `row`, `col`, returning the old value.
    pub fn set(&mut self, row: usize, col: usize, value: Tofu) -> Result<Tofu, AccessError> {
        self.kind.check(&value)?;
        let offset = self.offset(row, col)?;
        Ok(mem::replace(&mut self.cells[offset], value))
    }

    pub fn row(&self, row: usize) -> Option<&[Tofu]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Returns a new matrix with rows and columns swapped.
    pub fn transpose(&self) -> Result<Matrix, AllocationFailure> {
        let mut cells = Matrix::alloc_cells(self.cols, self.rows)?;
        for col in 0..self.cols {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.cols + col].clone());
            }
        }
        Ok(Matrix {
            kind: self.kind,
            rows: self.cols,
            cols: self.rows,
            cells,
        })
    }

    /// Iterates over every cell, row by row.
    pub fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.cells.iter()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, IndexOutOfBounds> {
        if row >= self.rows {
            return Err(IndexOutOfBounds { index: row, len: self.rows });
        }
        if col >= self.cols {
            return Err(IndexOutOfBounds { index: col, len: self.cols });
        }
        Ok(row * self.cols + col)
    }

    fn alloc_cells(rows: usize, cols: usize) -> Result<Vec<Tofu>, AllocationFailure> {
        let requested = rows.checked_mul(cols).ok_or(AllocationFailure { requested: usize::MAX })?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(requested).map_err(|error| {
            warn!(rows, cols, %error, "matrix allocation failed");
            AllocationFailure { requested }
        })?;
        Ok(cells)
    }
}

impl Container for Matrix {
    type Iter<'a> = slice::Iter<'a, Tofu>;

    fn kind(&self) -> TofuKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn iter(&self) -> slice::Iter<'_, Tofu> {
        self.cells.iter()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Tofu;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.try_get(row, col).throw()
    }
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("kind", &self.kind)
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("cells", &self.cells)
            .finish()
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write_slice(f, row)?;
        }
        Ok(())
    }
}
