//! Core matrix access traits
//!
//! This module defines the read-only interface that every matrix
//! representation satisfies.

use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::Result;

/// Format-agnostic read access to a sparse matrix
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Get an element at the specified position
    ///
    /// Returns zero for in-bounds positions that are not stored and
    /// `IndexOutOfBounds` for positions outside the dimensions.
    fn get_element(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Fraction of positions holding a non-zero value
    fn density(&self) -> f64 {
        let (nrows, ncols) = self.dimensions();
        let cells = nrows as f64 * ncols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }
}

/// Row and column extraction
pub trait MatrixOperations: MatrixView {
    /// Get all non-zero elements in a row as `(col, value)` pairs
    ///
    /// Elements are returned in column order.
    fn get_row(&self, row_index: usize) -> Result<Vec<(usize, Self::Element)>>;

    /// Get all non-zero elements in a column as `(row, value)` pairs
    ///
    /// Elements are returned in row order.
    fn get_col(&self, col_index: usize) -> Result<Vec<(usize, Self::Element)>>;
}
