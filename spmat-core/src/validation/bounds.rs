//! Index and shape validation
//!
//! This module provides pure checks for element positions and operand
//! shapes. All of them are `const` and allocation free.

use crate::{Operation, SparseError};

/// Validate that `(row, col)` lies inside an `nrows x ncols` matrix
pub const fn check_index(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), SparseError> {
    if row >= nrows || col >= ncols {
        return Err(SparseError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate that two shapes are identical, as elementwise operations require
pub const fn check_same_shape(
    op: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SparseError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SparseError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

/// Validate that the inner dimensions of a product agree
///
/// Returns the shape of the product on success.
pub const fn check_multiply_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), SparseError> {
    if left.1 != right.0 {
        return Err(SparseError::DimensionMismatch {
            op: Operation::Multiply,
            left,
            right,
        });
    }
    Ok((left.0, right.1))
}
