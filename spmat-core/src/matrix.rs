//! Mapping-based sparse matrix storage
//!
//! `SparseMatrix` keeps a hash map from `(row, col)` to value and never
//! stores a zero. The algebraic operations live in [`ops`].

pub mod ops;

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::traits::{MatrixElement, MatrixOperations, MatrixView};
use crate::validation::check_index;
use crate::Result;

/// Sparse matrix with fixed dimensions and non-zero-only storage
#[derive(Debug, Clone)]
pub struct SparseMatrix<T: MatrixElement> {
    nrows: usize,
    ncols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty (all-zero) matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Create an `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        matrix.entries.reserve(n);
        for i in 0..n {
            matrix.store(i, i, T::one());
        }
        matrix
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Later triples overwrite earlier ones at the same position and zero
    /// values remove entries. The first out-of-bounds triple aborts the
    /// build and no matrix is returned.
    pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (row, col, value) in triplets {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether every element is zero
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at `(row, col)`, zero if not stored
    pub fn get_element(&self, row: usize, col: usize) -> Result<T> {
        check_index(row, col, self.nrows, self.ncols)?;
        Ok(self.value_at(row, col))
    }

    /// Set the value at `(row, col)`
    ///
    /// Writing zero removes any stored entry at that position.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(row, col, self.nrows, self.ncols)?;
        self.store(row, col, value);
        Ok(())
    }

    /// Iterate over stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries in row-major, column-ascending order
    pub fn sorted_triplets(&self) -> Vec<(usize, usize, T)> {
        let mut triplets: Vec<_> = self.iter().collect();
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));
        triplets
    }

    /// Non-zero `(col, value)` pairs of one row, column-ascending
    pub fn row(&self, row: usize) -> Result<Vec<(usize, T)>> {
        if row >= self.nrows {
            return Err(crate::SparseError::IndexOutOfBounds {
                row,
                col: 0,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }

        let mut values: Vec<_> = self
            .iter()
            .filter(|&(r, _, _)| r == row)
            .map(|(_, col, value)| (col, value))
            .collect();
        values.sort_unstable_by_key(|&(col, _)| col);
        Ok(values)
    }

    /// Non-zero `(row, value)` pairs of one column, row-ascending
    pub fn col(&self, col: usize) -> Result<Vec<(usize, T)>> {
        if col >= self.ncols {
            return Err(crate::SparseError::IndexOutOfBounds {
                row: 0,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }

        let mut values: Vec<_> = self
            .iter()
            .filter(|&(_, c, _)| c == col)
            .map(|(row, _, value)| (row, value))
            .collect();
        values.sort_unstable_by_key(|&(row, _)| row);
        Ok(values)
    }

    fn value_at(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Write a value at an already validated position, keeping the
    /// no-stored-zero invariant
    pub(crate) fn store(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }
}

impl<T: MatrixElement> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.entries == other.entries
    }
}

impl<T: MatrixElement> MatrixView for SparseMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }

    fn get_element(&self, row: usize, col: usize) -> Result<T> {
        SparseMatrix::get_element(self, row, col)
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Result<Vec<(usize, T)>> {
        self.row(row_index)
    }

    fn get_col(&self, col_index: usize) -> Result<Vec<(usize, T)>> {
        self.col(col_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseError;
    use alloc::vec;

    #[test]
    fn test_get_and_set() {
        let mut m = SparseMatrix::<i64>::new(3, 4);
        assert_eq!(m.get_element(2, 3), Ok(0));

        m.set_element(1, 2, 7).unwrap();
        assert_eq!(m.get_element(1, 2), Ok(7));
        assert_eq!(m.nnz(), 1);

        m.set_element(1, 2, -3).unwrap();
        assert_eq!(m.get_element(1, 2), Ok(-3));
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_setting_zero_removes_entry() {
        let mut m = SparseMatrix::<i64>::new(2, 2);
        m.set_element(0, 1, 4).unwrap();
        m.set_element(0, 1, 0).unwrap();
        assert_eq!(m.get_element(0, 1), Ok(0));
        assert_eq!(m.nnz(), 0);
        assert!(m.is_empty());

        // Zero on an absent position is a no-op
        m.set_element(1, 1, 0).unwrap();
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut m = SparseMatrix::<f64>::new(2, 3);
        let expected = SparseError::IndexOutOfBounds {
            row: 2,
            col: 0,
            nrows: 2,
            ncols: 3,
        };
        assert_eq!(m.get_element(2, 0), Err(expected));
        assert_eq!(m.set_element(2, 0, 1.0), Err(expected));
        assert!(m.get_element(0, 3).is_err());
        assert!(m.get_element(usize::MAX, 0).is_err());
        assert!(m.is_empty());
    }

    #[test]
    fn test_from_triplets_last_write_wins() {
        let m = SparseMatrix::from_triplets(2, 2, [(0, 0, 1i64), (1, 1, 2), (0, 0, 9)]).unwrap();
        assert_eq!(m.get_element(0, 0), Ok(9));
        assert_eq!(m.nnz(), 2);

        let cleared = SparseMatrix::from_triplets(2, 2, [(0, 0, 1i64), (0, 0, 0)]).unwrap();
        assert!(cleared.is_empty());

        assert!(SparseMatrix::from_triplets(2, 2, [(0, 0, 1i64), (2, 0, 1)]).is_err());
    }

    #[test]
    fn test_identity() {
        let id = SparseMatrix::<i32>::identity(3);
        assert_eq!(id.nnz(), 3);
        assert_eq!(id.get_element(1, 1), Ok(1));
        assert_eq!(id.get_element(0, 1), Ok(0));
    }

    #[test]
    fn test_sorted_triplets_and_rows() {
        let m = SparseMatrix::from_triplets(3, 3, [(2, 0, 5i64), (0, 2, 3), (0, 1, 4), (1, 1, 6)])
            .unwrap();
        assert_eq!(
            m.sorted_triplets(),
            vec![(0, 1, 4), (0, 2, 3), (1, 1, 6), (2, 0, 5)]
        );
        assert_eq!(m.row(0), Ok(vec![(1, 4), (2, 3)]));
        assert_eq!(m.col(1), Ok(vec![(0, 4), (1, 6)]));
        assert_eq!(m.row(2), Ok(vec![(0, 5)]));
        assert!(m.row(3).is_err());
        assert!(m.col(3).is_err());
    }

    #[test]
    fn test_equality_considers_dimensions() {
        let a = SparseMatrix::<i64>::new(2, 3);
        let b = SparseMatrix::<i64>::new(3, 2);
        assert_ne!(a, b);
        assert_eq!(a, SparseMatrix::new(2, 3));
    }

    #[test]
    fn test_view_trait_density() {
        let m = SparseMatrix::from_triplets(2, 2, [(0, 0, 1.0f64)]).unwrap();
        assert_eq!(MatrixView::density(&m), 0.25);
        assert_eq!(MatrixView::density(&SparseMatrix::<f64>::new(0, 0)), 0.0);
    }
}
