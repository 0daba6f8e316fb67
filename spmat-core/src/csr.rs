//! Compressed Sparse Row view
//!
//! A derived, read-only encoding of a `SparseMatrix` as three parallel
//! arrays. The mapping-based matrix stays the authoritative storage.

use alloc::vec::Vec;

use crate::traits::{MatrixElement, MatrixOperations, MatrixView};
use crate::validation::check_index;
use crate::{Result, SparseError, SparseMatrix};

/// CSR encoding of a sparse matrix
///
/// `row_pointer[i]..row_pointer[i + 1]` indexes the values and columns of
/// row `i`; columns within a row are strictly ascending.
///
/// Deserialization goes through [`CsrMatrix::from_parts`], so inconsistent
/// arrays are rejected rather than stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "CsrParts<T>",
        bound(deserialize = "T: MatrixElement + serde::Deserialize<'de>")
    )
)]
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    values: Vec<T>,
    column_indices: Vec<usize>,
    row_pointer: Vec<usize>,
}

/// Unvalidated wire form of a `CsrMatrix`
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CsrParts<T> {
    nrows: usize,
    ncols: usize,
    values: Vec<T>,
    column_indices: Vec<usize>,
    row_pointer: Vec<usize>,
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> TryFrom<CsrParts<T>> for CsrMatrix<T> {
    type Error = SparseError;

    fn try_from(parts: CsrParts<T>) -> Result<Self> {
        Self::from_parts(
            parts.nrows,
            parts.ncols,
            parts.values,
            parts.column_indices,
            parts.row_pointer,
        )
    }
}

impl<T: MatrixElement> CsrMatrix<T> {
    /// Assemble a CSR matrix from raw arrays, validating their consistency
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        values: Vec<T>,
        column_indices: Vec<usize>,
        row_pointer: Vec<usize>,
    ) -> Result<Self> {
        let pointer_len = nrows.checked_add(1).ok_or(SparseError::InvalidCsr)?;
        if row_pointer.len() != pointer_len
            || row_pointer[0] != 0
            || row_pointer[nrows] != values.len()
            || column_indices.len() != values.len()
        {
            return Err(SparseError::InvalidCsr);
        }

        for window in row_pointer.windows(2) {
            let (start, end) = (window[0], window[1]);
            if start > end || end > values.len() {
                return Err(SparseError::InvalidCsr);
            }
            let cols = &column_indices[start..end];
            if cols.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(SparseError::InvalidCsr);
            }
            if cols.last().is_some_and(|&col| col >= ncols) {
                return Err(SparseError::InvalidCsr);
            }
        }

        if values.iter().any(|v| v.is_zero()) {
            return Err(SparseError::InvalidCsr);
        }

        Ok(Self {
            nrows,
            ncols,
            values,
            column_indices,
            row_pointer,
        })
    }

    /// Non-zero values in row-major, column-ascending order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column of each corresponding value
    pub fn column_indices(&self) -> &[usize] {
        &self.column_indices
    }

    /// Row offsets into `values`, length `nrows + 1`
    pub fn row_pointer(&self) -> &[usize] {
        &self.row_pointer
    }

    /// Columns and values of one row
    pub fn row(&self, row: usize) -> Result<(&[usize], &[T])> {
        if row >= self.nrows {
            return Err(SparseError::IndexOutOfBounds {
                row,
                col: 0,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        let range = self.row_pointer[row]..self.row_pointer[row + 1];
        Ok((&self.column_indices[range.clone()], &self.values[range]))
    }

    /// Convert back to mapping-based storage
    pub fn to_sparse(&self) -> SparseMatrix<T> {
        let mut matrix = SparseMatrix::new(self.nrows, self.ncols);
        for row in 0..self.nrows {
            let range = self.row_pointer[row]..self.row_pointer[row + 1];
            for (&col, &value) in self.column_indices[range.clone()]
                .iter()
                .zip(&self.values[range])
            {
                matrix.store(row, col, value);
            }
        }
        matrix
    }
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Export the stored entries as a CSR view
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let triplets = self.sorted_triplets();

        let (nrows, ncols) = self.dimensions();
        let mut row_pointer = Vec::with_capacity(nrows + 1);
        let mut column_indices = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());

        row_pointer.push(0);
        let mut next = triplets.iter().peekable();
        for row in 0..nrows {
            while let Some(&(_, col, value)) = next.next_if(|&&(r, _, _)| r == row) {
                column_indices.push(col);
                values.push(value);
            }
            row_pointer.push(values.len());
        }

        CsrMatrix {
            nrows,
            ncols,
            values,
            column_indices,
            row_pointer,
        }
    }
}

impl<T: MatrixElement> MatrixView for CsrMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn get_element(&self, row: usize, col: usize) -> Result<T> {
        check_index(row, col, self.nrows, self.ncols)?;
        let (cols, values) = self.row(row)?;
        Ok(match cols.binary_search(&col) {
            Ok(pos) => values[pos],
            Err(_) => T::zero(),
        })
    }
}

impl<T: MatrixElement> MatrixOperations for CsrMatrix<T> {
    fn get_row(&self, row_index: usize) -> Result<Vec<(usize, T)>> {
        let (cols, values) = self.row(row_index)?;
        Ok(cols.iter().copied().zip(values.iter().copied()).collect())
    }

    fn get_col(&self, col_index: usize) -> Result<Vec<(usize, T)>> {
        if col_index >= self.ncols {
            return Err(SparseError::IndexOutOfBounds {
                row: 0,
                col: col_index,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }

        let mut out = Vec::new();
        for row in 0..self.nrows {
            let (cols, values) = self.row(row)?;
            if let Ok(pos) = cols.binary_search(&col_index) {
                out.push((row, values[pos]));
            }
        }
        Ok(out)
    }
}
