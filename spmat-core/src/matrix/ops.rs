//! Algebraic operations on `SparseMatrix`
//!
//! Every operation allocates a fresh result and leaves its operands
//! untouched. Costs are proportional to the stored entries, never to the
//! dense dimensions.

use alloc::vec::Vec;
use hashbrown::HashMap;

use super::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::{check_multiply_shape, check_same_shape};
use crate::{Operation, Result, SparseError};

/// Stored entries grouped by row, each row sorted by column
///
/// This is the lookup structure used by multiplication: the left operand is
/// walked row by row and the right operand is probed by row index.
#[derive(Debug, Clone)]
pub struct RowGroups<T> {
    rows: HashMap<usize, Vec<(usize, T)>>,
}

impl<T: MatrixElement> RowGroups<T> {
    /// Group the entries of a matrix by row
    pub fn from_matrix(matrix: &SparseMatrix<T>) -> Self {
        let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (row, col, value) in matrix.iter() {
            rows.entry(row).or_default().push((col, value));
        }
        for entries in rows.values_mut() {
            entries.sort_unstable_by_key(|&(col, _)| col);
        }
        Self { rows }
    }

    /// Entries of one row, or `None` if the row has no non-zeros
    pub fn get(&self, row: usize) -> Option<&[(usize, T)]> {
        self.rows.get(&row).map(Vec::as_slice)
    }

    /// Iterate over non-empty rows in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[(usize, T)])> + '_ {
        self.rows.iter().map(|(&row, entries)| (row, entries.as_slice()))
    }

    /// Number of non-empty rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Compute one output row of a product
///
/// `lhs_row` holds the `(k, value)` non-zeros of a row of the left operand;
/// each is matched against row `k` of the right operand. The returned
/// `(col, value)` pairs are column-ascending and contain no zeros.
///
/// Terms are summed in ascending `k` order with checked arithmetic. Any
/// partial sum that overflows is reported as [`SparseError::Overflow`],
/// even when the exact total would fit in `T`.
pub fn accumulate_row<T: MatrixElement>(
    lhs_row: &[(usize, T)],
    rhs: &RowGroups<T>,
) -> Result<Vec<(usize, T)>> {
    let mut acc: HashMap<usize, T> = HashMap::new();

    for &(k, left) in lhs_row {
        let Some(rhs_row) = rhs.get(k) else {
            continue;
        };
        for &(col, right) in rhs_row {
            let product = left.checked_mul(right).ok_or(SparseError::Overflow)?;
            let slot = acc.entry(col).or_insert_with(T::zero);
            *slot = slot.checked_add(product).ok_or(SparseError::Overflow)?;
        }
    }

    let mut out: Vec<_> = acc.into_iter().filter(|(_, v)| !v.is_zero()).collect();
    out.sort_unstable_by_key(|&(col, _)| col);
    Ok(out)
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Elementwise sum; shapes must match
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, Operation::Add, T::checked_add)
    }

    /// Elementwise difference; shapes must match
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, Operation::Subtract, T::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.ncols() == other.nrows()`; the result is
    /// `self.nrows() x other.ncols()`. Overflow of a product or of any
    /// running partial sum fails with [`SparseError::Overflow`].
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let (nrows, ncols) = check_multiply_shape(self.dimensions(), other.dimensions())?;
        let mut result = Self::new(nrows, ncols);

        let lhs = RowGroups::from_matrix(self);
        let rhs = RowGroups::from_matrix(other);

        for (row, entries) in lhs.iter() {
            for (col, value) in accumulate_row(entries, &rhs)? {
                result.store(row, col, value);
            }
        }

        Ok(result)
    }

    /// Matrix with rows and columns swapped
    pub fn transpose(&self) -> Self {
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            entries: self
                .entries
                .iter()
                .map(|(&(row, col), &value)| ((col, row), value))
                .collect(),
        }
    }

    /// Combine both operands over the union of their stored positions
    fn elementwise(
        &self,
        other: &Self,
        op: Operation,
        combine: fn(T, T) -> Option<T>,
    ) -> Result<Self> {
        check_same_shape(op, self.dimensions(), other.dimensions())?;
        let mut result = Self::new(self.nrows, self.ncols);

        for (&(row, col), &left) in &self.entries {
            let right = other.value_at(row, col);
            let value = combine(left, right).ok_or(SparseError::Overflow)?;
            result.store(row, col, value);
        }

        for (&(row, col), &right) in &other.entries {
            if self.entries.contains_key(&(row, col)) {
                continue;
            }
            let value = combine(T::zero(), right).ok_or(SparseError::Overflow)?;
            result.store(row, col, value);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn matrix(nrows: usize, ncols: usize, triplets: &[(usize, usize, i64)]) -> SparseMatrix<i64> {
        SparseMatrix::from_triplets(nrows, ncols, triplets.iter().copied()).unwrap()
    }

    #[test]
    fn test_add_example() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = matrix(2, 2, &[(0, 0, 3), (0, 1, 4)]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum, matrix(2, 2, &[(0, 0, 4), (0, 1, 4), (1, 1, 2)]));
        assert_eq!(sum, b.add(&a).unwrap());
    }

    #[test]
    fn test_add_cancellation_drops_entry() {
        let a = matrix(2, 2, &[(0, 0, 5), (1, 0, 1)]);
        let b = matrix(2, 2, &[(0, 0, -5)]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.nnz(), 1);
        assert_eq!(sum.get_element(0, 0), Ok(0));
    }

    #[test]
    fn test_subtract() {
        let a = matrix(2, 3, &[(0, 0, 4), (1, 2, 2)]);
        let b = matrix(2, 3, &[(0, 0, 1), (0, 1, 3)]);

        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff, matrix(2, 3, &[(0, 0, 3), (0, 1, -3), (1, 2, 2)]));

        let zero = a.subtract(&a).unwrap();
        assert!(zero.is_empty());
        assert_eq!(zero.dimensions(), (2, 3));
    }

    #[test]
    fn test_add_zero_matrix_is_identity() {
        let a = matrix(3, 2, &[(0, 1, 7), (2, 0, -1)]);
        assert_eq!(a.add(&SparseMatrix::new(3, 2)).unwrap(), a);
    }

    #[test]
    fn test_elementwise_dimension_mismatch() {
        let a = SparseMatrix::<i64>::new(2, 3);
        let b = SparseMatrix::<i64>::new(3, 2);

        assert_eq!(
            a.add(&b),
            Err(SparseError::DimensionMismatch {
                op: Operation::Add,
                left: (2, 3),
                right: (3, 2)
            })
        );
        assert!(matches!(
            a.subtract(&b),
            Err(SparseError::DimensionMismatch {
                op: Operation::Subtract,
                ..
            })
        ));
    }

    #[test]
    fn test_elementwise_overflow() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 1)]);
        assert_eq!(a.add(&b), Err(SparseError::Overflow));

        let c = matrix(1, 1, &[(0, 0, i64::MIN)]);
        assert_eq!(SparseMatrix::new(1, 1).subtract(&c), Err(SparseError::Overflow));
    }

    #[test]
    fn test_multiply_example() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = matrix(2, 2, &[(0, 0, 3), (0, 1, 4)]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product, matrix(2, 2, &[(0, 0, 3), (0, 1, 4)]));

        let product = b.multiply(&a).unwrap();
        assert_eq!(product, matrix(2, 2, &[(0, 0, 3), (0, 1, 8)]));
    }

    #[test]
    fn test_multiply_rectangular() {
        // (2x3) * (3x2)
        let a = matrix(2, 3, &[(0, 0, 1), (0, 2, 2), (1, 1, 3)]);
        let b = matrix(3, 2, &[(0, 1, 4), (1, 0, 5), (2, 1, 6)]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(product, matrix(2, 2, &[(0, 1, 16), (1, 0, 15)]));
    }

    #[test]
    fn test_multiply_cancellation_drops_entry() {
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 1, &[(0, 0, 3), (1, 0, -3)]);
        assert!(a.multiply(&b).unwrap().is_empty());
    }

    #[test]
    fn test_multiply_identity() {
        let a = matrix(2, 3, &[(0, 0, 1), (0, 2, -4), (1, 1, 9)]);
        assert_eq!(SparseMatrix::identity(2).multiply(&a).unwrap(), a);
        assert_eq!(a.multiply(&SparseMatrix::identity(3)).unwrap(), a);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = SparseMatrix::<i64>::new(2, 3);
        let b = SparseMatrix::<i64>::new(4, 2);
        assert_eq!(
            a.multiply(&b),
            Err(SparseError::DimensionMismatch {
                op: Operation::Multiply,
                left: (2, 3),
                right: (4, 2)
            })
        );
    }

    #[test]
    fn test_multiply_overflow() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 2)]);
        assert_eq!(a.multiply(&b), Err(SparseError::Overflow));
    }

    #[test]
    fn test_multiply_partial_sum_overflow() {
        // MAX + 1 - 1 fits, but the running sum MAX + 1 does not
        let a = matrix(1, 3, &[(0, 0, i64::MAX), (0, 1, 1), (0, 2, -1)]);
        let b = matrix(3, 1, &[(0, 0, 1), (1, 0, 1), (2, 0, 1)]);
        assert_eq!(a.multiply(&b), Err(SparseError::Overflow));

        // Same terms ordered so every partial sum stays in range
        let a = matrix(1, 3, &[(0, 0, i64::MAX), (0, 1, -1), (0, 2, 1)]);
        assert_eq!(a.multiply(&b).unwrap(), matrix(1, 1, &[(0, 0, i64::MAX)]));
    }

    #[test]
    fn test_transpose() {
        let a = matrix(2, 3, &[(0, 2, 5), (1, 0, -1)]);
        let t = a.transpose();
        assert_eq!(t.dimensions(), (3, 2));
        assert_eq!(t, matrix(3, 2, &[(2, 0, 5), (0, 1, -1)]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_accumulate_row() {
        let b = matrix(2, 3, &[(0, 0, 1), (0, 2, 2), (1, 2, 3)]);
        let rhs = RowGroups::from_matrix(&b);
        assert_eq!(rhs.len(), 2);
        assert_eq!(rhs.get(1), Some(&[(2, 3)][..]));
        assert!(rhs.get(5).is_none());

        let row = accumulate_row(&[(0, 2), (1, 1)], &rhs).unwrap();
        assert_eq!(row, vec![(0, 2), (2, 7)]);
        assert!(accumulate_row(&[], &rhs).unwrap().is_empty());
    }
}
