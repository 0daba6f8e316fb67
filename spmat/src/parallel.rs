//! Row-parallel sparse multiplication
//!
//! Rows of the left operand are distributed across a rayon pool. Each
//! output row is computed by exactly one task; rows are merged into the
//! result only after the parallel phase.

use crate::config::ParallelConfig;
use rayon::prelude::*;
use spmat_core::{accumulate_row, check_multiply_shape, MatrixElement, RowGroups, SparseError, SparseMatrix};
use thiserror::Error;
use tracing::debug;

/// Errors raised by the parallel multiply
#[derive(Debug, Error)]
pub enum ParallelError {
    #[error(transparent)]
    Matrix(#[from] SparseError),

    #[error("failed to build thread pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Multiply `a * b`, spreading output rows across threads
///
/// Produces exactly the same matrix as [`SparseMatrix::multiply`]. Small
/// products below `config.min_rows_for_parallel` run sequentially.
pub fn par_multiply<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &ParallelConfig,
) -> Result<SparseMatrix<T>, ParallelError>
where
    T: MatrixElement + Send + Sync,
{
    let (nrows, ncols) = check_multiply_shape(a.dimensions(), b.dimensions())?;

    let lhs = RowGroups::from_matrix(a);
    if !config.should_parallelize(lhs.len()) {
        debug!(rows = lhs.len(), "product below parallel threshold, multiplying sequentially");
        return Ok(a.multiply(b)?);
    }

    let rhs = RowGroups::from_matrix(b);
    let rows: Vec<(usize, &[(usize, T)])> = lhs.iter().collect();

    let compute = || {
        rows.par_iter()
            .map(|&(row, entries)| accumulate_row(entries, &rhs).map(|values| (row, values)))
            .collect::<Result<Vec<_>, SparseError>>()
    };

    let computed = match config.num_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            debug!(threads, rows = rows.len(), "multiplying on dedicated pool");
            pool.install(compute)?
        }
        None => {
            debug!(rows = rows.len(), "multiplying on global pool");
            compute()?
        }
    };

    let mut result = SparseMatrix::new(nrows, ncols);
    for (row, values) in computed {
        for (col, value) in values {
            result.set_element(row, col, value)?;
        }
    }
    Ok(result)
}
