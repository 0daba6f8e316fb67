//! Text triple format definitions
//!
//! ```text
//! rows=<n>
//! cols=<n>
//! (<row>, <col>, <value>)
//! ```
//!
//! Writing targets any `core::fmt::Write`; reading is line based through
//! the parsers in [`crate::validation::parsing`].

use core::fmt::{self, Display, Write};

use crate::traits::MatrixElement;
use crate::SparseMatrix;

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;

/// Write a matrix in text triple form
///
/// Entries are emitted in row-major, column-ascending order; zeros are
/// never written.
pub fn write_text<T, W>(matrix: &SparseMatrix<T>, out: &mut W) -> fmt::Result
where
    T: MatrixElement + Display,
    W: Write,
{
    writeln!(out, "{ROWS_KEY}={}", matrix.nrows())?;
    writeln!(out, "{COLS_KEY}={}", matrix.ncols())?;
    for (row, col, value) in matrix.sorted_triplets() {
        writeln!(out, "({row}, {col}, {value})")?;
    }
    Ok(())
}
