//! Human-readable rendering of matrices
//!
//! Rendering works through `MatrixView`, so the mapping-based matrix and
//! its CSR view print identically.

use crate::config::PrintConfig;
use spmat_core::{MatrixView, Result};
use std::fmt::Display;

/// Render the top-left corner of a matrix as aligned text
///
/// ```text
/// Matrix (2x3)
///     1     0     4
///     0     0    -2
/// ```
///
/// A trailing `...` line marks truncation in either direction.
pub fn render<M>(matrix: &M, config: &PrintConfig) -> Result<String>
where
    M: MatrixView,
    M::Element: Display,
{
    let (nrows, ncols) = matrix.dimensions();
    let shown_rows = nrows.min(config.max_rows);
    let shown_cols = ncols.min(config.max_cols);
    let width = config.cell_width;

    let mut out = format!("Matrix ({nrows}x{ncols})\n");
    for row in 0..shown_rows {
        let mut cells = Vec::with_capacity(shown_cols);
        for col in 0..shown_cols {
            let value = matrix.get_element(row, col)?;
            cells.push(format!("{value:>width$}"));
        }
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    if nrows > config.max_rows || ncols > config.max_cols {
        out.push_str("...\n");
    }
    Ok(out)
}

/// Shape and fill statistics of a matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixSummary {
    pub nrows: usize,
    pub ncols: usize,
    pub nnz: usize,
    pub density: f64,
}

impl MatrixSummary {
    pub fn of<M: MatrixView>(matrix: &M) -> Self {
        let (nrows, ncols) = matrix.dimensions();
        Self {
            nrows,
            ncols,
            nnz: matrix.nnz(),
            density: matrix.density(),
        }
    }
}

impl Display for MatrixSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dimensions: {} x {}", self.nrows, self.ncols)?;
        writeln!(f, "Non-zeros:  {}", self.nnz)?;
        write!(f, "Density:    {:.6}", self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::SparseMatrix;

    fn sample() -> SparseMatrix<i64> {
        SparseMatrix::from_triplets(2, 3, [(0, 0, 1), (0, 2, 4), (1, 2, -2)]).unwrap()
    }

    #[test]
    fn test_render_small_matrix() {
        let text = render(&sample(), &PrintConfig::default()).unwrap();
        assert_eq!(
            text,
            "Matrix (2x3)\n    1     0     4\n    0     0    -2\n"
        );
    }

    #[test]
    fn test_render_truncates() {
        let m = SparseMatrix::<i64>::identity(4);
        let config = PrintConfig::default().with_max_rows(2).with_max_cols(3).with_cell_width(2);
        let text = render(&m, &config).unwrap();
        assert_eq!(text, "Matrix (4x4)\n 1  0  0\n 0  1  0\n...\n");
    }

    #[test]
    fn test_render_csr_matches_sparse() {
        let m = sample();
        let config = PrintConfig::default();
        assert_eq!(
            render(&m, &config).unwrap(),
            render(&m.to_csr(), &config).unwrap()
        );
    }

    #[test]
    fn test_summary() {
        let summary = MatrixSummary::of(&sample());
        assert_eq!(summary.nnz, 3);
        assert_eq!(summary.density, 0.5);
        assert_eq!(
            summary.to_string(),
            "Dimensions: 2 x 3\nNon-zeros:  3\nDensity:    0.500000"
        );
    }
}
