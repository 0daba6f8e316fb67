//! File I/O for text triple files
//!
//! This module reads and writes sparse matrices in the `rows=`/`cols=`
//! triple format. The core crate never touches the filesystem; everything
//! here is driven through `SparseMatrix::set_element`.

use hashbrown::HashMap;
use spmat_core::format::{write_text, COLS_KEY, HEADER_LINES, ROWS_KEY};
use spmat_core::validation::{parse_dimension, parse_triple};
use spmat_core::{MatrixElement, ParseError, SparseError, SparseMatrix};
use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading a text matrix
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read matrix file: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: missing `{expected}=<n>` header")]
    MissingHeader { line: usize, expected: &'static str },

    #[error("line {line}: malformed line: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: index ({row}, {col}) out of bounds for a {nrows}x{ncols} matrix")]
    OutOfBounds {
        line: usize,
        row: i64,
        col: i64,
        nrows: usize,
        ncols: usize,
    },

    #[error(transparent)]
    Matrix(#[from] SparseError),
}

/// Reader and writer for text triple matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Load a matrix from a text file
    pub fn read<T, P>(path: P) -> Result<SparseMatrix<T>, LoadError>
    where
        T: MatrixElement + FromStr,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::MissingFile {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io(err),
        })?;

        let matrix = Self::parse(&input)?;
        debug!(
            path = %path.display(),
            nrows = matrix.nrows(),
            ncols = matrix.ncols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Parse a matrix from text
    ///
    /// All lines are validated into a buffer before the matrix is built, so
    /// a failure never yields a partially populated matrix.
    pub fn parse<T>(input: &str) -> Result<SparseMatrix<T>, LoadError>
    where
        T: MatrixElement + FromStr,
    {
        let mut lines = input.lines().enumerate().map(|(idx, line)| (idx + 1, line));

        let nrows = parse_header(lines.next(), 1, ROWS_KEY)?;
        let ncols = parse_header(lines.next(), HEADER_LINES, COLS_KEY)?;

        let mut pending: HashMap<(usize, usize), T> = HashMap::new();
        for (line, text) in lines {
            if text.trim().is_empty() {
                continue;
            }

            let (row, col, value) = parse_triple::<T>(text)
                .map_err(|source| LoadError::MalformedLine { line, source })?;
            let position = checked_position(row, col, nrows, ncols)
                .ok_or(LoadError::OutOfBounds {
                    line,
                    row,
                    col,
                    nrows,
                    ncols,
                })?;

            if pending.insert(position, value).is_some() {
                warn!(line, row, col, "duplicate entry overrides earlier value");
            }
        }

        let mut matrix = SparseMatrix::new(nrows, ncols);
        for ((row, col), value) in pending {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Render a matrix as text
    pub fn to_text<T>(matrix: &SparseMatrix<T>) -> String
    where
        T: MatrixElement + Display,
    {
        let mut out = String::with_capacity(16 + matrix.nnz() * 16);
        // Writing into a String cannot fail
        let _ = write_text(matrix, &mut out);
        out
    }

    /// Save a matrix to a text file, replacing any existing file
    ///
    /// The parent directory must exist; see [`ensure_output_dir`].
    pub fn write<T, P>(matrix: &SparseMatrix<T>, path: P) -> io::Result<()>
    where
        T: MatrixElement + Display,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        fs::write(path, Self::to_text(matrix))?;
        debug!(
            path = %path.display(),
            nnz = matrix.nnz(),
            "saved matrix"
        );
        Ok(())
    }
}

/// Create an output directory (and its parents) if it does not exist
pub fn ensure_output_dir<P: AsRef<Path>>(dir: P) -> io::Result<()> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    debug!(path = %dir.display(), "created output directory");
    Ok(())
}

fn parse_header(
    line: Option<(usize, &str)>,
    expected_line: usize,
    key: &'static str,
) -> Result<usize, LoadError> {
    let Some((line, text)) = line else {
        return Err(LoadError::MissingHeader {
            line: expected_line,
            expected: key,
        });
    };
    parse_dimension(text, key).map_err(|source| LoadError::MalformedLine { line, source })
}

fn checked_position(row: i64, col: i64, nrows: usize, ncols: usize) -> Option<(usize, usize)> {
    let row = usize::try_from(row).ok().filter(|&r| r < nrows)?;
    let col = usize::try_from(col).ok().filter(|&c| c < ncols)?;
    Some((row, col))
}
