//! Error types for SPMAT operations

use core::fmt;

/// Algebraic operation that requires compatible operand shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur during matrix access and algebra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseError {
    /// Access or mutation outside the declared dimensions
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible for the operation
    DimensionMismatch {
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Checked element arithmetic overflowed
    Overflow,
    /// Compressed row arrays are inconsistent
    InvalidCsr,
}

impl fmt::Display for SparseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparseError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for a {nrows}x{ncols} matrix"
            ),
            SparseError::DimensionMismatch { op, left, right } => write!(
                f,
                "Incompatible dimensions for {op}: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            SparseError::Overflow => write!(f, "Arithmetic overflow in matrix element"),
            SparseError::InvalidCsr => write!(f, "Inconsistent compressed row arrays"),
        }
    }
}

impl core::error::Error for SparseError {}

/// Errors produced by the pure text-line parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Dimension line does not start with the expected key
    MissingKey(&'static str),
    /// A numeric field could not be parsed
    InvalidNumber,
    /// Triple is not wrapped in parentheses
    MissingParens,
    /// Triple does not have exactly three fields
    WrongArity(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingKey(key) => write!(f, "expected `{key}=<n>`"),
            ParseError::InvalidNumber => write!(f, "invalid number"),
            ParseError::MissingParens => write!(f, "entry must be of the form (row, col, value)"),
            ParseError::WrongArity(n) => write!(f, "expected 3 fields, found {n}"),
        }
    }
}

impl core::error::Error for ParseError {}

/// Result type for SPMAT operations
pub type Result<T> = core::result::Result<T, SparseError>;
