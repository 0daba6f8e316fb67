#![no_std]

//! SPMAT Core - Sparse Matrix Storage and Algebra
//!
//! This crate provides the sparse matrix container, its algebraic operations
//! and the pure validation/parsing helpers used by the text format. It
//! performs no I/O.

extern crate alloc;

pub mod csr;
pub mod error;
pub mod format;
pub mod matrix;
pub mod traits;
pub mod validation;

pub use csr::CsrMatrix;
pub use error::{Operation, ParseError, Result, SparseError};
pub use matrix::ops::{accumulate_row, RowGroups};
pub use matrix::SparseMatrix;
pub use traits::{MatrixElement, MatrixOperations, MatrixView};
pub use validation::{check_index, check_multiply_shape, check_same_shape};
