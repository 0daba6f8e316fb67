//! Abstract interfaces shared by the matrix representations
//!
//! Both the mapping-based `SparseMatrix` and the derived `CsrMatrix`
//! implement these, so read-only consumers stay storage-agnostic.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, MatrixView};
