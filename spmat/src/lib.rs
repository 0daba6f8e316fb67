//! SPMAT - Sparse Matrix Arithmetic
//!
//! This library loads sparse matrices from text triple files, combines them
//! with addition, subtraction, multiplication and transpose, and writes the
//! results back out.
//!
//! ## Architecture
//!
//! SPMAT follows a clean core/implementation separation:
//!
//! - **spmat-core**: storage, algebra, validation and pure text parsing (no I/O)
//! - **spmat**: file I/O, rendering, parallel multiplication and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{MatrixFile, PrintConfig, SparseMatrix};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let a: SparseMatrix<i64> = MatrixFile::read("a.txt")?;
//!     let b: SparseMatrix<i64> = MatrixFile::read("b.txt")?;
//!
//!     let product = a.multiply(&b)?;
//!     println!("{}", spmat::render(&product, &PrintConfig::default())?);
//!
//!     spmat::ensure_output_dir("out")?;
//!     MatrixFile::write(&product, "out/product.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Matrix types
    CsrMatrix, SparseMatrix,
    // Core traits
    MatrixElement, MatrixOperations, MatrixView,
    // Error handling
    Operation, ParseError, Result, SparseError,
};

pub mod config;
pub mod display;
pub mod file_io;
pub mod parallel;

pub use config::{ParallelConfig, PrintConfig};
pub use display::{render, MatrixSummary};
pub use file_io::{ensure_output_dir, LoadError, MatrixFile};
pub use parallel::{par_multiply, ParallelError};

/// Element type used by the command line front end
pub type Element = i64;
