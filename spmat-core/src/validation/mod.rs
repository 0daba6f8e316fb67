//! Validation utilities
//!
//! Pure index/shape checks and text-line parsers with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_index, check_multiply_shape, check_same_shape};
pub use parsing::{parse_dimension, parse_triple};
