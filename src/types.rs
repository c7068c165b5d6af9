//! Basic types and error definitions.

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

pub use ndarray_linalg::{c32, c64, Lapack, Scalar};

/// Precondition violations on the dimensions of the input pair.
///
/// Shape problems are detected before any call into the numerical
/// backend and are fixable by the caller.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("column counts differ: first matrix has {left} columns, second has {right}")]
    ColumnMismatch { left: usize, right: usize },
    #[error("{rows} stacked rows do not exceed the {cols} shared columns")]
    NotEnoughRows { rows: usize, cols: usize },
}

#[derive(Error, Debug)]
pub enum GsvdError {
    /// The input pair violates a dimension precondition.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),
    /// A backend factorization failed. Propagated unchanged; there is
    /// no safe local repair for numerical non-convergence.
    #[error("numerical factorization failed: {0}")]
    Numerical(#[from] LinalgError),
}

pub type Result<T> = std::result::Result<T, GsvdError>;
