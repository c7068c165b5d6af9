//! Collect all traits and other exports here.

pub use crate::compute_svd::{ComputeSVD, SVDData};
pub use crate::csd::{CSDData, ComputeCSD};
pub use crate::gsvd::{gsvd, GSVD};
pub use crate::helpers::{RelDiff, UnitaryDefect};
pub use crate::random_matrix::RandomMatrix;
pub use crate::types::{c32, c64, GsvdError, Result, Scalar, ShapeError};
