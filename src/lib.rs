//! Generalized singular value decomposition (GSVD) of a matrix pair.
//!
//! Given $A\in\mathbb{C}^{m\times k}$ and $B\in\mathbb{C}^{n\times k}$
//! with $m + n > k$, [gsvd::gsvd] produces unitary $U_a$, $U_b$,
//! diagonal scalings $D_a$, $D_b$ and an invertible shared factor $X^T$
//! with $A = U_aD_aX^T$ and $B = U_bD_bX^T$ and
//! $D_a^HD_a + D_b^HD_b = I$. The element type may be any of `f32`,
//! `f64`, `c32`, `c64`.

pub mod compute_svd;
pub mod csd;
pub mod gsvd;
pub mod helpers;
pub mod prelude;
pub mod random_matrix;
pub mod types;

pub use compute_svd::{ComputeSVD, SVDData};
pub use csd::{CSDData, ComputeCSD};
pub use gsvd::{gsvd, GSVD};
pub use helpers::{RelDiff, UnitaryDefect};
pub use random_matrix::RandomMatrix;
pub use types::{GsvdError, Result, ShapeError};
