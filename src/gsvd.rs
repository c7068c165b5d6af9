//! Generalized singular value decomposition of a matrix pair.
//!
//! The generalized singular value decomposition of two matrices
//! $A\in\mathbb{C}^{m\times k}$ and $B\in\mathbb{C}^{n\times k}$ with
//! $m + n > k$ is
//! $A = U_aD_aX^T$, $B = U_bD_bX^T$, where $U_a$ and $U_b$ are unitary,
//! $D_a$ and $D_b$ are non-negative diagonal scalings satisfying
//! $D_a^HD_a + D_b^HD_b = I$, and $X^T\in\mathbb{C}^{k\times k}$ is a
//! shared invertible right factor.
//!
//! The factorization is composed from two primitives: an SVD of the
//! row-stack of $A$ over $B$, followed by a cosine-sine decomposition of
//! the stack's left singular factor split at the row count of $A$.

use crate::compute_svd::{ComputeSVD, SVDData};
use crate::csd::{CSDData, ComputeCSD};
use crate::types::{GsvdError, Lapack, Result, Scalar, ShapeError};
use ndarray::{s, Array2, ArrayView2, Axis, Zip};
use ndarray_linalg::OperationNorm;

pub struct GSVD<A: Scalar> {
    /// Left unitary factor of the first matrix, square of size m
    pub ua: Array2<A>,
    /// Left unitary factor of the second matrix, square of size n
    pub ub: Array2<A>,
    /// Diagonal scaling of the first matrix, of size (m, k)
    pub da: Array2<A>,
    /// Diagonal scaling of the second matrix, of size (n, k)
    pub db: Array2<A>,
    /// The shared right factor, square of size k
    pub xt: Array2<A>,
}

/// Compute the generalized singular value decomposition of the pair
/// `(a, b)`. The two matrices must have the same column count k, and
/// their combined row count must exceed k.
pub fn gsvd<A: Scalar + Lapack>(a: ArrayView2<A>, b: ArrayView2<A>) -> Result<GSVD<A>> {
    let (m, left_cols) = a.dim();
    let (n, right_cols) = b.dim();

    if left_cols != right_cols {
        return Err(GsvdError::Shape(ShapeError::ColumnMismatch {
            left: left_cols,
            right: right_cols,
        }));
    }
    let k = left_cols;
    if m + n <= k {
        return Err(GsvdError::Shape(ShapeError::NotEnoughRows {
            rows: m + n,
            cols: k,
        }));
    }

    let mut stacked = Array2::<A>::zeros((m + n, k));
    stacked.slice_mut(s![..m, ..]).assign(&a);
    stacked.slice_mut(s![m.., ..]).assign(&b);

    // Since m + n > k the thin left factor is exactly the first k
    // columns of the full one; the remaining columns never reach the
    // output.
    let SVDData { u: q, s, vt: zt } = A::compute_svd(stacked.view())?;

    let CSDData { u1, u2, cs, vt } = A::compute_csd(q.view(), m)?;

    // Reconcile the singular value scaling and right rotation of the
    // stack with the right rotation of the cosine-sine step.
    let mut scaled_zt = zt;
    Zip::from(scaled_zt.axis_iter_mut(Axis(0)))
        .and(s.view())
        .for_each(|mut row, &item| row.map_inplace(|entry| *entry *= A::from_real(item)));
    let xt = vt.dot(&scaled_zt);

    let da = cs.slice(s![..m, ..]).to_owned();
    let db = cs.slice(s![m.., ..]).to_owned();

    Ok(GSVD {
        ua: u1,
        ub: u2,
        da,
        db,
        xt,
    })
}

impl<A: Scalar + Lapack> GSVD<A> {
    /// Compute the generalized singular value decomposition of `(a, b)`.
    pub fn compute_from(a: ArrayView2<A>, b: ArrayView2<A>) -> Result<GSVD<A>> {
        gsvd(a, b)
    }

    /// Reconstruct the first matrix of the pair from the factors.
    pub fn to_a(&self) -> Array2<A> {
        self.ua.dot(&self.da).dot(&self.xt)
    }

    /// Reconstruct the second matrix of the pair from the factors.
    pub fn to_b(&self) -> Array2<A> {
        self.ub.dot(&self.db).dot(&self.xt)
    }

    /// Frobenius norm of $D_a^HD_a + D_b^HD_b - I$. Small for a valid
    /// decomposition; a large value indicates an ill-posed input pair.
    pub fn pythagorean_defect(&self) -> A::Real {
        let da_h = self.da.t().map(|item| item.conj());
        let db_h = self.db.t().map(|item| item.conj());
        let gram = da_h.dot(&self.da) + db_h.dot(&self.db);
        let eye = Array2::<A>::eye(gram.nrows());
        (gram - eye).opnorm_fro().unwrap()
    }
}
