//! Cosine-sine decomposition of a matrix with orthonormal columns.
//!
//! For a matrix $X\in\mathbb{C}^{M\times q}$ with orthonormal columns,
//! split after row $p$ into blocks $X_1$ and $X_2$, the 2-by-1
//! cosine-sine decomposition is
//! $X_1 = U_1CV^H$, $X_2 = U_2SV^H$, where $U_1\in\mathbb{C}^{p\times p}$,
//! $U_2\in\mathbb{C}^{(M-p)\times (M-p)}$ and $V\in\mathbb{C}^{q\times q}$
//! are unitary, and $C$ and $S$ carry at most one real non-negative entry
//! per column with $C^HC + S^HS = I$. The entries of $C$ and $S$ are the
//! cosines and sines of the principal angles between the column span of
//! $X$ and the coordinate subspace selected by the row split.
//!
//! Lapack carries this factorization as `?uncsd2by1`, which neither lax
//! nor ndarray-linalg wrap. It is therefore built here from two standard
//! primitives: a full SVD of the top block, with the singular values
//! reordered ascending, followed by a Householder QR of the rotated
//! bottom block. The ascending order puts the columns of the rotated
//! bottom block in non-increasing norm order, so its triangular factor
//! stays numerically diagonal even when the top block is rank deficient
//! or zero.

use crate::compute_svd::{ComputeSVD, SVDData};
use crate::types::{Lapack, Result, Scalar};
use ndarray::{s, Array2, ArrayView2};
use ndarray_linalg::QR;

pub struct CSDData<A: Scalar> {
    /// Left unitary factor of the top block, square of size p
    pub u1: Array2<A>,
    /// Left unitary factor of the bottom block, square of size M - p
    pub u2: Array2<A>,
    /// The stacked cosine-sine matrix of size (M, q); rows below p hold
    /// the sine block
    pub cs: Array2<A>,
    /// The shared right factor, square of size q
    pub vt: Array2<A>,
}

pub trait ComputeCSD {
    type A: Scalar;

    /// Compute the 2-by-1 cosine-sine decomposition of `x`, split after
    /// row `p`. The columns of `x` must be orthonormal.
    fn compute_csd(x: ArrayView2<Self::A>, p: usize) -> Result<CSDData<Self::A>>;
}

impl<A: Scalar + Lapack> ComputeCSD for A {
    type A = A;

    fn compute_csd(x: ArrayView2<A>, p: usize) -> Result<CSDData<A>> {
        let rows = x.nrows();
        let cols = x.ncols();
        assert!(p <= rows, "Row split {} exceeds the row count {}", p, rows);

        let bottom_rows = rows - p;
        let x1 = x.slice(s![..p, ..]);
        let x2 = x.slice(s![p.., ..]);

        let SVDData { u, s: c, vt } = A::compute_svd_full(x1)?;
        let nvals = c.len();
        // Columns of x1 with no singular value attached carry a cosine of
        // zero. They go first so that the effective cosines are ascending.
        let lead = cols - nvals;

        let mut u1 = Array2::<A>::zeros((p, p));
        for (index, col) in u.columns().into_iter().enumerate() {
            if index < nvals {
                u1.column_mut(nvals - 1 - index).assign(&col);
            } else {
                u1.column_mut(index).assign(&col);
            }
        }

        let mut v1t = Array2::<A>::zeros((cols, cols));
        for (index, row) in vt.rows().into_iter().enumerate() {
            if index < nvals {
                v1t.row_mut(lead + nvals - 1 - index).assign(&row);
            } else {
                v1t.row_mut(index - nvals).assign(&row);
            }
        }

        let mut cs = Array2::<A>::zeros((rows, cols));
        for index in 0..nvals {
            cs[[index, lead + index]] = A::from_real(c[nvals - 1 - index]);
        }

        // Rotate the bottom block onto the right factor. Its columns are
        // mutually orthogonal with norms equal to the sines, in
        // non-increasing order, so the QR below exposes them on the
        // diagonal of the triangular factor.
        let v1 = v1t.t().map(|item| item.conj());
        let rotated = x2.dot(&v1);

        let ncs = std::cmp::min(bottom_rows, cols);
        let mut square = Array2::<A>::zeros((bottom_rows, bottom_rows));
        square
            .slice_mut(s![.., ..ncs])
            .assign(&rotated.slice(s![.., ..ncs]));

        let (mut u2, r) = if bottom_rows > 0 {
            square.qr()?
        } else {
            (Array2::zeros((0, 0)), Array2::zeros((0, 0)))
        };

        // Make the sines real and non-negative by pushing the phases of
        // the diagonal of r into the columns of u2.
        for index in 0..ncs {
            let item = r[[index, index]];
            let magnitude = item.abs();
            if magnitude != A::real(0.0) {
                let phase = item.div_real(magnitude);
                u2.column_mut(index).map_inplace(|entry| *entry *= phase);
            }
            cs[[p + index, index]] = A::from_real(magnitude);
        }

        Ok(CSDData {
            u1,
            u2,
            cs,
            vt: v1t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{RelDiff, UnitaryDefect};
    use crate::random_matrix::RandomMatrix;
    use crate::types::{c32, c64};
    use ndarray::s;
    use ndarray_linalg::OperationNorm;

    macro_rules! csd_tests {
        ($($name:ident: $scalar:ty, $dim:expr, $tol:expr,)*) => {
            $(
            #[test]
            fn $name() {
                let (rows, split, cols) = $dim;

                let mut rng = rand::thread_rng();
                let x = <$scalar>::random_orthonormal_cols((rows, cols), &mut rng);

                let csd = <$scalar>::compute_csd(x.view(), split).unwrap();

                assert_eq!(csd.u1.dim(), (split, split));
                assert_eq!(csd.u2.dim(), (rows - split, rows - split));
                assert_eq!(csd.cs.dim(), (rows, cols));
                assert_eq!(csd.vt.dim(), (cols, cols));

                let top = csd.u1.dot(&csd.cs.slice(s![..split, ..])).dot(&csd.vt);
                let bottom = csd.u2.dot(&csd.cs.slice(s![split.., ..])).dot(&csd.vt);
                assert!(top.rel_diff(x.slice(s![..split, ..])) < $tol);
                assert!(bottom.rel_diff(x.slice(s![split.., ..])) < $tol);

                assert!(csd.u1.unitary_defect() < $tol);
                assert!(csd.u2.unitary_defect() < $tol);
                assert!(csd.vt.unitary_defect() < $tol);

                // The columns of cs must carry cosine-sine pairs.
                let cs_h = csd.cs.t().map(|item| item.conj());
                let gram = cs_h.dot(&csd.cs);
                let eye = ndarray::Array2::<$scalar>::eye(cols);
                assert!((gram - eye).opnorm_fro().unwrap() < $tol);
            }
            )*
        };
    }

    csd_tests! {
        test_csd_f32_tall_split: f32, (12, 7, 5), 1E-4,
        test_csd_f64_tall_split: f64, (12, 7, 5), 1E-10,
        test_csd_c32_tall_split: c32, (12, 7, 5), 1E-4,
        test_csd_c64_tall_split: c64, (12, 7, 5), 1E-10,
        test_csd_f64_short_top: f64, (8, 3, 6), 1E-10,
        test_csd_c64_short_top: c64, (8, 3, 6), 1E-10,
        test_csd_f64_short_bottom: f64, (8, 6, 5), 1E-10,
        test_csd_c64_short_bottom: c64, (8, 6, 5), 1E-10,
    }
}
