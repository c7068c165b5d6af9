//! A simple trait to wrap SVD computation.

use crate::types::{Lapack, Result, Scalar};
use ndarray::{Array1, Array2, ArrayView2};
use ndarray_linalg::{JobSvd, SVDDCInto, SVDInto};

pub struct SVDData<A: Scalar> {
    /// The U matrix
    pub u: Array2<A>,
    /// The array of singular values
    pub s: Array1<A::Real>,
    /// The vt matrix
    pub vt: Array2<A>,
}

pub trait ComputeSVD {
    type A: Scalar;

    /// Compute the thin SVD. `u` has min(rows, cols) columns and `vt`
    /// has min(rows, cols) rows.
    fn compute_svd(arr: ArrayView2<Self::A>) -> Result<SVDData<Self::A>>;

    /// Compute the full SVD. `u` and `vt` are square.
    fn compute_svd_full(arr: ArrayView2<Self::A>) -> Result<SVDData<Self::A>>;
}

impl<A: Scalar + Lapack> ComputeSVD for A {
    type A = A;

    fn compute_svd(arr: ArrayView2<A>) -> Result<SVDData<A>> {
        let (u, s, vt) = arr.to_owned().svddc_into(JobSvd::Some)?;
        Ok(SVDData {
            u: u.unwrap(),
            s,
            vt: vt.unwrap(),
        })
    }

    fn compute_svd_full(arr: ArrayView2<A>) -> Result<SVDData<A>> {
        let (u, s, vt) = arr.to_owned().svd_into(true, true)?;
        Ok(SVDData {
            u: u.unwrap(),
            s,
            vt: vt.unwrap(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::RelDiff;
    use crate::random_matrix::RandomMatrix;
    use crate::types::{c32, c64};

    macro_rules! svd_shape_tests {
        ($($name:ident: $scalar:ty, $dim:expr, $tol:expr,)*) => {
            $(
            #[test]
            fn $name() {
                let (m, n) = $dim;
                let rank = std::cmp::min(m, n);

                let mut rng = rand::thread_rng();
                let mat = <$scalar>::random_gaussian((m, n), &mut rng);

                let thin = <$scalar>::compute_svd(mat.view()).unwrap();
                assert_eq!(thin.u.dim(), (m, rank));
                assert_eq!(thin.s.len(), rank);
                assert_eq!(thin.vt.dim(), (rank, n));

                let full = <$scalar>::compute_svd_full(mat.view()).unwrap();
                assert_eq!(full.u.dim(), (m, m));
                assert_eq!(full.vt.dim(), (n, n));

                let mut sigma = Array2::<$scalar>::zeros((m, n));
                for (index, &item) in full.s.iter().enumerate() {
                    sigma[[index, index]] = <$scalar>::from_real(item);
                }
                let actual = full.u.dot(&sigma).dot(&full.vt);
                assert!(actual.rel_diff(mat.view()) < $tol);
            }
            )*
        };
    }

    svd_shape_tests! {
        test_svd_f32_thin: f32, (12, 7), 1E-5,
        test_svd_f64_thin: f64, (12, 7), 1E-12,
        test_svd_c32_thin: c32, (12, 7), 1E-5,
        test_svd_c64_thin: c64, (12, 7), 1E-12,
        test_svd_f64_thick: f64, (7, 12), 1E-12,
        test_svd_c64_thick: c64, (7, 12), 1E-12,
    }
}
