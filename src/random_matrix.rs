//! Generation of random matrices for various types.

use crate::types::{c32, c64, Lapack, Scalar};
use ndarray::Array2;
use ndarray_linalg::{JobSvd, SVDDCInto};
use num::complex::Complex;
use num::traits::cast::cast;
use rand::Rng;
use rand_distr::{Distribution, Normal};

pub trait RandomMatrix
where
    Self: Scalar + Lapack,
{
    /// Generate a random Gaussian matrix.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self>;

    /// Generate a random matrix with orthonormal columns. Requires
    /// rows >= cols.
    ///
    /// This function creates a normally distributed (rows, cols) random
    /// matrix and orthogonalizes its columns.
    fn random_orthonormal_cols<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self> {
        assert!(
            dimension.0 >= dimension.1,
            "Require rows >= cols to orthogonalize columns."
        );

        let mat = Self::random_gaussian(dimension, rng);

        let (u, _, _) = mat
            .svddc_into(JobSvd::Some)
            .expect("`random_orthonormal_cols`: SVD computation failed.");

        u.unwrap()
    }

    /// Generate a random matrix of the given dimension whose rank does
    /// not exceed `rank`.
    fn random_rank_deficient<R: Rng>(
        dimension: (usize, usize),
        rank: usize,
        rng: &mut R,
    ) -> Array2<Self> {
        let left = Self::random_gaussian((dimension.0, rank), rng);
        let right = Self::random_gaussian((rank, dimension.1), rng);

        left.dot(&right)
    }
}

macro_rules! random_matrix_real_impl {
    ($scalar:ty) => {
        impl RandomMatrix for $scalar {
            fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<$scalar> {
                let normal = Normal::new(0.0, 1.0).unwrap();
                Array2::from_shape_simple_fn(dimension, || {
                    cast::<f64, $scalar>(normal.sample(rng)).unwrap()
                })
            }
        }
    };
}

macro_rules! random_matrix_complex_impl {
    ($scalar:ty, $real:ty) => {
        impl RandomMatrix for $scalar {
            fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<$scalar> {
                let normal = Normal::new(0.0, 1.0).unwrap();
                Array2::from_shape_simple_fn(dimension, || {
                    let re = cast::<f64, $real>(normal.sample(rng)).unwrap();
                    let im = cast::<f64, $real>(normal.sample(rng)).unwrap();
                    Complex::new(re, im)
                })
            }
        }
    };
}

random_matrix_real_impl!(f32);
random_matrix_real_impl!(f64);
random_matrix_complex_impl!(c32, f32);
random_matrix_complex_impl!(c64, f64);
