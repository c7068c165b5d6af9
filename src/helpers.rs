//! Helper traits for measuring factorization quality.

use crate::types::{Lapack, Scalar};
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Ix2};
use ndarray_linalg::OperationNorm;

pub trait RelDiff {
    type A: Scalar;

    /// Return the relative Frobenius norm difference of `self` and `other`.
    fn rel_diff(&self, other: ArrayView2<Self::A>) -> <Self::A as Scalar>::Real;
}

impl<A, S> RelDiff for ArrayBase<S, Ix2>
where
    A: Scalar + Lapack,
    S: Data<Elem = A>,
{
    type A = A;

    fn rel_diff(&self, other: ArrayView2<A>) -> A::Real {
        let diff = self.to_owned() - &other;

        diff.opnorm_fro().unwrap() / other.opnorm_fro().unwrap()
    }
}

pub trait UnitaryDefect {
    type A: Scalar;

    /// Return the Frobenius norm of $M^HM - I$, which is small when the
    /// columns of $M$ are orthonormal.
    fn unitary_defect(&self) -> <Self::A as Scalar>::Real;
}

impl<A, S> UnitaryDefect for ArrayBase<S, Ix2>
where
    A: Scalar + Lapack,
    S: Data<Elem = A>,
{
    type A = A;

    fn unitary_defect(&self) -> A::Real {
        let gram = self.t().map(|item| item.conj()).dot(self);
        let eye = Array2::<A>::eye(gram.nrows());

        (gram - eye).opnorm_fro().unwrap()
    }
}
