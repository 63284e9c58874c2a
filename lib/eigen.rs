//! Generalized symmetric-definite eigenvalue problems.
//!
//! The Galerkin basis is not orthogonal, so the projected Schrödinger equation
//! takes the form `H c = E S c` with `S` the (positive-definite) overlap
//! matrix. This is handed to LAPACK's `sygv` through [`ndarray_linalg`].

use ndarray as nd;
use ndarray_linalg::{ self as la, Cholesky, EighInto };
use crate::error::{ LengthError, XError };

pub type EigenResult<T> = Result<T, XError>;

/// Solve `A x = λ B x` for symmetric `A` and symmetric positive-definite `B`.
///
/// Returns all eigenvalues in ascending order alongside a matrix whose `k`-th
/// column is the eigenvector for the `k`-th eigenvalue. Eigenvectors are
/// normalized such that `xᵢᵀ B xⱼ = δᵢⱼ`.
///
/// Returns [`XError::OverlapNotPositiveDefinite`] if `B` cannot be
/// Cholesky-factorized and [`XError::Length`] if the matrices are not square
/// and of equal size.
pub fn solve_generalized(a: nd::Array2<f64>, b: nd::Array2<f64>)
    -> EigenResult<(nd::Array1<f64>, nd::Array2<f64>)>
{
    LengthError::check(a.nrows(), a.ncols())?;
    LengthError::check(b.nrows(), b.ncols())?;
    LengthError::check(a.nrows(), b.nrows())?;
    b.cholesky(la::UPLO::Lower)
        .map_err(|_| XError::OverlapNotPositiveDefinite)?;
    let (evals, (evecs, _)): (nd::Array1<f64>, (nd::Array2<f64>, nd::Array2<f64>))
        = (a, b).eigh_into(la::UPLO::Lower)?;
    Ok((evals, evecs))
}
