//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length objects encounters
/// objects with unequal length.
#[derive(Debug, Error)]
#[error("encountered objects with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a knot sequence or knot grid parameter is invalid.
#[derive(Debug, Error)]
pub enum KnotError {
    /// Returned when a knot value is NaN or infinite.
    #[error("knot values must be finite; got {1} at index {0}")]
    NonFinite(usize, f64),

    /// Returned when a knot is smaller than its predecessor.
    #[error("knots must be non-decreasing; got t[{0}] = {1} > t[{0} + 1] = {2}")]
    Unordered(usize, f64, f64),

    /// Returned when the bounds of a logarithmic grid are not `0 < min < max`.
    #[error("logarithmic grid bounds must satisfy 0 < r_min < r_max; got {0} and {1}")]
    BadLogBounds(f64, f64),

    /// Returned when a grid is requested with no points.
    #[error("grid point count must be greater than 0")]
    NoPoints,
}

impl KnotError {
    pub(crate) fn check_log_bounds(r_min: f64, r_max: f64)
        -> Result<(), Self>
    {
        (r_min > 0.0 && r_max > r_min && r_max.is_finite())
            .then_some(())
            .ok_or(Self::BadLogBounds(r_min, r_max))
    }

    pub(crate) fn check_points(points: usize) -> Result<(), Self> {
        (points != 0).then_some(()).ok_or(Self::NoPoints)
    }
}

/// Returned from basis construction in [`bspline`][crate::bspline].
#[derive(Debug, Error)]
pub enum BasisError {
    /// Returned when the knot sequence is too short to support a single basis
    /// function of the requested degree.
    #[error("degree-{degree} basis requires at least {need} knots; got {got}")]
    TooFewKnots { degree: usize, need: usize, got: usize },

    /// Returned when a knot is repeated more than `degree + 1` times.
    #[error("knot {0} has multiplicity {1}, exceeding degree + 1 = {2}")]
    Multiplicity(f64, usize, usize),

    /// [`KnotError`]
    #[error("knot error: {0}")]
    Knot(#[from] KnotError),
}

/// Returned from bilinear form integration in
/// [`integrate`][crate::integrate].
#[derive(Debug, Error)]
pub enum IntegralError {
    /// Returned when an operator differentiates more times than the
    /// piecewise-polynomial basis supports.
    #[error("derivative order {0} exceeds basis degree {1}")]
    DerivativeOrder(u32, usize),
}

/// Returned from Galerkin solver functions.
#[derive(Debug, Error)]
pub enum XError {
    /// Returned when a negative orbital angular momentum is encountered.
    #[error("angular momentum must be non-negative; got {0}")]
    BadAngularMomentum(i32),

    /// Returned when the requested number of eigenstates is zero or larger
    /// than the basis.
    #[error("number of states must be in 1..={1}; got {0}")]
    BadNumStates(usize, usize),

    /// Returned when the overlap matrix fails a Cholesky factorization.
    #[error("overlap matrix is not positive-definite; check the knot grid and basis degree")]
    OverlapNotPositiveDefinite,

    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`KnotError`]
    #[error("knot error: {0}")]
    Knot(#[from] KnotError),

    /// [`BasisError`]
    #[error("basis error: {0}")]
    Basis(#[from] BasisError),

    /// [`IntegralError`]
    #[error("integration error: {0}")]
    Integral(#[from] IntegralError),

    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

impl XError {
    pub(crate) fn check_l(l: i32) -> Result<(), Self> {
        (l >= 0).then_some(()).ok_or(Self::BadAngularMomentum(l))
    }

    pub(crate) fn check_num_states(n_states: usize, basis_len: usize)
        -> Result<(), Self>
    {
        (1..=basis_len).contains(&n_states)
            .then_some(())
            .ok_or(Self::BadNumStates(n_states, basis_len))
    }
}
