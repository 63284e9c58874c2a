//! Knot sequences and the problem-specific grids that generate them.
//!
//! The placement of knots controls both where the basis is refined and how
//! smooth it is: a knot repeated `m` times lowers the continuity of a
//! degree-`d` basis at that point from `C^(d - 1)` to `C^(d - m)`.
//!
//! ```
//! use bspace::grid::{ oscillator_knots, hydrogen_knots, LogGrid };
//!
//! let knots = oscillator_knots(100);
//! assert_eq!(knots.len(), 199);
//! assert!(knots.as_slice().windows(2).all(|w| w[0] <= w[1]));
//!
//! let knots = hydrogen_knots(3, 1, &LogGrid::default()).unwrap();
//! assert_eq!(knots.multiplicity(0.0), 3);
//! ```

use std::ops::Deref;
use crate::error::{ KnotError, XError };

/// A validated, non-decreasing sequence of finite knots.
#[derive(Clone, Debug, PartialEq)]
pub struct Knots(Vec<f64>);

impl Knots {
    /// Validate a raw knot sequence.
    pub fn new(values: Vec<f64>) -> Result<Self, KnotError> {
        if let Some((k, t)) = values.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(KnotError::NonFinite(k, *t));
        }
        if let Some((k, w))
            = values.windows(2).enumerate().find(|(_, w)| w[0] > w[1])
        {
            return Err(KnotError::Unordered(k, w[0], w[1]));
        }
        Ok(Self(values))
    }

    /// Sort a set of finite knots and validate the result.
    pub fn from_unsorted(mut values: Vec<f64>) -> Result<Self, KnotError> {
        values.sort_by(|l, r| l.total_cmp(r));
        Self::new(values)
    }

    /// Get a reference to the knot values.
    pub fn as_slice(&self) -> &[f64] { &self.0 }

    /// Return the number of times `x` appears in the sequence.
    pub fn multiplicity(&self, x: f64) -> usize {
        self.0.iter().filter(|t| **t == x).count()
    }

    /// Return the most-repeated knot along with its multiplicity, or `None` if
    /// the sequence is empty.
    pub fn max_multiplicity(&self) -> Option<(f64, usize)> {
        self.0.chunk_by(|a, b| a == b)
            .map(|run| (run[0], run.len()))
            .fold(None, |acc, (t, m)| {
                match acc {
                    Some((_, m0)) if m0 >= m => acc,
                    _ => Some((t, m)),
                }
            })
    }

    /// Return the left and right ends of the sequence.
    ///
    /// *Panics if the sequence is empty*.
    pub fn span(&self) -> (f64, f64) {
        (self.0[0], self.0[self.0.len() - 1])
    }

    /// Unwrap into the raw knot values.
    pub fn into_inner(self) -> Vec<f64> { self.0 }
}

impl Deref for Knots {
    type Target = [f64];

    fn deref(&self) -> &[f64] { &self.0 }
}

/// Knots for the harmonic oscillator.
///
/// Places `±i²/1000` for `i` in `1..half_points` plus the origin, giving a grid
/// symmetric about 0 that is densest where the low-lying wavefunctions curve
/// most strongly.
pub fn oscillator_knots(half_points: usize) -> Knots {
    let mut knots: Vec<f64> = Vec::with_capacity(2 * half_points);
    knots.push(0.0);
    for i in 1..half_points {
        let t = (i * i) as f64 / 1000.0;
        knots.push(t);
        knots.push(-t);
    }
    knots.sort_by(|l, r| l.total_cmp(r));
    Knots(knots)
}

/// Parameters of a logarithmically spaced radial grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogGrid {
    /// Lower bound, `r_min > 0` (default: `0.01`).
    pub r_min: f64,
    /// Upper bound, `r_max > r_min` (default: `2000`).
    pub r_max: f64,
    /// Number of points after `r_min` (default: `300`).
    pub points: usize,
}

impl Default for LogGrid {
    fn default() -> Self {
        Self { r_min: 1.0 / 100.0, r_max: 2000.0, points: 300 }
    }
}

impl LogGrid {
    /// Generate `r_min * step^i` for `i` in `1..=points`, where
    /// `step = (r_max / r_min)^(1 / points)`.
    pub fn generate(&self) -> Result<Vec<f64>, KnotError> {
        KnotError::check_log_bounds(self.r_min, self.r_max)?;
        KnotError::check_points(self.points)?;
        let step = (self.r_max / self.r_min).powf((self.points as f64).recip());
        let r: Vec<f64>
            = (1..=self.points)
            .map(|i| self.r_min * step.powi(i as i32))
            .collect();
        Ok(r)
    }
}

/// Number of zero knots placed at the origin of a radial grid for a degree-`d`
/// basis and orbital angular momentum `l`.
///
/// A basis function built on `m` coincident knots at the origin behaves like
/// `r^(d + 1 - m)` there, so `d + 1 - l` zeros reproduce the `r^l` behavior of
/// the radial wavefunction. At least one zero is always placed.
///
/// Returns [`XError::BadAngularMomentum`] if `l < 0`.
pub fn radial_zero_count(degree: usize, l: i32) -> Result<usize, XError> {
    XError::check_l(l)?;
    Ok((degree + 1).saturating_sub(l as usize).max(1))
}

/// Knots for the radial hydrogen problem.
///
/// Returns [`XError::BadAngularMomentum`] if `l < 0`.
pub fn hydrogen_knots(degree: usize, l: i32, grid: &LogGrid) -> Result<Knots, XError> {
    let zeros = radial_zero_count(degree, l)?;
    let mut knots: Vec<f64> = vec![0.0; zeros];
    knots.append(&mut grid.generate()?);
    Ok(Knots::new(knots)?)
}
