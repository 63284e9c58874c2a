//! The one-dimensional quantum harmonic oscillator.
//!
//! In natural units (*ħ* = *m* = *ω* = 1) the Hamiltonian is
//! ```text
//! H = (-D² + x²) / 2
//! ```
//! with spectrum *E*ₙ = *n* + 1/2.
//!
//! ```no_run
//! let sols = bspace::oscillator::solve_harmonic_oscillator().unwrap();
//! assert!((sols[0].e - 0.5).abs() < 1e-3);
//! ```

use crate::{
    DEF_DEGREE,
    DEF_NUM_STATES,
    bspline::Basis,
    grid::oscillator_knots,
    operator::Operator,
    solve::{ Eigenspace, System, XResult },
};

/// Solver parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OscillatorConfig {
    /// Polynomial degree of the basis (default: `3`).
    pub degree: usize,
    /// Number of eigenstates to return (default: `10`).
    pub n_states: usize,
    /// Knots are placed at `±i²/1000` for `i` in `1..half_points`, plus the
    /// origin (default: `100`).
    pub half_points: usize,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            degree: DEF_DEGREE,
            n_states: DEF_NUM_STATES,
            half_points: 100,
        }
    }
}

/// The oscillator Hamiltonian `(-D² + x²) / 2`.
pub fn hamiltonian() -> Operator {
    0.5 * (-Operator::D(2) + Operator::X(2))
}

/// Build the basis and forms for a given configuration.
pub fn system(config: &OscillatorConfig) -> XResult<System> {
    let knots = oscillator_knots(config.half_points);
    let basis = Basis::new(knots, config.degree)?;
    Ok(System::new_unweighted(basis, &hamiltonian()))
}

/// Compute the lowest `config.n_states` eigenstates.
pub fn solve(config: &OscillatorConfig) -> XResult<Vec<Eigenspace>> {
    system(config)?.solve(config.n_states)
}

/// Compute the ten lowest eigenstates with default parameters.
pub fn solve_harmonic_oscillator() -> XResult<Vec<Eigenspace>> {
    solve(&OscillatorConfig::default())
}
