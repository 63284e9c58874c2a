//! Radial equation of the hydrogen atom.
//!
//! For orbital angular momentum *l*, the radial wavefunction *R*(*r*) obeys
//! (atomic units)
//! ```text
//!    1 ⎛ d²    2 d    l (l + 1) ⎞   1
//! - -- ⎜--- + - -- - ---------- ⎟ R - - R = E R
//!    2 ⎝dr²   r dr      r²      ⎠   r
//! ```
//! with inner product `∫ r² R₁ R₂ dr`. Multiplying through by *r*² removes the
//! singular terms and turns the Jacobian into an explicit weight:
//! ```text
//! H = (-r² D² - 2 r D + l (l + 1) - 2 r) / 2
//! S = r²
//! ```
//! The bound spectrum is *E*ₙ = -1 / (2 *n*²) hartree for *n* > *l*.

use crate::{
    DEF_DEGREE,
    DEF_NUM_STATES,
    bspline::Basis,
    error::XError,
    grid::{ hydrogen_knots, LogGrid },
    operator::Operator,
    solve::{ Eigenspace, System, XResult },
};

/// Solver parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HydrogenConfig {
    /// Orbital angular momentum quantum number, `l ≥ 0`.
    pub l: i32,
    /// Polynomial degree of the basis (default: `3`).
    pub degree: usize,
    /// Number of eigenstates to return (default: `10`).
    pub n_states: usize,
    /// Radial grid following the zero knots at the origin.
    pub grid: LogGrid,
}

impl HydrogenConfig {
    /// Create with default parameters for a given `l`.
    ///
    /// Returns [`XError::BadAngularMomentum`] if `l < 0`.
    pub fn new(l: i32) -> XResult<Self> {
        XError::check_l(l)?;
        Ok(Self {
            l,
            degree: DEF_DEGREE,
            n_states: DEF_NUM_STATES,
            grid: LogGrid::default(),
        })
    }
}

/// The radial Hamiltonian multiplied through by `r²`, in hartree.
///
/// This is ½ (-X² D² - 2 X D + l (l + 1) - 2 X); without the factor of ½ the
/// same operator gives energies in rydberg, with a ground state at -1.
///
/// Returns [`XError::BadAngularMomentum`] if `l < 0`.
pub fn hamiltonian(l: i32) -> XResult<Operator> {
    XError::check_l(l)?;
    let l = l as f64;
    let h = 0.5 * (
        -Operator::X(2) * Operator::D(2)
        - 2.0 * Operator::X(1) * Operator::D(1)
        + l * (l + 1.0)
        - 2.0 * Operator::X(1)
    );
    Ok(h)
}

/// The radial volume element `r²`.
pub fn weight() -> Operator { Operator::X(2) }

/// Build the basis and forms for a given configuration.
pub fn system(config: &HydrogenConfig) -> XResult<System> {
    let h = hamiltonian(config.l)?;
    let knots = hydrogen_knots(config.degree, config.l, &config.grid)?;
    let basis = Basis::new(knots, config.degree)?;
    Ok(System::new(basis, &h, &weight()))
}

/// Compute the lowest `config.n_states` eigenstates.
pub fn solve(config: &HydrogenConfig) -> XResult<Vec<Eigenspace>> {
    system(config)?.solve(config.n_states)
}

/// Compute the ten lowest eigenstates for angular momentum `l` with default
/// parameters.
pub fn solve_radial_hydrogen(l: i32) -> XResult<Vec<Eigenspace>> {
    solve(&HydrogenConfig::new(l)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn exact(n: usize) -> f64 { -0.5 / (n * n) as f64 }

    #[test]
    fn rejects_negative_l() {
        assert!(matches!(HydrogenConfig::new(-1), Err(XError::BadAngularMomentum(-1))));
        let config = HydrogenConfig { l: -2, ..HydrogenConfig::new(0).unwrap() };
        assert!(matches!(solve(&config), Err(XError::BadAngularMomentum(-2))));
    }

    #[test]
    fn s_states() {
        let config = HydrogenConfig { n_states: 3, ..HydrogenConfig::new(0).unwrap() };
        let sols = solve(&config).unwrap();
        for (k, sol) in sols.iter().enumerate() {
            assert_abs_diff_eq!(sol.e, exact(k + 1), epsilon = 1e-4);
        }
        // R₁₀ = 2 e^(-r) up to sign and normalization
        let wf = &sols[0].wf;
        let ratio = wf.eval(2.0) / wf.eval(1.0);
        assert_abs_diff_eq!(ratio, (-1.0_f64).exp(), epsilon = 1e-4);
        assert!(wf.eval(0.0).abs() > 0.0);
    }

    #[test]
    fn p_states_start_at_n_2() {
        let config = HydrogenConfig { n_states: 2, ..HydrogenConfig::new(1).unwrap() };
        let sols = solve(&config).unwrap();
        assert_abs_diff_eq!(sols[0].e, exact(2), epsilon = 1e-4);
        assert_abs_diff_eq!(sols[1].e, exact(3), epsilon = 1e-4);
        // R ~ r near the origin
        assert_abs_diff_eq!(sols[0].wf.eval(0.0), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn hamiltonian_normal_form() {
        use crate::operator::NormalForm;
        let terms: Vec<(f64, u32, u32)>
            = NormalForm::from(hamiltonian(1).unwrap()).terms()
            .map(|t| (t.coeff, t.x_pow, t.d_order))
            .collect();
        assert_eq!(
            terms,
            vec![(1.0, 0, 0), (-1.0, 1, 0), (-1.0, 1, 1), (-0.5, 2, 2)],
        );
        assert!(matches!(hamiltonian(-1), Err(XError::BadAngularMomentum(-1))));
    }
}
