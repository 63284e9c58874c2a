//! Galerkin solution of the one-dimensional, time-independent Schrödinger
//! equation (TISE) in a B-spline basis.
//!
//! The pipeline is:
//! 1. assemble the Hamiltonian and overlap matrices over a [`Basis`];
//! 2. solve the generalized eigenvalue problem `H c = E S c`;
//! 3. rebuild each wavefunction as the linear combination `Σ cᵢ bᵢ(x)`.

use std::{ cmp, sync::Arc };
use log::{ debug, info };
use ndarray as nd;
use crate::{
    Arr1,
    assemble::assemble,
    bspline::Basis,
    eigen::solve_generalized,
    error::{ LengthError, XError },
    integrate::BilinearForm,
    operator::Operator,
};

pub type XResult<T> = Result<T, XError>;

/// A wavefunction expressed as a linear combination of basis functions.
///
/// The basis is shared, so cloning is cheap relative to the basis itself.
#[derive(Clone, Debug)]
pub struct Eigenfunction {
    coeffs: nd::Array1<f64>,
    basis: Arc<Basis>,
}

impl Eigenfunction {
    /// Pair a coefficient vector with a basis.
    ///
    /// Returns [`LengthError`] if the number of coefficients differs from the
    /// number of basis functions.
    pub fn new(coeffs: nd::Array1<f64>, basis: Arc<Basis>)
        -> Result<Self, LengthError>
    {
        LengthError::check(coeffs.len(), basis.len())?;
        Ok(Self { coeffs, basis })
    }

    /// Get a reference to the expansion coefficients.
    pub fn coeffs(&self) -> &nd::Array1<f64> { &self.coeffs }

    /// Get a reference to the underlying basis.
    pub fn basis(&self) -> &Arc<Basis> { &self.basis }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> f64 { self.eval_deriv(x, 0) }

    /// Evaluate the `n`-th derivative at `x`.
    pub fn eval_deriv(&self, x: f64, n: u32) -> f64 {
        self.basis.active(x)
            .map(|i| self.coeffs[i] * self.basis[i].eval_deriv(x, n))
            .sum()
    }

    /// Evaluate over an array of points.
    pub fn eval_array<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.eval(xk))
    }

    /// Multiply the expansion by a constant.
    pub fn scale(&mut self, a: f64) { self.coeffs *= a; }
}

/// A single eigenpair of the projected Hamiltonian.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Eigenspace {
    /// Energy
    pub e: f64,
    /// Wavefunction
    pub wf: Eigenfunction,
}

impl Eigenspace {
    /// Compare two `Eigenspace`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// Compute the lowest `n_states` eigenpairs of `hamiltonian` with respect to
/// `overlap` in `basis`.
///
/// Returns [`XError::BadNumStates`] unless `1 ≤ n_states ≤ basis.len()`.
pub fn solve(
    basis: Arc<Basis>,
    hamiltonian: &BilinearForm,
    overlap: &BilinearForm,
    n_states: usize,
) -> XResult<Vec<Eigenspace>>
{
    XError::check_num_states(n_states, basis.len())?;
    debug!(
        "solving {} states in a degree-{} basis of {} functions",
        n_states, basis.degree(), basis.len(),
    );
    let h = assemble(hamiltonian, &basis)?;
    let s = assemble(overlap, &basis)?;
    let (evals, evecs) = solve_generalized(h, s)?;
    let sols: Vec<Eigenspace>
        = evals.into_iter().zip(evecs.columns())
        .take(n_states)
        .map(|(e, c)| {
            Eigenfunction::new(c.to_owned(), Arc::clone(&basis))
                .map(|wf| Eigenspace { e, wf })
        })
        .collect::<Result<_, _>>()?;
    if let Some(gs) = sols.first() {
        info!("lowest eigenvalue: {:.10}", gs.e);
    }
    Ok(sols)
}

/// Simple record to keep track of a basis and the pair of bilinear forms
/// defining a problem in it.
#[derive(Clone, Debug)]
pub struct System {
    basis: Arc<Basis>,
    hamiltonian: BilinearForm,
    overlap: BilinearForm,
}

impl System {
    /// Create a new `System` from operator expressions for the Hamiltonian and
    /// the weight of the inner product.
    pub fn new(basis: Basis, hamiltonian: &Operator, weight: &Operator) -> Self {
        Self {
            basis: Arc::new(basis),
            hamiltonian: hamiltonian.into(),
            overlap: weight.into(),
        }
    }

    /// Create a new `System` whose inner product is the plain
    /// `∫ bᵢ bⱼ dx`.
    pub fn new_unweighted(basis: Basis, hamiltonian: &Operator) -> Self {
        Self {
            basis: Arc::new(basis),
            hamiltonian: hamiltonian.into(),
            overlap: BilinearForm::ScalarProduct,
        }
    }

    /// Get a reference to the basis.
    pub fn get_basis(&self) -> &Arc<Basis> { &self.basis }

    /// Get a reference to the Hamiltonian form.
    pub fn get_hamiltonian(&self) -> &BilinearForm { &self.hamiltonian }

    /// Get a reference to the overlap form.
    pub fn get_overlap(&self) -> &BilinearForm { &self.overlap }

    /// Assemble the Hamiltonian and overlap matrices.
    pub fn matrices(&self) -> XResult<(nd::Array2<f64>, nd::Array2<f64>)> {
        let h = assemble(&self.hamiltonian, &self.basis)?;
        let s = assemble(&self.overlap, &self.basis)?;
        Ok((h, s))
    }

    /// Thin interface to [`solve`].
    pub fn solve(&self, n_states: usize) -> XResult<Vec<Eigenspace>> {
        solve(Arc::clone(&self.basis), &self.hamiltonian, &self.overlap, n_states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::grid::Knots;

    // particle in a box [0, 1] with hard walls: E = (n π)² / 2
    //
    // triple end knots make every cubic vanish linearly at the walls
    fn infinite_well(n_states: usize) -> XResult<Vec<Eigenspace>> {
        let mut t: Vec<f64> = vec![0.0; 3];
        t.extend((1..40).map(|k| k as f64 / 40.0));
        t.extend([1.0; 3]);
        let basis = Basis::new(Knots::new(t).unwrap(), 3).unwrap();
        System::new_unweighted(basis, &(-0.5 * Operator::D(2))).solve(n_states)
    }

    #[test]
    fn particle_in_a_box() {
        let sols = infinite_well(3).unwrap();
        assert_eq!(sols.len(), 3);
        let pi2 = std::f64::consts::PI.powi(2);
        for (n, sol) in sols.iter().enumerate() {
            let exact = pi2 * ((n + 1) as f64).powi(2) / 2.0;
            assert_abs_diff_eq!(sol.e, exact, epsilon = 1e-4 * exact);
        }
        assert!(sols.windows(2).all(|w| w[0].cmp_energy(&w[1]) != Some(cmp::Ordering::Greater)));
    }

    #[test]
    fn bad_num_states() {
        assert!(matches!(infinite_well(0), Err(XError::BadNumStates(0, _))));
        let n = 41;
        assert!(matches!(infinite_well(n + 1), Err(XError::BadNumStates(..))));
        assert_eq!(infinite_well(n).unwrap().len(), n);
    }

    #[test]
    fn eigenfunction_is_pure() {
        let sols = infinite_well(2).unwrap();
        let wf = &sols[1].wf;
        for x in [0.1, 0.37, 0.5, 0.93] {
            assert_eq!(wf.eval(x).to_bits(), wf.eval(x).to_bits());
        }
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        assert_eq!(wf.eval_array(&x), wf.eval_array(&x));
        assert_eq!(wf.eval(-0.5), 0.0);
        assert_eq!(wf.eval(1.5), 0.0);
    }

    #[test]
    fn eigenfunction_dimension_mismatch() {
        let basis = Arc::clone(infinite_well(1).unwrap()[0].wf.basis());
        let n = basis.len();
        assert!(matches!(
            Eigenfunction::new(nd::Array1::zeros(n + 1), basis),
            Err(LengthError(_, _)),
        ));
    }

    #[test]
    fn derivatives_at_clamped_right_end() {
        let mut t: Vec<f64> = vec![0.0; 4];
        t.extend([0.5, 1.25, 2.0, 3.0]);
        t.extend([4.0; 4]);
        let basis = Arc::new(Basis::new(Knots::new(t).unwrap(), 3).unwrap());
        let coeffs: nd::Array1<f64>
            = (0..basis.len()).map(|i| (i as f64 + 1.0).powi(2)).collect();
        let wf = Eigenfunction::new(coeffs.clone(), Arc::clone(&basis)).unwrap();
        for x in [0.0, 4.0] {
            for n in 0..=3 {
                let direct: f64
                    = basis.iter().zip(&coeffs)
                    .map(|(b, c)| c * b.eval_deriv(x, n))
                    .sum();
                assert_abs_diff_eq!(wf.eval_deriv(x, n), direct, epsilon = 1e-10);
            }
        }
        // all-ones coefficients reproduce the constant 1
        let ones = Eigenfunction::new(nd::Array1::ones(basis.len()), basis).unwrap();
        assert_abs_diff_eq!(ones.eval(4.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ones.eval_deriv(4.0, 1), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn reconstruction_matches_basis_sum() {
        let sols = infinite_well(1).unwrap();
        let wf = &sols[0].wf;
        for x in [0.05, 0.25, 0.5, 0.8] {
            let direct: f64
                = wf.basis().iter().zip(wf.coeffs())
                .map(|(b, c)| c * b.eval(x))
                .sum();
            assert_abs_diff_eq!(wf.eval(x), direct, epsilon = 1e-14);
        }
    }
}
