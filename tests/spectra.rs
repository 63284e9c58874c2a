use approx::assert_abs_diff_eq;
use ndarray as nd;
use ndarray_linalg::{ Cholesky, UPLO };
use bspace::{
    grid::{ hydrogen_knots, oscillator_knots, radial_zero_count, LogGrid },
    hydrogen::{ self, HydrogenConfig },
    oscillator::{ self, OscillatorConfig },
    solve::{ Eigenspace, System },
};

fn assert_b_orthonormal(sys: &System, sols: &[Eigenspace]) {
    let (_, s) = sys.matrices().unwrap();
    for (i, si) in sols.iter().enumerate() {
        let s_ci: nd::Array1<f64> = s.dot(si.wf.coeffs());
        for (j, sj) in sols.iter().enumerate() {
            let delta = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(sj.wf.coeffs().dot(&s_ci), delta, epsilon = 1e-8);
        }
    }
}

fn assert_ascending(sols: &[Eigenspace]) {
    assert!(sols.windows(2).all(|w| w[0].e <= w[1].e));
}

#[test]
fn oscillator_spectrum() {
    let sols = oscillator::solve_harmonic_oscillator().unwrap();
    assert_eq!(sols.len(), 10);
    assert_ascending(&sols);
    assert_abs_diff_eq!(sols[0].e, 0.5, epsilon = 1e-3);
    for w in sols[..5].windows(2) {
        assert_abs_diff_eq!(w[1].e - w[0].e, 1.0, epsilon = 2e-3);
    }
}

#[test]
fn oscillator_eigenvectors() {
    let config = OscillatorConfig { n_states: 5, ..Default::default() };
    let sys = oscillator::system(&config).unwrap();
    let sols = sys.solve(config.n_states).unwrap();
    assert_b_orthonormal(&sys, &sols);

    // ground state is a normalized Gaussian up to sign
    let gs = &sols[0].wf;
    let exact = |x: f64| std::f64::consts::PI.powf(-0.25) * (-x * x / 2.0).exp();
    let sign = gs.eval(0.0).signum();
    for x in [0.0, 0.5, 1.0, 2.0] {
        assert_abs_diff_eq!(sign * gs.eval(x), exact(x), epsilon = 1e-3);
    }
}

#[test]
fn hydrogen_s_spectrum() {
    let sols = hydrogen::solve_radial_hydrogen(0).unwrap();
    assert_eq!(sols.len(), 10);
    assert_ascending(&sols);
    assert_abs_diff_eq!(sols[0].e, -0.5, epsilon = 1e-3);
    assert_abs_diff_eq!(sols[1].e, -0.125, epsilon = 1e-3);
}

#[test]
fn hydrogen_p_spectrum() {
    let config = HydrogenConfig { n_states: 3, ..HydrogenConfig::new(1).unwrap() };
    let sols = hydrogen::solve(&config).unwrap();
    assert_eq!(sols.len(), 3);
    assert_ascending(&sols);
    assert_abs_diff_eq!(sols[0].e, -0.125, epsilon = 1e-3);
    // R₂₁ ∝ r e^(-r/2)
    let ratio = sols[0].wf.eval(4.0) / sols[0].wf.eval(2.0);
    assert_abs_diff_eq!(ratio, 2.0 * (-1.0_f64).exp(), epsilon = 1e-3);
}

#[test]
fn assembled_matrices_are_symmetric() {
    let systems = [
        oscillator::system(&OscillatorConfig::default()).unwrap(),
        hydrogen::system(&HydrogenConfig::new(2).unwrap()).unwrap(),
    ];
    for sys in systems.iter() {
        let (h, s) = sys.matrices().unwrap();
        assert_eq!(h, h.t());
        assert_eq!(s, s.t());
        assert!(s.cholesky(UPLO::Lower).is_ok());
    }
}

#[test]
fn knot_grids() {
    let osc = oscillator_knots(100);
    assert!(osc.windows(2).all(|w| w[0] <= w[1]));

    let grid = LogGrid::default();
    for l in 0..4 {
        let knots = hydrogen_knots(3, l, &grid).unwrap();
        assert!(knots.windows(2).all(|w| w[0] <= w[1]));
        assert!(knots.iter().all(|t| *t >= 0.0));
        assert_eq!(knots.multiplicity(0.0), radial_zero_count(3, l).unwrap());
        assert_eq!(knots.len(), radial_zero_count(3, l).unwrap() + grid.points);
    }
}
