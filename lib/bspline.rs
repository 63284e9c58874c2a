//! B-spline bases over arbitrary knot sequences.
//!
//! A degree-`d` basis over knots `t[0] ≤ ... ≤ t[K - 1]` has `K - d - 1`
//! functions; the `i`-th is supported on `[t[i], t[i + d + 1]]` and is defined
//! by the Cox-de Boor recursion
//! ```text
//! B[i, 0](x) = 1 if t[i] ≤ x < t[i + 1] else 0
//!
//!              x - t[i]                    t[i + p + 1] - x
//! B[i, p](x) = ------------- B[i, p - 1] + ----------------------- B[i + 1, p - 1]
//!              t[i + p] - t[i]             t[i + p + 1] - t[i + 1]
//! ```
//! with `0 / 0 = 0`. Here the recursion is carried out on polynomials rather
//! than values, so that each basis function is stored exactly as one
//! [`Poly`] per knot interval in its support. Evaluation of any derivative and
//! integration of products then reduce to polynomial arithmetic.
//!
//! ```
//! use bspace::{ bspline::Basis, grid::Knots };
//!
//! let knots = Knots::new(vec![0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0]).unwrap();
//! let basis = Basis::new(knots, 2).unwrap();
//! assert_eq!(basis.len(), 4);
//! let total: f64 = basis.iter().map(|b| b.eval(0.3)).sum();
//! assert!((total - 1.0).abs() < 1e-12);
//! ```

use std::ops::Index;
use log::debug;
use num_traits::{ One, Zero };
use crate::{
    error::BasisError,
    grid::Knots,
    poly::Poly,
};

pub type BasisResult<T> = Result<T, BasisError>;

/// One polynomial piece of a B-spline, living on a single knot interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    /// Index `k` of the knot interval `[t[k], t[k + 1]]`.
    pub interval: usize,
    /// Left end of the interval.
    pub a: f64,
    /// Right end of the interval.
    pub b: f64,
    /// The piece as a polynomial in `u = x - (a + b) / 2`.
    pub poly: Poly,
    // whether the right end belongs to this piece; true only for the last
    // interval of the knot sequence
    closed: bool,
}

impl Piece {
    /// Midpoint of the interval.
    pub fn center(&self) -> f64 { (self.a + self.b) / 2.0 }

    /// Half the width of the interval.
    pub fn half_width(&self) -> f64 { (self.b - self.a) / 2.0 }

    /// Return `true` if `x` lies in this piece's interval.
    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && (x < self.b || (self.closed && x == self.b))
    }
}

/// A single basis function.
#[derive(Clone, Debug, PartialEq)]
pub struct BSpline {
    degree: usize,
    pieces: Vec<Piece>,
}

impl BSpline {
    /// Polynomial degree.
    pub fn degree(&self) -> usize { self.degree }

    /// Pieces in order of increasing interval index.
    pub fn pieces(&self) -> &[Piece] { &self.pieces }

    /// Closed interval outside of which the function vanishes.
    ///
    /// *Panics if the function has no pieces, which cannot happen for a
    /// function obtained from a [`Basis`]*.
    pub fn support(&self) -> (f64, f64) {
        (self.pieces[0].a, self.pieces[self.pieces.len() - 1].b)
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> f64 { self.eval_deriv(x, 0) }

    /// Evaluate the `n`-th derivative at `x`.
    ///
    /// At a knot, the value is taken from the interval to the right.
    pub fn eval_deriv(&self, x: f64, n: u32) -> f64 {
        self.pieces.iter()
            .find(|piece| piece.contains(x))
            .map(|piece| {
                if n == 0 {
                    piece.poly.eval(x - piece.center())
                } else {
                    piece.poly.deriv(n).eval(x - piece.center())
                }
            })
            .unwrap_or(0.0)
    }
}

/// An ordered set of B-splines generated from a knot sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Basis {
    knots: Knots,
    degree: usize,
    funcs: Vec<BSpline>,
    // index of the rightmost knot interval with non-zero width
    last_interval: usize,
}

impl Basis {
    /// Generate the full degree-`degree` basis over `knots`.
    ///
    /// Requires at least `degree + 2` knots and that no knot is repeated more
    /// than `degree + 1` times.
    pub fn new(knots: Knots, degree: usize) -> BasisResult<Self> {
        let nk = knots.len();
        if nk < degree + 2 {
            return Err(BasisError::TooFewKnots {
                degree,
                need: degree + 2,
                got: nk,
            });
        }
        if let Some((t, m)) = knots.max_multiplicity() {
            if m > degree + 1 {
                return Err(BasisError::Multiplicity(t, m, degree + 1));
            }
        }
        let n = nk - degree - 1;
        let last_interval
            = (0..nk - 1).rev()
            .find(|&k| knots[k] < knots[k + 1])
            .unwrap_or(0);
        let mut pieces: Vec<Vec<Piece>> = vec![Vec::new(); n];
        for k in (0..nk - 1).filter(|&k| knots[k] < knots[k + 1]) {
            let a = knots[k];
            let b = knots[k + 1];
            let c = (a + b) / 2.0;
            let local = cox_de_boor(&knots, degree, k, c);
            // local[j] holds B[k - degree + j, degree]
            for (j, poly) in local.into_iter().enumerate() {
                let Some(i) = (k + j).checked_sub(degree) else { continue; };
                if i >= n || poly.is_zero() { continue; }
                pieces[i].push(Piece {
                    interval: k,
                    a,
                    b,
                    poly,
                    closed: k == last_interval,
                });
            }
        }
        let funcs: Vec<BSpline>
            = pieces.into_iter()
            .map(|pieces| BSpline { degree, pieces })
            .collect();
        debug!(
            "generated {} degree-{} B-splines over {} knots on [{}, {}]",
            n, degree, nk, knots[0], knots[nk - 1],
        );
        Ok(Self { knots, degree, funcs, last_interval })
    }

    /// Get a reference to the knot sequence.
    pub fn knots(&self) -> &Knots { &self.knots }

    /// Polynomial degree of every function.
    pub fn degree(&self) -> usize { self.degree }

    /// Number of functions.
    pub fn len(&self) -> usize { self.funcs.len() }

    /// Return `true` if the basis contains no functions.
    pub fn is_empty(&self) -> bool { self.funcs.is_empty() }

    /// Iterate over all functions.
    pub fn iter(&self) -> std::slice::Iter<'_, BSpline> { self.funcs.iter() }

    /// Get a reference to the `i`-th function, if it exists.
    pub fn get(&self, i: usize) -> Option<&BSpline> { self.funcs.get(i) }

    /// Closed interval spanned by the basis.
    pub fn domain(&self) -> (f64, f64) { self.knots.span() }

    /// Return `true` if functions `i` and `j` share a knot interval.
    pub fn overlaps(&self, i: usize, j: usize) -> bool {
        i.abs_diff(j) <= self.degree
    }

    /// Return the range of function indices that may be non-zero at `x`.
    pub fn active(&self, x: f64) -> std::ops::Range<usize> {
        let (lo, hi) = self.domain();
        if x < lo || x > hi || self.is_empty() { return 0..0; }
        let k = self.knots.partition_point(|t| *t <= x)
            .saturating_sub(1)
            .min(self.last_interval);
        let start = k.saturating_sub(self.degree);
        let end = (k + 1).min(self.len());
        start.min(end)..end
    }
}

impl Index<usize> for Basis {
    type Output = BSpline;

    fn index(&self, i: usize) -> &BSpline { &self.funcs[i] }
}

impl<'a> IntoIterator for &'a Basis {
    type Item = &'a BSpline;
    type IntoIter = std::slice::Iter<'a, BSpline>;

    fn into_iter(self) -> Self::IntoIter { self.funcs.iter() }
}

// weight `(x - t0) / (t1 - t0)` as a polynomial in u = x - c; zero when the
// denominator vanishes
fn rising(t0: f64, t1: f64, c: f64) -> Option<Poly> {
    let w = t1 - t0;
    (w > 0.0).then(|| Poly::linear((c - t0) / w, w.recip()))
}

// weight `(t1 - x) / (t1 - t0)` as a polynomial in u = x - c
fn falling(t0: f64, t1: f64, c: f64) -> Option<Poly> {
    let w = t1 - t0;
    (w > 0.0).then(|| Poly::linear((t1 - c) / w, -w.recip()))
}

// compute B[i, degree] on the non-degenerate interval [t[k], t[k + 1]] for
// i = k - degree, ..., k, as polynomials in u = x - c
//
// functions with negative index or running off the right end of the knot
// sequence are left as zero; they never contribute to a function of the basis
fn cox_de_boor(knots: &[f64], degree: usize, k: usize, c: f64) -> Vec<Poly> {
    let nk = knots.len();
    let base = k as isize - degree as isize;
    let mut prev: Vec<Poly> = vec![Poly::zero(); degree + 1];
    prev[degree] = Poly::one();
    for p in 1..=degree {
        let mut next: Vec<Poly> = vec![Poly::zero(); degree + 1];
        for i in (k as isize - p as isize)..=(k as isize) {
            if i < 0 || i as usize + p + 1 >= nk { continue; }
            let iu = i as usize;
            let slot = (i - base) as usize;
            let mut acc = Poly::zero();
            if let Some(w) = rising(knots[iu], knots[iu + p], c) {
                acc = &acc + &(&w * &prev[slot]);
            }
            if slot + 1 <= degree {
                if let Some(w) = falling(knots[iu + 1], knots[iu + p + 1], c) {
                    acc = &acc + &(&w * &prev[slot + 1]);
                }
            }
            next[slot] = acc;
        }
        prev = next;
    }
    prev
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::error::KnotError;

    fn clamped(degree: usize) -> Basis {
        let mut t = vec![0.0; degree + 1];
        t.extend([0.5, 1.25, 2.0, 3.0]);
        t.extend(vec![4.0; degree + 1]);
        Basis::new(Knots::new(t).unwrap(), degree).unwrap()
    }

    #[test]
    fn basis_size() {
        for d in 0..5 {
            let basis = clamped(d);
            assert_eq!(basis.len(), basis.knots().len() - d - 1);
            assert_eq!(basis.degree(), d);
        }
    }

    #[test]
    fn partition_of_unity() {
        for d in 0..5 {
            let basis = clamped(d);
            for x in [0.0, 0.1, 0.5, 1.0, 1.7, 2.0, 2.99, 3.5, 4.0] {
                let total: f64 = basis.iter().map(|b| b.eval(x)).sum();
                assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
                let dtotal: f64 = basis.iter().map(|b| b.eval_deriv(x, 1)).sum();
                assert_abs_diff_eq!(dtotal, 0.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn non_negative_with_local_support() {
        let basis = clamped(3);
        for (i, b) in basis.iter().enumerate() {
            let (lo, hi) = b.support();
            assert_eq!(lo, basis.knots()[i]);
            assert_eq!(hi, basis.knots()[i + 4]);
            assert_eq!(b.eval(lo - 0.1), 0.0);
            assert_eq!(b.eval(hi + 0.1), 0.0);
            for k in 0..=40 {
                let x = lo + (hi - lo) * k as f64 / 40.0;
                assert!(b.eval(x) >= -1e-14);
            }
        }
    }

    #[test]
    fn linear_hat_functions() {
        let knots = Knots::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let basis = Basis::new(knots, 1).unwrap();
        assert_eq!(basis.len(), 2);
        assert_abs_diff_eq!(basis[0].eval(0.5), 0.5, epsilon = 1e-14);
        assert_abs_diff_eq!(basis[0].eval(1.0), 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(basis[0].eval(1.5), 0.5, epsilon = 1e-14);
        assert_abs_diff_eq!(basis[1].eval_deriv(2.5, 1), -1.0, epsilon = 1e-14);
        assert_eq!(basis[1].eval(3.0), 0.0);
    }

    #[test]
    fn repeated_zero_knots_set_power_law() {
        // m coincident knots at the origin: lowest function ~ r^(d + 1 - m)
        let d = 3;
        for m in 1..=d + 1 {
            let mut t = vec![0.0; m];
            t.extend((1..=8).map(|k| k as f64));
            let basis = Basis::new(Knots::new(t).unwrap(), d).unwrap();
            let b = &basis[0];
            let p = (d + 1 - m) as i32;
            let ratio = b.eval(1e-3) / b.eval(2e-3);
            assert_abs_diff_eq!(ratio, 0.5_f64.powi(p), epsilon = 1e-2);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let basis = clamped(3);
        let h = 1e-6;
        for b in basis.iter() {
            for x in [0.3, 0.9, 1.6, 2.4, 3.3] {
                let fd = (b.eval(x + h) - b.eval(x - h)) / (2.0 * h);
                assert_abs_diff_eq!(b.eval_deriv(x, 1), fd, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn active_range() {
        let basis = clamped(2);
        for x in [0.0, 0.3, 1.25, 2.2, 3.9, 4.0] {
            let active = basis.active(x);
            for (i, b) in basis.iter().enumerate() {
                if !active.contains(&i) { assert_eq!(b.eval(x), 0.0); }
            }
        }
        assert!(basis.active(-1.0).is_empty());
        assert!(basis.active(5.0).is_empty());
    }

    #[test]
    fn active_range_at_clamped_right_end() {
        // the right end knot is repeated degree + 1 times; derivatives of
        // several functions are non-zero there even though only the last one
        // has a non-zero value
        let basis = clamped(3);
        let (_, hi) = basis.domain();
        let active = basis.active(hi);
        assert_eq!(active, basis.len() - 4..basis.len());
        for n in 0..=3 {
            let direct: f64
                = basis.iter().map(|b| b.eval_deriv(hi, n)).sum();
            let via_active: f64
                = active.clone().map(|i| basis[i].eval_deriv(hi, n)).sum();
            assert_abs_diff_eq!(via_active, direct, epsilon = 1e-12);
        }
        for (i, b) in basis.iter().enumerate() {
            if !active.contains(&i) { assert_eq!(b.eval_deriv(hi, 1), 0.0); }
        }
    }

    #[test]
    fn rejects_bad_knots() {
        let knots = Knots::new(vec![0.0, 1.0, 2.0]).unwrap();
        assert!(matches!(
            Basis::new(knots, 2),
            Err(BasisError::TooFewKnots { need: 4, got: 3, .. }),
        ));
        let knots = Knots::new(vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            Basis::new(knots, 1),
            Err(BasisError::Multiplicity(_, 3, 2)),
        ));
        let err: BasisError = KnotError::NoPoints.into();
        assert!(matches!(err, BasisError::Knot(_)));
    }
}
