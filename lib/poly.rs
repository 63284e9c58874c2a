//! Dense real polynomials, used as the pieces of a B-spline.
//!
//! Every polynomial is expressed in a local coordinate `u = x - c`, where `c`
//! is the midpoint of the knot interval the piece lives on. Keeping the
//! expansion centered makes integration over the interval a sum over even
//! powers only and avoids the cancellation that comes with expanding about the
//! origin on far-away intervals.

use std::ops::{ Add, Mul, Neg };
use num_traits::{ One, Zero };

/// A polynomial `Σ c[k] u^k`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly {
    c: Vec<f64>,
}

impl Poly {
    /// Create from coefficients in order of increasing power.
    pub fn new(c: Vec<f64>) -> Self { Self { c } }

    /// The constant polynomial `a`.
    pub fn constant(a: f64) -> Self { Self { c: vec![a] } }

    /// The linear polynomial `a0 + a1 u`.
    pub fn linear(a0: f64, a1: f64) -> Self { Self { c: vec![a0, a1] } }

    /// Expand `(u + a)^n` binomially.
    pub fn shifted_power(a: f64, n: u32) -> Self {
        let n = n as usize;
        let mut c = vec![0.0; n + 1];
        let mut binom = 1.0;
        for (k, ck) in c.iter_mut().enumerate() {
            // u^k carries a^(n - k) C(n, k)
            *ck = binom * a.powi((n - k) as i32);
            binom *= (n - k) as f64 / (k + 1) as f64;
        }
        Self { c }
    }

    /// Coefficients in order of increasing power.
    pub fn coeffs(&self) -> &[f64] { &self.c }

    /// Nominal degree, i.e. the length of the coefficient list minus one.
    ///
    /// Trailing zero coefficients are not trimmed.
    pub fn degree(&self) -> usize { self.c.len().saturating_sub(1) }

    /// Evaluate at `u` by Horner's rule.
    pub fn eval(&self, u: f64) -> f64 {
        self.c.iter().rev().fold(0.0, |acc, ck| acc * u + ck)
    }

    /// Return the `n`-th derivative.
    pub fn deriv(&self, n: u32) -> Self {
        let n = n as usize;
        if n >= self.c.len() { return Self::zero(); }
        let c: Vec<f64>
            = self.c.iter().enumerate().skip(n)
            .map(|(k, ck)| {
                let falling: f64
                    = (k - n + 1..=k).map(|j| j as f64).product();
                falling * ck
            })
            .collect();
        Self { c }
    }

    /// Multiply every coefficient by `a`.
    pub fn scaled(&self, a: f64) -> Self {
        Self { c: self.c.iter().map(|ck| a * ck).collect() }
    }

    /// Integrate over the symmetric interval `[-h, h]`.
    pub fn integrate_sym(&self, h: f64) -> f64 {
        // odd powers vanish
        self.c.iter().enumerate().step_by(2)
            .map(|(k, ck)| 2.0 * ck * h.powi(k as i32 + 1) / (k + 1) as f64)
            .sum()
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let (long, short)
            = if self.c.len() >= rhs.c.len() { (self, rhs) } else { (rhs, self) };
        let mut c = long.c.clone();
        c.iter_mut().zip(&short.c).for_each(|(ck, sk)| { *ck += sk; });
        Poly { c }
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly { &self + &rhs }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        if self.c.is_empty() || rhs.c.is_empty() { return Poly::zero(); }
        let mut c = vec![0.0; self.c.len() + rhs.c.len() - 1];
        for (i, ai) in self.c.iter().enumerate() {
            for (j, bj) in rhs.c.iter().enumerate() {
                c[i + j] += ai * bj;
            }
        }
        Poly { c }
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly { &self * &rhs }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly { self.scaled(-1.0) }
}

impl Zero for Poly {
    fn zero() -> Self { Self { c: Vec::new() } }

    fn is_zero(&self) -> bool { self.c.iter().all(|ck| *ck == 0.0) }
}

impl One for Poly {
    fn one() -> Self { Self::constant(1.0) }
}
