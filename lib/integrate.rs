//! Closed-form integration of bilinear forms over pairs of B-splines.
//!
//! For an operator in [normal form][crate::operator::NormalForm]
//! `Σ c[n, m] x^n D^m`, the bilinear form
//! ```text
//! ∫ dx bᵢ(x) Op[bⱼ](x) = Σ c[n, m] ∫ dx bᵢ(x) x^n bⱼ⁽ᵐ⁾(x)
//! ```
//! is evaluated exactly: on every knot interval shared by the two functions,
//! the integrand is a polynomial in the local coordinate `u = x - c`, with
//! `x^n = (u + c)^n` expanded binomially.

use num_traits::Zero;
use crate::{
    bspline::BSpline,
    error::IntegralError,
    operator::{ NormalForm, Operator },
    poly::Poly,
};

pub type IntegralResult<T> = Result<T, IntegralError>;

/// Specifies the integrand of a matrix element.
#[derive(Clone, Debug, PartialEq)]
pub enum BilinearForm {
    /// Plain `∫ bᵢ bⱼ dx`.
    ScalarProduct,
    /// `∫ bᵢ Op[bⱼ] dx` for a normal-ordered operator.
    Operator(NormalForm),
}

impl BilinearForm {
    /// Return the highest derivative order applied to the right-hand function.
    pub fn max_derivative(&self) -> u32 {
        match self {
            Self::ScalarProduct => 0,
            Self::Operator(nf) => nf.max_derivative(),
        }
    }

    /// Check that a basis of the given degree can carry every derivative in
    /// the form.
    pub fn check_degree(&self, degree: usize) -> IntegralResult<()> {
        let m = self.max_derivative();
        (m as usize <= degree)
            .then_some(())
            .ok_or(IntegralError::DerivativeOrder(m, degree))
    }

    /// Integrate the form over the full domain for the pair `(bi, bj)`.
    ///
    /// Returns [`IntegralError::DerivativeOrder`] if the form differentiates
    /// more times than the functions' degree.
    pub fn integrate(&self, bi: &BSpline, bj: &BSpline) -> IntegralResult<f64> {
        self.check_degree(bj.degree())?;
        Ok(self.integrate_unchecked(bi, bj))
    }

    pub(crate) fn integrate_unchecked(&self, bi: &BSpline, bj: &BSpline) -> f64 {
        let mut total = 0.0;
        let mut pj_iter = bj.pieces().iter().peekable();
        for pi in bi.pieces() {
            // pieces are sorted by interval; advance j to match
            while pj_iter.peek().is_some_and(|pj| pj.interval < pi.interval) {
                pj_iter.next();
            }
            let Some(pj) = pj_iter.peek() else { break; };
            if pj.interval != pi.interval { continue; }
            let rhs: Poly = match self {
                Self::ScalarProduct => pj.poly.clone(),
                Self::Operator(nf) => {
                    let c = pj.center();
                    nf.terms()
                        .fold(Poly::zero(), |acc, term| {
                            let action
                                = &Poly::shifted_power(c, term.x_pow)
                                * &pj.poly.deriv(term.d_order);
                            &acc + &action.scaled(term.coeff)
                        })
                },
            };
            total += (&pi.poly * &rhs).integrate_sym(pi.half_width());
        }
        total
    }
}

impl From<&Operator> for BilinearForm {
    fn from(op: &Operator) -> Self { Self::Operator(NormalForm::from(op)) }
}

impl From<Operator> for BilinearForm {
    fn from(op: Operator) -> Self { Self::from(&op) }
}

/// Integrate `∫ bᵢ Op[bⱼ] dx` for an operator expression.
pub fn bilinear(op: &Operator, bi: &BSpline, bj: &BSpline) -> IntegralResult<f64> {
    BilinearForm::from(op).integrate(bi, bj)
}

/// Integrate `∫ bᵢ bⱼ dx`.
pub fn scalar_product(bi: &BSpline, bj: &BSpline) -> f64 {
    BilinearForm::ScalarProduct.integrate_unchecked(bi, bj)
}
