//! Symbolic linear operators built from the coordinate and differentiation.
//!
//! An [`Operator`] is an immutable expression tree over three elementary
//! operators,
//! - `Identity`,
//! - `X(n)`: multiplication by `x^n`,
//! - `D(n)`: the `n`-th derivative,
//!
//! combined by sums, scalar multiples, negation, and products. Products are
//! compositions acting right-to-left, so `X(1) * D(1)` is `x d/dx` while
//! `D(1) * X(1)` is `d/dx x = x d/dx + 1`.
//!
//! Expressions are consumed by [visitors][OperatorVisitor]. The one that
//! matters for integration is [`NormalForm`], which reduces any expression to
//! a canonical sum `Σ c[n, m] x^n d^m/dx^m` by commuting all derivatives to
//! the right:
//! ```text
//!  m   n     min(m, n)  ⎛m⎞    n!      n-k  m-k
//! D · X   =     Σ       ⎜ ⎟ -------- X    D
//!              k=0      ⎝k⎠ (n - k)!
//! ```
//!
//! ```
//! use bspace::operator::{ Operator, NormalForm };
//!
//! let x = Operator::X(1);
//! let d = Operator::D(1);
//! let commutator = d.clone() * x.clone() - x * d;
//! assert_eq!(NormalForm::from(&commutator), NormalForm::from(&Operator::Identity));
//! ```

use std::{
    collections::BTreeMap,
    fmt,
    ops::{ Add, Mul, Neg, Sub },
};

/// A linear operator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Operator {
    /// The identity operator.
    Identity,
    /// Multiplication by the coordinate raised to a power.
    X(u32),
    /// Differentiation to some order.
    D(u32),
    /// Scalar multiple of an operator.
    Scale(f64, Box<Operator>),
    /// Negation of an operator.
    Neg(Box<Operator>),
    /// Sum of two operators.
    Sum(Box<Operator>, Box<Operator>),
    /// Composition of two operators; the right-hand operand acts first.
    Product(Box<Operator>, Box<Operator>),
}

/// Walks an [`Operator`] bottom-up, producing a value per node.
pub trait OperatorVisitor {
    type Output;

    fn identity(&mut self) -> Self::Output;

    fn coordinate_power(&mut self, n: u32) -> Self::Output;

    fn derivative(&mut self, n: u32) -> Self::Output;

    fn scale(&mut self, c: f64, op: Self::Output) -> Self::Output;

    fn negate(&mut self, op: Self::Output) -> Self::Output;

    fn sum(&mut self, lhs: Self::Output, rhs: Self::Output) -> Self::Output;

    fn product(&mut self, lhs: Self::Output, rhs: Self::Output) -> Self::Output;
}

impl Operator {
    /// Scalar multiple of the identity.
    pub fn constant(c: f64) -> Self {
        Self::Scale(c, Box::new(Self::Identity))
    }

    /// Dispatch a visitor over the expression tree.
    pub fn visit<V: OperatorVisitor>(&self, v: &mut V) -> V::Output {
        match self {
            Self::Identity => v.identity(),
            Self::X(n) => v.coordinate_power(*n),
            Self::D(n) => v.derivative(*n),
            Self::Scale(c, op) => {
                let op = op.visit(v);
                v.scale(*c, op)
            },
            Self::Neg(op) => {
                let op = op.visit(v);
                v.negate(op)
            },
            Self::Sum(l, r) => {
                let l = l.visit(v);
                let r = r.visit(v);
                v.sum(l, r)
            },
            Self::Product(l, r) => {
                let l = l.visit(v);
                let r = r.visit(v);
                v.product(l, r)
            },
        }
    }

    /// Return the highest derivative order with a non-zero coefficient after
    /// normal ordering.
    pub fn max_derivative(&self) -> u32 {
        NormalForm::from(self).max_derivative()
    }
}

impl Add for Operator {
    type Output = Operator;

    fn add(self, rhs: Operator) -> Operator {
        Operator::Sum(Box::new(self), Box::new(rhs))
    }
}

impl Add<f64> for Operator {
    type Output = Operator;

    fn add(self, rhs: f64) -> Operator { self + Operator::constant(rhs) }
}

impl Add<Operator> for f64 {
    type Output = Operator;

    fn add(self, rhs: Operator) -> Operator { Operator::constant(self) + rhs }
}

impl Sub for Operator {
    type Output = Operator;

    fn sub(self, rhs: Operator) -> Operator {
        Operator::Sum(Box::new(self), Box::new(-rhs))
    }
}

impl Sub<f64> for Operator {
    type Output = Operator;

    fn sub(self, rhs: f64) -> Operator { self + Operator::constant(-rhs) }
}

impl Neg for Operator {
    type Output = Operator;

    fn neg(self) -> Operator { Operator::Neg(Box::new(self)) }
}

impl Mul for Operator {
    type Output = Operator;

    fn mul(self, rhs: Operator) -> Operator {
        Operator::Product(Box::new(self), Box::new(rhs))
    }
}

impl Mul<f64> for Operator {
    type Output = Operator;

    fn mul(self, rhs: f64) -> Operator { Operator::Scale(rhs, Box::new(self)) }
}

impl Mul<Operator> for f64 {
    type Output = Operator;

    fn mul(self, rhs: Operator) -> Operator { Operator::Scale(self, Box::new(rhs)) }
}

// prints fully parenthesized expressions
struct Printer;

impl OperatorVisitor for Printer {
    type Output = String;

    fn identity(&mut self) -> String { "1".to_string() }

    fn coordinate_power(&mut self, n: u32) -> String {
        match n {
            0 => "1".to_string(),
            1 => "x".to_string(),
            _ => format!("x^{}", n),
        }
    }

    fn derivative(&mut self, n: u32) -> String {
        match n {
            0 => "1".to_string(),
            _ => format!("D^{}", n),
        }
    }

    fn scale(&mut self, c: f64, op: String) -> String { format!("{} {}", c, op) }

    fn negate(&mut self, op: String) -> String { format!("-{}", op) }

    fn sum(&mut self, lhs: String, rhs: String) -> String {
        format!("({} + {})", lhs, rhs)
    }

    fn product(&mut self, lhs: String, rhs: String) -> String {
        format!("{} {}", lhs, rhs)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.visit(&mut Printer))
    }
}

/// A single normal-ordered term `coeff * x^x_pow * D^d_order`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Term {
    pub coeff: f64,
    pub x_pow: u32,
    pub d_order: u32,
}

/// Canonical form of an operator: a sum of [`Term`]s with all derivatives to
/// the right, at most one term per `(x_pow, d_order)` pair, and no zero
/// coefficients.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NormalForm {
    terms: BTreeMap<(u32, u32), f64>,
}

impl NormalForm {
    fn monomial(x_pow: u32, d_order: u32) -> Self {
        let mut terms = BTreeMap::new();
        terms.insert((x_pow, d_order), 1.0);
        Self { terms }
    }

    fn accumulate(&mut self, key: (u32, u32), c: f64) {
        let entry = self.terms.entry(key).or_insert(0.0);
        *entry += c;
        if *entry == 0.0 { self.terms.remove(&key); }
    }

    fn scaled(mut self, c: f64) -> Self {
        if c == 0.0 { return Self::default(); }
        self.terms.values_mut().for_each(|v| { *v *= c; });
        self
    }

    /// Iterate over all terms in order of increasing `(x_pow, d_order)`.
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.terms.iter()
            .map(|(&(x_pow, d_order), &coeff)| Term { coeff, x_pow, d_order })
    }

    /// Return `true` if the operator is identically zero.
    pub fn is_zero(&self) -> bool { self.terms.is_empty() }

    /// Return the highest derivative order present, or 0 for the zero
    /// operator.
    pub fn max_derivative(&self) -> u32 {
        self.terms.keys().map(|(_, m)| *m).max().unwrap_or(0)
    }

    /// Return the highest coordinate power present, or 0 for the zero
    /// operator.
    pub fn max_power(&self) -> u32 {
        self.terms.keys().map(|(n, _)| *n).max().unwrap_or(0)
    }
}

// number of ways to commute D^m past X^n leaving X^(n - k) D^(m - k):
// C(m, k) * n! / (n - k)!
fn commutation_weight(m: u32, n: u32, k: u32) -> f64 {
    (0..k).map(|j| (m - j) as f64 * (n - j) as f64 / (j + 1) as f64).product()
}

struct Normalizer;

impl OperatorVisitor for Normalizer {
    type Output = NormalForm;

    fn identity(&mut self) -> NormalForm { NormalForm::monomial(0, 0) }

    fn coordinate_power(&mut self, n: u32) -> NormalForm { NormalForm::monomial(n, 0) }

    fn derivative(&mut self, n: u32) -> NormalForm { NormalForm::monomial(0, n) }

    fn scale(&mut self, c: f64, op: NormalForm) -> NormalForm { op.scaled(c) }

    fn negate(&mut self, op: NormalForm) -> NormalForm { op.scaled(-1.0) }

    fn sum(&mut self, mut lhs: NormalForm, rhs: NormalForm) -> NormalForm {
        rhs.terms.into_iter().for_each(|(key, c)| lhs.accumulate(key, c));
        lhs
    }

    fn product(&mut self, lhs: NormalForm, rhs: NormalForm) -> NormalForm {
        // (a X^p D^m) (b X^n D^q) = a b X^p (D^m X^n) D^q
        let mut acc = NormalForm::default();
        for (&(p, m), &a) in lhs.terms.iter() {
            for (&(n, q), &b) in rhs.terms.iter() {
                for k in 0..=m.min(n) {
                    let w = commutation_weight(m, n, k);
                    acc.accumulate((p + n - k, m - k + q), a * b * w);
                }
            }
        }
        acc
    }
}

impl From<&Operator> for NormalForm {
    fn from(op: &Operator) -> Self { op.visit(&mut Normalizer) }
}

impl From<Operator> for NormalForm {
    fn from(op: Operator) -> Self { Self::from(&op) }
}
