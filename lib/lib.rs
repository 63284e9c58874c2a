#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for the solution of the
//! one-dimensional, time-independent Schrödinger equation by the Galerkin
//! method in a B-spline basis.
//!
//! The Hamiltonian is written as a symbolic [operator][operator::Operator],
//! projected onto a [basis][bspline::Basis] of piecewise polynomials defined
//! over a problem-specific [knot grid][grid], and the resulting generalized
//! matrix eigenvalue problem is [solved][solve] for the lowest eigenpairs.
//!
//! Ready-made setups are provided for:
//! - the [harmonic oscillator][oscillator]
//! - the [radial hydrogen atom][hydrogen]
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod poly;
pub mod grid;
pub mod bspline;
pub mod operator;
pub mod integrate;
pub mod assemble;
pub mod eigen;
pub mod solve;
pub mod oscillator;
pub mod hydrogen;

pub mod docs;

pub(crate) const DEF_DEGREE: usize = 3;
pub(crate) const DEF_NUM_STATES: usize = 10;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
