//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [B-splines](#b-splines)
//! - [Operators and matrix elements](#operators-and-matrix-elements)
//! - [Knot grids](#knot-grids)
//! - [Radial wavefunctions](#radial-wavefunctions)
//! - [Units](#units)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation (TISE)
//! amounts to finding eigenpairs of a Hermitian differential operator,
//! ```text
//! H ψ = E ψ
//! ```
//! over some interval, subject to boundary conditions. The Galerkin method
//! replaces the (infinite-dimensional) space of candidate wavefunctions with
//! the span of a finite set of functions *b*₀, ..., *b*ₙ₋₁, writing
//! ```text
//! ψ(x) ≈ Σᵢ cᵢ bᵢ(x)
//! ```
//! and requiring that the residual *H* *ψ* - *E* *ψ* be orthogonal to every
//! basis function. This produces the generalized matrix eigenvalue problem
//! ```text
//! H c = E S c
//!
//! H[i, j] = ⟨bᵢ|H|bⱼ⟩
//! S[i, j] = ⟨bᵢ|bⱼ⟩
//! ```
//! where *S* is the overlap (Gram) matrix of the basis. Since the basis is
//! not in general orthogonal, *S* is not the identity, but it is always
//! symmetric and positive-definite for linearly independent *bᵢ*, so the
//! problem can be reduced to a standard symmetric one through a Cholesky
//! factorization of *S* (this is what LAPACK's `sygv` does). The resulting
//! eigenvalues are upper bounds on the true ones (by the variational
//! principle) and converge to them as the basis is refined.
//!
//! Eigenvectors are normalized such that *c*ᵢᵀ *S* *c*ⱼ = *δ*ᵢⱼ, which is
//! exactly the statement that the reconstructed wavefunctions are orthonormal
//! in the inner product that defines S.
//!
//! # B-splines
//! Given a non-decreasing sequence of knots *t*₀ ≤ *t*₁ ≤ ... ≤ *t*ₘ₋₁, the
//! B-splines of degree *d* are defined by the Cox-de Boor recursion
//! ```text
//! B[i, 0](x) = 1 if t[i] ≤ x < t[i + 1] else 0
//!
//!              x - t[i]                        t[i + d + 1] - x
//! B[i, d](x) = ------------- B[i, d - 1](x) + ----------------------- B[i + 1, d - 1](x)
//!              t[i + d] - t[i]                 t[i + d + 1] - t[i + 1]
//! ```
//! with terms whose denominator vanishes taken to be zero. There are
//! *m* - *d* - 1 of them; each is a piecewise polynomial of degree *d*,
//! non-negative, and supported on only *d* + 1 consecutive knot intervals.
//! The last property is what makes them attractive for Galerkin methods:
//! ⟨*b*ᵢ|*H*|*b*ⱼ⟩ vanishes whenever |*i* - *j*| > *d*, so both matrices are
//! banded.
//!
//! Across a knot of multiplicity *μ* a B-spline is *C*^(*d* - *μ*). In
//! particular, repeating the knot at an endpoint *μ* times means that the
//! first basis function behaves as (*x* - *t*₀)^(*d* + 1 - *μ*) there, which
//! can be used to impose a power law on the solution at a boundary.
//!
//! Here each B-spline is stored as one polynomial per non-empty knot interval,
//! expanded around the midpoint of that interval. Products and derivatives of
//! these polynomials are again polynomials, so all matrix elements below are
//! evaluated in closed form rather than by quadrature.
//!
//! # Operators and matrix elements
//! Hamiltonians are composed from the coordinate *X*, the derivative *D* =
//! *d*/*dx*, real scalars, and sums and products of these. Any such expression
//! can be brought to the normal-ordered form
//! ```text
//! Σ a[n, m] Xⁿ Dᵐ
//! ```
//! by repeated use of the commutation rule
//! ```text
//!           min(m, n)
//! Dᵐ Xⁿ =      Σ     C(m, k) n! / (n - k)! X^(n - k) D^(m - k)
//!             k=0
//! ```
//! (so that e.g. *D* *X* = *X* *D* + 1). Matrix elements are then
//! ```text
//! ⟨bᵢ|H|bⱼ⟩ = Σ a[n, m] ∫ xⁿ bᵢ(x) bⱼ⁽ᵐ⁾(x) dx
//! ```
//! which requires *m* ≤ *d*, i.e. the basis must be smooth enough within each
//! knot interval to carry the highest derivative appearing in *H*. Second-order
//! Hamiltonians therefore need at least quadratic splines.
//!
//! Strictly, a second derivative of a *C*¹ function has jumps at the knots;
//! evaluating it piecewise amounts to dropping the boundary terms of an
//! integration by parts, which all vanish for the continuous bases used here.
//! For a kinetic term this means
//! ```text
//! ⟨bᵢ|-D²|bⱼ⟩ = ⟨bᵢ'|bⱼ'⟩
//! ```
//! up to contributions from the outermost knots, where every basis function
//! either vanishes or is cut off by a weight.
//!
//! # Knot grids
//! The quality of the approximation depends far more on where the knots are
//! than on how many there are. Two placements are provided:
//! - for the harmonic oscillator, knots at ±*i*²/1000, which are dense near the
//!   origin where all low-lying states have their structure and sparse far out
//!   in the classically forbidden region; the wavefunction is forced to zero at
//!   the outermost knots.
//! - for the radial hydrogen problem, a run of repeated zeros at the origin
//!   followed by logarithmically spaced knots up to a large radius. The number
//!   of repeated zeros is chosen so that the first basis function behaves as
//!   *r*^*l* at the origin, matching the regular solution of the radial
//!   equation.
//!
//! # Radial wavefunctions
//! For a spherically symmetric potential, *ψ*(*r*, *θ*, *φ*) = *R*(*r*)
//! *Y*(*θ*, *φ*) with *Y* a spherical harmonic, and in atomic units the
//! radial equation reads
//! ```text
//!    1 1  d ⎛   dR ⎞   l (l + 1)
//! - -- -- -- ⎜r² -- ⎟ + --------- R + V(r) R = E R
//!    2 r² dr ⎝   dr ⎠     2 r²
//! ```
//! with the inner product ∫ *r*² *R*₁ *R*₂ *dr*. Rather than substituting
//! *u* = *r* *R*, both sides are multiplied through by *r*², giving
//! ```text
//! H = (-r² D² - 2 r D + l (l + 1)) / 2 + r² V(r)
//! S = r²
//! ```
//! This has no singular coefficients and polynomial weights whenever *r*² *V*
//! is polynomial (as it is for the Coulomb potential, *r*² *V* = -*r*), so the
//! matrix elements remain exact. The weighted overlap *S* is still symmetric
//! and positive-definite because every basis function is non-zero on a set of
//! positive *r*.
//!
//! # Units
//! All problems are posed in natural (dimensionless) units. For the harmonic
//! oscillator, lengths are in units of √(*ħ*/*m* *ω*) and energies in units of
//! *ħ* *ω*, so that
//! ```text
//! H = (-D² + x²) / 2
//! Eₙ = n + 1/2
//! ```
//! For hydrogen, atomic units are used: lengths in Bohr radii and energies in
//! hartree, so that the bound states satisfy *E*ₙ = -1/(2 *n*²) for *n* > *l*.
