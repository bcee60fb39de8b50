//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Energy corrections](#energy-corrections)
//! - [Wavefunction corrections](#wavefunction-corrections)
//! - [Truncation](#truncation)
//! - [Degeneracy](#degeneracy)
//! - [Time dependence](#time-dependence)
//!
//! # Background
//! Rayleigh-Schrödinger perturbation theory approximates the eigenpairs of a
//! Hamiltonian
//! ```text
//! H = H₀ + V'
//! ```
//! where the unperturbed part *H*₀ is exactly solvable, with known
//! eigenfunctions *f*ₙ and eigenenergies *E*ₙ, and *V'* is a small additional
//! potential. Two such unperturbed systems are provided here: the infinite
//! square well,
//! ```text
//! f_n(x) = √(2/L) sin(nπx/L),    E_n = (nπħ)²/(2mL²),    n ≥ 1
//! ```
//! and the harmonic oscillator,
//! ```text
//! f_n(x) = N_n H_n(ξ) exp(-ξ²/2),    E_n = ħω(n + ½),    n ≥ 0
//! ```
//! with *ξ* = *x*/√(*ħ*/*mω*), *H*ₙ the physicists' Hermite polynomials, and
//! *N*ₙ = (*mω*/*πħ*)^¼/√(2ⁿ *n*!). A charged particle in a box under a
//! uniform electric field shares the well's eigenbasis; only the perturbing
//! potential (−*qEx*) differs.
//!
//! The central quantity in every correction is the matrix element of the
//! perturbation between two basis states,
//! ```text
//! H'_mn = ⟨f_m|V'|f_n⟩ = ∫ f_m(x) V'(x) f_n(x) dx
//! ```
//! computed by [adaptive quadrature][crate::quad] over the domain of the
//! basis. For the real potentials considered here the matrix is symmetric,
//! *H*'ₘₙ = *H*'ₙₘ.
//!
//! # Energy corrections
//! For a target level *n*, the energy corrections through second order
//! are[^1]
//! ```text
//! E⁽¹⁾ = H'_nn
//!
//!         ⎲     |H'_mn|²
//! E⁽²⁾ =  ⎳     ---------
//!        m ≠ n   E_n - E_m
//! ```
//! The first-order term is the expectation value of the perturbation in the
//! unperturbed state; the second-order term for the ground state is always
//! negative, since every denominator is.
//!
//! # Wavefunction corrections
//! The corrected state mixes in other basis states,
//! ```text
//!         ⎲      H'_mn
//! ψ⁽¹⁾ =  ⎳     --------- f_m
//!        m ≠ n  E_n - E_m
//!
//!         ⎲      ⎲      H'_mn      H'_km
//! ψ⁽²⁾ =  ⎳      ⎳     --------- ---------  f_k
//!        m ≠ n  k ≠ m  E_n - E_m  E_m - E_k
//! ```
//! The assembled total *ψ*₀ + *ψ*⁽¹⁾ (+ *ψ*⁽²⁾) is not normalized and is
//! explicitly renormalized over the sampling grid by its trapezoidal L2
//! norm before being returned.
//!
//! # Truncation
//! The sums above formally run over the whole (infinite) spectrum; they are
//! truncated at a maximum basis index `max_states`. The first-order
//! wavefunction and second-order energy corrections cost a number of
//! quadrature passes linear in the truncation order, while the second-order
//! wavefunction correction is quadratic. Since every term in the double sum
//! is pure and independent, the terms are evaluated in parallel. No adaptive
//! control of the truncation error is attempted; increasing `max_states`
//! monotonically refines the corrections at the corresponding cost.
//!
//! # Degeneracy
//! All formulas above assume a non-degenerate spectrum: a pair of levels with
//! *E*ₙ = *E*ₘ produces a vanishing denominator. The degenerate branch of
//! perturbation theory (diagonalizing *V'* within the degenerate subspace) is
//! out of scope; instead of letting the division produce non-finite samples,
//! the evaluator reports [`Degenerate`][crate::error::PerturbError::Degenerate]
//! whenever a zero denominator is encountered within the truncation range.
//! Neither provided basis is degenerate, so this can only arise for
//! user-supplied [`Basis`][crate::basis::Basis] implementations.
//!
//! # Time dependence
//! Under the unperturbed Hamiltonian each eigenstate evolves by a pure
//! phase,
//! ```text
//! Ψ_n(x, t) = f_n(x) exp(-i E_n t/ħ)
//! ```
//! so a fixed superposition with complex coefficients *c*ᵢ evolves as
//! ```text
//! Ψ(x, t) = Σ_i c_i f_{n_i}(x) exp(-i E_{n_i} t/ħ)
//! ```
//! These are closed-form, stateless evaluations; no propagator is involved.
//! |Ψₙ| is time-independent for a single state, while a superposition's
//! probability density sloshes at the beat frequencies (*E*ᵢ − *E*ⱼ)/*ħ*.
//!
//! [^1]: D. J. Griffiths, *Introduction to Quantum Mechanics*, 2nd ed.,
//! ch. 6 (Pearson, 2005).
