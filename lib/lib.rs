//! Provides functions and higher-level constructs to compute Rayleigh-
//! Schrödinger perturbative corrections to the eigenenergies and eigenstates
//! of exactly solvable one-dimensional quantum systems, and to evaluate
//! time-dependent wavefunctions for single eigenstates and fixed
//! superpositions.
//!
//! Provides implementations for the following:
//! - Closed-form eigenbases for the infinite square well (also covering a
//!   charged particle in a box) and the harmonic oscillator
//! - First- and second-order energy corrections via numerical overlap
//!   integrals and truncated spectral sums
//! - First- and second-order wavefunction corrections sampled on a uniform
//!   coordinate grid, with renormalization of the assembled total
//! - Time evolution of eigenstates and superpositions under the unperturbed
//!   Hamiltonian
//!
//! All corrections assume a non-degenerate unperturbed spectrum; coincident
//! energies within the truncation range are reported as errors rather than
//! propagated as non-finite samples.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod grid;
pub mod basis;
pub mod quad;
pub mod perturb;
pub mod timedep;
pub mod utils;

pub mod docs;

/// Default absolute tolerance for overlap-integral quadrature.
pub const DEF_QUAD_EPSILON: f64 = 1e-10;

/// Default truncation order for the spectral sums.
pub const DEF_MAX_STATES: usize = 10;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
