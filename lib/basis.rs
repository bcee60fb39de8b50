//! Closed-form eigenbases of the exactly solvable systems.
//!
//! Each basis provides eigenfunctions and eigenenergies as pure functions of
//! a quantum number; no state is stored beyond the physical parameters of the
//! system. The charged particle in a box shares the [`Well`] basis, since its
//! unperturbed Hamiltonian is identical; only its perturbing potential
//! differs.

use std::f64::consts::PI;
use ndarray as nd;
use crate::Arr1;

// half-width of the oscillator quadrature window, in ground-state lengths
const OSC_WINDOW: f64 = 12.0;

/// An unperturbed eigenbasis: the seam between an exactly solvable system and
/// the perturbation evaluator.
pub trait Basis: Sync {
    /// Lowest valid quantum number (1 for the well, 0 for the oscillator).
    fn index_origin(&self) -> usize;

    /// Domain over which overlap integrals are evaluated.
    fn domain(&self) -> (f64, f64);

    /// Closed-form eigenfunction f_n evaluated at a single point.
    fn eigenfunction(&self, n: usize, x: f64) -> f64;

    /// Closed-form eigenenergy E_n.
    fn energy(&self, n: usize) -> f64;

    /// Reduced Planck constant associated with the system, as used in
    /// time-evolution phases.
    fn hbar(&self) -> f64;

    /// Sample f_n over a coordinate array.
    fn sample<S>(&self, n: usize, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.eigenfunction(n, xk))
    }
}

/// Infinite square well of width `l` on `[0, l]`.
///
/// Eigenfunctions are `√(2/l)·sin(nπx/l)` inside the well and zero outside;
/// energies are `(nπħ)²/(2ml²)` with levels counted from `n = 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Well {
    /// Well width.
    pub l: f64,
    /// Particle mass.
    pub mass: f64,
    /// Reduced Planck constant.
    pub hbar: f64,
}

impl Default for Well {
    fn default() -> Self { Self { l: 1.0, mass: 1.0, hbar: 1.0 } }
}

impl Well {
    /// Create a new `Well` of width `l` in natural units (`m = ħ = 1`).
    pub fn new(l: f64) -> Self { Self { l, ..Self::default() } }
}

impl Basis for Well {
    fn index_origin(&self) -> usize { 1 }

    fn domain(&self) -> (f64, f64) { (0.0, self.l) }

    fn eigenfunction(&self, n: usize, x: f64) -> f64 {
        if !(0.0..=self.l).contains(&x) { return 0.0; }
        (2.0 / self.l).sqrt() * (n as f64 * PI * x / self.l).sin()
    }

    fn energy(&self, n: usize) -> f64 {
        (n as f64 * PI * self.hbar).powi(2)
            / (2.0 * self.mass * self.l.powi(2))
    }

    fn hbar(&self) -> f64 { self.hbar }
}

/// Harmonic oscillator with frequency `omega`.
///
/// Eigenfunctions are the Hermite functions `N_n·H_n(ξ)·exp(−ξ²/2)` with
/// `ξ = x/√(ħ/mω)`; energies are `ħω(n + ½)` with levels counted from
/// `n = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oscillator {
    /// Particle mass.
    pub mass: f64,
    /// Angular trap frequency.
    pub omega: f64,
    /// Reduced Planck constant.
    pub hbar: f64,
}

impl Default for Oscillator {
    fn default() -> Self { Self { mass: 1.0, omega: 1.0, hbar: 1.0 } }
}

impl Oscillator {
    /// Create a new `Oscillator` with frequency `omega` in natural units
    /// (`m = ħ = 1`).
    pub fn new(omega: f64) -> Self { Self { omega, ..Self::default() } }

    /// Characteristic ground-state length `√(ħ/mω)`.
    pub fn length(&self) -> f64 {
        (self.hbar / (self.mass * self.omega)).sqrt()
    }

    /// Analytic position matrix element `⟨m|x|n⟩`.
    ///
    /// Nonzero only for `|m − n| = 1`, where it equals
    /// `√(ħ/2mω)·√(max(m, n))`.
    pub fn x_element(&self, m: usize, n: usize) -> f64 {
        let hi = m.max(n);
        if hi - m.min(n) == 1 {
            (self.hbar / (2.0 * self.mass * self.omega)).sqrt()
                * (hi as f64).sqrt()
        } else {
            0.0
        }
    }
}

impl Basis for Oscillator {
    fn index_origin(&self) -> usize { 0 }

    fn domain(&self) -> (f64, f64) {
        let w = OSC_WINDOW * self.length();
        (-w, w)
    }

    fn eigenfunction(&self, n: usize, x: f64) -> f64 {
        let xi = x / self.length();
        let norm = (self.mass * self.omega / (PI * self.hbar)).powf(0.25);
        // H_n(ξ) by the three-term recurrence, with the 1/√(2ⁿ n!)
        // normalization accumulated alongside to avoid a factorial overflow
        let mut hkm1: f64 = 0.0;
        let mut hk: f64 = 1.0;
        let mut scale: f64 = 1.0;
        for k in 0..n {
            let hkp1 = 2.0 * xi * hk - 2.0 * k as f64 * hkm1;
            hkm1 = hk;
            hk = hkp1;
            scale /= 2.0 * (k as f64 + 1.0);
        }
        norm * scale.sqrt() * hk * (-xi * xi / 2.0).exp()
    }

    fn energy(&self, n: usize) -> f64 {
        self.hbar * self.omega * (n as f64 + 0.5)
    }

    fn hbar(&self) -> f64 { self.hbar }
}
