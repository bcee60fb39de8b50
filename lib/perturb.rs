//! Rayleigh-Schrödinger perturbation-series evaluator and result aggregator.
//!
//! All spectral sums are finite truncations of the formally infinite series:
//! intermediate levels run from the basis index origin up to `max_states`
//! inclusive. Matrix elements are recomputed per call with no caching, so the
//! second-order wavefunction correction costs O(`max_states`²) quadrature
//! passes; its terms are pure and are evaluated in parallel.
//!
//! The non-degenerate assumption is enforced: a vanishing energy denominator
//! within the truncation range surfaces as [`PerturbError::Degenerate`]
//! rather than as Inf/NaN samples in the output arrays.

use ndarray as nd;
use rayon::prelude::*;
use crate::{
    Arr1,
    DEF_QUAD_EPSILON,
    basis::Basis,
    error::PerturbError,
    grid::Grid,
    quad::{ self, Quad },
    utils::{ wf_norm, wf_renormalize },
};

pub type PerturbResult<T> = Result<T, PerturbError>;

/// Matrix element `H'_mn = ⟨f_m|V'|f_n⟩` of the perturbing potential,
/// integrated numerically over the basis domain.
///
/// The [error estimate][Quad::err] accompanying the value is informational;
/// evaluator functions accept the best estimate unconditionally.
pub fn matrix_element<B, V>(basis: &B, v: &V, m: usize, n: usize) -> Quad
where
    B: Basis,
    V: Fn(f64) -> f64 + Sync,
{
    let (a, b) = basis.domain();
    quad::quad(
        |x| basis.eigenfunction(m, x) * v(x) * basis.eigenfunction(n, x),
        a,
        b,
        DEF_QUAD_EPSILON,
    )
}

/// First-order energy correction `E⁽¹⁾ = H'_nn`, the expectation value of
/// the perturbation in the unperturbed state.
pub fn energy1<B, V>(basis: &B, v: &V, n: usize) -> PerturbResult<f64>
where
    B: Basis,
    V: Fn(f64) -> f64 + Sync,
{
    PerturbError::check_level(n, basis.index_origin())?;
    Ok(matrix_element(basis, v, n, n).value)
}

/// Second-order energy correction
/// `E⁽²⁾ = Σ_{m≠n} |H'_mn|²/(E_n − E_m)`.
pub fn energy2<B, V>(basis: &B, v: &V, n: usize, max_states: usize)
    -> PerturbResult<f64>
where
    B: Basis,
    V: Fn(f64) -> f64 + Sync,
{
    PerturbError::check_level(n, basis.index_origin())?;
    let en = basis.energy(n);
    (basis.index_origin()..max_states + 1)
        .into_par_iter()
        .filter(|m| *m != n)
        .map(|m| {
            let de = PerturbError::check_nondegenerate(
                n, m, en, basis.energy(m))?;
            let h = matrix_element(basis, v, m, n).value;
            Ok(h * h / de)
        })
        .try_reduce(|| 0.0, |acc, term| Ok(acc + term))
}

/// First-order wavefunction correction
/// `ψ⁽¹⁾ = Σ_{m≠n} H'_mn/(E_n − E_m)·f_m`, sampled on `x`.
pub fn psi1<B, V, S>(
    basis: &B,
    v: &V,
    n: usize,
    max_states: usize,
    x: &Arr1<S>,
) -> PerturbResult<nd::Array1<f64>>
where
    B: Basis,
    V: Fn(f64) -> f64 + Sync,
    S: nd::Data<Elem = f64>,
{
    PerturbError::check_level(n, basis.index_origin())?;
    let en = basis.energy(n);
    let coeffs: Vec<(usize, f64)>
        = (basis.index_origin()..max_states + 1)
        .into_par_iter()
        .filter(|m| *m != n)
        .map(|m| {
            let de = PerturbError::check_nondegenerate(
                n, m, en, basis.energy(m))?;
            Ok((m, matrix_element(basis, v, m, n).value / de))
        })
        .collect::<PerturbResult<Vec<_>>>()?;
    let mut corr: nd::Array1<f64> = nd::Array1::zeros(x.len());
    for (m, cm) in coeffs.into_iter() {
        nd::Zip::from(&mut corr).and(x)
            .for_each(|ck, &xk| { *ck += cm * basis.eigenfunction(m, xk); });
    }
    Ok(corr)
}

/// Second-order wavefunction correction
/// `ψ⁽²⁾ = Σ_{m≠n} Σ_{k≠m} [H'_mn/(E_n − E_m)]·[H'_km/(E_m − E_k)]·f_k`,
/// sampled on `x`.
///
/// Each (m, k) term is independent and pure; the full set is farmed out to a
/// parallel iterator before the sampled basis functions are accumulated.
pub fn psi2<B, V, S>(
    basis: &B,
    v: &V,
    n: usize,
    max_states: usize,
    x: &Arr1<S>,
) -> PerturbResult<nd::Array1<f64>>
where
    B: Basis,
    V: Fn(f64) -> f64 + Sync,
    S: nd::Data<Elem = f64>,
{
    PerturbError::check_level(n, basis.index_origin())?;
    let origin = basis.index_origin();
    let en = basis.energy(n);
    let pairs: Vec<(usize, usize)>
        = (origin..max_states + 1)
        .filter(|m| *m != n)
        .flat_map(|m| {
            (origin..max_states + 1)
                .filter(move |k| *k != m)
                .map(move |k| (m, k))
        })
        .collect();
    let coeffs: Vec<(usize, f64)>
        = pairs.into_par_iter()
        .map(|(m, k)| {
            let em = basis.energy(m);
            let dnm = PerturbError::check_nondegenerate(n, m, en, em)?;
            let dmk = PerturbError::check_nondegenerate(
                m, k, em, basis.energy(k))?;
            let cmn = matrix_element(basis, v, m, n).value / dnm;
            let ckm = matrix_element(basis, v, k, m).value / dmk;
            Ok((k, cmn * ckm))
        })
        .collect::<PerturbResult<Vec<_>>>()?;
    let mut corr: nd::Array1<f64> = nd::Array1::zeros(x.len());
    for (k, c) in coeffs.into_iter() {
        nd::Zip::from(&mut corr).and(x)
            .for_each(|ck, &xk| { *ck += c * basis.eigenfunction(k, xk); });
    }
    Ok(corr)
}

/// Truncation depth of the wavefunction series assembled by [`correct`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// `ψ_total = ψ⁽⁰⁾ + ψ⁽¹⁾`.
    First,
    /// `ψ_total = ψ⁽⁰⁾ + ψ⁽¹⁾ + ψ⁽²⁾`.
    Second,
}

impl Order {
    /// Return `true` if `self` is `First`.
    pub fn is_first(&self) -> bool { matches!(self, Self::First) }

    /// Return `true` if `self` is `Second`.
    pub fn is_second(&self) -> bool { matches!(self, Self::Second) }
}

/// Complete set of perturbative corrections for a single target level.
///
/// This struct is usually only returned by [`correct`]; you probably won't
/// ever instantiate it yourself. The second-order wavefunction correction is
/// allowed to be missing in the case that [`Order::First`] is requested.
#[derive(Clone, Debug)]
pub struct Corrections {
    /// Unperturbed energy E⁽⁰⁾.
    pub e0: f64,
    /// First-order energy correction E⁽¹⁾.
    pub e1: f64,
    /// Second-order energy correction E⁽²⁾.
    pub e2: f64,
    /// Unperturbed wavefunction, sampled on the grid.
    pub psi0: nd::Array1<f64>,
    /// First-order wavefunction correction, sampled on the grid.
    pub psi1: nd::Array1<f64>,
    /// Second-order wavefunction correction, if requested.
    pub psi2: Option<nd::Array1<f64>>,
    /// Renormalized total wavefunction; unit discrete L2 norm on the grid.
    pub psi_total: nd::Array1<f64>,
}

impl Corrections {
    /// Perturbed energy through second order.
    pub fn energy(&self) -> f64 { self.e0 + self.e1 + self.e2 }
}

/// Assemble unperturbed and corrected energies and wavefunctions for level
/// `n`, sampling all wavefunctions on `grid`.
///
/// The total wavefunction is renormalized by the square root of its
/// trapezoidal squared norm on the grid; a non-positive norm is reported as
/// [`PerturbError::ZeroNorm`]. Everything is recomputed fresh per call.
pub fn correct<B, V>(
    basis: &B,
    v: &V,
    n: usize,
    max_states: usize,
    order: Order,
    grid: &Grid,
) -> PerturbResult<Corrections>
where
    B: Basis,
    V: Fn(f64) -> f64 + Sync,
{
    PerturbError::check_level(n, basis.index_origin())?;
    let x = grid.x();
    let psi0 = basis.sample(n, x);
    let p1 = psi1(basis, v, n, max_states, x)?;
    let p2 = order.is_second()
        .then(|| psi2(basis, v, n, max_states, x))
        .transpose()?;
    let mut psi_total = &psi0 + &p1;
    if let Some(p2) = p2.as_ref() { psi_total += p2; }
    PerturbError::check_norm(wf_norm(&psi_total, grid.dx()))?;
    wf_renormalize(&mut psi_total, grid.dx());
    Ok(Corrections {
        e0: basis.energy(n),
        e1: energy1(basis, v, n)?,
        e2: energy2(basis, v, n, max_states)?,
        psi0,
        psi1: p1,
        psi2: p2,
        psi_total,
    })
}
