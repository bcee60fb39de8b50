//! Time-dependent wavefunctions for eigenstates and fixed superpositions
//! under the unperturbed Hamiltonian.
//!
//! These are stateless, closed-form evaluations: each eigenstate picks up a
//! phase `exp(−iE_n t/ħ)` and superpositions are linear combinations with
//! fixed complex coefficients. In all 2D arrays, the first (or zero-th) axis
//! indexes time.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, basis::Basis, error::LengthError };

pub type TimeResult<T> = Result<T, LengthError>;

/// Single-state time-dependent wavefunction
/// `Ψ_n(x, t) = f_n(x)·exp(−iE_n t/ħ)`.
pub fn psi_t<B, S>(basis: &B, n: usize, x: &Arr1<S>, t: f64)
    -> nd::Array1<C64>
where
    B: Basis,
    S: nd::Data<Elem = f64>,
{
    let phase = C64::cis(-basis.energy(n) * t / basis.hbar());
    x.mapv(|xk| phase * basis.eigenfunction(n, xk))
}

/// Superposition of basis states with fixed (pre-normalized) complex
/// coefficients, evaluated at time `t`:
/// `Ψ(x, t) = Σ_i coeffs[i]·f_{levels[i]}(x)·exp(−iE_{levels[i]} t/ħ)`.
pub fn psi_mixed<B, S>(
    basis: &B,
    coeffs: &[C64],
    levels: &[usize],
    x: &Arr1<S>,
    t: f64,
) -> TimeResult<nd::Array1<C64>>
where
    B: Basis,
    S: nd::Data<Elem = f64>,
{
    LengthError::check(coeffs.len(), levels.len())?;
    let mut psi: nd::Array1<C64> = nd::Array1::zeros(x.len());
    for (&ck, &n) in coeffs.iter().zip(levels) {
        let phase = C64::cis(-basis.energy(n) * t / basis.hbar());
        nd::Zip::from(&mut psi).and(x)
            .for_each(|pk, &xk| {
                *pk += ck * phase * basis.eigenfunction(n, xk);
            });
    }
    Ok(psi)
}

/// Sample [`psi_t`] over a series of time coordinates.
pub fn psi_frames<B, S, T>(basis: &B, n: usize, x: &Arr1<S>, t: &Arr1<T>)
    -> nd::Array2<C64>
where
    B: Basis,
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let mut q: nd::Array2<C64> = nd::Array2::zeros((t.len(), x.len()));
    for (&tk, qk) in t.iter().zip(q.axis_iter_mut(nd::Axis(0))) {
        psi_t(basis, n, x, tk).move_into(qk);
    }
    q
}

/// Sample [`psi_mixed`] over a series of time coordinates.
pub fn psi_mixed_frames<B, S, T>(
    basis: &B,
    coeffs: &[C64],
    levels: &[usize],
    x: &Arr1<S>,
    t: &Arr1<T>,
) -> TimeResult<nd::Array2<C64>>
where
    B: Basis,
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(coeffs.len(), levels.len())?;
    let mut q: nd::Array2<C64> = nd::Array2::zeros((t.len(), x.len()));
    for (&tk, qk) in t.iter().zip(q.axis_iter_mut(nd::Axis(0))) {
        psi_mixed(basis, coeffs, levels, x, tk)?.move_into(qk);
    }
    Ok(q)
}

/// Normalize a set of real superposition weights to unit total probability,
/// promoting them to complex coefficients for [`psi_mixed`].
///
/// All-zero weights produce NaN coefficients.
pub fn normalized_coeffs(weights: &[f64]) -> Vec<C64> {
    let norm: f64 = weights.iter().map(|wk| wk * wk).sum::<f64>().sqrt();
    weights.iter().map(|wk| C64::from(wk / norm)).collect()
}
