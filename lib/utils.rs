//! Miscellaneous tools.

use std::ops::{ Add, Div, Mul };
use ndarray::{ self as nd, Ix1 };
use num_complex::ComplexFloat;
use num_traits::{ One, Zero };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: ComplexFloat,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: ComplexFloat,
{
    let n: usize = q.len();
    let two = <A as ComplexFloat>::Real::one()
        + <A as ComplexFloat>::Real::one();
    (dx / two) * (
        q[0].abs().powi(2)
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.abs().powi(2))
            .fold(<A as ComplexFloat>::Real::zero(), Add::add)
        + q[n - 1].abs().powi(2)
    )
}

/// Calculate the inner product of two wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A::Real,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: ComplexFloat + Mul<A::Real, Output = A>,
{
    let n: usize = q.len().min(p.len());
    let two = A::one() + A::one();
    let half_dx
        = dx / (
            <A as ComplexFloat>::Real::one()
            + <A as ComplexFloat>::Real::one()
        );
    (
        q[0].conj() * p[0]
        + two * q.iter().zip(p).skip(1).take(n - 2)
            .fold(A::zero(), |acc, (qk, pk)| acc + qk.conj() * *pk)
        + q[n - 1].conj() * p[n - 1]
    ) * half_dx
}

/// Renormalize a wavefunction in place.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A::Real)
where
    S: nd::DataMut<Elem = A>,
    A: ComplexFloat + Div<A::Real, Output = A>,
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
}

/// Return a normalized copy of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real)
    -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: ComplexFloat + Div<A::Real, Output = A>,
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}
