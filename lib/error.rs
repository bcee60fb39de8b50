//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from perturbation-series evaluator and aggregator functions.
#[derive(Debug, Error)]
pub enum PerturbError {
    /// Returned when two distinct levels within the truncation range share an
    /// unperturbed energy, which invalidates the non-degenerate correction
    /// formulas.
    #[error("degenerate spectrum: levels {na} and {nb} share energy {e:.6e}")]
    Degenerate {
        /// First level.
        na: usize,
        /// Second level.
        nb: usize,
        /// The shared unperturbed energy.
        e: f64,
    },

    /// Returned when the assembled total wavefunction has non-positive squared
    /// norm on the sampling grid.
    #[error("corrected wavefunction has non-positive squared norm {0:.6e}")]
    ZeroNorm(f64),

    /// Returned when a quantum number lies below the lowest level of the
    /// basis.
    #[error("quantum number {n} lies below the lowest level {origin} of the basis")]
    BadLevel {
        /// The offending quantum number.
        n: usize,
        /// Lowest valid quantum number of the basis.
        origin: usize,
    },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl PerturbError {
    /// Check a denominator E_na - E_nb, returning it when nonzero.
    pub(crate) fn check_nondegenerate(na: usize, nb: usize, ea: f64, eb: f64)
        -> Result<f64, Self>
    {
        let de = ea - eb;
        (de != 0.0).then_some(de).ok_or(Self::Degenerate { na, nb, e: ea })
    }

    pub(crate) fn check_norm(norm2: f64) -> Result<(), Self> {
        (norm2 > 0.0).then_some(()).ok_or(Self::ZeroNorm(norm2))
    }

    pub(crate) fn check_level(n: usize, origin: usize) -> Result<(), Self> {
        (n >= origin).then_some(()).ok_or(Self::BadLevel { n, origin })
    }
}
