//! Uniformly sampled coordinate grids.

use ndarray as nd;

/// Simple record to keep track of a coordinate array.
///
/// Arrays borrowed from this type are guaranteed to be sampled (or generated)
/// with uniform spacing; all wavefunction arrays produced for a given `Grid`
/// are aligned with its coordinate array.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // array size
    n: usize,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    ///
    /// *Panics if the number of points is less than 2*.
    pub fn new_linspace(start: f64, end: f64, n: usize) -> Self {
        let x: nd::Array1<f64> = nd::Array1::linspace(start, end, n);
        let dx = x[1] - x[0];
        Self { x, dx, n }
    }

    /// Create a new `Grid` from "range-style" arguments (start, exclusive
    /// end, and a step size).
    ///
    /// *Panics if the resulting number of points is less than 2*.
    pub fn new_range(start: f64, end: f64, step: f64) -> Self {
        let x: nd::Array1<f64> = nd::Array1::range(start, end, step);
        let n = x.len();
        assert!(n >= 2);
        Self { x, dx: step, n }
    }

    /// Create a new `Grid` from a bare coordinate array, taking the spacing
    /// from the first two elements.
    ///
    /// *Panics if the number of points is less than 2*.
    pub fn from_array(x: nd::Array1<f64>) -> Self {
        let dx = x[1] - x[0];
        let n = x.len();
        Self { x, dx, n }
    }

    /// Get a reference to the coordinate array.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the first and last coordinates.
    pub fn bounds(&self) -> (f64, f64) { (self.x[0], self.x[self.n - 1]) }
}
