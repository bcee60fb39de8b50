//! Adaptive quadrature for overlap integrals.
//!
//! The integrand is assumed to be smooth on the scale of the initial panels;
//! each panel is then subdivided adaptively until a Richardson error
//! estimate falls below the requested tolerance.

/// Result of an adaptive quadrature pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    /// Best estimate of the integral.
    pub value: f64,
    /// Estimated absolute error accumulated over all accepted subintervals.
    pub err: f64,
}

// number of equal panels the interval is cut into before any adaptive
// subdivision; breaks the zero-alignment failure mode of Simpson's rule for
// integrands whose nodes fall on dyadic grid points
const INIT_PANELS: usize = 8;

// maximum adaptive subdivision depth within a single panel
const MAX_DEPTH: usize = 48;

// composite Simpson estimate over [a, b] with midpoint sample fm
fn simpson(fa: f64, fm: f64, fb: f64, h: f64) -> f64 {
    h / 6.0 * (fa + 4.0 * fm + fb)
}

fn adapt<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    epsilon: f64,
    depth: usize,
) -> Quad
where F: Fn(f64) -> f64
{
    let h = b - a;
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(fa, flm, fm, 0.5 * h);
    let right = simpson(fm, frm, fb, 0.5 * h);
    let delta = left + right - whole;
    if delta.abs() <= 15.0 * epsilon || depth >= MAX_DEPTH {
        if delta.abs() > 15.0 * epsilon {
            println!(
                "quad::quad: WARNING: subdivision limit reached; accepting \
                the current estimate"
            );
        }
        Quad {
            value: left + right + delta / 15.0,
            err: delta.abs() / 15.0,
        }
    } else {
        let l = adapt(f, a, m, fa, flm, fm, left, 0.5 * epsilon, depth + 1);
        let r = adapt(f, m, b, fm, frm, fb, right, 0.5 * epsilon, depth + 1);
        Quad { value: l.value + r.value, err: l.err + r.err }
    }
}

/// Integrate `f` over `[a, b]` to absolute tolerance `epsilon` via adaptive
/// Simpson subdivision with Richardson extrapolation.
///
/// The returned error estimate is the accumulated extrapolation residual,
/// not a guarantee; if the subdivision limit is reached the best available
/// estimate is kept and a warning is printed, with no retry.
pub fn quad<F>(f: F, a: f64, b: f64, epsilon: f64) -> Quad
where F: Fn(f64) -> f64
{
    let h = (b - a) / INIT_PANELS as f64;
    let eps = epsilon / INIT_PANELS as f64;
    let mut total = Quad { value: 0.0, err: 0.0 };
    for i in 0..INIT_PANELS {
        let pa = a + i as f64 * h;
        let pb = pa + h;
        let pm = 0.5 * (pa + pb);
        let fa = f(pa);
        let fm = f(pm);
        let fb = f(pb);
        let whole = simpson(fa, fm, fb, h);
        let panel = adapt(&f, pa, pb, fa, fm, fb, whole, eps, 0);
        total.value += panel.value;
        total.err += panel.err;
    }
    total
}
