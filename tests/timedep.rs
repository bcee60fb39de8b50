use std::f64::consts::PI;
use approx::assert_abs_diff_eq;
use ndarray as nd;
use num_complex::Complex64 as C64;
use pspace::{
    basis::{ Basis, Well },
    grid::Grid,
    timedep::{
        normalized_coeffs,
        psi_frames,
        psi_mixed,
        psi_mixed_frames,
        psi_t,
    },
    utils::wf_norm,
};

#[test]
fn single_state_phase_only() {
    let well = Well::default();
    let grid = Grid::new_linspace(0.0, 1.0, 200);
    let f2 = well.sample(2, grid.x());
    let q = psi_t(&well, 2, grid.x(), 1.37);
    for (qk, f2k) in q.iter().zip(&f2) {
        assert_abs_diff_eq!(qk.norm(), f2k.abs(), epsilon = 1e-12);
    }
}

#[test]
fn zero_time_is_the_eigenfunction() {
    let well = Well::default();
    let grid = Grid::new_linspace(0.0, 1.0, 200);
    let f1 = well.sample(1, grid.x());
    let q = psi_t(&well, 1, grid.x(), 0.0);
    for (qk, f1k) in q.iter().zip(&f1) {
        assert_abs_diff_eq!(qk.re, *f1k, epsilon = 1e-12);
        assert_abs_diff_eq!(qk.im, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn ground_state_period() {
    // E₁ = π²/2, so the phase winds through 2π at t = 4/π
    let well = Well::default();
    let grid = Grid::new_linspace(0.0, 1.0, 200);
    let f1 = well.sample(1, grid.x());
    let q = psi_t(&well, 1, grid.x(), 4.0 / PI);
    for (qk, f1k) in q.iter().zip(&f1) {
        assert_abs_diff_eq!(qk.re, *f1k, epsilon = 1e-9);
        assert_abs_diff_eq!(qk.im, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn superposition_norm_conserved() {
    let well = Well::default();
    let grid = Grid::new_linspace(0.0, 1.0, 2001);
    let coeffs = normalized_coeffs(&[1.0, 1.0]);
    for t in [0.0, 1.1, 3.7, 10.0] {
        let q = psi_mixed(&well, &coeffs, &[1, 2], grid.x(), t).unwrap();
        assert_abs_diff_eq!(wf_norm(&q, grid.dx()), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn frames_layout() {
    let well = Well::default();
    let grid = Grid::new_linspace(0.0, 1.0, 120);
    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, 10.0, 50);

    let q = psi_frames(&well, 1, grid.x(), &t);
    assert_eq!(q.dim(), (50, 120));
    let row = psi_t(&well, 1, grid.x(), t[17]);
    for (qk, rk) in q.slice(nd::s![17, ..]).iter().zip(&row) {
        assert!((qk - rk).norm() < 1e-12);
    }

    let coeffs = normalized_coeffs(&[1.0, 1.0]);
    let q = psi_mixed_frames(&well, &coeffs, &[1, 2], grid.x(), &t).unwrap();
    assert_eq!(q.dim(), (50, 120));
    let row = psi_mixed(&well, &coeffs, &[1, 2], grid.x(), t[31]).unwrap();
    for (qk, rk) in q.slice(nd::s![31, ..]).iter().zip(&row) {
        assert!((qk - rk).norm() < 1e-12);
    }
}

#[test]
fn coefficient_normalization() {
    let coeffs = normalized_coeffs(&[1.0, 1.0]);
    for ck in coeffs.iter() {
        assert_abs_diff_eq!(ck.re, 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(ck.im, 0.0, epsilon = 1e-12);
    }
    let coeffs = normalized_coeffs(&[3.0, 4.0]);
    let total: f64 = coeffs.iter().map(C64::norm_sqr).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
}

#[test]
fn mismatched_superposition_is_an_error() {
    let well = Well::default();
    let grid = Grid::new_linspace(0.0, 1.0, 50);
    let coeffs = normalized_coeffs(&[1.0, 1.0]);
    let res = psi_mixed(&well, &coeffs, &[1, 2, 3], grid.x(), 0.0);
    let err = res.unwrap_err();
    assert_eq!((err.0, err.1), (2, 3));
}
