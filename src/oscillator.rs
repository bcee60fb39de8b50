use std::path::PathBuf;
use anyhow::Result;
use ndarray as nd;
use ndarray_npy::write_npy;
use pspace::{
    DEF_MAX_STATES,
    basis::{ Basis, Oscillator },
    grid::Grid,
    perturb::{ self, Order },
};

// linear perturbation εx on the oscillator ground state, in natural units;
// the second-order energy shift has the closed form -ε²/(2mω²) for every
// level, which the spectral sum should reproduce

const EPSILON: f64 = 0.1;
const TARGET_N: usize = 0;

fn main() -> Result<()> {
    let osc = Oscillator::default();
    let grid = Grid::new_linspace(
        -8.0 * osc.length(), 8.0 * osc.length(), 200);
    let v = |x: f64| EPSILON * x;

    let corr = perturb::correct(
        &osc, &v, TARGET_N, DEF_MAX_STATES, Order::First, &grid)?;
    let e2_exact = -EPSILON.powi(2) / (2.0 * osc.mass * osc.omega.powi(2));
    println!("E0 = {:.6}", corr.e0);
    println!("E1 = {:.6e}", corr.e1);
    println!("E2 = {:.6e} (exact {:.6e})", corr.e2, e2_exact);

    // the linear perturbation only mixes in the neighboring levels; compare
    // the summed coefficient against the analytic ladder matrix element
    let c_up = EPSILON * osc.x_element(TARGET_N + 1, TARGET_N)
        / (corr.e0 - osc.energy(TARGET_N + 1));
    println!("analytic c_{} = {:.6e}", TARGET_N + 1, c_up);

    let outdir = PathBuf::from("output");
    std::fs::create_dir_all(&outdir)?;
    write_npy(outdir.join("osc_x.npy"), grid.x())?;
    write_npy(outdir.join("osc_psi0.npy"), &corr.psi0)?;
    write_npy(outdir.join("osc_psi1.npy"), &corr.psi1)?;
    write_npy(outdir.join("osc_psi_total.npy"), &corr.psi_total)?;
    write_npy(
        outdir.join("osc_e.npy"),
        &nd::array![corr.e0, corr.e1, corr.e2],
    )?;
    Ok(())
}
