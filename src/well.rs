use std::path::PathBuf;
use anyhow::Result;
use ndarray as nd;
use ndarray_npy::write_npy;
use pspace::{
    DEF_MAX_STATES,
    basis::Well,
    grid::Grid,
    perturb::{ self, Order },
};

// second-order corrections for the unit well under a quadratic bump εx²

const EPSILON: f64 = 0.1;
const TARGET_N: usize = 1;

fn main() -> Result<()> {
    let well = Well::default();
    let grid = Grid::new_linspace(0.0, well.l, 200);
    let v = |x: f64| EPSILON * x * x;

    let corr = perturb::correct(
        &well, &v, TARGET_N, DEF_MAX_STATES, Order::Second, &grid)?;
    println!("E0 = {:.6}", corr.e0);
    println!("E1 = {:.6}", corr.e1);
    println!("E2 = {:.6e}", corr.e2);
    println!("E  = {:.6}", corr.energy());

    let outdir = PathBuf::from("output");
    std::fs::create_dir_all(&outdir)?;
    write_npy(outdir.join("well_x.npy"), grid.x())?;
    write_npy(outdir.join("well_psi0.npy"), &corr.psi0)?;
    write_npy(outdir.join("well_psi1.npy"), &corr.psi1)?;
    write_npy(
        outdir.join("well_psi2.npy"), corr.psi2.as_ref().unwrap())?;
    write_npy(outdir.join("well_psi_total.npy"), &corr.psi_total)?;
    write_npy(
        outdir.join("well_e.npy"),
        &nd::array![corr.e0, corr.e1, corr.e2],
    )?;
    Ok(())
}
