use std::path::PathBuf;
use anyhow::Result;
use ndarray as nd;
use ndarray_npy::write_npy;
use num_complex::Complex64 as C64;
use pspace::{
    DEF_MAX_STATES,
    basis::Well,
    grid::Grid,
    perturb::{ self, Order },
    timedep,
    units,
};

// charged particle in a box under a uniform electric field (V' = -qEx),
// with time evolution of an equal superposition of the two lowest levels

const CHARGE: f64 = 1.0;
const FIELD: f64 = 0.1;
const TARGET_N: usize = 1;

fn main() -> Result<()> {
    // natural units set by an electron in a 1 nm box
    let uu = units::Units::from_mks(units::me, 1e-9);

    let well = Well::default();
    let grid = Grid::new_linspace(0.0, well.l, 200);
    let v = |x: f64| -CHARGE * FIELD * x;

    let corr = perturb::correct(
        &well, &v, TARGET_N, DEF_MAX_STATES, Order::First, &grid)?;
    println!("box width: {:.3e} m", uu.from_nat_length(well.l));
    println!("E0 = {:.6} ({:.6e} J)",
        corr.e0, uu.from_nat_energy(corr.e0));
    println!("E1 = {:.6e}", corr.e1);
    println!("E2 = {:.6e}", corr.e2);
    println!("E  = {:.6} ({:.6e} J)",
        corr.energy(), uu.from_nat_energy(corr.energy()));

    let t: nd::Array1<f64> = nd::Array1::linspace(0.0, 10.0, 200);
    let coeffs: Vec<C64> = timedep::normalized_coeffs(&[1.0, 1.0]);
    let q: nd::Array2<C64>
        = timedep::psi_mixed_frames(&well, &coeffs, &[1, 2], grid.x(), &t)?;

    let outdir = PathBuf::from("output");
    std::fs::create_dir_all(&outdir)?;
    write_npy(outdir.join("charged_x.npy"), grid.x())?;
    write_npy(outdir.join("charged_t.npy"), &t)?;
    write_npy(outdir.join("charged_psi0.npy"), &corr.psi0)?;
    write_npy(outdir.join("charged_psi1.npy"), &corr.psi1)?;
    write_npy(outdir.join("charged_psi_total.npy"), &corr.psi_total)?;
    write_npy(outdir.join("charged_q_re.npy"), &q.mapv(|qk| qk.re))?;
    write_npy(outdir.join("charged_q_im.npy"), &q.mapv(|qk| qk.im))?;
    write_npy(
        outdir.join("charged_e.npy"),
        &nd::array![corr.e0, corr.e1, corr.e2],
    )?;
    Ok(())
}
