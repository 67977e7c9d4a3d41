//! PSNR and SSIM quality metrics, feeding the catalog's quality table
//! (spec §4.4 "Quality" logical table).
//!
//! Grounded on `examples/hawk90-bitvue/crates/bitvue-metrics/src/lib.rs`:
//! plain per-plane PSNR plus an 8x8-windowed SSIM with the standard
//! k1/k2/L constants.

use thiserror::Error;

use alfalfa_core::Raster;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        a_width: u32,
        a_height: u32,
        b_width: u32,
        b_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

const SSIM_K1: f64 = 0.01;
const SSIM_K2: f64 = 0.03;
const SSIM_L: f64 = 255.0;
const SSIM_WINDOW: usize = 8;

fn check_dimensions(a: &Raster, b: &Raster) -> Result<()> {
    if a.display_width() != b.display_width() || a.display_height() != b.display_height() {
        return Err(Error::DimensionMismatch {
            a_width: a.display_width(),
            a_height: a.display_height(),
            b_width: b.display_width(),
            b_height: b.display_height(),
        });
    }
    Ok(())
}

fn plane_mse(a: &alfalfa_core::Plane, b: &alfalfa_core::Plane, width: usize, height: usize) -> f64 {
    let mut sum = 0f64;
    for y in 0..height {
        for x in 0..width {
            let d = a.get(x, y) as f64 - b.get(x, y) as f64;
            sum += d * d;
        }
    }
    sum / (width * height) as f64
}

fn mse_to_psnr(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (255.0f64 * 255.0 / mse).log10()
}

/// Per-plane PSNR in dB, for Y/U/V in that order. `+inf` on bit-identical
/// planes.
pub fn psnr(a: &Raster, b: &Raster) -> Result<[f64; 3]> {
    check_dimensions(a, b)?;
    let y_w = a.display_width() as usize;
    let y_h = a.display_height() as usize;
    let uv_w = y_w.div_ceil(2);
    let uv_h = y_h.div_ceil(2);
    Ok([
        mse_to_psnr(plane_mse(a.y(), b.y(), y_w, y_h)),
        mse_to_psnr(plane_mse(a.u(), b.u(), uv_w, uv_h)),
        mse_to_psnr(plane_mse(a.v(), b.v(), uv_w, uv_h)),
    ])
}

/// Mean structural similarity over the luma plane, using non-overlapping
/// `SSIM_WINDOW`x`SSIM_WINDOW` windows with the standard stabilizing
/// constants `c1 = (k1*L)^2`, `c2 = (k2*L)^2`.
pub fn ssim_luma(a: &Raster, b: &Raster) -> Result<f64> {
    check_dimensions(a, b)?;
    let width = a.display_width() as usize;
    let height = a.display_height() as usize;
    let c1 = (SSIM_K1 * SSIM_L).powi(2);
    let c2 = (SSIM_K2 * SSIM_L).powi(2);

    let mut total = 0f64;
    let mut windows = 0usize;

    let mut wy = 0;
    while wy + SSIM_WINDOW <= height {
        let mut wx = 0;
        while wx + SSIM_WINDOW <= width {
            total += window_ssim(a.y(), b.y(), wx, wy, c1, c2);
            windows += 1;
            wx += SSIM_WINDOW;
        }
        wy += SSIM_WINDOW;
    }

    if windows == 0 {
        return Ok(1.0);
    }
    Ok(total / windows as f64)
}

fn window_ssim(a: &alfalfa_core::Plane, b: &alfalfa_core::Plane, ox: usize, oy: usize, c1: f64, c2: f64) -> f64 {
    let n = (SSIM_WINDOW * SSIM_WINDOW) as f64;
    let mut sum_a = 0f64;
    let mut sum_b = 0f64;
    for y in 0..SSIM_WINDOW {
        for x in 0..SSIM_WINDOW {
            sum_a += a.get(ox + x, oy + y) as f64;
            sum_b += b.get(ox + x, oy + y) as f64;
        }
    }
    let mean_a = sum_a / n;
    let mean_b = sum_b / n;

    let mut var_a = 0f64;
    let mut var_b = 0f64;
    let mut covar = 0f64;
    for y in 0..SSIM_WINDOW {
        for x in 0..SSIM_WINDOW {
            let da = a.get(ox + x, oy + y) as f64 - mean_a;
            let db = b.get(ox + x, oy + y) as f64 - mean_b;
            var_a += da * da;
            var_b += db * db;
            covar += da * db;
        }
    }
    var_a /= n - 1.0;
    var_b /= n - 1.0;
    covar /= n - 1.0;

    ((2.0 * mean_a * mean_b + c1) * (2.0 * covar + c2))
        / ((mean_a * mean_a + mean_b * mean_b + c1) * (var_a + var_b + c2))
}

#[cfg(feature = "parallel")]
pub fn psnr_batch(pairs: &[(Raster, Raster)]) -> Vec<Result<[f64; 3]>> {
    use rayon::prelude::*;
    pairs.par_iter().map(|(a, b)| psnr(a, b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_rasters_have_infinite_psnr() {
        let r = Raster::new_filled(16, 16, 10, 128, 128);
        let psnrs = psnr(&r, &r).unwrap();
        assert!(psnrs.iter().all(|v| v.is_infinite()));
    }

    #[test]
    fn identical_rasters_have_ssim_one() {
        let r = Raster::new_filled(16, 16, 10, 128, 128);
        let s = ssim_luma(&r, &r).unwrap();
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let a = Raster::new_filled(16, 16, 10, 128, 128);
        let b = Raster::new_filled(32, 16, 10, 128, 128);
        assert!(psnr(&a, &b).is_err());
    }
}
