//! Test data generation utilities.
//!
//! Densities grids with known layouts and known trace means.

#![allow(dead_code)]

use ridgeline::{Densities, Trace};
use std::path::Path;

/// A discretized Gaussian bump centered on `mean`, sampled on `[x_min, x_max]`.
pub fn gaussian_trace(mean: f64, sd: f64, x_min: f64, x_max: f64, n_points: usize) -> Trace {
    let step = (x_max - x_min) / (n_points - 1) as f64;
    (0..n_points)
        .map(|i| {
            let x = x_min + i as f64 * step;
            let z = (x - mean) / sd;
            (x, (-0.5 * z * z).exp())
        })
        .collect()
}

/// A grid with the given number of traces per row.
///
/// Trace `k` (counting in row-major order) is a Gaussian centered at `k`,
/// sampled symmetrically so its weighted mean is exactly `k`.
pub fn grid(row_lengths: &[usize]) -> Densities {
    let mut k = 0.0;
    row_lengths
        .iter()
        .map(|&n| {
            (0..n)
                .map(|_| {
                    let trace = gaussian_trace(k, 1.0, k - 4.0, k + 4.0, 33);
                    k += 1.0;
                    trace
                })
                .collect()
        })
        .collect()
}

/// Two-point traces whose weighted means are the given values.
pub fn grid_with_means(means: &[&[f64]]) -> Densities {
    means
        .iter()
        .map(|row| {
            row.iter()
                .map(|&m| vec![(m - 1.0, 1.0), (m + 1.0, 1.0)])
                .collect()
        })
        .collect()
}

/// Write a densities grid as JSON to `path`.
pub fn write_densities_json(path: &Path, densities: &Densities) -> std::io::Result<()> {
    let json = serde_json::to_string(densities).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
