//! Grid-wide statistics shared by every interpolation strategy.

use crate::densities::{validate_densities, xy_extrema, Densities};
use crate::error::{Result, RidgelineError};

/// Immutable snapshot of a densities grid plus its aggregate statistics.
///
/// Built once per grid; can be reused across several colorization calls.
/// The statistics always describe the grid they were computed from, so the
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationContext {
    densities: Densities,
    n_rows: usize,
    n_traces: usize,
    x_min: f64,
    x_max: f64,
}

impl InterpolationContext {
    pub fn from_densities(densities: Densities) -> Result<Self> {
        validate_densities(&densities)?;

        let (x_min, x_max, _, _) =
            xy_extrema(&densities).ok_or_else(|| RidgelineError::InvalidDensities {
                message: "densities contain no points".to_string(),
            })?;

        Ok(Self {
            n_rows: densities.len(),
            n_traces: densities.iter().map(Vec::len).sum(),
            x_min,
            x_max,
            densities,
        })
    }

    pub fn densities(&self) -> &Densities {
        &self.densities
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Total trace count across all rows
    pub fn n_traces(&self) -> usize {
        self.n_traces
    }

    /// Smallest x-value over every trace in the grid
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Largest x-value over every trace in the grid
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Give the grid back, dropping the statistics
    pub fn into_densities(self) -> Densities {
        self.densities
    }

    /// Number of traces in each row
    pub fn row_lengths(&self) -> Vec<usize> {
        self.densities.iter().map(Vec::len).collect()
    }
}
