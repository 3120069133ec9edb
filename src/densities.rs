//! Densities grid data model.
//!
//! A densities grid is an ordered list of rows, each row an ordered list of
//! traces, each trace an ordered list of `(x, y)` points. The JSON form is a
//! nested array: `[[[[x, y], ...], ...], ...]`.

use std::path::Path;

use crate::error::{Result, RidgelineError};

/// A single `(x, y)` coordinate of a density trace
pub type Point = (f64, f64);

/// A single density curve
pub type Trace = Vec<Point>;

/// Rows of traces, in display order
pub type Densities = Vec<Vec<Trace>>;

/// Load a densities grid from a JSON file
pub fn load_densities(path: &Path) -> Result<Densities> {
    let content = std::fs::read_to_string(path)?;
    parse_densities(&content)
}

/// Parse a densities grid from a JSON string
pub fn parse_densities(json: &str) -> Result<Densities> {
    let densities: Densities = serde_json::from_str(json)?;
    Ok(densities)
}

/// Check the structural invariants of a densities grid.
///
/// The grid must have at least one row, every row at least one trace and
/// every trace at least one point. All coordinates must be finite, all
/// y-values non-negative, and each trace's weighted mean x must be finite.
pub fn validate_densities(densities: &Densities) -> Result<()> {
    if densities.is_empty() {
        return Err(RidgelineError::InvalidDensities {
            message: "densities must contain at least one row".to_string(),
        });
    }

    for (i, row) in densities.iter().enumerate() {
        if row.is_empty() {
            return Err(RidgelineError::InvalidDensities {
                message: format!("row {} contains no traces", i),
            });
        }
        for (j, trace) in row.iter().enumerate() {
            if trace.is_empty() {
                return Err(RidgelineError::InvalidDensities {
                    message: format!("trace {} in row {} contains no points", j, i),
                });
            }
            for &(x, y) in trace {
                if !x.is_finite() || !y.is_finite() {
                    return Err(RidgelineError::InvalidDensities {
                        message: format!(
                            "trace {} in row {} has a non-finite point ({}, {})",
                            j, i, x, y
                        ),
                    });
                }
                if y < 0.0 {
                    return Err(RidgelineError::InvalidDensities {
                        message: format!(
                            "trace {} in row {} has a negative y-value {}",
                            j, i, y
                        ),
                    });
                }
            }
            let mean = weighted_mean_x(trace);
            if !mean.is_finite() {
                return Err(RidgelineError::InvalidDensities {
                    message: format!(
                        "trace {} in row {} has a non-finite weighted mean x ({})",
                        j, i, mean
                    ),
                });
            }
        }
    }

    Ok(())
}

/// Global `(x_min, x_max, y_min, y_max)` over every point in the grid.
///
/// Returns `None` when the grid contains no points at all.
pub fn xy_extrema(densities: &Densities) -> Option<(f64, f64, f64, f64)> {
    densities
        .iter()
        .flatten()
        .flatten()
        .fold(None, |acc, &(x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x_min, x_max, y_min, y_max)) => {
                Some((x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y)))
            }
        })
}

/// Mass-weighted mean x of a trace, `Σ(x·y) / Σ(y)`.
///
/// A trace with zero total mass has no weighted mean; the plain mean of its
/// x-values is used instead.
pub fn weighted_mean_x(trace: &[Point]) -> f64 {
    let (weighted_sum, mass) = trace
        .iter()
        .fold((0.0, 0.0), |(s, m), &(x, y)| (s + x * y, m + y));

    if mass > 0.0 {
        weighted_sum / mass
    } else {
        trace.iter().map(|&(x, _)| x).sum::<f64>() / trace.len() as f64
    }
}
