//! Assertion utilities for testing.
//!
//! Helpers for checking the shape and values of interpolants and colors grids.

#![allow(dead_code)]

use ridgeline::{ColorsArray, Densities, Interpolants};

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two arrays of floating-point values are approximately element-wise equal.
///
/// # Panics
///
/// Panics if the arrays have different lengths or if any element-wise comparison fails.
pub fn assert_array_approx_eq(actual: &[f64], expected: &[f64], epsilon: Option<f64>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Arrays have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= eps,
            "Arrays differ at index {}: actual = {}, expected = {}, diff = {}, epsilon = {}",
            i,
            a,
            e,
            diff,
            eps
        );
    }
}

/// Assert that every interpolant lies within `[0, 1]`.
pub fn assert_unit_interval(interpolants: &Interpolants) {
    for (i, row) in interpolants.iter().enumerate() {
        for (j, &p) in row.iter().enumerate() {
            assert!(
                (0.0..=1.0).contains(&p),
                "Position out of range at [{}][{}]: {}",
                i,
                j,
                p
            );
        }
    }
}

/// Assert that a colors grid has exactly the shape of a densities grid.
pub fn assert_same_shape(colors: &ColorsArray, densities: &Densities) {
    assert_eq!(
        colors.len(),
        densities.len(),
        "Row count differs: colors = {}, densities = {}",
        colors.len(),
        densities.len()
    );
    for (i, (color_row, density_row)) in colors.iter().zip(densities).enumerate() {
        assert_eq!(
            color_row.len(),
            density_row.len(),
            "Trace count differs in row {}: colors = {}, densities = {}",
            i,
            color_row.len(),
            density_row.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_array_approx_eq() {
        assert_array_approx_eq(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], None);
        assert_array_approx_eq(&[1.0, 2.0, 3.0], &[1.001, 2.001, 3.001], Some(0.01));
    }

    #[test]
    fn test_assert_unit_interval() {
        assert_unit_interval(&vec![vec![0.0, 1.0], vec![0.5]]);
    }
}
