//! Shared helpers for the interpolation strategies.

/// Position used when there is nothing to spread a gradient over
/// (a single row, a single trace, or a zero-width range).
pub const DEGENERATE_POSITION: f64 = 0.0;

/// Position of item `idx` out of `count`, counting down from 1.0 to 0.0.
///
/// The first item maps to 1.0 and the last to 0.0. A count of one maps
/// to [`DEGENERATE_POSITION`].
pub fn descending_position(idx: usize, count: usize) -> f64 {
    if count <= 1 {
        return DEGENERATE_POSITION;
    }
    let last = (count - 1) as f64;
    (last - idx as f64) / last
}

/// Min-max normalize `value` into `[0, 1]`.
///
/// A zero-width range maps to [`DEGENERATE_POSITION`]. The result is clamped
/// so that float rounding never pushes it outside the unit interval.
pub fn normalise_min_max(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return DEGENERATE_POSITION;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_position() {
        assert_eq!(descending_position(0, 3), 1.0);
        assert_eq!(descending_position(1, 3), 0.5);
        assert_eq!(descending_position(2, 3), 0.0);
        assert_eq!(descending_position(0, 1), DEGENERATE_POSITION);
    }

    #[test]
    fn test_normalise_min_max() {
        assert_eq!(normalise_min_max(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalise_min_max(0.0, 0.0, 10.0), 0.0);
        assert_eq!(normalise_min_max(10.0, 0.0, 10.0), 1.0);
        assert_eq!(normalise_min_max(3.0, 3.0, 3.0), DEGENERATE_POSITION);
    }

    #[test]
    fn test_normalise_min_max_clamps() {
        assert_eq!(normalise_min_max(10.000001, 0.0, 10.0), 1.0);
        assert_eq!(normalise_min_max(-0.000001, 0.0, 10.0), 0.0);
    }
}
