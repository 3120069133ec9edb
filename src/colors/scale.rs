//! Color scales.
//!
//! A [`ColorScale`] is an ordered list of `(position, color)` stops with
//! strictly increasing positions running from exactly `0.0` to exactly
//! `1.0`. Users describe a scale with a [`ColorScaleSpec`], which is
//! normalized into the canonical form once per colorization call.

use serde::{Deserialize, Serialize};

use super::palettes::{get_palette, DEFAULT_PALETTE};
use super::rgb::Rgb;
use crate::error::{Result, RidgelineError};

/// The accepted ways of describing a color scale.
///
/// In JSON this is either a palette name (`"viridis"`), a list of colors
/// (`["red", "blue"]`) or a list of stops (`[[0.0, "red"], [1.0, "blue"]]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorScaleSpec {
    /// Name of a built-in palette
    Named(String),
    /// Colors placed at evenly spaced positions
    Colors(Vec<String>),
    /// Explicit `(position, color)` stops
    Stops(Vec<(f64, String)>),
}

impl Default for ColorScaleSpec {
    fn default() -> Self {
        ColorScaleSpec::Named(DEFAULT_PALETTE.to_string())
    }
}

impl From<&str> for ColorScaleSpec {
    fn from(name: &str) -> Self {
        ColorScaleSpec::Named(name.to_string())
    }
}

impl From<ColorScale> for ColorScaleSpec {
    fn from(scale: ColorScale) -> Self {
        ColorScaleSpec::Stops(scale.stops)
    }
}

/// A validated color scale
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<(f64, String)>,
    // Parsed stop colors, aligned with `stops`
    rgb: Vec<Rgb>,
}

impl ColorScale {
    /// Normalize any [`ColorScaleSpec`] into a canonical scale.
    pub fn normalize(spec: &ColorScaleSpec) -> Result<Self> {
        let stops = match spec {
            ColorScaleSpec::Named(name) => {
                evenly_spaced(get_palette(name)?.into_iter().map(str::to_string).collect())?
            }
            ColorScaleSpec::Colors(colors) => evenly_spaced(colors.clone())?,
            ColorScaleSpec::Stops(stops) => stops.clone(),
        };
        Self::from_stops(stops)
    }

    /// Build a scale from explicit stops, validating every invariant.
    pub fn from_stops(stops: Vec<(f64, String)>) -> Result<Self> {
        let (first, last) = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) if stops.len() >= 2 => (first.0, last.0),
            _ => {
                return Err(RidgelineError::InvalidColorScale {
                    message: format!("a color scale needs at least 2 stops, got {}", stops.len()),
                })
            }
        };

        if first != 0.0 || last != 1.0 {
            return Err(RidgelineError::InvalidColorScale {
                message: format!(
                    "positions must start at 0.0 and end at 1.0, got {} and {}",
                    first, last
                ),
            });
        }

        for pair in stops.windows(2) {
            if !(pair[0].0 < pair[1].0) {
                return Err(RidgelineError::InvalidColorScale {
                    message: format!(
                        "positions must be strictly increasing, got {} followed by {}",
                        pair[0].0, pair[1].0
                    ),
                });
            }
        }

        let rgb = stops
            .iter()
            .map(|(_, color)| Rgb::parse(color))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { stops, rgb })
    }

    /// The canonical `(position, color)` stops
    pub fn stops(&self) -> &[(f64, String)] {
        &self.stops
    }

    /// Color at position `p`.
    ///
    /// A `p` that lands exactly on a stop returns that stop's color string
    /// unmodified. Anything in between is linearly interpolated and returned
    /// as `rgb(r, g, b)`.
    pub fn interpolate(&self, p: f64) -> Result<String> {
        if !(0.0..=1.0).contains(&p) {
            return Err(RidgelineError::InvalidParameter {
                param: "p".to_string(),
                message: format!("interpolation position must be within [0, 1], got {}", p),
            });
        }

        // First stop whose position is >= p; exists because the last is 1.0
        let hi = self.stops.partition_point(|(pos, _)| *pos < p);
        let (pos_hi, color_hi) = &self.stops[hi];
        if *pos_hi == p {
            return Ok(color_hi.clone());
        }

        // p > 0.0 here, so hi >= 1
        let lo = hi - 1;
        let pos_lo = self.stops[lo].0;
        let t = if *pos_hi > pos_lo {
            (p - pos_lo) / (pos_hi - pos_lo)
        } else {
            0.0
        };

        Ok(self.rgb[lo].lerp(self.rgb[hi], t).to_string())
    }
}

/// Place `colors` at positions `i / (len - 1)`; a single color covers both ends.
fn evenly_spaced(colors: Vec<String>) -> Result<Vec<(f64, String)>> {
    match colors.len() {
        0 => Err(RidgelineError::InvalidColorScale {
            message: "a color scale needs at least one color".to_string(),
        }),
        1 => Ok(vec![(0.0, colors[0].clone()), (1.0, colors[0].clone())]),
        n => {
            let last = (n - 1) as f64;
            Ok(colors
                .into_iter()
                .enumerate()
                .map(|(i, color)| {
                    let pos = if i == n - 1 { 1.0 } else { i as f64 / last };
                    (pos, color)
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stops(pairs: &[(f64, &str)]) -> Vec<(f64, String)> {
        pairs.iter().map(|(p, c)| (*p, c.to_string())).collect()
    }

    #[test]
    fn test_normalize_named() {
        let scale = ColorScale::normalize(&"viridis".into()).unwrap();
        assert_eq!(scale.stops().len(), 10);
        assert_eq!(scale.stops()[0], (0.0, "#440154".to_string()));
        assert_eq!(scale.stops()[9], (1.0, "#fde725".to_string()));
    }

    #[test]
    fn test_normalize_flat_colors() {
        let spec = ColorScaleSpec::Colors(vec!["red".into(), "green".into(), "blue".into()]);
        let scale = ColorScale::normalize(&spec).unwrap();
        assert_eq!(
            scale.stops(),
            stops(&[(0.0, "red"), (0.5, "green"), (1.0, "blue")]).as_slice()
        );
    }

    #[test]
    fn test_normalize_single_color() {
        let spec = ColorScaleSpec::Colors(vec!["red".into()]);
        let scale = ColorScale::normalize(&spec).unwrap();
        assert_eq!(scale.stops(), stops(&[(0.0, "red"), (1.0, "red")]).as_slice());
        assert_eq!(scale.interpolate(0.3).unwrap(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_normalize_canonical_is_identity() {
        let scale = ColorScale::normalize(&"magma".into()).unwrap();
        let again = ColorScale::normalize(&scale.clone().into()).unwrap();
        assert_eq!(scale, again);
    }

    #[test]
    fn test_normalize_errors() {
        // Unknown palette
        assert!(matches!(
            ColorScale::normalize(&"nope".into()),
            Err(RidgelineError::InvalidParameter { .. })
        ));

        // Empty inputs
        assert!(ColorScale::normalize(&ColorScaleSpec::Colors(vec![])).is_err());
        assert!(ColorScale::normalize(&ColorScaleSpec::Stops(vec![])).is_err());

        // Bad endpoints
        let spec = ColorScaleSpec::Stops(stops(&[(0.1, "red"), (1.0, "blue")]));
        assert!(ColorScale::normalize(&spec).is_err());
        let spec = ColorScaleSpec::Stops(stops(&[(0.0, "red"), (0.9, "blue")]));
        assert!(ColorScale::normalize(&spec).is_err());

        // Non-monotonic
        let spec = ColorScaleSpec::Stops(stops(&[
            (0.0, "red"),
            (0.6, "green"),
            (0.4, "white"),
            (1.0, "blue"),
        ]));
        assert!(ColorScale::normalize(&spec).is_err());

        // Duplicate position
        let spec = ColorScaleSpec::Stops(stops(&[(0.0, "red"), (0.0, "green"), (1.0, "blue")]));
        assert!(ColorScale::normalize(&spec).is_err());

        // Unparseable color
        let spec = ColorScaleSpec::Colors(vec!["red".into(), "blurple".into()]);
        assert!(matches!(
            ColorScale::normalize(&spec),
            Err(RidgelineError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_interpolate_endpoints_unmodified() {
        let spec = ColorScaleSpec::Stops(stops(&[(0.0, "#440154"), (1.0, "yellow")]));
        let scale = ColorScale::normalize(&spec).unwrap();
        assert_eq!(scale.interpolate(0.0).unwrap(), "#440154");
        assert_eq!(scale.interpolate(1.0).unwrap(), "yellow");
    }

    #[test]
    fn test_interpolate_between_stops() {
        let spec = ColorScaleSpec::Stops(stops(&[
            (0.0, "rgb(0, 0, 0)"),
            (0.5, "rgb(100, 100, 100)"),
            (1.0, "rgb(200, 0, 0)"),
        ]));
        let scale = ColorScale::normalize(&spec).unwrap();
        assert_eq!(scale.interpolate(0.25).unwrap(), "rgb(50, 50, 50)");
        assert_eq!(scale.interpolate(0.5).unwrap(), "rgb(100, 100, 100)");
        assert_eq!(scale.interpolate(0.75).unwrap(), "rgb(150, 50, 50)");
    }

    #[test]
    fn test_interpolate_out_of_range() {
        let scale = ColorScale::normalize(&ColorScaleSpec::default()).unwrap();
        assert!(scale.interpolate(-0.01).is_err());
        assert!(scale.interpolate(1.01).is_err());
        assert!(scale.interpolate(f64::NAN).is_err());
    }

    #[test]
    fn test_spec_from_json() {
        let named: ColorScaleSpec = serde_json::from_str("\"viridis\"").unwrap();
        assert_eq!(named, ColorScaleSpec::Named("viridis".into()));

        let colors: ColorScaleSpec = serde_json::from_str("[\"red\", \"blue\"]").unwrap();
        assert_eq!(colors, ColorScaleSpec::Colors(vec!["red".into(), "blue".into()]));

        let explicit: ColorScaleSpec =
            serde_json::from_str("[[0.0, \"red\"], [1.0, \"blue\"]]").unwrap();
        assert_eq!(explicit, ColorScaleSpec::Stops(stops(&[(0.0, "red"), (1.0, "blue")])));
    }
}
