//! RGB color values and alpha blending.
//!
//! Any CSS color accepted by `csscolorparser` (hex, named colors, `rgb()`,
//! `rgba()`, `hsl()`, ...) can be turned into an [`Rgb`] triple.

use std::fmt;

use crate::error::{Result, RidgelineError};

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse any CSS color string. Any alpha component is discarded.
    pub fn parse(color: &str) -> Result<Self> {
        let parsed = csscolorparser::parse(color).map_err(|e| RidgelineError::InvalidColor {
            color: color.to_string(),
            message: e.to_string(),
        })?;
        let [r, g, b, _] = parsed.to_rgba8();
        Ok(Self { r, g, b })
    }

    /// Linear interpolation between two colors, channel by channel
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Format as a CSS `rgba()` string with the given alpha
    pub fn to_rgba_string(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Check that an alpha value lies in `[0, 1]`
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(RidgelineError::InvalidParameter {
            param: "coloralpha".to_string(),
            message: format!("alpha must be within [0, 1], got {}", alpha),
        });
    }
    Ok(())
}

/// Convert any accepted color representation to `rgba(r, g, b, alpha)`.
pub fn apply_alpha(color: &str, alpha: f64) -> Result<String> {
    validate_alpha(alpha)?;
    Ok(Rgb::parse(color)?.to_rgba_string(alpha))
}
