//! Per-trace color computation.
//!
//! Ties the pieces together: normalize the color scale, run the selected
//! interpolation strategy over the context, and map every position through
//! the scale (and optional alpha) to a CSS color string.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::colors::rgb::{apply_alpha, validate_alpha};
use crate::colors::{ColorScale, ColorScaleSpec};
use crate::error::Result;
use crate::interpolation::{Colormode, InterpolationContext};

/// One CSS color string per trace, shaped like the densities grid
pub type ColorsArray = Vec<Vec<String>>;

/// The user-facing coloring options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraceColorOptions {
    /// Palette name, color list or explicit stops
    #[serde(default)]
    pub colorscale: ColorScaleSpec,

    #[serde(default)]
    pub colormode: Colormode,

    /// Opacity applied to every trace color, if set
    #[serde(default)]
    pub coloralpha: Option<f64>,
}

impl TraceColorOptions {
    pub fn compute(&self, ctx: &InterpolationContext) -> Result<ColorsArray> {
        compute_trace_colors(&self.colorscale, self.colormode, self.coloralpha, ctx)
    }
}

/// Compute the color of every trace in `ctx`.
///
/// Either every color is produced or an error is returned; there are no
/// partial results.
pub fn compute_trace_colors(
    colorscale: &ColorScaleSpec,
    colormode: Colormode,
    coloralpha: Option<f64>,
    ctx: &InterpolationContext,
) -> Result<ColorsArray> {
    let colorscale = ColorScale::normalize(colorscale)?;
    if let Some(alpha) = coloralpha {
        validate_alpha(alpha)?;
    }

    let strategy = colormode.strategy();
    debug!(
        colormode = strategy.name(),
        n_rows = ctx.n_rows(),
        n_traces = ctx.n_traces(),
        n_stops = colorscale.stops().len(),
        "Computing trace colors"
    );

    let get_color = |p: f64| -> Result<String> {
        let color = colorscale.interpolate(p)?;
        match coloralpha {
            Some(alpha) => apply_alpha(&color, alpha),
            None => Ok(color),
        }
    };

    strategy
        .interpolate(ctx)
        .into_iter()
        .map(|row| row.into_iter().map(&get_color).collect::<Result<Vec<_>>>())
        .collect()
}
