//! Interpolation strategies for trace colors.
//!
//! Each [`Colormode`] selects a strategy that turns an
//! [`InterpolationContext`] into one color scale position per trace.

pub mod common;
pub mod context;
pub mod index;
pub mod mean;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use context::InterpolationContext;

use crate::error::{Result, RidgelineError};

/// Color scale positions in `[0, 1]`, shaped like the densities grid
pub type Interpolants = Vec<Vec<f64>>;

/// Trait for interpolation strategies
pub trait InterpolationStrategy: Send + Sync {
    /// Compute one position per trace
    fn interpolate(&self, ctx: &InterpolationContext) -> Interpolants;

    /// Get the name of this strategy
    fn name(&self) -> &str;
}

/// How the color of each trace is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Colormode {
    /// One color per row, by row position
    RowIndex,
    /// One continuous gradient over all traces, in row-major order
    TraceIndex,
    /// An independent gradient within each row
    TraceIndexRowWise,
    /// Weighted mean x of each trace, scaled by the global x range
    #[default]
    MeanMinmax,
    /// Weighted mean x of each trace, scaled by the range of all means
    MeanMeans,
}

impl Colormode {
    pub const ALL: [Colormode; 5] = [
        Colormode::RowIndex,
        Colormode::TraceIndex,
        Colormode::TraceIndexRowWise,
        Colormode::MeanMinmax,
        Colormode::MeanMeans,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Colormode::RowIndex => "row-index",
            Colormode::TraceIndex => "trace-index",
            Colormode::TraceIndexRowWise => "trace-index-row-wise",
            Colormode::MeanMinmax => "mean-minmax",
            Colormode::MeanMeans => "mean-means",
        }
    }

    /// The strategy implementing this colormode
    pub fn strategy(&self) -> &'static dyn InterpolationStrategy {
        match self {
            Colormode::RowIndex => &index::RowIndex,
            Colormode::TraceIndex => &index::TraceIndex,
            Colormode::TraceIndexRowWise => &index::TraceIndexRowWise,
            Colormode::MeanMinmax => &mean::MeanMinMax,
            Colormode::MeanMeans => &mean::MeanMeans,
        }
    }
}

impl fmt::Display for Colormode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Colormode {
    type Err = RidgelineError;

    fn from_str(s: &str) -> Result<Self> {
        Colormode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| RidgelineError::InvalidParameter {
                param: "colormode".to_string(),
                message: format!(
                    "The colormode argument should be one of ({}), got {} instead",
                    Colormode::ALL.map(|m| m.as_str()).join(", "),
                    s
                ),
            })
    }
}
