//! # ridgeline
//!
//! Per-trace color interpolation for ridgeline plots.
//!
//! Given a grid of density traces (rows of traces, each trace a list of
//! `(x, y)` points), ridgeline computes one CSS color string per trace. The
//! color comes from mapping a per-trace position in `[0, 1]` through a color
//! scale, with the position derived according to a [`Colormode`].
//!
//! ## Example
//!
//! ```
//! use ridgeline::{compute_trace_colors, ColorScaleSpec, Colormode, InterpolationContext};
//!
//! let densities = vec![
//!     vec![vec![(0.0, 1.0), (1.0, 3.0)]],
//!     vec![vec![(2.0, 2.0), (3.0, 1.0)], vec![(4.0, 1.0)]],
//! ];
//! let ctx = InterpolationContext::from_densities(densities).unwrap();
//! let colors = compute_trace_colors(
//!     &ColorScaleSpec::from("viridis"),
//!     Colormode::TraceIndex,
//!     Some(0.6),
//!     &ctx,
//! )
//! .unwrap();
//!
//! assert_eq!(colors.len(), 2);
//! assert_eq!(colors[1].len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - **Colors**: CSS color parsing, named palettes and color scales
//! - **Interpolation**: the grid context and the five position strategies
//! - **Trace colors**: orchestration from densities to a colors grid

pub mod colors;
pub mod config;
pub mod densities;
pub mod error;
pub mod interpolation;
pub mod logging;
pub mod trace_colors;

pub use colors::{ColorScale, ColorScaleSpec};
pub use config::Config;
pub use densities::{Densities, Point, Trace};
pub use error::{Result, RidgelineError};
pub use interpolation::{Colormode, Interpolants, InterpolationContext, InterpolationStrategy};
pub use logging::{
    init_tracing, log_error, log_grid_stats, log_operation_end, log_operation_start,
    log_timed_operation,
};
pub use trace_colors::{compute_trace_colors, ColorsArray, TraceColorOptions};
