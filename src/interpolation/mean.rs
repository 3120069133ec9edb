//! Data-driven strategies based on each trace's mass-weighted mean x.
//!
//! Both strategies work in two passes: aggregate first, then map every trace
//! against the aggregate.

use super::common::normalise_min_max;
use super::{Interpolants, InterpolationContext, InterpolationStrategy};
use crate::densities::weighted_mean_x;

/// Weighted mean x of every trace, shaped like the grid
fn trace_means(ctx: &InterpolationContext) -> Vec<Vec<f64>> {
    ctx.densities()
        .iter()
        .map(|row| row.iter().map(|trace| weighted_mean_x(trace)).collect())
        .collect()
}

/// Trace means scaled against the global x range of the grid
pub struct MeanMinMax;

impl InterpolationStrategy for MeanMinMax {
    fn interpolate(&self, ctx: &InterpolationContext) -> Interpolants {
        trace_means(ctx)
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|mean| normalise_min_max(mean, ctx.x_min(), ctx.x_max()))
                    .collect()
            })
            .collect()
    }

    fn name(&self) -> &str {
        "mean-minmax"
    }
}

/// Trace means scaled against the range of all trace means
pub struct MeanMeans;

impl InterpolationStrategy for MeanMeans {
    fn interpolate(&self, ctx: &InterpolationContext) -> Interpolants {
        let means = trace_means(ctx);

        let (min_mean, max_mean) = means
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &m| {
                (lo.min(m), hi.max(m))
            });

        means
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|mean| normalise_min_max(mean, min_mean, max_mean))
                    .collect()
            })
            .collect()
    }

    fn name(&self) -> &str {
        "mean-means"
    }
}
