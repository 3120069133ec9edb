//! Index-based strategies.
//!
//! These derive positions purely from where a trace sits in the grid, without
//! looking at its data. The first row/trace maps to 1.0 and the last to 0.0.

use super::common::descending_position;
use super::{Interpolants, InterpolationContext, InterpolationStrategy};

/// Same position for every trace in a row, by row index
pub struct RowIndex;

impl InterpolationStrategy for RowIndex {
    fn interpolate(&self, ctx: &InterpolationContext) -> Interpolants {
        ctx.densities()
            .iter()
            .enumerate()
            .map(|(i, row)| vec![descending_position(i, ctx.n_rows()); row.len()])
            .collect()
    }

    fn name(&self) -> &str {
        "row-index"
    }
}

/// One gradient across all traces, counted in row-major order
pub struct TraceIndex;

impl InterpolationStrategy for TraceIndex {
    fn interpolate(&self, ctx: &InterpolationContext) -> Interpolants {
        let mut ith_trace = 0;
        ctx.densities()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|_| {
                        let p = descending_position(ith_trace, ctx.n_traces());
                        ith_trace += 1;
                        p
                    })
                    .collect()
            })
            .collect()
    }

    fn name(&self) -> &str {
        "trace-index"
    }
}

/// A separate gradient within each row
pub struct TraceIndexRowWise;

impl InterpolationStrategy for TraceIndexRowWise {
    fn interpolate(&self, ctx: &InterpolationContext) -> Interpolants {
        ctx.densities()
            .iter()
            .map(|row| (0..row.len()).map(|j| descending_position(j, row.len())).collect())
            .collect()
    }

    fn name(&self) -> &str {
        "trace-index-row-wise"
    }
}
