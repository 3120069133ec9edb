use std::path::PathBuf;

use anyhow::{Context, Result};
use ridgeline::densities::{load_densities, weighted_mean_x};
use ridgeline::InterpolationContext;

fn main() -> Result<()> {
    let file_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: inspect_densities <densities.json>")?;

    println!("Inspecting densities file: {}", file_path.display());

    let densities = load_densities(&file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    let ctx = InterpolationContext::from_densities(densities)?;

    println!("\n=== GRID ===");
    println!("  rows   = {}", ctx.n_rows());
    println!("  traces = {}", ctx.n_traces());
    println!("  x      = [{}, {}]", ctx.x_min(), ctx.x_max());

    println!("\nTraces:");
    for (i, row) in ctx.densities().iter().enumerate() {
        for (j, trace) in row.iter().enumerate() {
            let mass: f64 = trace.iter().map(|&(_, y)| y).sum();
            print!(
                "  [{}][{}] points = {}, mass = {}, mean x = {}",
                i,
                j,
                trace.len(),
                mass,
                weighted_mean_x(trace)
            );
            if mass == 0.0 {
                print!(" (zero mass, unweighted)");
            }
            println!();
        }
    }

    Ok(())
}
