//! ridgeline - per-trace colors for ridgeline plots
//!
//! Reads a densities grid from JSON and writes the computed colors grid as JSON.

use std::time::Instant;
use tracing::{error, info};

use ridgeline::densities::load_densities;
use ridgeline::{
    init_tracing, log_grid_stats, log_operation_end, log_operation_start, log_timed_operation,
    Config, InterpolationContext, Result,
};

fn main() -> Result<()> {
    // Load configuration
    let (config, args) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting ridgeline v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let start = Instant::now();
    let source = args.densities_file.display().to_string();
    log_operation_start("trace_colors", Some(&source));

    let densities = load_densities(&args.densities_file).map_err(|e| {
        error!("Failed to load densities file: {}", e);
        e
    })?;
    log_grid_stats(&source, &densities);

    let result = InterpolationContext::from_densities(densities).and_then(|ctx| {
        log_timed_operation("compute_trace_colors", || config.coloring.compute(&ctx))
    });
    log_operation_end("trace_colors", start, result.is_ok());

    let colors = result.map_err(|e| {
        ridgeline::log_error(&e, "compute_trace_colors");
        e
    })?;

    let json = serde_json::to_string_pretty(&colors)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Colors written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
