//! Logging utilities for ridgeline.
//!
//! Structured `tracing` helpers shared by the library and the binaries.

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::densities::{xy_extrema, Densities};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let operation_id = Uuid::new_v4();

    debug!(
        operation = operation,
        operation_id = %operation_id,
        "Starting operation"
    );

    let result = f();

    info!(
        operation = operation,
        operation_id = %operation_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log summary statistics about a densities grid
pub fn log_grid_stats(source: &str, densities: &Densities) {
    let n_rows = densities.len();
    let n_traces: usize = densities.iter().map(Vec::len).sum();
    let n_points: usize = densities.iter().flatten().map(Vec::len).sum();

    match xy_extrema(densities) {
        Some((x_min, x_max, _, _)) => info!(
            operation = "densities_load",
            source = source,
            n_rows = n_rows,
            n_traces = n_traces,
            n_points = n_points,
            x_min = x_min,
            x_max = x_max,
            "Densities loaded"
        ),
        None => warn!(
            operation = "densities_load",
            source = source,
            n_rows = n_rows,
            "Densities grid has no points"
        ),
    }
}

/// Log an error with context
pub fn log_error(error: &crate::error::RidgelineError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}
