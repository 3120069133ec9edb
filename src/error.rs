//! Error types for ridgeline.
//!
//! Every invalid input surfaces as one of these variants. Degenerate but
//! well-formed data (single rows, single traces, zero-mass traces) never
//! produces an error.

use thiserror::Error;

/// The main error type for ridgeline operations.
#[derive(Error, Debug)]
pub enum RidgelineError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors (colormode, palette name, alpha, position)
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Malformed color scales
    #[error("Invalid color scale: {message}")]
    InvalidColorScale { message: String },

    /// Color strings that cannot be parsed
    #[error("Invalid color '{color}': {message}")]
    InvalidColor { color: String, message: String },

    /// Densities grids that break the data model invariants
    #[error("Invalid densities: {message}")]
    InvalidDensities { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with RidgelineError
pub type Result<T> = std::result::Result<T, RidgelineError>;
