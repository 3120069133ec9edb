//! Configuration management for ridgeline.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::colors::ColorScaleSpec;
use crate::error::{Result, RidgelineError};
use crate::interpolation::Colormode;
use crate::trace_colors::TraceColorOptions;

/// Command-line arguments for ridgeline
#[derive(Parser, Debug)]
#[command(name = "ridgeline")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the densities JSON file
    pub densities_file: PathBuf,

    /// Named palette, or a JSON color list / list of [position, color] stops
    #[arg(short = 's', long, env = "RIDGELINE_COLORSCALE")]
    pub colorscale: Option<String>,

    /// How trace colors are derived
    #[arg(short = 'm', long, env = "RIDGELINE_COLORMODE")]
    pub colormode: Option<Colormode>,

    /// Opacity applied to every trace color, in [0, 1]
    #[arg(short = 'a', long, env = "RIDGELINE_COLORALPHA")]
    pub coloralpha: Option<f64>,

    /// Where to write the colors JSON (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "RIDGELINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RIDGELINE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Trace coloring options
    #[serde(default)]
    pub coloring: TraceColorOptions,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Args)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args))
    }

    /// Build a configuration from already-parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(colorscale) = &args.colorscale {
            config.coloring.colorscale = parse_colorscale_arg(colorscale)?;
        }
        if let Some(colormode) = args.colormode {
            config.coloring.colormode = colormode;
        }
        if args.coloralpha.is_some() {
            config.coloring.coloralpha = args.coloralpha;
        }
        if let Some(log_level) = &args.log_level {
            config.log_level = log_level.clone();
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.coloring = other.coloring;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RidgelineError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if let Some(alpha) = self.coloring.coloralpha {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(RidgelineError::Config {
                    message: format!("Invalid coloralpha: {}. Must be within [0, 1]", alpha),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coloring: TraceColorOptions::default(),
            log_level: default_log_level(),
        }
    }
}

/// A `--colorscale` value is either JSON (a list) or a bare palette name
fn parse_colorscale_arg(value: &str) -> Result<ColorScaleSpec> {
    if value.trim_start().starts_with('[') {
        Ok(serde_json::from_str(value)?)
    } else {
        Ok(ColorScaleSpec::Named(value.to_string()))
    }
}

impl clap::ValueEnum for Colormode {
    fn value_variants<'a>() -> &'a [Self] {
        &Colormode::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

// Default value functions for serde
fn default_log_level() -> String {
    "info".to_string()
}
