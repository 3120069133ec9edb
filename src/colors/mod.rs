//! Color handling: CSS color parsing, named palettes and color scales.

pub mod palettes;
pub mod rgb;
pub mod scale;

pub use palettes::{get_palette, list_palettes, DEFAULT_PALETTE};
pub use rgb::{apply_alpha, Rgb};
pub use scale::{ColorScale, ColorScaleSpec};
