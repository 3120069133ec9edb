//! Built-in named palettes.
//!
//! Each palette is a flat, evenly spaced list of colors. Lookups are
//! case-insensitive, and appending `_r` to a name reverses the palette.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::{Result, RidgelineError};

/// Palette used when no color scale is configured
pub const DEFAULT_PALETTE: &str = "plasma";

// Sequential palettes (matplotlib perceptually uniform family)
const PLASMA: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];
const VIRIDIS: &[&str] = &[
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];
const INFERNO: &[&str] = &[
    "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925", "#fb9b06",
    "#f7d13d", "#fcffa4",
];
const MAGMA: &[&str] = &[
    "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d", "#fd9668",
    "#feca8d", "#fcfdbf",
];
const CIVIDIS: &[&str] = &[
    "#00224e", "#123570", "#3b496c", "#575d6d", "#707173", "#8a8678", "#a59c74", "#c3b369",
    "#e1cc55", "#fee838",
];

// Sequential palettes (ColorBrewer)
const BLUES: &[&str] = &[
    "rgb(247,251,255)", "rgb(222,235,247)", "rgb(198,219,239)", "rgb(158,202,225)",
    "rgb(107,174,214)", "rgb(66,146,198)", "rgb(33,113,181)", "rgb(8,81,156)", "rgb(8,48,107)",
];
const GREENS: &[&str] = &[
    "rgb(247,252,245)", "rgb(229,245,224)", "rgb(199,233,192)", "rgb(161,217,155)",
    "rgb(116,196,118)", "rgb(65,171,93)", "rgb(35,139,69)", "rgb(0,109,44)", "rgb(0,68,27)",
];
const GREYS: &[&str] = &[
    "rgb(255,255,255)", "rgb(240,240,240)", "rgb(217,217,217)", "rgb(189,189,189)",
    "rgb(150,150,150)", "rgb(115,115,115)", "rgb(82,82,82)", "rgb(37,37,37)", "rgb(0,0,0)",
];
const REDS: &[&str] = &[
    "rgb(255,245,240)", "rgb(254,224,210)", "rgb(252,187,161)", "rgb(252,146,114)",
    "rgb(251,106,74)", "rgb(239,59,44)", "rgb(203,24,29)", "rgb(165,15,21)", "rgb(103,0,13)",
];
const YLORRD: &[&str] = &[
    "rgb(255,255,204)", "rgb(255,237,160)", "rgb(254,217,118)", "rgb(254,178,76)",
    "rgb(253,141,60)", "rgb(252,78,42)", "rgb(227,26,28)", "rgb(189,0,38)", "rgb(128,0,38)",
];

// Diverging palettes
const RDBU: &[&str] = &[
    "rgb(103,0,31)", "rgb(178,24,43)", "rgb(214,96,77)", "rgb(244,165,130)",
    "rgb(253,219,199)", "rgb(247,247,247)", "rgb(209,229,240)", "rgb(146,197,222)",
    "rgb(67,147,195)", "rgb(33,102,172)", "rgb(5,48,97)",
];
const SPECTRAL: &[&str] = &[
    "rgb(158,1,66)", "rgb(213,62,79)", "rgb(244,109,67)", "rgb(253,174,97)",
    "rgb(254,224,139)", "rgb(255,255,191)", "rgb(230,245,152)", "rgb(171,221,164)",
    "rgb(102,194,165)", "rgb(50,136,189)", "rgb(94,79,162)",
];
const COOLWARM: &[&str] = &[
    "rgb(59,76,192)", "rgb(98,130,234)", "rgb(141,176,254)", "rgb(184,208,249)",
    "rgb(221,221,221)", "rgb(245,196,173)", "rgb(244,154,123)", "rgb(222,96,77)",
    "rgb(180,4,38)",
];

static REGISTRY: Lazy<BTreeMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    BTreeMap::from([
        ("plasma", PLASMA),
        ("viridis", VIRIDIS),
        ("inferno", INFERNO),
        ("magma", MAGMA),
        ("cividis", CIVIDIS),
        ("blues", BLUES),
        ("greens", GREENS),
        ("greys", GREYS),
        ("reds", REDS),
        ("ylorrd", YLORRD),
        ("rdbu", RDBU),
        ("spectral", SPECTRAL),
        ("coolwarm", COOLWARM),
    ])
});

/// Get a palette's colors by name
pub fn get_palette(name: &str) -> Result<Vec<&'static str>> {
    let lower = name.to_lowercase();
    let (base, reversed) = match lower.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (lower.as_str(), false),
    };

    let colors = REGISTRY
        .get(base)
        .ok_or_else(|| RidgelineError::InvalidParameter {
            param: "colorscale".to_string(),
            message: format!(
                "Unknown palette: {}. Available palettes: {}",
                name,
                list_palettes().join(", ")
            ),
        })?;

    let mut colors = colors.to_vec();
    if reversed {
        colors.reverse();
    }
    Ok(colors)
}

/// Names of all built-in palettes, in sorted order
pub fn list_palettes() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}
