//! Asset and color catalog configuration.
//!
//! A [`Catalog`] is everything the selection UI needs to populate its menus
//! and everything the engine needs to find assets. It round-trips through
//! JSON so deployments can ship their own catalog file.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "layout": {
//!     "solidDir": "pic/monochromatic",
//!     "patternDir": "pic/pattern",
//!     "overlayDir": "pic/Aura"
//!   },
//!   "solidFile": "base.png",
//!   "overlayFile": "aura.png",
//!   "patterns": [{ "name": "Two-tone", "file": "00.png" }],
//!   "colors": [{ "code": "262626", "name": "Black" }],
//!   "defaultColor1": "e6130b",
//!   "defaultColor2": "262626"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::{AssetCategory, AssetLayout, AssetRef};
use crate::color::{Color, ColorEntry};

/// A named pattern texture offered in patterned mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Display name.
    pub name: String,
    /// Asset file name inside the pattern directory.
    pub file: String,
}

impl PatternEntry {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }

    /// Returns the asset reference for this pattern.
    pub fn asset(&self) -> AssetRef {
        AssetRef::new(AssetCategory::Pattern, self.file.clone())
    }
}

/// Catalog of assets and colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Where each asset category lives.
    #[serde(default)]
    pub layout: AssetLayout,

    /// Base texture used in solid mode.
    pub solid_file: String,

    /// Overlay texture composited in solid mode.
    pub overlay_file: String,

    /// Ordered pattern textures for patterned mode.
    pub patterns: Vec<PatternEntry>,

    /// Ordered colors offered for both color selections.
    pub colors: Vec<ColorEntry>,

    /// Initial first color.
    pub default_color1: Color,

    /// Initial second color.
    pub default_color2: Color,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            layout: AssetLayout::default(),
            solid_file: "base.png".into(),
            overlay_file: "aura.png".into(),
            patterns: vec![
                PatternEntry::new("Two-tone", "00.png"),
                PatternEntry::new("Stripe", "pattern_stripe.png"),
                PatternEntry::new("Camo", "pattern_camo.png"),
                PatternEntry::new("Mesh", "pattern_mesh.png"),
            ],
            colors: default_colors(),
            default_color1: Color::new(0xe6, 0x13, 0x0b),
            default_color2: Color::new(0x26, 0x26, 0x26),
        }
    }
}

impl Catalog {
    /// Asset reference for the solid base texture.
    pub fn solid_asset(&self) -> AssetRef {
        AssetRef::new(AssetCategory::SolidBase, self.solid_file.clone())
    }

    /// Asset reference for the overlay texture.
    pub fn overlay_asset(&self) -> AssetRef {
        AssetRef::new(AssetCategory::Overlay, self.overlay_file.clone())
    }

    /// File name of the first pattern, if the catalog has any.
    pub fn first_pattern(&self) -> Option<&str> {
        self.patterns.first().map(|p| p.file.as_str())
    }

    /// Finds a pattern by file name or display name.
    pub fn find_pattern(&self, key: &str) -> Option<&PatternEntry> {
        self.patterns
            .iter()
            .find(|p| p.file == key)
            .or_else(|| self.patterns.iter().find(|p| p.name == key))
    }

    /// Finds a color entry by its code.
    pub fn find_color(&self, code: Color) -> Option<&ColorEntry> {
        self.colors.iter().find(|c| c.code == code)
    }

    /// Serializes the catalog to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the catalog to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The stock 36-color palette: twelve hues, each in base, dark and light.
fn default_colors() -> Vec<ColorEntry> {
    const PALETTE: [(u32, &str); 36] = [
        (0x262626, "Black"),
        (0x191919, "Black (dark)"),
        (0x3c3c3c, "Black (light)"),
        (0xe6130b, "Red"),
        (0xb50d0d, "Red (dark)"),
        (0xf43246, "Red (light)"),
        (0x23bfe9, "Aqua"),
        (0x1180a7, "Aqua (dark)"),
        (0x80e5ee, "Aqua (light)"),
        (0x1fc448, "Green"),
        (0x307a2a, "Green (dark)"),
        (0x73e46d, "Green (light)"),
        (0xfd711f, "Orange"),
        (0xd15f0b, "Orange (dark)"),
        (0xf5a72c, "Orange (light)"),
        (0xefe70a, "Yellow"),
        (0xe8be14, "Yellow (dark)"),
        (0xf0ef6e, "Yellow (light)"),
        (0x0f2eec, "Blue"),
        (0x142591, "Blue (dark)"),
        (0x5382fb, "Blue (light)"),
        (0xd8d0c8, "White"),
        (0xbeb4aa, "White (dark)"),
        (0xf5f5c8, "White (light)"),
        (0x7817f6, "Purple"),
        (0x320296, "Purple (dark)"),
        (0xb45ef8, "Purple (light)"),
        (0xfa4789, "Pink"),
        (0xbe2655, "Pink (dark)"),
        (0xfea0cf, "Pink (light)"),
        (0xa37900, "Gold"),
        (0x696900, "Gold (dark)"),
        (0xb4b428, "Gold (light)"),
        (0x6e7f7f, "Silver"),
        (0x566262, "Silver (dark)"),
        (0x96b4c6, "Silver (light)"),
    ];

    PALETTE
        .iter()
        .map(|&(code, name)| {
            let [_, r, g, b] = code.to_be_bytes();
            ColorEntry::new(Color::new(r, g, b), name)
        })
        .collect()
}
