use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::structure::Element;
use crate::util::color::{hex_to_rgb, scale_rgb};

/// Color palette for atoms, bonds and the selection highlight. Colors are
/// packed `0xRRGGBB` so presets stay readable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Per-element overrides keyed by symbol (`"C"`, `"Cl"`, ...). Elements
    /// not listed keep their CPK color.
    pub element_colors: FxHashMap<String, u32>,
    /// Color for atoms of unknown element without an override.
    pub default_atom: u32,
    /// Bond cylinder color.
    pub bond: u32,
    /// Emissive color of the selected atom.
    pub selection_emissive: u32,
    /// Emissive intensity of the selected atom.
    pub selection_intensity: f32,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            element_colors: FxHashMap::default(),
            default_atom: Element::Unknown.cpk_hex(),
            bond: 0x80_80_80,
            selection_emissive: 0xff_ff_00,
            selection_intensity: 0.5,
        }
    }
}

impl ColorOptions {
    /// RGB color for `element`: the override if one is set, else the CPK
    /// color, else the default atom color for unknown elements.
    #[must_use]
    pub fn element_color(&self, element: Element) -> [f32; 3] {
        let hex = self
            .element_colors
            .get(element.symbol())
            .copied()
            .unwrap_or_else(|| match element {
                Element::Unknown => self.default_atom,
                known => known.cpk_hex(),
            });
        hex_to_rgb(hex)
    }

    /// RGB bond color.
    #[must_use]
    pub fn bond_color(&self) -> [f32; 3] {
        hex_to_rgb(self.bond)
    }

    /// Selection emissive color with intensity applied.
    #[must_use]
    pub fn selection_glow(&self) -> [f32; 3] {
        scale_rgb(hex_to_rgb(self.selection_emissive), self.selection_intensity)
    }
}
