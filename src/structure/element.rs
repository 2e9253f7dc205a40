use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::color::hex_to_rgb;

/// Chemical elements the viewer knows how to label and color.
///
/// Anything outside this set maps to [`Element::Unknown`], which renders
/// with the fallback color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Carbon.
    #[default]
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Fluorine.
    F,
    /// Phosphorus.
    P,
    /// Sulfur.
    S,
    /// Chlorine.
    Cl,
    /// Bromine.
    Br,
    /// Iodine.
    I,
    /// Unlisted element.
    Unknown,
}

impl Element {
    /// Every listed element, in table order.
    pub const ALL: [Element; 10] = [
        Element::H,
        Element::C,
        Element::N,
        Element::O,
        Element::F,
        Element::P,
        Element::S,
        Element::Cl,
        Element::Br,
        Element::I,
    ];

    /// Parse a one- or two-letter symbol, ignoring case.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        let symbol = symbol.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.symbol().eq_ignore_ascii_case(symbol))
            .unwrap_or(Element::Unknown)
    }

    /// Canonical symbol (`"Cl"`, not `"CL"`). Unknown atoms print as `"?"`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::I => "I",
            Element::Unknown => "?",
        }
    }

    /// Standard CPK color as packed `0xRRGGBB`.
    #[must_use]
    pub fn cpk_hex(self) -> u32 {
        match self {
            Element::H => 0xff_ff_ff,
            Element::C => 0x90_90_90,
            Element::N => 0x30_50_f8,
            Element::O => 0xff_0d_0d,
            Element::F => 0x90_e0_50,
            Element::P => 0xff_80_00,
            Element::S => 0xff_ff_30,
            Element::Cl => 0x1f_f0_1f,
            Element::Br => 0xa6_29_29,
            Element::I => 0x94_00_94,
            Element::Unknown => 0xff_d3_d3,
        }
    }

    /// Standard CPK color as linear RGB in `[0, 1]`.
    #[must_use]
    pub fn cpk_color(self) -> [f32; 3] {
        hex_to_rgb(self.cpk_hex())
    }

    /// Base sphere radius before display-mode scaling.
    #[must_use]
    pub fn ball_radius(self) -> f32 {
        if self == Element::H {
            0.2
        } else {
            0.3
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
