use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::display::DisplayMode;

/// Size parameters for one display mode, consumed by the scene composer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayStyle {
    /// Multiplier applied to each element's base sphere radius.
    pub atom_scale: f32,
    /// Bond cylinder radius.
    pub bond_radius: f32,
    /// Multiplier applied to the lateral spacing of double/triple bonds.
    pub offset_scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sphere and stick sizes for each display mode.
pub struct GeometryOptions {
    /// Bond cylinder radius in ball-and-stick and space-filling modes.
    #[schemars(title = "Bond Radius", range(min = 0.01, max = 0.2), extend("step" = 0.005))]
    pub bond_radius: f32,
    /// Atom radius multiplier in space-filling mode.
    #[schemars(title = "Space Filling Scale", range(min = 1.0, max = 4.0), extend("step" = 0.1))]
    pub space_filling_scale: f32,
    /// Atom radius multiplier in wireframe mode.
    #[schemars(title = "Wireframe Atom Scale", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub wireframe_atom_scale: f32,
    /// Bond cylinder radius in wireframe mode.
    #[schemars(title = "Wireframe Bond Radius", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub wireframe_bond_radius: f32,
    /// Multi-bond spacing multiplier in wireframe mode.
    #[schemars(skip)]
    pub wireframe_offset_scale: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            bond_radius: 0.05,
            space_filling_scale: 2.5,
            wireframe_atom_scale: 0.25,
            wireframe_bond_radius: 0.015,
            wireframe_offset_scale: 0.6,
        }
    }
}

impl GeometryOptions {
    /// Size parameters for `mode`.
    #[must_use]
    pub fn style(&self, mode: DisplayMode) -> DisplayStyle {
        match mode {
            DisplayMode::BallAndStick => DisplayStyle {
                atom_scale: 1.0,
                bond_radius: self.bond_radius,
                offset_scale: 1.0,
            },
            DisplayMode::SpaceFilling => DisplayStyle {
                atom_scale: self.space_filling_scale,
                bond_radius: self.bond_radius,
                offset_scale: 1.0,
            },
            DisplayMode::Wireframe => DisplayStyle {
                atom_scale: self.wireframe_atom_scale,
                bond_radius: self.wireframe_bond_radius,
                offset_scale: self.wireframe_offset_scale,
            },
        }
    }
}

impl DisplayMode {
    /// Size parameters for this mode with default geometry.
    #[must_use]
    pub fn style(self) -> DisplayStyle {
        GeometryOptions::default().style(self)
    }
}
