//! Centralized display, camera and generator options with TOML preset
//! support.
//!
//! All tweakable settings are consolidated here. Options serialize to/from
//! TOML so a view can be stored as a preset and reloaded later.

mod camera;
mod colors;
mod display;
mod generator;
mod geometry;
mod view;

use std::path::Path;

pub use camera::{CameraOptions, MAX_ZOOM, MIN_ZOOM};
pub use colors::ColorOptions;
pub use display::{DisplayMode, DisplayOptions};
pub use generator::GeneratorOptions;
pub use geometry::{DisplayStyle, GeometryOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::ViewSettings;

use crate::error::MolscopeError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Display style and overlay toggles.
    pub display: DisplayOptions,
    /// Camera projection, orbit and zoom parameters.
    pub camera: CameraOptions,
    /// Sphere and stick sizes per display mode.
    pub geometry: GeometryOptions,
    /// Structure generator parameters.
    pub generator: GeneratorOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MolscopeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, MolscopeError> {
        toml::from_str(content)
            .map_err(|e| MolscopeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MolscopeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolscopeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Style parameters for the configured display mode.
    #[must_use]
    pub fn display_style(&self) -> DisplayStyle {
        self.geometry.style(self.display.display_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ViewerCommand;
    use crate::structure::Element;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[display]
display_mode = "wireframe"
show_labels = false
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.display.display_mode, DisplayMode::Wireframe);
        assert!(!opts.display.show_labels);
        // Everything else should be default
        assert!(opts.display.show_charges);
        assert_eq!(opts.camera.orbit_radius, 5.0);
        assert_eq!(opts.generator.max_atoms, 20);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nfovy = \"wide\"").unwrap_err();
        assert!(matches!(err, MolscopeError::OptionsParse(_)));
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("molscope-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.display.display_mode = DisplayMode::SpaceFilling;
        opts.generator.seed = 7;
        opts.save(&dir.join("filled.toml")).unwrap();

        let loaded = Options::load(&dir.join("filled.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["filled".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(ViewerCommand::ToggleAutoRotate)
        );
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(ViewerCommand::ClearSelection)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn element_color_lookup() {
        let mut colors = ColorOptions::default();
        assert_eq!(colors.element_color(Element::O), [1.0, 13.0 / 255.0, 13.0 / 255.0]);
        assert_eq!(
            colors.element_color(Element::Unknown),
            Element::Unknown.cpk_color()
        );
        colors.default_atom = 0x00_00_ff;
        assert_eq!(colors.element_color(Element::Unknown), [0.0, 0.0, 1.0]);
        assert_eq!(colors.element_color(Element::N), Element::N.cpk_color());
    }

    #[test]
    fn partial_color_table_only_overrides_listed_elements() {
        let opts = Options::from_toml("[colors.element_colors]\nC = 0\n").unwrap();
        assert_eq!(opts.colors.element_color(Element::C), [0.0, 0.0, 0.0]);
        assert_eq!(opts.colors.element_color(Element::O), Element::O.cpk_color());
        assert_eq!(opts.colors.element_color(Element::Cl), Element::Cl.cpk_color());
    }

    #[test]
    fn display_styles() {
        let geometry = GeometryOptions::default();
        let bns = geometry.style(DisplayMode::BallAndStick);
        let filled = geometry.style(DisplayMode::SpaceFilling);
        let wire = geometry.style(DisplayMode::Wireframe);
        assert_eq!(bns.atom_scale, 1.0);
        assert!(filled.atom_scale > bns.atom_scale);
        assert!(wire.atom_scale < bns.atom_scale);
        assert!(wire.bond_radius < bns.bond_radius);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("generator"));

        // Skipped sections should be absent
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("auto_rotate").is_some());
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("min_zoom").is_none());
    }
}
