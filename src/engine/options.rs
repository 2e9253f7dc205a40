//! Options methods for Viewer

use std::path::Path;

use super::Viewer;
use crate::error::MolscopeError;
use crate::options::{DisplayMode, Options};

impl Viewer {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        let regenerate = new.generator != self.options.generator;
        self.options = new;
        self.apply_options(regenerate);
    }

    /// Push current option values to the camera and, when generator
    /// settings changed, rebuild the molecule.
    fn apply_options(&mut self, regenerate: bool) {
        self.camera_controller.set_options(&self.options.camera);
        self.camera_controller
            .set_auto_rotate(self.options.camera.auto_rotate);
        if regenerate {
            self.composer.set_source(Box::new(
                crate::structure::SpiralGenerator::new(
                    self.options.generator.clone(),
                ),
            ));
            self.composer.regenerate();
        } else {
            self.composer.force_dirty();
        }
    }

    /// Load a named view preset from the presets directory.
    pub fn load_preset(
        &mut self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), MolscopeError> {
        let path = presets_dir.join(format!("{name}.toml"));
        let opts = Options::load(&path)?;
        log::info!("Loaded view preset '{name}'");
        self.set_options(opts);
        self.active_preset = Some(name.to_owned());
        Ok(())
    }

    /// Save the current options as a named view preset.
    pub fn save_preset(
        &mut self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), MolscopeError> {
        let path = presets_dir.join(format!("{name}.toml"));
        self.options.save(&path)?;
        log::info!("Saved view preset '{name}'");
        self.active_preset = Some(name.to_owned());
        Ok(())
    }

    /// Switch display mode.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.options.display.display_mode != mode {
            log::debug!("display mode: {}", mode.label());
            self.options.display.display_mode = mode;
            self.composer.force_dirty();
        }
    }

    /// Toggle element labels.
    pub fn toggle_labels(&mut self) {
        self.options.display.show_labels = !self.options.display.show_labels;
        self.composer.force_dirty();
    }

    /// Toggle charge signs.
    pub fn toggle_charges(&mut self) {
        self.options.display.show_charges = !self.options.display.show_charges;
        self.composer.force_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_change_regenerates() {
        let mut viewer = Viewer::default();
        let mut opts = viewer.options().clone();
        opts.generator.max_atoms = 5;
        viewer.set_options(opts);
        assert_eq!(viewer.graph().atom_count(), 5);
    }

    #[test]
    fn camera_options_apply() {
        let mut viewer = Viewer::default();
        let mut opts = viewer.options().clone();
        opts.camera.auto_rotate = true;
        opts.camera.max_zoom = 1.2;
        viewer.set_options(opts);
        assert!(viewer.camera().auto_rotate());
        for _ in 0..5 {
            viewer.execute(crate::engine::ViewerCommand::ZoomIn);
        }
        assert!((viewer.camera().zoom() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn preset_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "molscope-viewer-presets-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();

        let mut viewer = Viewer::default();
        viewer.set_display_mode(DisplayMode::Wireframe);
        viewer.save_preset("wire", &dir).unwrap();
        assert_eq!(viewer.active_preset(), Some("wire"));

        let mut other = Viewer::default();
        other.load_preset("wire", &dir).unwrap();
        assert_eq!(other.options().display.display_mode, DisplayMode::Wireframe);
        assert!(other.load_preset("missing", &dir).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
