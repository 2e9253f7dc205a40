//! The viewer: owns the scene, the camera and the options, executes
//! commands and produces one [`Frame`] per tick.

mod command;
mod input;
mod options;

use web_time::Duration;

pub use self::command::ViewerCommand;
use crate::camera::CameraController;
use crate::options::{Options, ViewSettings};
use crate::renderer::picking::pick_atom;
use crate::scene::{Frame, SceneComposer};
use crate::structure::{notation, MolecularGraph, DEFAULT_NOTATION};
use crate::util::clock::SceneClock;

/// Interactive molecule viewer.
///
/// Single-threaded and frame-driven: commands mutate state in place, and
/// [`frame`](Self::frame) composes a snapshot from whatever state is
/// current. The camera turntable is a pure function of the clock, so
/// frames can be requested at any rate.
pub struct Viewer {
    composer: SceneComposer,
    camera_controller: CameraController,
    options: Options,
    clock: SceneClock,
    active_preset: Option<String>,
}

impl Viewer {
    /// Viewer showing the default molecule.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_notation(DEFAULT_NOTATION, options)
    }

    /// Viewer showing the molecule generated from `notation`.
    #[must_use]
    pub fn with_notation(notation: &str, options: Options) -> Self {
        let mut composer = SceneComposer::new(options.generator.clone());
        composer.set_notation(notation);
        let camera_controller = CameraController::new(&options.camera);
        log::debug!(
            "viewer created: {} atoms, {} mode",
            composer.graph().atom_count(),
            options.display.display_mode.label()
        );
        Self {
            composer,
            camera_controller,
            options,
            clock: SceneClock::new(),
            active_preset: None,
        }
    }

    // -- Accessors --

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The scene composer.
    #[must_use]
    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera_controller
    }

    /// Current molecular graph.
    #[must_use]
    pub fn graph(&self) -> &MolecularGraph {
        self.composer.graph()
    }

    /// Notation of the current molecule.
    #[must_use]
    pub fn notation(&self) -> &str {
        self.composer.notation()
    }

    /// Selected atom, validated against the current graph.
    #[must_use]
    pub fn selected_atom(&self) -> Option<usize> {
        self.composer.selected_atom()
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// View settings for the next frame.
    #[must_use]
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings::from_display(
            &self.options.display,
            self.camera_controller.auto_rotate(),
            self.camera_controller.zoom(),
        )
    }

    /// The current molecule as an MDL molblock.
    #[must_use]
    pub fn molblock(&self) -> String {
        notation::to_molblock(self.composer.graph(), self.composer.notation())
    }

    // -- Commands --

    /// Execute one command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::ZoomIn => self.camera_controller.zoom_in(),
            ViewerCommand::ZoomOut => self.camera_controller.zoom_out(),
            ViewerCommand::Zoom { delta } => {
                self.camera_controller.zoom_by(delta);
            }
            ViewerCommand::RotateCamera { delta } => {
                self.camera_controller.rotate(delta);
            }
            ViewerCommand::PanCamera { delta } => {
                self.camera_controller.pan(delta);
            }
            ViewerCommand::RecenterCamera => self.camera_controller.reset(),
            ViewerCommand::ToggleAutoRotate => {
                let _ = self.camera_controller.toggle_auto_rotate();
            }
            ViewerCommand::Resize { width, height } => {
                self.camera_controller.resize(width, height);
            }
            ViewerCommand::SetDisplayMode(mode) => self.set_display_mode(mode),
            ViewerCommand::CycleDisplayMode => {
                self.set_display_mode(self.options.display.display_mode.next());
            }
            ViewerCommand::ToggleLabels => self.toggle_labels(),
            ViewerCommand::ToggleCharges => self.toggle_charges(),
            ViewerCommand::SelectAtom { index } => {
                let _ = self.composer.pick(index);
            }
            ViewerCommand::ClearSelection => {
                let _ = self.composer.clear_selection();
            }
            ViewerCommand::SetNotation(notation) => {
                self.composer.set_notation(&notation);
            }
        }
    }

    // -- Frames --

    /// Compose a frame at the clock's current time.
    pub fn frame(&mut self) -> Frame {
        let elapsed = self.clock.elapsed();
        self.frame_at(elapsed)
    }

    /// Compose a frame at an explicit elapsed time.
    ///
    /// Advances the turntable (if on) to `elapsed` and composes from the
    /// resulting pose. Calling this repeatedly with the same time yields the
    /// same frame.
    pub fn frame_at(&mut self, elapsed: Duration) -> Frame {
        let _ = self.camera_controller.update(elapsed);
        let frame = self.compose();
        self.composer.mark_rendered();
        frame
    }

    /// Compose a frame without advancing the camera.
    #[must_use]
    pub fn compose(&self) -> Frame {
        self.composer.compose(
            &self.view_settings(),
            &self.options.geometry,
            &self.options.colors,
            self.camera_controller.pose(),
        )
    }

    /// Atom under the pixel `(x, y)` of a `width` x `height` viewport, as
    /// currently drawn.
    #[must_use]
    pub fn hovered_atom(&self, x: f32, y: f32, width: f32, height: f32) -> Option<usize> {
        let mut camera = self.camera_controller.camera;
        camera.aspect = width / height.max(1.0);
        let ray = camera.screen_ray(x, y, width, height);
        let frame = self.compose();
        pick_atom(&ray, &frame.atoms).map(|hit| hit.atom)
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
