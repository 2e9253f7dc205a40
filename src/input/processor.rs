//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (mouse tracking,
//! drag detection, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the viewer's
//! [`execute`](crate::engine::Viewer::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use super::mouse::{ClickResult, InputState};
use crate::engine::ViewerCommand;

/// Maps physical key strings to [`ViewerCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyR"`, `"Equal"`, `"Escape"`, etc.
///
/// Only *discrete* commands (toggles, actions) make sense as key
/// bindings. Parameterized commands like `RotateCamera` come from mouse
/// gestures, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ViewerCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Return the camera to its initial pose.
    RecenterCamera,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Toggle element labels.
    ToggleLabels,
    /// Toggle charge signs.
    ToggleCharges,
    /// Switch to the next display mode.
    CycleDisplayMode,
    /// One zoom step in.
    ZoomIn,
    /// One zoom step out.
    ZoomOut,
    /// Clear the atom selection.
    Cancel,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ViewerCommand`].
    fn to_command(self) -> ViewerCommand {
        match self {
            Self::RecenterCamera => ViewerCommand::RecenterCamera,
            Self::ToggleAutoRotate => ViewerCommand::ToggleAutoRotate,
            Self::ToggleLabels => ViewerCommand::ToggleLabels,
            Self::ToggleCharges => ViewerCommand::ToggleCharges,
            Self::CycleDisplayMode => ViewerCommand::CycleDisplayMode,
            Self::ZoomIn => ViewerCommand::ZoomIn,
            Self::ZoomOut => ViewerCommand::ZoomOut,
            Self::Cancel => ViewerCommand::ClearSelection,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyQ".into(), KeyCommandTag::RecenterCamera),
            ("KeyR".into(), KeyCommandTag::ToggleAutoRotate),
            ("KeyL".into(), KeyCommandTag::ToggleLabels),
            ("KeyC".into(), KeyCommandTag::ToggleCharges),
            ("KeyM".into(), KeyCommandTag::CycleDisplayMode),
            ("Equal".into(), KeyCommandTag::ZoomIn),
            ("Minus".into(), KeyCommandTag::ZoomOut),
            ("Escape".into(), KeyCommandTag::Cancel),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewerCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, returning the tag it was bound to before.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        tag: KeyCommandTag,
    ) -> Option<KeyCommandTag> {
        self.bindings.insert(key.into(), tag)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.remove(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// let hovered = viewer.hovered_atom(x, y, width, height);
/// if let Some(cmd) = input_processor.handle_event(event, hovered) {
///     viewer.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyR") {
///     viewer.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Mouse tracking and click state.
    state: InputState,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            mouse_pressed: false,
            shift_pressed: false,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.state.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewerCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `hovered` is the atom currently under the cursor (see
    /// [`Viewer::hovered_atom`](crate::engine::Viewer::hovered_atom)).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<usize>,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::PrimaryButton { pressed } => {
                self.handle_primary_button(pressed, hovered)
            }
            InputEvent::Scroll { delta } => Some(ViewerCommand::Zoom { delta }),
            InputEvent::ShiftChanged { held } => {
                self.shift_pressed = held;
                None
            }
        }
    }

    /// Cursor moved: drag with the button held orbits, or pans with shift.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        let (delta_x, delta_y) = self.state.handle_mouse_position(x, y);
        if !self.mouse_pressed {
            return None;
        }

        self.state.track_drag((delta_x, delta_y));
        let delta = Vec2::new(delta_x, delta_y);
        if self.shift_pressed {
            return Some(ViewerCommand::PanCamera { delta });
        }
        Some(ViewerCommand::RotateCamera { delta })
    }

    /// Primary button press/release: track state, produce selection
    /// commands on release.
    fn handle_primary_button(
        &mut self,
        pressed: bool,
        hovered: Option<usize>,
    ) -> Option<ViewerCommand> {
        if pressed {
            self.state.handle_mouse_down(hovered);
            self.mouse_pressed = true;
            return None;
        }

        self.mouse_pressed = false;
        match self.state.process_mouse_up(hovered) {
            ClickResult::NoAction => None,
            ClickResult::Click { atom } => {
                Some(ViewerCommand::SelectAtom { index: atom })
            }
            ClickResult::ClearSelection => Some(ViewerCommand::ClearSelection),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
