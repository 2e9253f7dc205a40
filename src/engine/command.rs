//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, mouse
//! gesture, UI control or programmatic call, is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`Viewer::execute`](super::Viewer::execute).

use glam::Vec2;

use crate::options::DisplayMode;

/// A discrete or parameterized operation the viewer can perform.
///
/// The viewer never cares *how* a command was triggered:
///
/// ```ignore
/// viewer.execute(ViewerCommand::ToggleLabels);
/// viewer.execute(ViewerCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// One discrete zoom step in.
    ZoomIn,

    /// One discrete zoom step out.
    ZoomOut,

    /// Continuous zoom (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Rotate the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Return the camera to its initial pose.
    RecenterCamera,

    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,

    /// Viewport size changed.
    Resize {
        /// Width in physical pixels.
        width: u32,
        /// Height in physical pixels.
        height: u32,
    },

    // ── Display ─────────────────────────────────────────────────────
    /// Switch to a specific display mode.
    SetDisplayMode(DisplayMode),

    /// Switch to the next display mode.
    CycleDisplayMode,

    /// Toggle element labels.
    ToggleLabels,

    /// Toggle charge signs on labels and in the info panel.
    ToggleCharges,

    // ── Selection ───────────────────────────────────────────────────
    /// Select an atom. An index outside the current graph clears the
    /// selection.
    SelectAtom {
        /// Atom index in the current graph.
        index: usize,
    },

    /// Clear the atom selection.
    ClearSelection,

    // ── Structure ───────────────────────────────────────────────────
    /// Replace the molecule with one generated from a new notation.
    SetNotation(String),
}
