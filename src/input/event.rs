/// Pointer and keyboard-modifier events in a windowing-agnostic form.
///
/// A shell translates its native events into these and feeds them, together
/// with the hovered atom from
/// [`Viewer::hovered_atom`](crate::engine::Viewer::hovered_atom), to an
/// [`InputProcessor`](super::InputProcessor). Only the primary button takes
/// part in selection and dragging, so other buttons are not forwarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to `(x, y)` in viewport pixels, `y` growing downward.
    CursorMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Primary button went down (`pressed`) or up.
    PrimaryButton {
        /// Button state after the change.
        pressed: bool,
    },
    /// Scroll wheel; positive zooms in.
    Scroll {
        /// Scroll amount in wheel steps.
        delta: f32,
    },
    /// Shift key went down or up. Shift turns a drag into a pan.
    ShiftChanged {
        /// Whether shift is now held.
        held: bool,
    },
}
