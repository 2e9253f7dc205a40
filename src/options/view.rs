use serde::{Deserialize, Serialize};

use super::display::{DisplayMode, DisplayOptions};

/// Everything the scene composer needs to know about how to draw the next
/// frame. Built fresh each frame from the options and the camera state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ViewSettings {
    /// Molecule rendering style.
    pub display_mode: DisplayMode,
    /// Whether charge signs are shown.
    pub show_charges: bool,
    /// Whether element labels are shown.
    pub show_labels: bool,
    /// Whether the turntable orbit is running.
    pub auto_rotate: bool,
    /// Scene scale, already clamped by the camera controller.
    pub zoom: f32,
}

impl ViewSettings {
    /// Settings from display options with the given camera state.
    #[must_use]
    pub fn from_display(
        display: &DisplayOptions,
        auto_rotate: bool,
        zoom: f32,
    ) -> Self {
        Self {
            display_mode: display.display_mode,
            show_charges: display.show_charges,
            show_labels: display.show_labels,
            auto_rotate,
            zoom,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_display(&DisplayOptions::default(), false, 1.0)
    }
}
