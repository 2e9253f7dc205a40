/// Squared cursor travel, in pixels, above which a press becomes a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Result of processing a mouse-up event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// No selection action (drag, mismatched up/down, etc.)
    NoAction,
    /// Press and release on the same atom.
    Click {
        /// Atom under the cursor.
        atom: usize,
    },
    /// Clicked on background.
    ClearSelection,
}

/// Tracks mouse position and drag state between press and release.
#[derive(Debug, Default)]
pub struct InputState {
    pub mouse_pos: (f32, f32),
    last_pos: Option<(f32, f32)>,
    mouse_down_target: Option<usize>,
    is_dragging: bool,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what atom (if any) is under the cursor at mouse-down.
    pub fn handle_mouse_down(&mut self, hovered: Option<usize>) {
        self.mouse_down_target = hovered;
        self.is_dragging = false;
    }

    /// Update the cursor position and return the movement since the last
    /// update (zero for the first event).
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = self
            .last_pos
            .map_or((0.0, 0.0), |(lx, ly)| (x - lx, y - ly));
        self.last_pos = Some((x, y));
        self.mouse_pos = (x, y);
        delta
    }

    /// Flag the current press as a drag once it has moved far enough.
    pub fn track_drag(&mut self, delta: (f32, f32)) {
        if delta.0.mul_add(delta.0, delta.1 * delta.1) > DRAG_THRESHOLD_SQ {
            self.is_dragging = true;
        }
    }

    /// Process a mouse-up event with `hovered` under the cursor.
    pub fn process_mouse_up(&mut self, hovered: Option<usize>) -> ClickResult {
        let down = self.mouse_down_target.take();
        let was_dragging = std::mem::take(&mut self.is_dragging);

        if was_dragging {
            return ClickResult::NoAction;
        }
        match (down, hovered) {
            (Some(a), Some(b)) if a == b => ClickResult::Click { atom: a },
            (None, None) => ClickResult::ClearSelection,
            _ => ClickResult::NoAction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_same_atom() {
        let mut state = InputState::new();
        state.handle_mouse_down(Some(3));
        assert_eq!(state.process_mouse_up(Some(3)), ClickResult::Click { atom: 3 });
    }

    #[test]
    fn drag_suppresses_click() {
        let mut state = InputState::new();
        state.handle_mouse_down(Some(3));
        state.track_drag((4.0, 0.0));
        assert_eq!(state.process_mouse_up(Some(3)), ClickResult::NoAction);
        state.handle_mouse_down(Some(3));
        assert_eq!(state.process_mouse_up(Some(3)), ClickResult::Click { atom: 3 });
    }

    #[test]
    fn background_and_mismatch() {
        let mut state = InputState::new();
        state.handle_mouse_down(None);
        assert_eq!(state.process_mouse_up(None), ClickResult::ClearSelection);
        state.handle_mouse_down(Some(1));
        assert_eq!(state.process_mouse_up(Some(2)), ClickResult::NoAction);
    }

    #[test]
    fn position_deltas() {
        let mut state = InputState::new();
        assert_eq!(state.handle_mouse_position(10.0, 10.0), (0.0, 0.0));
        assert_eq!(state.handle_mouse_position(13.0, 8.0), (3.0, -2.0));
        assert_eq!(state.mouse_pos, (13.0, 8.0));
    }
}
