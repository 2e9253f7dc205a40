//! Raw input handling for Viewer

use super::Viewer;
use crate::input::{InputEvent, InputProcessor};

impl Viewer {
    /// Feed one raw event through `processor`, picking against the current
    /// frame, and execute the resulting command. `viewport` is the surface
    /// size in physical pixels.
    ///
    /// Returns whether a command was executed.
    pub fn handle_input(
        &mut self,
        processor: &mut InputProcessor,
        event: InputEvent,
        viewport: (f32, f32),
    ) -> bool {
        let (x, y) = match event {
            InputEvent::CursorMoved { x, y } => (x, y),
            _ => processor.mouse_pos(),
        };
        let hovered = self.hovered_atom(x, y, viewport.0, viewport.1);
        processor.handle_event(event, hovered).is_some_and(|command| {
            self.execute(command);
            true
        })
    }

    /// Execute the command bound to `key`, if any.
    pub fn handle_key(&mut self, processor: &InputProcessor, key: &str) -> bool {
        processor.handle_key_press(key).is_some_and(|command| {
            self.execute(command);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::engine::ViewerCommand;
    use crate::options::Options;

    fn click(viewer: &mut Viewer, p: &mut InputProcessor, x: f32, y: f32) {
        let viewport = (100.0, 100.0);
        let _ = viewer.handle_input(p, InputEvent::CursorMoved { x, y }, viewport);
        for pressed in [true, false] {
            let _ = viewer.handle_input(
                p,
                InputEvent::PrimaryButton { pressed },
                viewport,
            );
        }
    }

    #[test]
    fn click_on_atom_selects_and_background_clears() {
        let mut viewer = Viewer::with_notation("N", Options::default());
        viewer.execute(ViewerCommand::PanCamera {
            delta: Vec2::new(-150.0, 0.0),
        });
        let mut p = InputProcessor::new();

        click(&mut viewer, &mut p, 50.0, 50.0);
        assert_eq!(viewer.selected_atom(), Some(0));

        click(&mut viewer, &mut p, 2.0, 2.0);
        assert_eq!(viewer.selected_atom(), None);
    }

    #[test]
    fn key_presses_execute_bindings() {
        let mut viewer = Viewer::default();
        let p = InputProcessor::new();
        assert!(viewer.handle_key(&p, "KeyR"));
        assert!(viewer.camera().auto_rotate());
        assert!(!viewer.handle_key(&p, "KeyZ"));
    }
}
