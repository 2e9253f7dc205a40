//! Input handling: event types, click/drag tracking, and the input
//! processor that converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Click and drag tracking.
pub(crate) mod mouse;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
