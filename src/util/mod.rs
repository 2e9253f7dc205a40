//! Shared utilities: the scene clock and color conversion helpers.

pub mod clock;
pub mod color;
