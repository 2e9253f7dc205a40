//! Camera system for 3D scene viewing.
//!
//! Provides an orbital camera with manual rotation, panning, clamped scene
//! zoom and a time-driven turntable orbit.

/// Orbital camera controller managing rotation, pan, zoom and turntable.
pub mod controller;
/// Core camera struct, pose and GPU uniform types.
pub mod core;
/// Pure turntable pose function.
pub mod orbit;

pub use controller::CameraController;
pub use self::core::{Camera, CameraPose, CameraUniform};
pub use orbit::orbit_pose;
