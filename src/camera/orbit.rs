//! Time-driven turntable orbit.

use glam::Vec3;

use super::core::CameraPose;

/// Camera pose on the turntable orbit at `elapsed_secs`.
///
/// The eye circles the world origin in the XZ plane at `radius`, keeping
/// height `y`, and always aims at the origin. The pose depends only on its
/// arguments, so evaluating it any number of times per frame (or skipping
/// frames) never accumulates drift.
#[must_use]
pub fn orbit_pose(elapsed_secs: f32, speed: f32, radius: f32, y: f32) -> CameraPose {
    let angle = elapsed_secs * speed;
    let eye = Vec3::new(angle.cos() * radius, y, angle.sin() * radius);
    CameraPose::looking_at(eye, Vec3::ZERO)
}
