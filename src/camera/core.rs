use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::renderer::picking::Ray;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Look-at target.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
}

impl CameraPose {
    /// Pose looking from `eye` at `target` with `+Y` up.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
        }
    }

    /// Unit vector from eye toward target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO)
    }
}

/// Perspective camera defined by a pose and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position, target and up vector.
    pub pose: CameraPose,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Currently selected atom index (-1 if none).
    pub selected_atom: i32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Camera {
    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.pose.eye, self.pose.target, self.pose.up)
    }

    /// Build the projection matrix (`[0, 1]` depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World-space ray through the pixel `(x, y)` of a `width` x `height`
    /// viewport, with `y` growing downward.
    #[must_use]
    pub fn screen_ray(&self, x: f32, y: f32, width: f32, height: f32) -> Ray {
        let ndc_x = 2.0 * x / width.max(1.0) - 1.0;
        let ndc_y = 1.0 - 2.0 * y / height.max(1.0);
        let inverse = self.build_matrix().inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 50.0,
            selected_atom: -1,
            _pad: [0.0; 3],
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.pose.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.pose.forward().to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            pose: CameraPose::default(),
            aspect: 1.0,
            fovy: 50.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    #[test]
    fn default_pose_looks_down_negative_z() {
        let pose = CameraPose::default();
        assert_eq!(pose.eye, Vec3::new(0.0, 0.0, 5.0));
        assert!((pose.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn center_pixel_ray_points_at_target() {
        let ray = camera().screen_ray(50.0, 50.0, 100.0, 100.0);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
        assert!(ray.origin.x.abs() < 1e-4 && ray.origin.y.abs() < 1e-4);
    }

    #[test]
    fn uniform_tracks_camera() {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera());
        assert_eq!(uniform.position, [0.0, 0.0, 5.0]);
        assert_eq!(uniform.selected_atom, -1);
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }
}
