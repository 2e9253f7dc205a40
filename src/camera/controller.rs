use glam::{Mat3, Quat, Vec2, Vec3};
use web_time::Duration;

use super::core::{Camera, CameraPose, CameraUniform};
use super::orbit::orbit_pose;
use crate::options::CameraOptions;

/// Orbital camera plus the scene zoom scale.
///
/// Two independent behaviours share the pose: manual orbit/pan, always
/// available, and the turntable auto-rotation which, while enabled,
/// overwrites the pose every frame from elapsed time alone. Turning the
/// turntable off leaves the camera exactly where the last update put it.
pub struct CameraController {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    /// Current camera (pose and projection).
    pub camera: Camera,

    zoom: f32,
    auto_rotate: bool,
    options: CameraOptions,
}

impl CameraController {
    /// Create a controller at the default pose: eye at `(0, 0, R)` looking
    /// at the origin, zoom 1.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let focus_point = Vec3::ZERO;
        let distance = options.orbit_radius;
        let camera = Camera {
            pose: CameraPose::looking_at(
                focus_point + Vec3::new(0.0, 0.0, distance),
                focus_point,
            ),
            aspect: 1.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        Self {
            orientation: Quat::IDENTITY,
            distance,
            focus_point,
            camera,
            zoom: 1.0,
            auto_rotate: options.auto_rotate,
            options: options.clone(),
        }
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose
    }

    /// Current scene scale.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Whether the turntable is running.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Replace camera options. Projection changes apply immediately; the
    /// current zoom is re-clamped to the new bounds.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.options = options.clone();
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.zoom = self.clamp_zoom(self.zoom);
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.pose.eye = self.focus_point + (dir * self.distance);
        self.camera.pose.target = self.focus_point;
        self.camera.pose.up = self.orientation * Vec3::Y;
    }

    /// Re-derive orbit state from the current pose so manual orbiting
    /// continues from wherever the turntable left the camera.
    fn sync_orbit_from_pose(&mut self) {
        let pose = self.camera.pose;
        let back = pose.eye - pose.target;
        let distance = back.length();
        if distance <= f32::EPSILON {
            return;
        }
        let back = back / distance;
        let right = pose.up.cross(back).normalize_or_zero();
        if right == Vec3::ZERO {
            return;
        }
        let up = back.cross(right);

        self.orientation =
            Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize();
        self.distance = distance;
        self.focus_point = pose.target;
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    /// Orbit by `delta` pixels of drag.
    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal_rotation = Quat::from_axis_angle(
            up,
            -delta.x * self.options.rotate_speed,
        );
        self.orientation = horizontal_rotation * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal
        // rotation)
        let right = self.orientation * Vec3::X;
        let vertical_rotation = Quat::from_axis_angle(
            right,
            -delta.y * self.options.rotate_speed,
        );
        self.orientation = (vertical_rotation * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Pan by `delta` pixels of drag.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;

        let translation = right * (-delta.x * self.options.pan_speed)
            + up * (delta.y * self.options.pan_speed);

        self.focus_point += translation;
        self.update_camera_pos();
    }

    fn clamp_zoom(&self, zoom: f32) -> f32 {
        let (min, max) = self.options.zoom_bounds();
        zoom.clamp(min, max)
    }

    /// One discrete zoom-in step.
    pub fn zoom_in(&mut self) {
        self.zoom = self.clamp_zoom(self.zoom + self.options.zoom_step);
    }

    /// One discrete zoom-out step.
    pub fn zoom_out(&mut self) {
        self.zoom = self.clamp_zoom(self.zoom - self.options.zoom_step);
    }

    /// Continuous zoom (scroll wheel). Positive zooms in. Same bounds as the
    /// discrete steps.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = self.clamp_zoom(self.zoom + delta * self.options.zoom_speed);
    }

    /// Set the zoom directly (clamped).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = self.clamp_zoom(zoom);
    }

    /// Enable or disable the turntable. Elapsed time is not reset.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        if self.auto_rotate && !enabled {
            self.sync_orbit_from_pose();
        }
        self.auto_rotate = enabled;
        log::debug!("auto-rotate {}", if enabled { "on" } else { "off" });
    }

    /// Toggle the turntable. Returns the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.set_auto_rotate(!self.auto_rotate);
        self.auto_rotate
    }

    /// Per-frame update. While the turntable is on, the pose becomes
    /// [`orbit_pose`] at `elapsed`, keeping the current eye height. Returns
    /// whether the pose was written.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if !self.auto_rotate {
            return false;
        }
        self.camera.pose = orbit_pose(
            elapsed.as_secs_f32(),
            self.options.auto_rotate_speed,
            self.options.orbit_radius,
            self.camera.pose.eye.y,
        );
        true
    }

    /// Return to the default pose (zoom is kept).
    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.distance = self.options.orbit_radius;
        self.focus_point = Vec3::ZERO;
        self.update_camera_pos();
    }

    /// GPU uniform for the current camera.
    #[must_use]
    pub fn uniform(&self, selected_atom: Option<usize>) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera);
        uniform.selected_atom = selected_atom.map_or(-1, |i| i as i32);
        uniform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default())
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn ten_zoom_ins_clamp_to_max() {
        let mut c = controller();
        for _ in 0..10 {
            c.zoom_in();
        }
        assert_eq!(c.zoom(), 2.5);
    }

    #[test]
    fn ten_zoom_outs_clamp_to_min() {
        let mut c = controller();
        for _ in 0..10 {
            c.zoom_out();
        }
        assert_eq!(c.zoom(), 0.5);
    }

    #[test]
    fn zoom_steps_are_monotonic() {
        let mut c = controller();
        let mut last = c.zoom();
        for _ in 0..12 {
            c.zoom_in();
            assert!(c.zoom() >= last);
            last = c.zoom();
        }
        for _ in 0..12 {
            c.zoom_out();
            assert!(c.zoom() <= last);
            last = c.zoom();
        }
    }

    #[test]
    fn continuous_zoom_respects_bounds() {
        let mut c = controller();
        c.zoom_by(1000.0);
        assert_eq!(c.zoom(), 2.5);
        c.zoom_by(-1000.0);
        assert_eq!(c.zoom(), 0.5);
        c.set_zoom(1.3);
        assert_eq!(c.zoom(), 1.3);
    }

    #[test]
    fn preset_zoom_bounds_cannot_widen_the_clamp() {
        let opts = crate::options::Options::from_toml(
            "[camera]\nmax_zoom = 10.0\nmin_zoom = 0.1",
        )
        .unwrap();
        let mut c = CameraController::new(&opts.camera);
        for _ in 0..50 {
            c.zoom_in();
        }
        assert_eq!(c.zoom(), 2.5);
        for _ in 0..100 {
            c.zoom_out();
        }
        assert_eq!(c.zoom(), 0.5);
    }

    #[test]
    fn update_is_a_pure_function_of_time() {
        let mut a = controller();
        let mut b = controller();
        a.set_auto_rotate(true);
        b.set_auto_rotate(true);

        let t = Duration::from_secs_f32(3.7);
        // `a` is updated many times on the way to t, `b` only once.
        for step in 0..50 {
            let _ = a.update(Duration::from_millis(step * 37));
        }
        let _ = a.update(t);
        let _ = a.update(t);
        let _ = b.update(t);

        assert_eq!(a.pose(), b.pose());
        let expected = Vec3::new(
            (3.7_f32 * 0.5).cos() * 5.0,
            0.0,
            (3.7_f32 * 0.5).sin() * 5.0,
        );
        assert!(approx(a.pose().eye, expected));
        assert_eq!(a.pose().target, Vec3::ZERO);
    }

    #[test]
    fn update_keeps_eye_height() {
        let mut c = controller();
        c.rotate(Vec2::new(0.0, -40.0));
        let y = c.pose().eye.y;
        assert!(y.abs() > 0.1);

        c.set_auto_rotate(true);
        assert!(c.update(Duration::from_secs(2)));
        assert_eq!(c.pose().eye.y, y);
    }

    #[test]
    fn disabled_turntable_leaves_pose_alone() {
        let mut c = controller();
        let before = c.pose();
        assert!(!c.update(Duration::from_secs(5)));
        assert_eq!(c.pose(), before);
    }

    #[test]
    fn disabling_freezes_last_pose() {
        let mut c = controller();
        assert!(c.toggle_auto_rotate());
        let _ = c.update(Duration::from_secs(4));
        let frozen = c.pose();

        assert!(!c.toggle_auto_rotate());
        let _ = c.update(Duration::from_secs(9));
        assert!(approx(c.pose().eye, frozen.eye));
        assert!(approx(c.pose().target, frozen.target));
    }

    #[test]
    fn manual_orbit_continues_from_frozen_pose() {
        let mut c = controller();
        c.set_auto_rotate(true);
        let _ = c.update(Duration::from_secs(3));
        c.set_auto_rotate(false);
        let frozen = c.pose();

        c.rotate(Vec2::ZERO);
        assert!(approx(c.pose().eye, frozen.eye));
        c.rotate(Vec2::new(25.0, 0.0));
        assert!((c.pose().eye.length() - 5.0).abs() < 1e-3);
        assert!(!approx(c.pose().eye, frozen.eye));
    }

    #[test]
    fn rotate_preserves_distance() {
        let mut c = controller();
        c.rotate(Vec2::new(30.0, 12.0));
        let pose = c.pose();
        assert!((pose.eye.distance(pose.target) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let mut c = controller();
        c.pan(Vec2::new(-100.0, 0.0));
        let pose = c.pose();
        assert!(approx(pose.target, Vec3::new(1.0, 0.0, 0.0)));
        assert!(approx(pose.eye, Vec3::new(1.0, 0.0, 5.0)));
    }

    #[test]
    fn reset_returns_to_default_pose() {
        let mut c = controller();
        c.pan(Vec2::new(-200.0, 40.0));
        c.rotate(Vec2::new(15.0, -8.0));
        c.reset();
        assert_eq!(c.pose(), CameraPose::default());
    }

    #[test]
    fn uniform_reports_selection() {
        let c = controller();
        assert_eq!(c.uniform(Some(4)).selected_atom, 4);
        assert_eq!(c.uniform(None).selected_atom, -1);
    }
}
