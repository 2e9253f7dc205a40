use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest scene scale any configuration may reach.
pub const MIN_ZOOM: f32 = 0.5;
/// Largest scene scale any configuration may reach.
pub const MAX_ZOOM: f32 = 2.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit and zoom parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Whether the turntable orbit starts enabled.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Turntable angular speed in radians per second.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 3.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
    /// Turntable orbit radius around the origin.
    #[schemars(skip)]
    pub orbit_radius: f32,
    /// Scale change per discrete zoom action.
    #[schemars(skip)]
    pub zoom_step: f32,
    /// Smallest allowed scene scale, never below [`MIN_ZOOM`].
    #[schemars(skip)]
    pub min_zoom: f32,
    /// Largest allowed scene scale, never above [`MAX_ZOOM`].
    #[schemars(skip)]
    pub max_zoom: f32,
    /// Manual orbit sensitivity in radians per pixel.
    #[schemars(title = "Drag Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Pan sensitivity in world units per pixel.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// Scene scale change per unit of scroll.
    #[schemars(title = "Scroll Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 100.0,
            auto_rotate: false,
            auto_rotate_speed: 0.5,
            orbit_radius: 5.0,
            zoom_step: 0.2,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            rotate_speed: 0.01,
            pan_speed: 0.01,
            zoom_speed: 0.1,
        }
    }
}

impl CameraOptions {
    /// Zoom bounds as `(min, max)`, tolerating a swapped pair. The
    /// configured range is intersected with `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn zoom_bounds(&self) -> (f32, f32) {
        let a = self.min_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let b = self.max_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        (a.min(b), a.max(b))
    }
}
