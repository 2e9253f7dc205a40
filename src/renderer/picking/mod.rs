//! CPU ray picking against the atom spheres of a composed frame.
//!
//! A screen position is unprojected into a world-space [`Ray`] (see
//! [`Camera::screen_ray`](crate::camera::Camera::screen_ray)) and tested
//! against every atom sphere; the nearest hit in front of the eye wins.

use glam::Vec3;

use super::geometry::AtomVisual;

/// Half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with the sphere, if
    /// any. A ray starting inside the sphere reports the exit point.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = radius.mul_add(-radius, oc.length_squared());
        let discriminant = b.mul_add(b, -c);
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// Nearest atom hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Index of the atom in the molecular graph.
    pub atom: usize,
    /// Distance along the ray.
    pub distance: f32,
}

/// Find the atom sphere nearest to the ray origin along `ray`.
#[must_use]
pub fn pick_atom(ray: &Ray, atoms: &[AtomVisual]) -> Option<PickHit> {
    atoms
        .iter()
        .filter_map(|atom| {
            ray.intersect_sphere(atom.center, atom.radius)
                .map(|distance| PickHit {
                    atom: atom.index,
                    distance,
                })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
