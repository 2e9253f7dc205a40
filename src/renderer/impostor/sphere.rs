//! Sphere impostor instance layout for atoms.

/// Per-instance data for a sphere impostor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color, w = atom index (packed as float)
    pub color: [f32; 4],
    /// xyz = emissive RGB, w = 1.0 when the atom is selected
    pub emissive: [f32; 4],
}
