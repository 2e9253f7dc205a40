//! Capsule impostor instance layout for bond strands.

/// Per-instance data for a capsule (bond cylinder) impostor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CapsuleInstance {
    /// Endpoint A position (xyz), radius (w)
    pub endpoint_a: [f32; 4],
    /// Endpoint B position (xyz), bond index (w) - packed as float
    pub endpoint_b: [f32; 4],
    /// Color at endpoint A (RGB), dash length (w), 0 for solid
    pub color_a: [f32; 4],
    /// Color at endpoint B (RGB), gap length (w)
    pub color_b: [f32; 4],
}
