//! Instance layouts for ray-cast impostors.
//!
//! Atoms become sphere impostors and bond strands become capsule impostors.
//! Both are plain `#[repr(C)]` records so a frame can be uploaded to a GPU
//! storage buffer with a single byte cast.

pub mod capsule;
pub mod sphere;

use bytemuck::Pod;

pub use capsule::CapsuleInstance;
pub use sphere::SphereInstance;

/// View a slice of instances as raw bytes for upload.
#[must_use]
pub fn as_bytes<T: Pod>(instances: &[T]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
