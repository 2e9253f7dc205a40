//! Rendering data for molecular scenes.
//!
//! Geometry builders turn a molecular graph into world-space visuals,
//! impostor types give those visuals a GPU-ready layout, and picking maps
//! screen rays back onto atoms.

pub mod geometry;
pub mod impostor;
pub mod picking;
