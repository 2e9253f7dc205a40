//! Molecular geometry builders.
//!
//! Each builder produces world-space visuals for a molecular graph, ready to
//! be packed into impostor instances.

/// Ball-and-stick atoms, bond strands and labels.
pub mod ball_and_stick;
/// Bond strand placement for single/double/triple/aromatic bonds.
pub mod bond;

pub use ball_and_stick::{
    label_text, AtomVisual, BallAndStick, BallAndStickGeometry, BondVisual,
    LabelVisual,
};
pub use bond::{resolve, resolve_scaled, BondSegment, MULTI_BOND_OFFSET};
