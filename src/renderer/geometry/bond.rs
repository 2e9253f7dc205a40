//! Bond geometry: turns one bond into the parallel cylinders that draw it.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::structure::BondType;

/// Lateral spacing between the strands of a double or triple bond.
pub const MULTI_BOND_OFFSET: f32 = 0.05;

/// Dash and gap length for aromatic bonds.
pub const AROMATIC_DASH: f32 = 0.1;

/// One drawable strand of a bond: a cylinder centered at `center`, whose
/// local `+Y` axis is rotated onto the bond direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondSegment {
    /// Cylinder center (bond midpoint shifted by the lateral offset).
    pub center: Vec3,
    /// Shortest-arc rotation from `+Y` onto the bond direction.
    pub rotation: Quat,
    /// Cylinder length (the distance between the two atoms).
    pub length: f32,
    /// Signed offset along the rotated `+X` axis, perpendicular to the bond.
    pub lateral_offset: f32,
    /// Whether the strand is drawn dashed (aromatic bonds).
    pub dashed: bool,
}

impl BondSegment {
    /// Unit axis of the cylinder.
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Unit direction in which `lateral_offset` is measured.
    #[must_use]
    pub fn lateral_axis(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Cylinder end points.
    #[must_use]
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let half = self.axis() * (self.length * 0.5);
        (self.center - half, self.center + half)
    }

    /// `(dash, gap)` lengths for dashed strands.
    #[must_use]
    pub fn dash_pattern(&self) -> Option<(f32, f32)> {
        self.dashed.then_some((AROMATIC_DASH, AROMATIC_DASH))
    }
}

/// Lateral offsets of the strands for `bond_type` in units of the strand
/// spacing, in drawing order.
const fn strand_offsets(bond_type: BondType) -> &'static [f32] {
    match bond_type {
        BondType::Single | BondType::Aromatic => &[0.0],
        BondType::Double => &[1.0, -1.0],
        BondType::Triple => &[0.0, 1.0, -1.0],
    }
}

/// Resolve a bond into strands with the default spacing.
#[must_use]
pub fn resolve(bond_type: BondType, start: Vec3, end: Vec3) -> Vec<BondSegment> {
    resolve_scaled(bond_type, start, end, MULTI_BOND_OFFSET)
}

/// Resolve a bond into strands spaced `offset` apart from the bond axis.
///
/// Single and aromatic bonds give one strand (aromatic dashed), double bonds
/// two at `±offset`, triple bonds three at `0, ±offset`. The offsets always
/// sum to zero, so the strands stay centered on the line between the atoms.
/// Coincident endpoints give zero-length strands with the identity rotation.
#[must_use]
pub fn resolve_scaled(
    bond_type: BondType,
    start: Vec3,
    end: Vec3,
    offset: f32,
) -> Vec<BondSegment> {
    let midpoint = (start + end) * 0.5;
    let delta = end - start;
    let length = delta.length();
    let rotation = if length > f32::EPSILON {
        Quat::from_rotation_arc(Vec3::Y, delta / length)
    } else {
        Quat::IDENTITY
    };
    let lateral = rotation * Vec3::X;
    let dashed = bond_type == BondType::Aromatic;

    strand_offsets(bond_type)
        .iter()
        .map(|unit| {
            let lateral_offset = unit * offset;
            BondSegment {
                center: midpoint + lateral * lateral_offset,
                rotation,
                length,
                lateral_offset,
                dashed,
            }
        })
        .collect()
}
