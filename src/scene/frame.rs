use glam::{Affine3A, Vec3};
use serde::Serialize;

use crate::camera::CameraPose;
use crate::renderer::geometry::{AtomVisual, BondVisual, LabelVisual};
use crate::renderer::impostor::{CapsuleInstance, SphereInstance};
use crate::structure::{Element, MolecularGraph};

/// Height of the info panel above the selected atom, in molecule units.
pub const INFO_PANEL_OFFSET: f32 = 0.5;

/// Info panel contents for the selected atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomInfo {
    /// Index of the atom in the graph.
    pub index: usize,
    /// Element.
    pub element: Element,
    /// Formal charge, present only when charges are shown and non-zero.
    pub charge: Option<i8>,
    /// Number of bonds touching the atom.
    pub bond_count: usize,
    /// Panel anchor in world space.
    pub anchor: Vec3,
}

impl AtomInfo {
    /// Info for atom `index` of `graph`, counted from the graph's current
    /// bonds. The anchor sits [`INFO_PANEL_OFFSET`] above the atom and is
    /// placed through `transform`.
    #[must_use]
    pub fn from_graph(
        graph: &MolecularGraph,
        index: usize,
        show_charges: bool,
        transform: Affine3A,
    ) -> Option<Self> {
        let atom = graph.atom(index)?;
        let charge = atom.effective_charge();
        Some(Self {
            index,
            element: atom.element,
            charge: (show_charges && charge != 0).then_some(charge),
            bond_count: graph.degree(index),
            anchor: transform.transform_point3(
                atom.position + Vec3::new(0.0, INFO_PANEL_OFFSET, 0.0),
            ),
        })
    }

    /// Charge as sign and magnitude, e.g. `"+1"`.
    #[must_use]
    pub fn charge_text(&self) -> Option<String> {
        self.charge.map(|c| {
            let sign = if c > 0 { '+' } else { '-' };
            format!("{sign}{}", c.unsigned_abs())
        })
    }
}

/// Everything a render surface needs for one frame.
///
/// Draw order is `bonds` then `atoms` so spheres cover the strand ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Graph generation the frame was composed from.
    pub generation: u64,
    /// Bond strands.
    pub bonds: Vec<BondVisual>,
    /// Atom spheres.
    pub atoms: Vec<AtomVisual>,
    /// Atom labels; empty when labels are hidden.
    pub labels: Vec<LabelVisual>,
    /// Info panel for the selected atom.
    pub selection: Option<AtomInfo>,
    /// Camera pose to render from.
    pub camera: CameraPose,
    /// Atoms in the graph.
    pub atom_count: usize,
    /// Bonds in the graph (not strands).
    pub bond_count: usize,
}

impl Frame {
    /// Sphere impostor instances in atom order.
    #[must_use]
    pub fn sphere_instances(&self) -> Vec<SphereInstance> {
        self.atoms.iter().map(AtomVisual::to_instance).collect()
    }

    /// Capsule impostor instances in strand order.
    #[must_use]
    pub fn capsule_instances(&self) -> Vec<CapsuleInstance> {
        self.bonds.iter().map(BondVisual::to_instance).collect()
    }

    /// Index of the highlighted atom, if any.
    #[must_use]
    pub fn selected_atom(&self) -> Option<usize> {
        self.selection.as_ref().map(|info| info.index)
    }

    /// Whether the frame has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.bonds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Atom, Bond, BondType};

    fn graph() -> MolecularGraph {
        MolecularGraph::new(
            vec![
                Atom::new(Element::N, Vec3::new(1.0, 2.0, 3.0)).with_charge(1),
                Atom::new(Element::C, Vec3::ZERO).with_charge(0),
                Atom::new(Element::O, Vec3::X).with_charge(-1),
            ],
            vec![Bond::new(0, 1, BondType::Single), Bond::new(1, 2, BondType::Double)],
        )
        .unwrap()
    }

    #[test]
    fn info_counts_incident_bonds() {
        let g = graph();
        let info = AtomInfo::from_graph(&g, 1, true, Affine3A::IDENTITY).unwrap();
        assert_eq!(info.element, Element::C);
        assert_eq!(info.bond_count, 2);
        assert_eq!(info.charge, None);
        assert_eq!(info.charge_text(), None);
        assert!(AtomInfo::from_graph(&g, 3, true, Affine3A::IDENTITY).is_none());
    }

    #[test]
    fn charge_text_has_sign_and_magnitude() {
        let g = graph();
        let n = AtomInfo::from_graph(&g, 0, true, Affine3A::IDENTITY).unwrap();
        assert_eq!(n.charge_text().as_deref(), Some("+1"));
        let o = AtomInfo::from_graph(&g, 2, true, Affine3A::IDENTITY).unwrap();
        assert_eq!(o.charge_text().as_deref(), Some("-1"));
        let hidden = AtomInfo::from_graph(&g, 2, false, Affine3A::IDENTITY).unwrap();
        assert_eq!(hidden.charge_text(), None);
    }

    #[test]
    fn anchor_sits_above_atom() {
        let g = graph();
        let info = AtomInfo::from_graph(&g, 0, true, Affine3A::IDENTITY).unwrap();
        assert_eq!(info.anchor, Vec3::new(1.0, 2.5, 3.0));

        let zoomed =
            AtomInfo::from_graph(&g, 0, true, Affine3A::from_scale(Vec3::splat(2.0)))
                .unwrap();
        assert_eq!(zoomed.anchor, Vec3::new(2.0, 5.0, 6.0));
    }
}
