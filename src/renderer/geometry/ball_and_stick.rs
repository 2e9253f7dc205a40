//! Ball-and-stick geometry for a molecular graph.
//!
//! Flattens atoms, bond strands and labels into world-space visuals in one
//! pass. Scene-level transforms (the zoom scale) are composed into every
//! position and size here, so nothing downstream needs a transform stack.

use glam::{Affine3A, Vec3};
use serde::Serialize;

use super::bond::{resolve_scaled, BondSegment, MULTI_BOND_OFFSET};
use crate::options::{ColorOptions, DisplayStyle, ViewSettings};
use crate::renderer::impostor::{CapsuleInstance, SphereInstance};
use crate::structure::{Atom, Element, MolecularGraph};

/// One atom sphere in world space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomVisual {
    /// Index of the atom in the graph.
    pub index: usize,
    /// Element, for labels and tooltips.
    pub element: Element,
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Surface color.
    pub color: [f32; 3],
    /// Emissive glow, set only on the selected atom.
    pub emissive: Option<[f32; 3]>,
}

impl AtomVisual {
    /// Pack into a sphere impostor instance.
    #[must_use]
    pub fn to_instance(&self) -> SphereInstance {
        let c = self.center;
        let [r, g, b] = self.color;
        let (glow, selected) = self
            .emissive
            .map_or(([0.0; 3], 0.0), |glow| (glow, 1.0));
        SphereInstance {
            center: [c.x, c.y, c.z, self.radius],
            color: [r, g, b, self.index as f32],
            emissive: [glow[0], glow[1], glow[2], selected],
        }
    }
}

/// One bond strand (cylinder) in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondVisual {
    /// Index of the bond in the graph.
    pub bond: usize,
    /// Placement of the cylinder.
    pub segment: BondSegment,
    /// Cylinder radius.
    pub radius: f32,
    /// Cylinder color.
    pub color: [f32; 3],
}

impl BondVisual {
    /// Pack into a capsule impostor instance.
    #[must_use]
    pub fn to_instance(&self) -> CapsuleInstance {
        let (a, b) = self.segment.endpoints();
        let [r, g, bl] = self.color;
        let (dash, gap) = self.segment.dash_pattern().unwrap_or((0.0, 0.0));
        CapsuleInstance {
            endpoint_a: [a.x, a.y, a.z, self.radius],
            endpoint_b: [b.x, b.y, b.z, self.bond as f32],
            color_a: [r, g, bl, dash],
            color_b: [r, g, bl, gap],
        }
    }
}

/// Text billboard attached to an atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelVisual {
    /// Index of the labelled atom.
    pub atom: usize,
    /// Anchor position (the atom center).
    pub position: Vec3,
    /// Element symbol, followed by the charge sign when charges are shown.
    pub text: String,
}

/// Label text for `atom`: its symbol, plus `+`/`-` when `show_charges` is
/// set and the atom carries a non-zero charge.
#[must_use]
pub fn label_text(atom: &Atom, show_charges: bool) -> String {
    let mut text = atom.element.symbol().to_owned();
    if show_charges && atom.is_charged() {
        text.push(if atom.effective_charge() > 0 { '+' } else { '-' });
    }
    text
}

/// Flattened output of [`BallAndStick::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallAndStickGeometry {
    /// Bond strands, in bond order.
    pub bonds: Vec<BondVisual>,
    /// Atom spheres, in atom order.
    pub atoms: Vec<AtomVisual>,
    /// Labels, empty when labels are hidden.
    pub labels: Vec<LabelVisual>,
}

/// Output buffers for geometry generation.
#[derive(Default)]
struct GeometryCollector {
    bonds: Vec<BondVisual>,
    atoms: Vec<AtomVisual>,
    labels: Vec<LabelVisual>,
}

impl GeometryCollector {
    fn with_capacity(graph: &MolecularGraph) -> Self {
        Self {
            bonds: Vec::with_capacity(graph.bond_count() * 2),
            atoms: Vec::with_capacity(graph.atom_count()),
            labels: Vec::new(),
        }
    }

    fn finish(self) -> BallAndStickGeometry {
        BallAndStickGeometry {
            bonds: self.bonds,
            atoms: self.atoms,
            labels: self.labels,
        }
    }
}

/// Builds ball-and-stick geometry with one display style, palette and
/// scene transform.
pub struct BallAndStick<'a> {
    style: DisplayStyle,
    colors: &'a ColorOptions,
    transform: Affine3A,
}

impl<'a> BallAndStick<'a> {
    /// Builder with the identity scene transform.
    #[must_use]
    pub fn new(style: DisplayStyle, colors: &'a ColorOptions) -> Self {
        Self {
            style,
            colors,
            transform: Affine3A::IDENTITY,
        }
    }

    /// Compose `transform` into every position and size. Only uniform
    /// scales are supported; the x-axis scale is used for radii.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine3A) -> Self {
        self.transform = transform;
        self
    }

    /// Convenience for a uniform scene scale about the origin.
    #[must_use]
    pub fn with_scale(self, scale: f32) -> Self {
        self.with_transform(Affine3A::from_scale(Vec3::splat(scale)))
    }

    fn scale(&self) -> f32 {
        self.transform.matrix3.x_axis.length()
    }

    fn place(&self, position: Vec3) -> Vec3 {
        self.transform.transform_point3(position)
    }

    /// Flatten `graph`. `selected` is the selected atom index; it gets the
    /// selection glow when it names an atom of this graph.
    #[must_use]
    pub fn build(
        &self,
        graph: &MolecularGraph,
        settings: &ViewSettings,
        selected: Option<usize>,
    ) -> BallAndStickGeometry {
        let mut out = GeometryCollector::with_capacity(graph);
        let scale = self.scale();

        let bond_color = self.colors.bond_color();
        let bond_radius = self.style.bond_radius * scale;
        let spacing = MULTI_BOND_OFFSET * self.style.offset_scale * scale;
        for (index, bond) in graph.bonds().iter().enumerate() {
            let Some((start, end)) = graph.bond_endpoints(bond) else {
                continue;
            };
            let segments = resolve_scaled(
                bond.bond_type,
                self.place(start),
                self.place(end),
                spacing,
            );
            out.bonds.extend(segments.into_iter().map(|segment| BondVisual {
                bond: index,
                segment,
                radius: bond_radius,
                color: bond_color,
            }));
        }

        let glow = self.colors.selection_glow();
        for (index, atom) in graph.atoms().iter().enumerate() {
            let center = self.place(atom.position);
            out.atoms.push(AtomVisual {
                index,
                element: atom.element,
                center,
                radius: atom.element.ball_radius() * self.style.atom_scale * scale,
                color: self.colors.element_color(atom.element),
                emissive: (selected == Some(index)).then_some(glow),
            });
            if settings.show_labels {
                out.labels.push(LabelVisual {
                    atom: index,
                    position: center,
                    text: label_text(atom, settings.show_charges),
                });
            }
        }

        out.finish()
    }
}
