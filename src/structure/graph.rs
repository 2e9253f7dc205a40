use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::element::Element;
use crate::error::MolscopeError;

/// Bond multiplicity. Discriminants match the conventional ordinals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum BondType {
    /// Single bond.
    #[default]
    Single = 1,
    /// Double bond.
    Double = 2,
    /// Triple bond.
    Triple = 3,
    /// Aromatic (delocalized) bond.
    Aromatic = 4,
}

impl BondType {
    /// Map an ordinal (1-4) back to a bond type.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            4 => Some(Self::Aromatic),
            _ => None,
        }
    }

    /// Ordinal value (1-4).
    #[must_use]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Bond type implied by a line-notation bond character. Anything that is
    /// not `=`, `#` or `:` is a single bond.
    #[must_use]
    pub fn from_notation_char(c: char) -> Self {
        match c {
            '=' => Self::Double,
            '#' => Self::Triple,
            ':' => Self::Aromatic,
            _ => Self::Single,
        }
    }
}

/// A positioned atom. Its identity is its index in the owning graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Element label.
    pub element: Element,
    /// Position in molecule space.
    pub position: Vec3,
    /// Formal charge. `None` means no charge was assigned, which renders like
    /// zero but is reported differently.
    pub charge: Option<i8>,
}

impl Atom {
    /// Create an uncharged atom with no charge recorded.
    #[must_use]
    pub fn new(element: Element, position: Vec3) -> Self {
        Self {
            element,
            position,
            charge: None,
        }
    }

    /// Builder-style charge assignment.
    #[must_use]
    pub fn with_charge(mut self, charge: i8) -> Self {
        self.charge = Some(charge);
        self
    }

    /// Charge used for rendering: absent counts as zero.
    #[must_use]
    pub fn effective_charge(&self) -> i8 {
        self.charge.unwrap_or(0)
    }

    /// Whether the atom carries a nonzero charge.
    #[must_use]
    pub fn is_charged(&self) -> bool {
        self.effective_charge() != 0
    }
}

/// An undirected connection between two atoms of the same graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    /// First endpoint (atom index).
    pub from: usize,
    /// Second endpoint (atom index).
    pub to: usize,
    /// Multiplicity.
    #[serde(rename = "type")]
    pub bond_type: BondType,
}

impl Bond {
    /// Create a bond between two atom indices.
    #[must_use]
    pub fn new(from: usize, to: usize, bond_type: BondType) -> Self {
        Self {
            from,
            to,
            bond_type,
        }
    }

    /// Whether either endpoint is `atom`.
    #[must_use]
    pub fn touches(&self, atom: usize) -> bool {
        self.from == atom || self.to == atom
    }

    /// Whether this bond connects `a` and `b` in either direction.
    #[must_use]
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Immutable atom/bond graph.
///
/// Atoms are kept in insertion order and never reordered, so an atom index is
/// stable for the lifetime of the graph. Every bond is checked against the
/// atom sequence on construction; there is no way to mutate a graph after
/// that, so a replaced molecule is always a new graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MolecularGraph {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl MolecularGraph {
    /// Build a graph, rejecting bonds with out-of-range or identical
    /// endpoints.
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Result<Self, MolscopeError> {
        let atom_count = atoms.len();
        for (i, bond) in bonds.iter().enumerate() {
            if bond.from >= atom_count
                || bond.to >= atom_count
                || bond.from == bond.to
            {
                return Err(MolscopeError::InvalidBond {
                    bond: i,
                    from: bond.from,
                    to: bond.to,
                    atom_count,
                });
            }
        }
        Ok(Self { atoms, bonds })
    }

    /// The graph with no atoms and no bonds.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Atoms in index order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Bonds in generation order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Atom at `index`, if it exists.
    #[must_use]
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Number of atoms.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds.
    #[must_use]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Whether the graph has no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether `index` names an atom of this graph.
    #[must_use]
    pub fn contains_atom(&self, index: usize) -> bool {
        index < self.atoms.len()
    }

    /// Number of bonds with `atom` as either endpoint.
    #[must_use]
    pub fn degree(&self, atom: usize) -> usize {
        self.bonds.iter().filter(|b| b.touches(atom)).count()
    }

    /// Endpoint positions of a bond. Always valid for bonds of this graph.
    #[must_use]
    pub fn bond_endpoints(&self, bond: &Bond) -> Option<(Vec3, Vec3)> {
        let a = self.atoms.get(bond.from)?;
        let b = self.atoms.get(bond.to)?;
        Some((a.position, b.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_atoms() -> Vec<Atom> {
        vec![
            Atom::new(Element::C, Vec3::ZERO),
            Atom::new(Element::O, Vec3::X),
            Atom::new(Element::N, Vec3::Y).with_charge(1),
        ]
    }

    #[test]
    fn rejects_dangling_bond() {
        let err = MolecularGraph::new(
            three_atoms(),
            vec![Bond::new(0, 3, BondType::Single)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MolscopeError::InvalidBond {
                bond: 0,
                to: 3,
                atom_count: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_self_loop() {
        let result = MolecularGraph::new(
            three_atoms(),
            vec![
                Bond::new(0, 1, BondType::Single),
                Bond::new(2, 2, BondType::Double),
            ],
        );
        assert!(matches!(
            result,
            Err(MolscopeError::InvalidBond { bond: 1, .. })
        ));
    }

    #[test]
    fn degree_counts_both_endpoints() {
        let graph = MolecularGraph::new(
            three_atoms(),
            vec![
                Bond::new(0, 1, BondType::Single),
                Bond::new(2, 0, BondType::Double),
            ],
        )
        .unwrap();
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 1);
        assert_eq!(graph.degree(9), 0);
    }

    #[test]
    fn absent_charge_renders_as_zero() {
        let atoms = three_atoms();
        assert_eq!(atoms[0].charge, None);
        assert_eq!(atoms[0].effective_charge(), 0);
        assert!(!atoms[0].is_charged());
        assert!(atoms[2].is_charged());
        let explicit_zero = Atom::new(Element::C, Vec3::ZERO).with_charge(0);
        assert_eq!(explicit_zero.charge, Some(0));
        assert!(!explicit_zero.is_charged());
    }

    #[test]
    fn bond_type_ordinals() {
        for ordinal in 1..=4 {
            let bond_type = BondType::from_ordinal(ordinal).unwrap();
            assert_eq!(bond_type.ordinal(), ordinal);
        }
        assert_eq!(BondType::from_ordinal(0), None);
        assert_eq!(BondType::from_notation_char('='), BondType::Double);
        assert_eq!(BondType::from_notation_char('#'), BondType::Triple);
        assert_eq!(BondType::from_notation_char(':'), BondType::Aromatic);
        assert_eq!(BondType::from_notation_char('C'), BondType::Single);
    }

    #[test]
    fn empty_graph_has_no_atoms_or_bonds() {
        let graph = MolecularGraph::empty();
        assert!(graph.is_empty());
        assert_eq!(graph.bond_count(), 0);
    }
}
