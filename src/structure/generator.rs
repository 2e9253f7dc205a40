//! Placeholder structure generator.
//!
//! Turns any notation string into a positioned atom/bond graph. This is a
//! heuristic label and layout generator, not a chemistry parser: it does not
//! check valence, ring closure, aromaticity or stereochemistry, and it never
//! fails. Atoms are laid out on a rising spiral, elements are guessed from
//! the character at each position, and bonds chain consecutive atoms with a
//! cross-link every third atom so the mock structures contain rings.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::element::Element;
use super::graph::{Atom, Bond, BondType, MolecularGraph};
use super::MAX_ATOMS;
use crate::options::GeneratorOptions;

/// Anything that can turn a notation string into a graph.
///
/// The scene composer only depends on this trait, so a real line-notation
/// parser can replace [`SpiralGenerator`] without touching geometry or
/// rendering code.
pub trait StructureSource {
    /// Build a graph for `notation`. Must not fail for any input.
    fn generate(&self, notation: &str) -> MolecularGraph;
}

/// The spiral placeholder generator, configured by [`GeneratorOptions`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpiralGenerator {
    options: GeneratorOptions,
}

impl SpiralGenerator {
    /// Create a generator with explicit options.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
}

impl StructureSource for SpiralGenerator {
    fn generate(&self, notation: &str) -> MolecularGraph {
        generate_with(notation, &self.options)
    }
}

/// Generate a graph with default options (20-atom cap, default seed).
#[must_use]
pub fn generate(notation: &str) -> MolecularGraph {
    generate_with(notation, &GeneratorOptions::default())
}

/// Generate a graph for `notation`.
///
/// Length and positions are counted in `char`s, so multi-byte input is
/// accepted. The empty string yields the empty graph, and no graph has
/// more than [`MAX_ATOMS`] atoms whatever `options.max_atoms` says.
#[must_use]
pub fn generate_with(
    notation: &str,
    options: &GeneratorOptions,
) -> MolecularGraph {
    let chars: Vec<char> = notation.chars().collect();
    let count = chars.len().min(options.max_atoms.min(MAX_ATOMS));

    let mut atoms = Vec::with_capacity(count);
    let mut bonds = Vec::with_capacity(count + count / 3);

    for (i, &c) in chars.iter().enumerate().take(count) {
        atoms.push(Atom {
            element: element_at(&chars, i),
            position: spiral_position(i),
            charge: Some(charge_for(options, i)),
        });

        if i > 0 {
            bonds.push(Bond::new(i - 1, i, BondType::from_notation_char(c)));
        }
        if i > 3 && i % 3 == 0 {
            bonds.push(Bond::new(i, i - 3, BondType::Single));
        }
    }

    match MolecularGraph::new(atoms, bonds) {
        Ok(graph) => {
            log::debug!(
                "generated {} atoms / {} bonds from {}-char notation",
                graph.atom_count(),
                graph.bond_count(),
                chars.len()
            );
            graph
        }
        Err(e) => {
            log::error!("generator produced an inconsistent graph: {e}");
            MolecularGraph::empty()
        }
    }
}

/// Spiral layout: ten atoms per turn, radius growing by 0.1 and height by
/// 0.2 per atom, so no two atoms coincide.
#[must_use]
pub fn spiral_position(index: usize) -> Vec3 {
    let i = index as f32;
    let angle = i * TAU / 10.0;
    let radius = 1.5 + i / 10.0;
    Vec3::new(angle.cos() * radius, angle.sin() * radius, i * 0.2)
}

/// Element guess for position `i`. `L` followed by `C` is read as chlorine
/// (the lookahead may reach past the atom cap); N, O, S, P, F are taken
/// literally; everything else is carbon.
fn element_at(chars: &[char], i: usize) -> Element {
    let upper = chars[i].to_ascii_uppercase();
    match upper {
        'N' => Element::N,
        'O' => Element::O,
        'S' => Element::S,
        'P' => Element::P,
        'F' => Element::F,
        'L' if chars
            .get(i + 1)
            .is_some_and(|next| next.to_ascii_uppercase() == 'C') =>
        {
            Element::Cl
        }
        _ => Element::C,
    }
}

/// Charge drawn from a per-atom RNG, so it depends only on the seed and the
/// atom index.
fn charge_for(options: &GeneratorOptions, index: usize) -> i8 {
    let p = options.charge_probability;
    if p.is_nan() || p <= 0.0 {
        return 0;
    }
    let mut rng = StdRng::seed_from_u64(options.seed.wrapping_add(index as u64));
    if !rng.random_bool(p.min(1.0)) {
        return 0;
    }
    if rng.random_bool(0.5) {
        1
    } else {
        -1
    }
}
