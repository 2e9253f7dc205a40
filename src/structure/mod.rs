//! Molecular graph model and the notation-to-graph generator.
//!
//! A [`MolecularGraph`] is built once from a notation string and never
//! mutated; a new notation produces a new graph.

mod element;
pub mod generator;
mod graph;
pub mod notation;

pub use element::Element;
pub use generator::{generate, generate_with, SpiralGenerator, StructureSource};
pub use graph::{Atom, Bond, BondType, MolecularGraph};

/// Hard cap on atoms generated from one notation. A configured
/// `max_atoms` may lower it but never raise it.
pub const MAX_ATOMS: usize = 20;

/// Aspirin, the molecule shown when no notation is supplied.
pub const DEFAULT_NOTATION: &str = "CC(=O)OC1=CC=CC=C1C(=O)O";
