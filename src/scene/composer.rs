use std::sync::Arc;

use glam::{Affine3A, Vec3};

use super::frame::{AtomInfo, Frame};
use super::selection::SelectionState;
use crate::camera::CameraPose;
use crate::options::{ColorOptions, GeneratorOptions, GeometryOptions, ViewSettings};
use crate::renderer::geometry::BallAndStick;
use crate::structure::{MolecularGraph, SpiralGenerator, StructureSource};

/// Owns the current graph and selection and composes frames from them.
///
/// The graph is only ever replaced whole, together with clearing the
/// selection and bumping the generation, so every frame is composed from
/// exactly one graph and never shows a stale selection.
pub struct SceneComposer {
    source: Box<dyn StructureSource + Send + Sync>,
    notation: String,
    graph: Arc<MolecularGraph>,
    selection: SelectionState,
    /// Bumped on every graph replacement or selection change.
    generation: u64,
    /// Generation last handed to the renderer.
    rendered_generation: u64,
}

impl SceneComposer {
    /// Empty scene backed by the spiral generator.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_source(Box::new(SpiralGenerator::new(options)))
    }

    /// Empty scene backed by an arbitrary structure source.
    #[must_use]
    pub fn with_source(source: Box<dyn StructureSource + Send + Sync>) -> Self {
        Self {
            source,
            notation: String::new(),
            graph: Arc::new(MolecularGraph::empty()),
            selection: SelectionState::new(),
            generation: 0,
            rendered_generation: 0,
        }
    }

    /// Swap in a new structure source. The current graph is kept until the
    /// next [`set_notation`](Self::set_notation).
    pub fn set_source(&mut self, source: Box<dyn StructureSource + Send + Sync>) {
        self.source = source;
    }

    // -- Graph --

    /// Generate a graph for `notation` and make it current.
    pub fn set_notation(&mut self, notation: &str) {
        let graph = self.source.generate(notation);
        notation.clone_into(&mut self.notation);
        self.replace_graph(graph);
    }

    /// Regenerate the current notation, e.g. after generator options changed.
    pub fn regenerate(&mut self) {
        let graph = self.source.generate(&self.notation);
        self.replace_graph(graph);
    }

    /// Make `graph` current, clearing the selection.
    pub fn replace_graph(&mut self, graph: MolecularGraph) {
        self.graph = Arc::new(graph);
        let _ = self.selection.clear();
        self.generation += 1;
        log::debug!(
            "scene graph replaced (generation {}, {} atoms, {} bonds)",
            self.generation,
            self.graph.atom_count(),
            self.graph.bond_count()
        );
    }

    /// Notation the current graph was generated from.
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Current graph.
    #[must_use]
    pub fn graph(&self) -> &MolecularGraph {
        &self.graph
    }

    /// Shared handle to the current graph for read-only consumers.
    #[must_use]
    pub fn shared_graph(&self) -> Arc<MolecularGraph> {
        Arc::clone(&self.graph)
    }

    // -- Dirty tracking --

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the scene changed since the last [`mark_rendered`](Self::mark_rendered).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Force a recompose when view settings change but the scene has not.
    pub fn force_dirty(&mut self) {
        self.generation += 1;
    }

    /// Record that the current generation has been drawn.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Selection --

    /// Select atom `index`; an index outside the graph clears the
    /// selection. Returns whether the selection changed.
    pub fn pick(&mut self, index: usize) -> bool {
        let changed = self.selection.pick(index, &self.graph);
        if changed {
            self.generation += 1;
            log::debug!("selection: {:?}", self.selection.selected());
        }
        changed
    }

    /// Clear the selection. Returns whether anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear();
        if changed {
            self.generation += 1;
            log::debug!("selection cleared");
        }
        changed
    }

    /// Selected atom of the current graph.
    #[must_use]
    pub fn selected_atom(&self) -> Option<usize> {
        self.selection.resolve(&self.graph)
    }

    /// Info panel for the selected atom, in unzoomed molecule space.
    #[must_use]
    pub fn selected_info(&self, show_charges: bool) -> Option<AtomInfo> {
        self.selected_atom().and_then(|index| {
            AtomInfo::from_graph(&self.graph, index, show_charges, Affine3A::IDENTITY)
        })
    }

    // -- Composition --

    /// Compose a frame from the current graph and selection.
    #[must_use]
    pub fn compose(
        &self,
        settings: &ViewSettings,
        geometry: &GeometryOptions,
        colors: &ColorOptions,
        camera: CameraPose,
    ) -> Frame {
        let transform = Affine3A::from_scale(Vec3::splat(settings.zoom));
        let selected = self.selected_atom();
        let built = BallAndStick::new(geometry.style(settings.display_mode), colors)
            .with_transform(transform)
            .build(&self.graph, settings, selected);

        Frame {
            generation: self.generation,
            bonds: built.bonds,
            atoms: built.atoms,
            labels: built.labels,
            selection: selected.and_then(|index| {
                AtomInfo::from_graph(&self.graph, index, settings.show_charges, transform)
            }),
            camera,
            atom_count: self.graph.atom_count(),
            bond_count: self.graph.bond_count(),
        }
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}
