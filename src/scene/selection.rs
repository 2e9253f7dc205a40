use serde::{Deserialize, Serialize};

use crate::structure::MolecularGraph;

/// Single-atom selection.
///
/// Last pick wins and re-picking the selected atom leaves it selected. The
/// stored index is only trusted through [`SelectionState::resolve`], which
/// checks it against the graph being drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    /// No selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Raw selected index, unchecked.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Select atom `index` of `graph`. Picking an index that is not an atom
    /// of `graph` clears the selection, like clicking empty space.
    ///
    /// Returns whether the selection changed.
    pub fn pick(&mut self, index: usize, graph: &MolecularGraph) -> bool {
        let next = graph.contains_atom(index).then_some(index);
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    /// Clear the selection. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Selected index if it names an atom of `graph`.
    #[must_use]
    pub fn resolve(&self, graph: &MolecularGraph) -> Option<usize> {
        self.selected.filter(|&index| graph.contains_atom(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::generate;

    #[test]
    fn repick_is_idempotent() {
        let graph = generate("CCO");
        let mut selection = SelectionState::new();
        assert!(selection.pick(1, &graph));
        let before = selection;
        assert!(!selection.pick(1, &graph));
        assert_eq!(selection, before);
        assert_eq!(selection.resolve(&graph), Some(1));
    }

    #[test]
    fn last_pick_wins() {
        let graph = generate("CCO");
        let mut selection = SelectionState::new();
        let _ = selection.pick(0, &graph);
        let _ = selection.pick(2, &graph);
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn invalid_pick_clears() {
        let graph = generate("CCO");
        let mut selection = SelectionState::new();
        let _ = selection.pick(0, &graph);
        assert!(selection.pick(3, &graph));
        assert!(selection.is_empty());
    }

    #[test]
    fn stale_index_resolves_to_none() {
        let mut selection = SelectionState::new();
        let _ = selection.pick(10, &generate("CCCCCCCCCCCC"));
        assert_eq!(selection.resolve(&generate("CC")), None);
        assert_eq!(selection.resolve(&MolecularGraph::empty()), None);
    }

    #[test]
    fn clear_reports_change() {
        let graph = generate("N");
        let mut selection = SelectionState::new();
        assert!(!selection.clear());
        let _ = selection.pick(0, &graph);
        assert!(selection.clear());
        assert!(selection.is_empty());
    }
}
