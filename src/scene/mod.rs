//! Scene composition: the current molecule, the atom selection and the
//! per-frame drawable snapshot.
//!
//! [`SceneComposer`] is the single writer of graph and selection state. A
//! render surface reads one [`Frame`] per tick and never sees a graph and a
//! selection that belong to different generations.

mod composer;
mod frame;
mod selection;

pub use composer::SceneComposer;
pub use frame::{AtomInfo, Frame, INFO_PANEL_OFFSET};
pub use selection::SelectionState;
