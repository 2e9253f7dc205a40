// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D molecule viewer core.
//!
//! Molscope turns a chemical line-notation string into a positioned
//! atom/bond graph and composes it, frame by frame, into a drawable scene
//! with multiplicity-aware bonds, atom selection, labels and a camera with
//! a time-driven turntable.
//!
//! # Key entry points
//!
//! - [`engine::Viewer`] - owns scene, camera and options; executes
//!   [`engine::ViewerCommand`]s and produces frames
//! - [`structure::generate`] - notation string to [`structure::MolecularGraph`]
//! - [`renderer::geometry::resolve`] - bond type to drawable strands
//! - [`scene::SceneComposer`] - graph + selection + view settings to
//!   [`scene::Frame`]
//! - [`camera::CameraController`] - orbit, pan, clamped zoom, turntable
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Everything runs on the caller's thread. A [`scene::Frame`] is a plain
//! snapshot: world-space atom spheres and bond strands (with zoom already
//! applied), labels, the selected atom's info panel and the camera pose.
//! Its instances pack into `bytemuck::Pod` records for a GPU shell to upload.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod structure;
pub mod util;

pub use engine::{Viewer, ViewerCommand};
pub use error::MolscopeError;
