//! End-to-end viewer flow: notation, frame, pick, replace.

use glam::{Vec2, Vec3};
use molscope::input::{InputEvent, InputProcessor};
use molscope::options::{DisplayMode, Options};
use molscope::renderer::impostor::as_bytes;
use molscope::structure::{generate, notation, BondType, DEFAULT_NOTATION};
use molscope::{Viewer, ViewerCommand};
use web_time::Duration;

#[test]
fn aspirin_frame_has_every_bond_before_atoms() {
    let mut viewer = Viewer::default();
    let frame = viewer.frame_at(Duration::ZERO);

    assert_eq!(frame.atom_count, 20);
    assert_eq!(frame.bond_count, 24);
    assert_eq!(frame.atoms.len(), 20);

    let graph = generate(DEFAULT_NOTATION);
    let strands: usize = graph
        .bonds()
        .iter()
        .map(|b| match b.bond_type {
            BondType::Single | BondType::Aromatic => 1,
            BondType::Double => 2,
            BondType::Triple => 3,
        })
        .sum();
    assert_eq!(frame.bonds.len(), strands);
    assert_eq!(graph.bonds()[2].bond_type, BondType::Double);
    assert_eq!(graph.bonds()[2].to, 3);
}

#[test]
fn select_then_replace_graph() {
    let mut viewer = Viewer::default();
    viewer.execute(ViewerCommand::SelectAtom { index: 9 });
    let frame = viewer.frame_at(Duration::ZERO);
    let info = frame.selection.as_ref().unwrap();
    assert_eq!(info.index, 9);
    assert_eq!(info.bond_count, viewer.graph().degree(9));
    assert_eq!(
        frame.atoms.iter().filter(|a| a.emissive.is_some()).count(),
        1
    );

    viewer.execute(ViewerCommand::SelectAtom { index: 9 });
    assert_eq!(viewer.selected_atom(), Some(9));

    viewer.execute(ViewerCommand::SetNotation("CCO".into()));
    let replaced = viewer.frame_at(Duration::ZERO);
    assert!(replaced.generation > frame.generation);
    assert_eq!(replaced.selection, None);
    assert!(replaced.atoms.iter().all(|a| a.emissive.is_none()));
}

#[test]
fn pointer_click_selects_atom() {
    let mut viewer = Viewer::with_notation("O", Options::default());
    viewer.execute(ViewerCommand::PanCamera {
        delta: Vec2::new(-150.0, 0.0),
    });
    let mut processor = InputProcessor::new();
    let viewport = (200.0, 100.0);

    let _ = viewer.handle_input(
        &mut processor,
        InputEvent::CursorMoved { x: 100.0, y: 50.0 },
        viewport,
    );
    for pressed in [true, false] {
        let _ = viewer.handle_input(
            &mut processor,
            InputEvent::PrimaryButton { pressed },
            viewport,
        );
    }
    assert_eq!(viewer.selected_atom(), Some(0));
    let info = viewer.frame_at(Duration::ZERO).selection.unwrap();
    assert_eq!(info.anchor, Vec3::new(1.5, 0.5, 0.0));
}

#[test]
fn display_modes_keep_the_graph() {
    let mut viewer = Viewer::default();
    let base = viewer.frame_at(Duration::ZERO);
    for mode in DisplayMode::ALL {
        viewer.execute(ViewerCommand::SetDisplayMode(mode));
        let frame = viewer.frame_at(Duration::ZERO);
        assert_eq!(frame.atom_count, base.atom_count);
        assert_eq!(frame.bonds.len(), base.bonds.len());
        for (a, b) in frame.atoms.iter().zip(&base.atoms) {
            assert_eq!(a.center, b.center);
        }
    }
}

#[test]
fn zoom_is_clamped_and_applied() {
    let mut viewer = Viewer::default();
    let base = viewer.frame_at(Duration::ZERO);
    for _ in 0..10 {
        viewer.execute(ViewerCommand::ZoomIn);
    }
    let zoomed = viewer.frame_at(Duration::ZERO);
    for (a, b) in zoomed.atoms.iter().zip(&base.atoms) {
        assert!((a.center - b.center * 2.5).length() < 1e-4);
    }
}

#[test]
fn turntable_pose_depends_only_on_time() {
    let mut viewer = Viewer::default();
    viewer.execute(ViewerCommand::ToggleAutoRotate);
    for _ in 0..5 {
        let _ = viewer.frame_at(Duration::from_millis(123));
    }
    let t = 3.0f32;
    let pose = viewer.frame_at(Duration::from_secs_f32(t)).camera;
    assert!((pose.eye.x - (t * 0.5).cos() * 5.0).abs() < 1e-4);
    assert!((pose.eye.z - (t * 0.5).sin() * 5.0).abs() < 1e-4);

    viewer.execute(ViewerCommand::ToggleAutoRotate);
    let frozen = viewer.frame_at(Duration::from_secs_f32(10.0)).camera;
    assert!((frozen.eye - pose.eye).length() < 1e-5);
}

#[test]
fn frame_serializes_and_packs() {
    let mut viewer = Viewer::default();
    viewer.execute(ViewerCommand::SelectAtom { index: 0 });
    let frame = viewer.frame_at(Duration::ZERO);

    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["atom_count"], 20);
    assert_eq!(json["atoms"].as_array().unwrap().len(), 20);
    assert_eq!(json["selection"]["index"], 0);

    let spheres = frame.sphere_instances();
    let capsules = frame.capsule_instances();
    assert_eq!(as_bytes(&spheres).len(), spheres.len() * 48);
    assert_eq!(as_bytes(&capsules).len(), capsules.len() * 64);
}

#[test]
fn molblock_export_of_current_graph() {
    let viewer = Viewer::default();
    let block = viewer.molblock();
    assert!(block.starts_with(DEFAULT_NOTATION));
    assert!(notation::looks_like_notation(DEFAULT_NOTATION));
    let atom_lines = block
        .lines()
        .skip(4)
        .take(20)
        .filter(|l| l.len() > 30)
        .count();
    assert_eq!(atom_lines, 20);
    assert!(block.ends_with("M  END\n"));
}
