//! Whole parts generated through the public API.

use config::GogglesConfig;
use goggles::{generate, generate_all, PartKind, SliceParams, Solid};

fn low_res() -> GogglesConfig {
    GogglesConfig::default().with_resolution(16).unwrap()
}

#[test]
fn test_every_part_renders_to_scad() {
    let cfg = low_res();
    let parts = generate_all(&cfg).unwrap();
    assert_eq!(parts.len(), PartKind::all().len());
    for (part, &kind) in parts.iter().zip(PartKind::all()) {
        assert_eq!(part.kind, kind);
        let scad = part.to_scad();
        assert!(scad.starts_with("//"), "{kind}");
        assert_eq!(scad.matches('{').count(), scad.matches('}').count(), "{kind}");
    }
}

#[test]
fn test_shell_scad_carries_swept_polyhedra() {
    let part = generate(PartKind::Shell, &low_res()).unwrap();
    let scad = part.to_scad();
    assert!(scad.contains("mirror([0, 1, 0])"));
    // wall, tooth, handle and the tapered tooth hole
    assert_eq!(scad.matches("polyhedron(").count(), 4);
}

#[test]
fn test_sliced_lens_keeps_the_part_inside_the_difference() {
    let slice = SliceParams {
        z: Some(-1.0),
        ..Default::default()
    };
    let part = generate(PartKind::LensBottom, &low_res()).unwrap();
    let Solid::Difference { children } = slice.apply(part.solid.clone()) else {
        panic!("expected difference");
    };
    assert_eq!(children[0], part.solid);
}
