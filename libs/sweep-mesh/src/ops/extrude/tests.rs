//! # Extrusion Tests
//!
//! Tangents, frames, placement and skin topology.

use super::*;
use approx::assert_relative_eq;
use glam::DVec2;
use std::f64::consts::TAU;

fn square(half: f64) -> Path2 {
    Path2::from_points(vec![
        DVec2::new(-half, -half),
        DVec2::new(half, -half),
        DVec2::new(half, half),
        DVec2::new(-half, half),
    ])
    .unwrap()
}

fn circle(radius: f64, n: usize) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            DVec3::new(radius * t.cos(), radius * t.sin(), 0.0)
        })
        .collect()
}

// =============================================================================
// TANGENT TESTS
// =============================================================================

#[test]
fn test_open_tangents_reflect_ends() {
    let path = [DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 0.0)];
    let tangents = compute_tangents(&path, false).unwrap();
    assert_eq!(tangents[0], DVec3::new(2.0, 0.0, 0.0));
    assert_eq!(tangents[1], DVec3::new(1.0, 1.0, 0.0));
    assert_eq!(tangents[2], DVec3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_closed_tangents_wrap() {
    let path = [DVec3::ZERO, DVec3::X, DVec3::Y];
    let tangents = compute_tangents(&path, true).unwrap();
    assert_eq!(tangents[0], DVec3::X - DVec3::Y);
    assert_eq!(tangents[2], DVec3::ZERO - DVec3::X);
}

#[test]
fn test_tangents_need_enough_stations() {
    assert!(matches!(
        compute_tangents(&[DVec3::ZERO], false),
        Err(MeshError::TooFewStations { required: 2, actual: 1 })
    ));
    assert!(matches!(
        compute_tangents(&[DVec3::ZERO, DVec3::X], true),
        Err(MeshError::TooFewStations { required: 3, .. })
    ));
}

#[test]
fn test_circle_tangent_symmetry() {
    let path = circle(3.0, 24);
    let tangents = compute_tangents(&path, true).unwrap();
    let reference_length = tangents[0].length();
    let reference_angle = tangents[0].angle_between(path[0]);
    for (t, p) in tangents.iter().zip(&path) {
        assert_relative_eq!(t.length(), reference_length, epsilon = 1e-9);
        assert_relative_eq!(t.angle_between(*p), reference_angle, epsilon = 1e-9);
    }
    assert_relative_eq!(reference_angle, std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
}

// =============================================================================
// FRAME TESTS
// =============================================================================

#[test]
fn test_frame_is_right_handed_orthonormal() {
    for t in [
        DVec3::new(1.0, 2.0, 0.5),
        DVec3::new(0.0, -3.0, 0.0),
        DVec3::new(0.2, 0.1, -4.0),
    ] {
        let f = Frame::from_tangent(t).unwrap();
        assert_relative_eq!(f.x_axis.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.y_axis.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.x_axis.dot(f.y_axis), 0.0, epsilon = 1e-12);
        assert_relative_eq!(f.x_axis.cross(f.y_axis).dot(f.z_axis), 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.z_axis.dot(t.normalize()), -1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_frame_horizontal_tangent_keeps_y_up() {
    // travelling +Y: local x points along +X, local y along +Z
    let f = Frame::from_tangent(DVec3::Y).unwrap();
    assert_relative_eq!(f.x_axis.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(f.y_axis.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_frame_vertical_tangent_falls_back_to_y() {
    let f = Frame::from_tangent(DVec3::new(0.0, 0.0, 5.0)).unwrap();
    assert!(f.x_axis.is_finite() && f.y_axis.is_finite());
    assert_relative_eq!(f.x_axis.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(f.y_axis.y, 1.0, epsilon = 1e-12);

    // nearly vertical stays well conditioned
    let g = Frame::from_tangent(DVec3::new(1e-7, 0.0, 1.0)).unwrap();
    assert_relative_eq!(g.x_axis.length(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_zero_tangent_is_degenerate() {
    assert!(matches!(
        Frame::from_tangent(DVec3::ZERO),
        Err(MeshError::DegenerateGeometry { .. })
    ));
}

// =============================================================================
// SWEEP TESTS
// =============================================================================

#[test]
fn test_connect_sweep_is_closed_without_orphans() {
    let path = circle(10.0, 12);
    let sections = vec![square(1.0); 12];
    let mesh = build_mesh(&sections, &path, EndTreatment::Connect).unwrap();

    assert_eq!(mesh.vertex_count(), 12 * 4);
    assert_eq!(mesh.triangle_count(), 12 * 4 * 2);
    assert!(mesh.caps().is_empty());
    assert!(mesh.orphan_vertices().is_empty());
    assert!(mesh.is_closed());
    assert!(mesh.validate().is_ok());
    assert!(mesh.volume() > 0.0);
}

#[test]
fn test_vertices_are_station_major() {
    let path = [DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0), DVec3::new(0.0, 0.0, 4.0)];
    let sections = vec![square(1.0); 3];
    let mesh = build_mesh(&sections, &path, EndTreatment::Cap).unwrap();
    for (i, v) in mesh.vertices().iter().enumerate() {
        assert_relative_eq!(v.z, 2.0 * (i / 4) as f64, epsilon = 1e-12);
    }
}

#[test]
fn test_open_sweep_has_boundary() {
    let path = [DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0)];
    let mesh = build_mesh(&[square(1.0), square(1.0)], &path, EndTreatment::Open).unwrap();
    let report = mesh.edge_report();
    assert_eq!(report.boundary, 8);
    assert_eq!(report.inconsistent, 0);
    assert!(!mesh.is_closed());
}

#[test]
fn test_cap_faces_are_reversed_first_and_forward_last() {
    let path = [DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0)];
    let mesh = build_mesh(&[square(1.0), square(1.0)], &path, EndTreatment::Cap).unwrap();
    assert_eq!(mesh.caps(), &[vec![3, 2, 1, 0], vec![4, 5, 6, 7]]);
    assert_eq!(mesh.triangles()[0], [0, 1, 4]);
    assert_eq!(mesh.triangles()[1], [1, 5, 4]);
    assert_eq!(mesh.triangles()[7], [0, 4, 7]);
}

#[test]
fn test_precondition_violations() {
    let path = [DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0)];
    assert!(matches!(
        build_mesh(&[square(1.0)], &path, EndTreatment::Cap),
        Err(MeshError::StationMismatch { sections: 1, stations: 2 })
    ));

    let mut triangle = Path2::origin();
    triangle.append_delta(1.0, 0.0).append_delta(0.0, 1.0);
    assert!(matches!(
        build_mesh(&[square(1.0), triangle], &path, EndTreatment::Cap),
        Err(MeshError::LoopSizeMismatch { station: 1, expected: 4, actual: 3 })
    ));

    let mut segment = Path2::origin();
    segment.append_delta(1.0, 0.0);
    assert!(matches!(
        build_mesh(&[segment.clone(), segment], &path, EndTreatment::Cap),
        Err(MeshError::TooFewLoopPoints { .. })
    ));

    assert!(matches!(
        build_mesh(&[square(1.0)], &[DVec3::ZERO], EndTreatment::Cap),
        Err(MeshError::TooFewStations { .. })
    ));
}

// =============================================================================
// SOURCE / BUILDER TESTS
// =============================================================================

#[test]
fn test_materialize_variants() {
    let fixed = CrossSectionSource::from(square(1.0));
    assert_eq!(fixed.materialize(3).unwrap().len(), 3);

    let per_station = CrossSectionSource::from(vec![square(1.0), square(2.0)]);
    assert!(matches!(
        per_station.materialize(3),
        Err(MeshError::StationMismatch { sections: 2, stations: 3 })
    ));

    let generated = CrossSectionSource::generator(|i, n| {
        assert_eq!(n, 4);
        Ok(square(1.0 + i as f64))
    });
    let sections = generated.materialize(4).unwrap();
    assert_relative_eq!(sections[3].width(), 8.0);
}

#[test]
fn test_generator_error_propagates() {
    let failing = CrossSectionSource::generator(|_, _| Path2::from_points(Vec::new()));
    assert!(matches!(
        failing.materialize(2),
        Err(MeshError::Path(PathError::Empty))
    ));
}

#[test]
fn test_both_entry_points_agree() {
    let path = circle(6.0, 10);
    let sections = vec![square(0.5); 10];
    let direct = build_mesh(&sections, &path, EndTreatment::Connect).unwrap();
    let shapes = extrude(square(0.5)).along_closed_path(&path).unwrap();
    assert_eq!(shapes.station_count(), 10);
    assert_eq!(shapes.mesh().unwrap(), direct);
}

#[test]
fn test_along_open_path_caps() {
    let path = [DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0), DVec3::new(8.0, 0.0, 0.0)];
    let shapes = extrude(square(1.0)).along_open_path(&path).unwrap();
    assert_eq!(shapes.ends(), EndTreatment::Cap);
    let mesh = shapes.mesh().unwrap();
    assert!(mesh.is_closed());
    assert_relative_eq!(mesh.volume(), 2.0 * 2.0 * 8.0, epsilon = 1e-9);
}

#[test]
fn test_along_z_tapered() {
    let shapes = extrude(vec![square(1.0), square(0.5)]).along_z(3.0).unwrap();
    let mesh = shapes.mesh().unwrap();
    // frustum: h/3 * (A1 + A2 + sqrt(A1 A2))
    assert_relative_eq!(mesh.volume(), 1.0 * (4.0 + 1.0 + 2.0), epsilon = 1e-9);
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::new(-1.0, -1.0, 0.0));
    assert_eq!(max, DVec3::new(1.0, 1.0, 3.0));
}

#[test]
fn test_along_z_rejects_non_positive_height() {
    assert!(extrude(square(1.0)).along_z(0.0).is_err());
}
