//! # Shell Tests

use super::*;
use sweep_mesh::extrude;

fn config() -> GogglesConfig {
    GogglesConfig::default().with_resolution(24).unwrap()
}

#[test]
fn test_shell_profile_is_a_fixed_size_ccw_loop() {
    let cfg = config();
    for i in 0..cfg.resolution {
        let profile = shell_profile(&cfg, station_alpha(i, cfg.resolution)).unwrap();
        assert_eq!(profile.len(), 44);
        assert!(profile.signed_area() > 0.0, "station {i}");
    }
}

#[test]
fn test_shell_profile_spans_seat_to_rim() {
    let cfg = config();
    let profile = shell_profile(&cfg, 0.5).unwrap();
    // the flange reaches back to the lens axis side of the seat
    assert!(profile.min_x().abs() < 1e-9);
    assert!(profile.min_y() < -cfg.shell_thickness + 1e-9);
    // the rim sits one wall thickness outside the inner curve
    assert!(
        (profile.max_x() - (cfg.shell_top_x() + cfg.shell_max_width + cfg.shell_thickness)).abs()
            < 0.1
    );
    assert!((profile.max_y() - cfg.shell_max_height).abs() < 1e-9);
}

#[test]
fn test_attachment_profiles_keep_their_size() {
    let cfg = config();
    for i in 0..TOP_ATTACHMENT_STATIONS {
        let alpha = i as f64 / (TOP_ATTACHMENT_STATIONS - 1) as f64;
        let top = top_attachment_profile(&cfg, alpha).unwrap();
        assert_eq!(top.len(), 9);
        assert!(top.signed_area() > 0.0);

        let bottom = bottom_attachment_profile(&cfg, alpha).unwrap();
        assert_eq!(bottom.len(), 22);
        assert!(bottom.signed_area() > 0.0);
    }
}

#[test]
fn test_tooth_is_deepest_in_the_middle() {
    let cfg = config();
    let middle = top_attachment_profile(&cfg, 0.5).unwrap();
    let edge = top_attachment_profile(&cfg, 0.0).unwrap();
    assert!((middle.min_y() + 2.0 * cfg.unit / 3.0).abs() < 1e-9);
    assert!((edge.min_y() + cfg.shell_thickness).abs() < 1e-9);
}

#[test]
fn test_wall_sweep_is_closed_with_positive_volume() {
    let cfg = config();
    let stations = ellipse_stations(&cfg);
    let mesh = extrude(CrossSectionSource::generator(|i, n| {
        shell_profile(&cfg, station_alpha(i, n))
    }))
    .along_closed_path(&stations)
    .unwrap()
    .mesh()
    .unwrap();

    assert_eq!(mesh.vertex_count(), 24 * 44);
    assert!(mesh.is_closed());
    assert!(mesh.orphan_vertices().is_empty());
    assert!(mesh.volume() > 0.0);
}

#[test]
fn test_shell_is_mirrored_union() {
    let cfg = config();
    match shell(&cfg).unwrap() {
        Solid::Mirror { normal, child } => {
            assert_eq!(normal, [0.0, 1.0, 0.0]);
            match *child {
                // body minus two water holes
                Solid::Difference { children } => assert_eq!(children.len(), 3),
                other => panic!("expected difference, got {other:?}"),
            }
        }
        other => panic!("expected mirror, got {other:?}"),
    }
}
