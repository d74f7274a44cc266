//! # Offset Tests
//!
//! Tests for the trimmed line offset.

use super::*;
use approx::assert_relative_eq;

fn path_of(points: &[(f64, f64)]) -> Path2 {
    Path2::from_points(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()).unwrap()
}

/// Distance from `p` to the polyline through `points`.
fn distance_to(points: &[DVec2], p: DVec2) -> f64 {
    points
        .windows(2)
        .map(|w| {
            let (a, b) = (w[0], w[1]);
            let t = ((p - a).dot(b - a) / (b - a).length_squared()).clamp(0.0, 1.0);
            p.distance(a + (b - a) * t)
        })
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn test_offset_straight_line_left_and_right() {
    let mut left = path_of(&[(0.0, 0.0), (10.0, 0.0)]);
    left.offset(1.0, true).unwrap();
    assert_relative_eq!(left.first().y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(left.last().x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(left.last().y, 1.0, epsilon = 1e-9);

    let mut right = path_of(&[(0.0, 0.0), (10.0, 0.0)]);
    right.offset(1.0, false).unwrap();
    assert_relative_eq!(right.first().x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(right.first().y, -1.0, epsilon = 1e-9);
    assert_relative_eq!(right.last().y, -1.0, epsilon = 1e-9);
}

#[test]
fn test_offset_inner_corner_is_trimmed() {
    let mut path = path_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    path.offset(1.0, true).unwrap();
    let corner = path.points()[1];
    assert_relative_eq!(corner.x, 9.0, epsilon = 1e-9);
    assert_relative_eq!(corner.y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(path.last().x, 9.0, epsilon = 1e-9);
    assert_relative_eq!(path.last().y, 10.0, epsilon = 1e-9);
}

#[test]
fn test_offset_outer_corner_is_rounded() {
    let source = [DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0)];
    let mut path = Path2::from_points(source.to_vec()).unwrap();
    path.offset(1.0, false).unwrap();
    // the corner lands on the round join, one offset away from the vertex
    let corner = path.points()[1];
    assert_relative_eq!(corner.distance(source[1]), 1.0, epsilon = 1e-9);
    assert!(corner.x >= 10.0 - 1e-9 && corner.y <= 1e-9);
}

#[test]
fn test_offset_u_turn_keeps_distance_and_direction() {
    let source = [
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, 1.0),
        DVec2::new(0.0, 1.0),
    ];
    let mut path = Path2::from_points(source.to_vec()).unwrap();
    path.offset(2.0, false).unwrap();
    assert_eq!(path.len(), 4);
    for p in path.points() {
        assert_relative_eq!(distance_to(&source, *p), 2.0, epsilon = 1e-9);
    }
    // outgoing and return legs keep their travel direction
    let points = path.points();
    assert!((points[1] - points[0]).dot(source[1] - source[0]) > 0.0);
    assert!((points[3] - points[2]).dot(source[3] - source[2]) > 0.0);
}

#[test]
fn test_offset_into_narrow_u_turn_collapses() {
    // the inside of the turn is only 1 wide, so an offset of 2 leaves nothing
    let mut path = path_of(&[(0.0, 0.0), (10.0, 0.0), (10.0, 1.0), (0.0, 1.0)]);
    assert!(matches!(
        path.offset(2.0, true),
        Err(PathError::OffsetCollapsed { .. })
    ));
}

#[test]
fn test_offset_inside_wide_u_turn_is_trimmed() {
    let source = [
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, 5.0),
        DVec2::new(0.0, 5.0),
    ];
    let mut path = Path2::from_points(source.to_vec()).unwrap();
    path.offset(1.0, true).unwrap();
    let expected = [(0.0, 1.0), (9.0, 1.0), (9.0, 4.0), (0.0, 4.0)];
    for (p, (x, y)) in path.points().iter().zip(expected) {
        assert_relative_eq!(p.x, x, epsilon = 1e-9);
        assert_relative_eq!(p.y, y, epsilon = 1e-9);
    }
    for p in path.points() {
        assert!(distance_to(&source, *p) > 1.0 - 1e-9);
    }
}

#[test]
fn test_offset_preserves_point_count_and_distance_on_arc() {
    let mut path = Path2::origin();
    path.append_delta(1.0, 0.0)
        .extend_arc(std::f64::consts::PI, 5.0, 30, None)
        .unwrap();
    let count = path.len();
    path.offset(0.5, true).unwrap();
    assert_eq!(path.len(), count);

    // interior arc points move towards the center by the offset
    let center = DVec2::new(1.0, 5.0);
    for p in &path.points()[2..count - 1] {
        let r = (*p - center).length();
        assert!(r < 4.51 && r > 4.49, "radius {r}");
    }
}

#[test]
fn test_offset_skips_repeated_point() {
    let mut path = path_of(&[(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    path.offset(2.0, true).unwrap();
    assert_eq!(path.len(), 4);
    for p in path.points() {
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-9);
        assert!(p.x.is_finite());
    }
}

#[test]
fn test_offset_coincident_points_unchanged() {
    let mut path = path_of(&[(1.0, 1.0), (1.0, 1.0)]);
    path.offset(2.0, true).unwrap();
    assert_eq!(path.points(), &[DVec2::new(1.0, 1.0), DVec2::new(1.0, 1.0)]);
}

#[test]
fn test_offset_reversal_rounds_the_tip() {
    // nearly reversing spike
    let mut path = path_of(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.1)]);
    path.offset(1.0, false).unwrap();
    let tip = path.points()[1];
    assert_relative_eq!(tip.distance(DVec2::new(10.0, 0.0)), 1.0, epsilon = 1e-9);
}

#[test]
fn test_offset_needs_two_points() {
    let mut path = Path2::origin();
    assert!(matches!(
        path.offset(1.0, true),
        Err(PathError::TooFewPoints { .. })
    ));
}
