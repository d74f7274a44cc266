//! # Rounded Blocks
//!
//! Convex hulls of cylinders or spheres used for clips, strap holes and the
//! mold box.

use sweep_mesh::Solid;

/// Fragment count of the hulled cylinders and spheres.
const CORNER_SEGMENTS: u32 = 40;

/// Plate of `x` by `y` with rounded vertical edges, from `z = 0` to
/// `z = height`, centered on the z axis.
///
/// With `adjust`, the corner radius is taken out of `x` and `y` so that the
/// outer size is exactly `x` by `y`.
pub fn rounded_square(x: f64, y: f64, height: f64, radius: f64, adjust: bool) -> Solid {
    let (x, y) = if adjust {
        (x - 2.0 * radius, y - 2.0 * radius)
    } else {
        (x, y)
    };
    let corner = Solid::cylinder(height, radius, false).with_segments(CORNER_SEGMENTS);
    Solid::hull(
        [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]
            .map(|(sx, sy)| corner.clone().translate([sx * x / 2.0, sy * y / 2.0, 0.0])),
    )
}

/// Block of `x` by `y` by `height` with every edge rounded, centered on
/// the origin.
///
/// With `adjust`, the radius is taken out of all three sizes.
pub fn rounded_box(x: f64, y: f64, height: f64, radius: f64, adjust: bool) -> Solid {
    let (x, y, height) = if adjust {
        (x - 2.0 * radius, y - 2.0 * radius, height - 2.0 * radius)
    } else {
        (x, y, height)
    };
    let corner = Solid::sphere(radius).with_segments(CORNER_SEGMENTS);
    let mut corners = Vec::with_capacity(8);
    for sz in [1.0, -1.0] {
        for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            corners.push(corner.clone().translate([
                sx * x / 2.0,
                sy * y / 2.0,
                sz * height / 2.0,
            ]));
        }
    }
    Solid::hull(corners)
}
