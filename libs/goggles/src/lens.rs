//! # Lens Stack
//!
//! The lens is two flat elliptic plates: a bottom plate with a wide ring
//! that sits under the shell flange, and a top plate with a groove the clip
//! snaps into.
//!
//! ```text
//!                A------------------
//!                |      top
//!                B---C  ----
//!                    |  groove
//!  -------  ---- E---D  -----
//!   shell | |  | |
//!  -------  |  | |
//!  ---------   | |      seat
//!  skirt       | |
//!  ------------  |
//!  G-------------F      ------
//!  |               bottom ring
//!  H---------------------------
//! ```
//!
//! `AB` is the top height, `CD` the groove height, `BC` the groove depth,
//! `EF` the shell plus the squashed skirt, `GF` two thirds of the bottom
//! ring width and `GH` the bottom ring height.

use std::f64::consts::FRAC_PI_4;

use config::GogglesConfig;
use path2d::{AxisSpec, Path2, PathError};
use sweep_mesh::Solid;

use crate::error::ShapeError;
use crate::profile::{ellipse_stations, ring, sweep_closed};

/// Overlap between stacked rings so the union has no coplanar faces.
const RING_OVERLAP: f64 = 0.01;

pub const LENS_COLOR: [f64; 4] = [0.5, 0.5, 0.5, 0.7];

/// Default wall thickness of the lens clip.
pub const CLIP_THICKNESS: f64 = 3.0;
/// Default angular opening of the lens clip, in radians.
pub const CLIP_OPENING: f64 = FRAC_PI_4;

fn bottom_ring_width(config: &GogglesConfig) -> f64 {
    config.lens_bottom_ring_width * 2.0 / 3.0
}

fn seat_height(config: &GogglesConfig) -> f64 {
    config.shell_thickness + config.skirt_squashed_thickness
}

/// Top plate, hanging below `z = 0`.
///
/// `delta` grows (or shrinks, when negative) the plate radially, for
/// fitting tests.
pub fn lens_top(config: &GogglesConfig, delta: f64) -> Solid {
    let groove = ring(
        config,
        config.lens_groove_height + 2.0 * RING_OVERLAP,
        -config.lens_groove_depth - config.skirt_thickness + delta,
    );
    let top = ring(config, config.lens_top_height, -config.skirt_thickness + delta)
        .translate([0.0, 0.0, config.lens_groove_height]);
    (groove + top).mirror([0.0, 0.0, 1.0]).color(LENS_COLOR)
}

/// Bottom plate with its wide ring, hanging below `z = 0`.
pub fn lens_bottom(config: &GogglesConfig, delta: f64) -> Solid {
    let bottom = ring(config, config.lens_bottom_ring_height, bottom_ring_width(config));
    let seat = ring(
        config,
        seat_height(config) + RING_OVERLAP,
        -config.skirt_thickness + delta,
    )
    .translate([0.0, 0.0, config.lens_bottom_ring_height - RING_OVERLAP]);
    (bottom + seat).mirror([0.0, 0.0, 1.0]).color(LENS_COLOR)
}

/// Both plates stacked in assembly position.
pub fn lens(config: &GogglesConfig) -> Solid {
    let drop = config.lens_bottom_ring_height + seat_height(config);
    (lens_bottom(config, 0.0) + lens_top(config, 0.0).translate([0.0, 0.0, -drop])).translate([
        0.0,
        0.0,
        config.lens_bottom_ring_height + config.skirt_squashed_thickness,
    ])
}

/// Cross-section of the alignment ring: the stepped outline of the lens
/// stack's outer edge, one millimetre proud.
pub fn lens_alignment_profile(config: &GogglesConfig) -> Result<Path2, PathError> {
    let width = bottom_ring_width(config);
    let mut path = Path2::at(width, 0.0);
    path.label("start")
        .append_delta(0.0, config.lens_bottom_ring_height)
        .append_delta(-width, seat_height(config) + config.lens_groove_height)
        .append_delta(0.0, config.lens_top_height)
        .append_delta(width + 1.0, 0.0)
        .append_relative_to("start", AxisSpec::Relative(1.0), AxisSpec::Relative(0.0))?
        .reverse();
    Ok(path)
}

/// Jig ring that centers the lens plates while they are glued.
pub fn lens_alignment(config: &GogglesConfig) -> Result<Solid, ShapeError> {
    sweep_closed(lens_alignment_profile(config)?, &ellipse_stations(config))
}

/// C-shaped clip that snaps into the lens groove from above the shell.
///
/// `opening` is the angle of the gap left around the +y axis before the
/// clip is mirrored.
pub fn lens_clip(config: &GogglesConfig, height: f64, thickness: f64, opening: f64) -> Solid {
    let band = ring(config, height, thickness);
    let hole = ring(config, height + 2.0, -config.lens_groove_depth).translate([0.0, 0.0, -1.0]);
    let half_space = Solid::cube([200.0, 200.0, 200.0], true).translate([0.0, 100.0, 0.0]);
    let half_angle = opening.to_degrees() / 2.0;
    let gap = half_space.clone().rotate([0.0, 0.0, half_angle])
        - half_space.rotate([0.0, 0.0, -half_angle]);
    (band - hole - gap)
        .mirror([1.0, 0.0, 0.0])
        .translate([0.0, 0.0, -height - config.shell_thickness])
}

/// [`lens_clip`] with the groove height and default thickness and opening.
pub fn default_lens_clip(config: &GogglesConfig) -> Solid {
    lens_clip(config, config.lens_groove_height, CLIP_THICKNESS, CLIP_OPENING)
}
