//! # Shell
//!
//! The rigid frame around one lens: a wall swept around the lens ellipse,
//! a hooked tooth at the top for the nose bridge, a handle with strap holes
//! at the bottom, and two water drain holes.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use config::constants::DEFAULT_SPLINE_POINTS;
use config::GogglesConfig;
use path2d::{AxisSpec, Path2, PathError};
use sweep_mesh::{extrude, CrossSectionSource, Solid};

use crate::error::ShapeError;
use crate::primitives::rounded_square;
use crate::profile::{
    distance, ellipse_arc, ellipse_outline, ellipse_stations, shell_curve, shell_curve_cut,
    station_alpha, sweep_closed, sweep_open, DEFAULT_THRESHOLD,
};

const TOP_ATTACHMENT_STATIONS: usize = 40;
const BOTTOM_ATTACHMENT_STATIONS: usize = 40;
const BOTTOM_ATTACHMENT_HEIGHT: f64 = 5.0;

/// Overlap of the attachments with the shell wall.
const TOP_ATTACHMENT_OVERLAP: f64 = 0.1;
const BOTTOM_ATTACHMENT_OVERLAP: f64 = 0.4;

/// Smallest tooth or handle width; keeps the end profiles free of
/// zero-length edges.
const MIN_FEATURE_WIDTH: f64 = 0.1;

const HOLE_SEGMENTS: u32 = 30;
const TOP_HOLE_SEGMENTS: usize = 24;

// =============================================================================
// PROFILES
// =============================================================================

/// Cross-section of the shell wall at `alpha`.
///
/// The inner face follows [`shell_curve`] shifted onto the lens seat; the
/// outer face is its offset by the shell thickness. A flat flange under the
/// seat holds the lens ring.
pub fn shell_profile(config: &GogglesConfig, alpha: f64) -> Result<Path2, PathError> {
    let thickness = config.shell_thickness;
    let top_x = config.shell_top_x();

    let mut inner = shell_curve(config, alpha)?;
    inner.translate(top_x, 0.0);
    let mut outer = inner.clone();
    outer.offset(thickness, false)?.reverse();

    let mut path = inner;
    path.append_delta(thickness, 0.0)
        .append_angle(-FRAC_PI_2, thickness / 2.0, None)?
        .splice(&outer)
        .append_absolute(top_x, config.shell_top_y())
        .append_delta(-config.lens_bottom_ring_width, 0.0)
        .append_delta(0.0, thickness)
        .reverse();
    Ok(path)
}

/// Splits the attachment parameter into the shell `alpha` it sits on and
/// the distance from the attachment's middle.
fn attachment_alphas(attachment_alpha: f64, width: f64, center: f64) -> (f64, f64) {
    let offset = attachment_alpha - 0.5;
    let shell_alpha = (center + 2.0 * width * offset).rem_euclid(1.0);
    (shell_alpha, offset.abs() / 0.5)
}

/// Cross-section of the top attachment tooth.
///
/// `attachment_alpha` runs from `0` to `1` across the attachment; the tooth
/// is tallest in the middle and shrinks to a thin rib at both ends.
pub fn top_attachment_profile(
    config: &GogglesConfig,
    attachment_alpha: f64,
) -> Result<Path2, PathError> {
    let (shell_alpha, alpha) =
        attachment_alphas(attachment_alpha, config.top_attachment_width, 0.0);
    let curve = shell_curve_cut(config, shell_alpha)?;
    let (width, height) = (curve.width(), curve.height());
    let thickness = config.shell_thickness;
    let taper = 1.0 - alpha.powi(4);
    let top = (2.0 * config.unit / 3.0 * taper).max(thickness);
    let tooth = (config.tooth_width * taper).max(MIN_FEATURE_WIDTH);
    let eps = TOP_ATTACHMENT_OVERLAP;

    let mut path = Path2::at(config.shell_top_x() + width + thickness - eps, height);
    path.append(AxisSpec::Relative(tooth), AxisSpec::Absolute(-top / 2.0))
        .append(AxisSpec::Unspecified, AxisSpec::Absolute(-top))
        .splinify(4)?
        .append_delta(-tooth, 0.0)
        .append(AxisSpec::Relative(-width / 2.0), AxisSpec::Absolute(-thickness))
        .append_delta(-width / 2.0 - thickness - eps, 0.0)
        .append_delta(0.0, thickness - eps)
        .append_delta(width - eps, 0.0)
        .reverse();
    Ok(path)
}

/// Cross-section of the bottom strap handle.
pub fn bottom_attachment_profile(
    config: &GogglesConfig,
    attachment_alpha: f64,
) -> Result<Path2, PathError> {
    let (shell_alpha, _) =
        attachment_alphas(attachment_alpha, config.bottom_attachment_width, 0.5);
    let curve = shell_curve(config, shell_alpha)?;
    let handle_width = (config.shell_thickness
        * 4.0
        * distance(attachment_alpha, DEFAULT_THRESHOLD).powi(2))
    .max(MIN_FEATURE_WIDTH);

    let level = config.shell_max_height - BOTTOM_ATTACHMENT_HEIGHT;
    let level = if curve.max_y() > level {
        level
    } else {
        curve.max_y() / 2.0
    };
    let pieces = curve.cut(None, Some(level));
    let piece_count = pieces.len();
    let upper = pieces
        .into_iter()
        .nth(1)
        .ok_or_else(|| PathError::too_few("cut", 2, piece_count))?;
    let (dx, dy) = (upper.width(), upper.height());
    let reach = (dx + handle_width) * 3.0 / 4.0;

    let mut back = Path2::origin();
    back.append_delta(-(1.0 - config.xalpha) * reach, -(1.0 - config.yalpha) * dy)
        .append_delta(-config.xalpha * reach, -config.yalpha * dy)
        .splinify(DEFAULT_SPLINE_POINTS)?;

    let start = upper.first();
    let mut path = Path2::at(
        start.x + config.lens_bottom_ring_width + config.shell_thickness
            - BOTTOM_ATTACHMENT_OVERLAP,
        start.y,
    );
    path.append_delta(dx, dy)
        .append_delta(handle_width, 0.0)
        .splice(&back)
        .reverse();
    Ok(path)
}

// =============================================================================
// PART
// =============================================================================

/// Tapered hole through the top tooth.
fn top_hole() -> Result<Solid, ShapeError> {
    let radius = 0.8;
    let sections = vec![
        ellipse_outline(radius, radius, TOP_HOLE_SEGMENTS)?,
        ellipse_outline(radius, 3.0 * radius, TOP_HOLE_SEGMENTS)?,
    ];
    let mesh = extrude(sections).along_z(9.0)?.mesh()?;
    Ok(mesh.to_solid())
}

fn top_attachment(config: &GogglesConfig) -> Result<Solid, ShapeError> {
    let span = config.top_attachment_width * TAU;
    let stations = ellipse_arc(
        config.ellipse_width,
        config.ellipse_height,
        -span,
        span,
        TOP_ATTACHMENT_STATIONS,
    );
    let tooth = sweep_open(
        CrossSectionSource::generator(|i, n| top_attachment_profile(config, i as f64 / (n - 1) as f64)),
        &stations,
    )?;

    let x = config.ellipse_width
        + shell_curve_cut(config, 0.0)?.width()
        + config.shell_top_x()
        + config.shell_thickness
        + config.tooth_width / 2.0
        - 0.2;
    Ok(tooth - top_hole()?.translate([x, 0.0, -5.5]))
}

fn bottom_attachment(config: &GogglesConfig) -> Result<Solid, ShapeError> {
    let span = config.bottom_attachment_width * TAU;
    let stations = ellipse_arc(
        config.ellipse_width,
        config.ellipse_height,
        PI - span,
        PI + span,
        BOTTOM_ATTACHMENT_STATIONS,
    );
    let handle = sweep_open(
        CrossSectionSource::generator(|i, n| {
            bottom_attachment_profile(config, i as f64 / (n - 1) as f64)
        }),
        &stations,
    )?;

    let hole = rounded_square(
        config.shell_bottom_hole_height,
        config.shell_bottom_hole_width,
        20.0,
        config.shell_thickness / 2.0,
        false,
    );
    let curve = shell_curve(config, 0.5)?;
    let x = -config.ellipse_width - curve.width() - config.shell_top_x();
    let vertical = hole.clone().translate([
        x - config.shell_thickness / 2.0,
        0.0,
        config.ellipse_height - 3.0,
    ]);
    let horizontal = hole.rotate([0.0, 90.0, 0.0]).translate([
        x - config.shell_thickness - 10.0,
        0.0,
        curve.height() - BOTTOM_ATTACHMENT_HEIGHT,
    ]);
    Ok(handle - vertical - horizontal)
}

/// Elliptic drain holes on the wide side of the shell.
fn water_holes(config: &GogglesConfig) -> Vec<Solid> {
    [1.0, -1.0]
        .map(|side| {
            Solid::cylinder(100.0, 1.5 * config.unit / 7.0, false)
                .with_segments(HOLE_SEGMENTS)
                .scale([2.0, 1.0, 1.0])
                .translate([
                    -config.ellipse_width - config.shell_max_width / 2.0,
                    side * 1.2 * config.unit,
                    -50.0,
                ])
        })
        .into()
}

/// The complete shell, mirrored across the XZ plane for rendering.
///
/// # Errors
///
/// Fails when a profile or a sweep cannot be built from `config`.
pub fn shell(config: &GogglesConfig) -> Result<Solid, ShapeError> {
    let stations = ellipse_stations(config);
    let wall = sweep_closed(
        CrossSectionSource::generator(|i, n| shell_profile(config, station_alpha(i, n))),
        &stations,
    )?;
    let body = wall + top_attachment(config)? + bottom_attachment(config)?;
    Ok(body
        .difference(water_holes(config))
        .mirror([0.0, 1.0, 0.0]))
}

#[cfg(test)]
mod tests;
