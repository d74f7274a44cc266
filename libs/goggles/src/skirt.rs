//! # Skirt
//!
//! The soft part: a liner that wraps over the shell rim and under the lens
//! seat, and the silicon face seal that sits on top of the rim.

use std::f64::consts::TAU;

use config::constants::DEFAULT_SPLINE_POINTS;
use config::GogglesConfig;
use glam::{DVec2, DVec3};
use path2d::{Path2, PathError};
use sweep_mesh::{CrossSectionSource, Solid};

use crate::error::ShapeError;
use crate::profile::{
    distance, ellipse, ellipse_normal, ellipse_stations, fheight, fwidth, shell_curve,
    station_alpha, sweep_closed, DEFAULT_THRESHOLD,
};

/// Extra horizontal slack of the liner's inner face near the rim.
const RETURN_SLACK: f64 = 0.05;

pub const LINER_COLOR: [f64; 4] = [0.5, 0.5, 0.5, 1.0];
pub const SEAL_COLOR: [f64; 4] = [1.0, 1.0, 0.0, 1.0];

/// Cross-section of the liner at `alpha`.
///
/// Runs up the shell's inner face, over the rim, back down inside at one
/// skirt thickness, under the lens seat, and ends in a small bead that
/// locks into the lens groove.
pub fn skirt_profile(config: &GogglesConfig, alpha: f64) -> Result<Path2, PathError> {
    let shell = config.shell_thickness;
    let skirt = config.skirt_thickness;

    let mut path = shell_curve(config, alpha)?;
    path.translate(config.shell_top_x(), 0.0)
        .append_delta(shell, 0.0)
        .append_delta(0.0, skirt)
        .append_delta(-shell - skirt, 0.0);

    let delta = DVec2::new(config.shell_top_x(), skirt) - path.last();
    let mut inside = Path2::origin();
    inside
        .append_delta(
            (1.0 - config.xalpha + RETURN_SLACK) * delta.x,
            (1.0 - config.yalpha) * delta.y,
        )
        .append_absolute(delta.x, delta.y)
        .splinify(DEFAULT_SPLINE_POINTS)?;

    let bead_width = skirt - config.skirt_ring_padding;
    let mut bead = Path2::origin();
    bead.append_delta(bead_width, -skirt / 2.0)
        .append_delta(bead_width / 2.0, skirt / 2.0)
        .append_delta(-bead_width / 2.0, 0.0)
        .splinify(DEFAULT_SPLINE_POINTS)?;

    path.splice(&inside)
        .append_delta(-config.lens_bottom_ring_width, 0.0)
        .append_delta(-skirt, 0.0)
        .append_delta(0.0, -skirt - shell)
        .splice(&bead)
        .append_delta(0.0, shell);
    Ok(path)
}

/// Cross-section of the face seal at `alpha`.
///
/// The lobe leans outward where the shell is tallest.
pub fn seal_profile(config: &GogglesConfig, alpha: f64) -> Result<Path2, PathError> {
    let shell = config.shell_thickness;
    let height = 0.75 * config.unit;
    let thickness = 4.0 * shell;

    let mut path = Path2::origin();
    path.append_delta(-3.0 * shell, 2.0 * shell)
        .append_delta(2.0 * shell, height / 2.0)
        .append_delta(3.0 * shell, height / 2.0)
        .append_delta(-2.0 * shell, 0.0)
        .append_delta(-thickness, -height)
        .rotate(0.5 * distance(alpha, DEFAULT_THRESHOLD).powi(12))
        .append_absolute(-shell - config.skirt_thickness, -config.skirt_thickness)
        .splinify(DEFAULT_SPLINE_POINTS)?;
    Ok(path)
}

/// Path of the seal: the shell rim, raised by one skirt thickness.
pub fn seal_path(config: &GogglesConfig) -> Vec<DVec3> {
    let n = config.resolution;
    let lift = config.skirt_thickness - config.skirt_thickness / 10.0;
    (0..n)
        .map(|i| {
            let alpha = station_alpha(i, n);
            let t = TAU * alpha;
            let (a, b) = (config.ellipse_width, config.ellipse_height);
            let outward = config.shell_top_x() + config.shell_thickness + fwidth(config, alpha);
            ellipse(a, b, t)
                + DVec3::Z * (fheight(config, alpha) + lift)
                + ellipse_normal(a, b, t) * outward
        })
        .collect()
}

/// Liner and seal, mirrored across the XZ plane like the shell.
pub fn skirt(config: &GogglesConfig) -> Result<Solid, ShapeError> {
    let liner = sweep_closed(
        CrossSectionSource::generator(|i, n| skirt_profile(config, station_alpha(i, n))),
        &ellipse_stations(config),
    )?;
    let seal = sweep_closed(
        CrossSectionSource::generator(|i, n| seal_profile(config, station_alpha(i, n))),
        &seal_path(config),
    )?;
    Ok((liner.color(LINER_COLOR) + seal.color(SEAL_COLOR)).mirror([0.0, 1.0, 0.0]))
}
