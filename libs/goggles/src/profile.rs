//! # Profile Functions
//!
//! Pure functions of `alpha`, the normalized position around the lens
//! ellipse (`0` and `1` both sit on the +x end of the major axis, `0.5` on
//! the -x end). They give the shell's width and height falloff, the shell
//! curve every swept profile starts from, and the ellipse stations the
//! profiles are swept along.
//!
//! Profiles live in the station's local plane: `x` points radially outward
//! from the lens opening and `y` points along +Z.

use std::f64::consts::TAU;

use config::constants::DEFAULT_SPLINE_POINTS;
use config::GogglesConfig;
use glam::{DVec2, DVec3};
use path2d::{Path2, PathError};
use sweep_mesh::{extrude, CrossSectionSource, Solid};

use crate::error::ShapeError;

/// Where [`distance`] peaks when no other threshold is given.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

// =============================================================================
// FALLOFF
// =============================================================================

/// Eased distance of `alpha` to the nearest of `0` and `1`, normalized so
/// that it reaches `1` at `threshold`.
///
/// The linear ramp `d` is reshaped by `1 - (1 - d)^2`.
///
/// # Example
///
/// ```rust
/// use goggles::profile::distance;
///
/// assert_eq!(distance(0.0, 0.5), 0.0);
/// assert_eq!(distance(0.5, 0.5), 1.0);
/// assert_eq!(distance(0.25, 0.5), 0.75);
/// ```
pub fn distance(alpha: f64, threshold: f64) -> f64 {
    let d = if alpha < threshold {
        alpha / threshold
    } else {
        (1.0 - alpha) / (1.0 - threshold)
    };
    1.0 - (1.0 - d).powi(2)
}

/// Horizontal extent of the shell curve at `alpha`.
pub fn fwidth(config: &GogglesConfig, alpha: f64) -> f64 {
    let d = distance(alpha, DEFAULT_THRESHOLD);
    config.shell_thickness.max(config.shell_max_width * d.powi(7))
}

/// Vertical extent of the shell curve at `alpha`.
pub fn fheight(config: &GogglesConfig, alpha: f64) -> f64 {
    let d = distance(alpha, DEFAULT_THRESHOLD);
    config.shell_thickness.max(config.shell_max_height * d.powi(15))
}

/// Height the shell is trimmed to by [`shell_curve_cut`].
pub fn fheight_short(config: &GogglesConfig, alpha: f64) -> f64 {
    let d = distance(alpha, DEFAULT_THRESHOLD);
    config.shell_min_height() + config.shell_max_height * d.powi(25)
}

// =============================================================================
// SHELL CURVE
// =============================================================================

/// Inner surface of the shell, from the lens seat `(0, 0)` to the rim
/// `(fwidth, fheight)`.
///
/// The two control steps are weighted by `xalpha`/`yalpha`: the curve first
/// runs almost flat, then turns up towards the face. It is smoothed into
/// [`DEFAULT_SPLINE_POINTS`] points.
///
/// # Example
///
/// ```rust
/// use config::GogglesConfig;
/// use goggles::profile::{fheight, fwidth, shell_curve};
///
/// let cfg = GogglesConfig::default();
/// let curve = shell_curve(&cfg, 0.5)?;
/// assert_eq!(curve.len(), 20);
/// assert!((curve.last().x - fwidth(&cfg, 0.5)).abs() < 1e-9);
/// assert!((curve.last().y - fheight(&cfg, 0.5)).abs() < 1e-9);
/// # Ok::<(), path2d::PathError>(())
/// ```
pub fn shell_curve(config: &GogglesConfig, alpha: f64) -> Result<Path2, PathError> {
    let width = fwidth(config, alpha);
    let height = fheight(config, alpha);
    let mut path = Path2::origin();
    path.append_delta(width * config.xalpha, height * config.yalpha)
        .append_delta(width * (1.0 - config.xalpha), height * (1.0 - config.yalpha))
        .splinify(DEFAULT_SPLINE_POINTS)?;
    Ok(path)
}

/// [`shell_curve`] trimmed at [`fheight_short`] and resampled back to
/// [`DEFAULT_SPLINE_POINTS`] evenly spaced points.
pub fn shell_curve_cut(config: &GogglesConfig, alpha: f64) -> Result<Path2, PathError> {
    let curve = shell_curve(config, alpha)?;
    let mut lower = curve
        .cut(None, Some(fheight_short(config, alpha)))
        .into_iter()
        .next()
        .unwrap_or(curve);
    lower.resample(DEFAULT_SPLINE_POINTS)?;
    Ok(lower)
}

// =============================================================================
// ELLIPSE
// =============================================================================

/// Point of the ellipse with half-axes `a`, `b` at parameter `t`, in the
/// `z = 0` plane.
pub fn ellipse(a: f64, b: f64, t: f64) -> DVec3 {
    DVec3::new(a * t.cos(), b * t.sin(), 0.0)
}

/// Outward unit normal of the ellipse at parameter `t`.
pub fn ellipse_normal(a: f64, b: f64, t: f64) -> DVec3 {
    DVec3::new(t.cos() / a, t.sin() / b, 0.0).normalize()
}

/// `n` points at `t = 2π(i + 1)/n`: evenly spaced, counter-clockwise,
/// ending on `t = 2π`.
pub fn ellipse_path(a: f64, b: f64, n: usize) -> Vec<DVec3> {
    (0..n)
        .map(|i| ellipse(a, b, TAU * station_alpha(i, n)))
        .collect()
}

/// `n` points from `from` to `to` inclusive.
pub fn ellipse_arc(a: f64, b: f64, from: f64, to: f64, n: usize) -> Vec<DVec3> {
    let step = (to - from) / (n.max(2) - 1) as f64;
    (0..n).map(|i| ellipse(a, b, from + step * i as f64)).collect()
}

/// The closed station path every ring-shaped part is swept along.
pub fn ellipse_stations(config: &GogglesConfig) -> Vec<DVec3> {
    ellipse_path(config.ellipse_width, config.ellipse_height, config.resolution)
}

/// `alpha` of station `i` out of `n` on [`ellipse_path`].
pub fn station_alpha(i: usize, n: usize) -> f64 {
    (i + 1) as f64 / n as f64
}

/// Counter-clockwise ellipse outline with `n` points, starting at `(a, 0)`.
pub fn ellipse_outline(a: f64, b: f64, n: usize) -> Result<Path2, PathError> {
    Path2::from_points(
        (0..n)
            .map(|i| {
                let t = TAU * i as f64 / n as f64;
                DVec2::new(a * t.cos(), b * t.sin())
            })
            .collect(),
    )
}

/// Flat elliptic ring of the lens: the lens ellipse grown by `delta`,
/// extruded `height` along +Z.
pub fn ring(config: &GogglesConfig, height: f64, delta: f64) -> Solid {
    let a = config.ellipse_width + delta;
    let b = config.ellipse_height + delta;
    let n = config.resolution;
    Solid::polygon((0..n).map(|i| {
        let p = ellipse(a, b, TAU * i as f64 / n as f64);
        [p.x, p.y]
    }))
    .linear_extrude(height, false)
}

// =============================================================================
// SWEEPS
// =============================================================================

/// Sweeps `source` around the closed `path` into a polyhedron.
pub fn sweep_closed<'a>(
    source: impl Into<CrossSectionSource<'a>>,
    path: &[DVec3],
) -> Result<Solid, ShapeError> {
    let mesh = extrude(source).along_closed_path(path)?.mesh()?;
    Ok(mesh.to_solid())
}

/// Sweeps `source` along the open `path`, capping both ends.
pub fn sweep_open<'a>(
    source: impl Into<CrossSectionSource<'a>>,
    path: &[DVec3],
) -> Result<Solid, ShapeError> {
    let mesh = extrude(source).along_open_path(path)?.mesh()?;
    // logs the caps the kernel may triangulate badly
    mesh.cap_convexity();
    Ok(mesh.to_solid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_is_symmetric_and_eased() {
        assert_relative_eq!(distance(0.1, 0.5), distance(0.9, 0.5), epsilon = 1e-12);
        // linear 0.2 becomes 1 - 0.8^2
        assert_relative_eq!(distance(0.1, 0.5), 0.36, epsilon = 1e-12);
        assert_relative_eq!(distance(1.0, 0.5), 0.0);
        assert_relative_eq!(distance(0.25, 0.25), 1.0);
    }

    #[test]
    fn test_falloff_bounds() {
        let cfg = GogglesConfig::default();
        assert_relative_eq!(fwidth(&cfg, 0.0), cfg.shell_thickness);
        assert_relative_eq!(fheight(&cfg, 0.0), cfg.shell_thickness);
        assert_relative_eq!(fwidth(&cfg, 0.5), cfg.shell_max_width);
        assert_relative_eq!(fheight(&cfg, 0.5), cfg.shell_max_height);
        assert_relative_eq!(fheight_short(&cfg, 0.0), cfg.shell_min_height());
        for i in 0..=20 {
            let alpha = i as f64 / 20.0;
            assert!(fwidth(&cfg, alpha) >= cfg.shell_thickness);
            assert!(fheight(&cfg, alpha) <= cfg.shell_max_height + 1e-12);
        }
    }

    #[test]
    fn test_shell_curve_cut_keeps_point_count() {
        let cfg = GogglesConfig::default();
        for alpha in [0.0, 0.2, 0.45, 0.5, 0.8] {
            let cut = shell_curve_cut(&cfg, alpha).unwrap();
            assert_eq!(cut.len(), DEFAULT_SPLINE_POINTS);
            assert!(cut.max_y() <= fheight_short(&cfg, alpha).max(fheight(&cfg, alpha)) + 1e-9);
            assert_eq!(cut.first(), DVec2::ZERO);
        }
    }

    #[test]
    fn test_ellipse_path_ends_on_full_turn() {
        let path = ellipse_path(2.0, 1.0, 8);
        assert_eq!(path.len(), 8);
        assert_relative_eq!(path[7].x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(path[7].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(path[1].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(path[1].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ellipse_normal_points_outward() {
        let n = ellipse_normal(4.0, 1.0, 0.3);
        let p = ellipse(4.0, 1.0, 0.3);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        // the normal is orthogonal to the tangent (-a sin t, b cos t)
        let tangent = DVec3::new(-4.0 * 0.3f64.sin(), 0.3f64.cos(), 0.0);
        assert_relative_eq!(n.dot(tangent), 0.0, epsilon = 1e-12);
        assert!(n.dot(p) > 0.0);
    }

    #[test]
    fn test_ellipse_arc_includes_both_ends() {
        let arc = ellipse_arc(1.0, 1.0, -0.5, 0.5, 5);
        assert_eq!(arc.len(), 5);
        assert_relative_eq!(arc[0].y, (-0.5f64).sin(), epsilon = 1e-12);
        assert_relative_eq!(arc[4].y, 0.5f64.sin(), epsilon = 1e-12);
        assert_relative_eq!(arc[2].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_outline_is_counter_clockwise() {
        let outline = ellipse_outline(3.0, 2.0, 64).unwrap();
        assert_eq!(outline.len(), 64);
        let area = outline.signed_area();
        assert!(area > 0.0);
        assert_relative_eq!(area, std::f64::consts::PI * 6.0, max_relative = 0.01);
    }

    #[test]
    fn test_ring_is_an_extruded_polygon() {
        let cfg = GogglesConfig::default();
        match ring(&cfg, 2.0, -1.0) {
            Solid::LinearExtrude { height, child, .. } => {
                assert_eq!(height, 2.0);
                match *child {
                    Solid::Polygon { points } => {
                        assert_eq!(points.len(), cfg.resolution);
                        assert_relative_eq!(points[0][0], cfg.ellipse_width - 1.0);
                    }
                    other => panic!("expected polygon, got {other:?}"),
                }
            }
            other => panic!("expected extrusion, got {other:?}"),
        }
    }
}
