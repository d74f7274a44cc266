//! # Path/Tangent Transform
//!
//! Tangents along a station path and the rigid frame that places a local
//! cross-section at each station.
//!
//! ## Conventions
//!
//! - Tangent `i` is `padded[i + 2] - padded[i]` (central difference). Open
//!   paths are padded by reflecting the end segments, closed paths by
//!   wrapping around.
//! - The frame looks down the tangent: `z = -t̂`, `x = normalize(up × z)`,
//!   `y = z × x`. `up` is +Z, or +Y when the tangent is (nearly) parallel
//!   to +Z.
//! - A local point `(px, py)` maps to `p + px·x + py·y`.

use config::constants::PARALLEL_EPSILON;
use glam::{DVec2, DVec3};
use path2d::Path2;

use crate::error::MeshError;

/// Central-difference tangents of a station path.
///
/// Tangents are not normalized.
///
/// # Errors
///
/// An open path needs two stations, a closed path three.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_mesh::compute_tangents;
///
/// let path = [DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)];
/// let tangents = compute_tangents(&path, false)?;
/// assert_eq!(tangents, vec![DVec3::new(2.0, 0.0, 0.0); 3]);
/// # Ok::<(), sweep_mesh::MeshError>(())
/// ```
pub fn compute_tangents(path: &[DVec3], closed: bool) -> Result<Vec<DVec3>, MeshError> {
    let n = path.len();
    let required = if closed { 3 } else { 2 };
    if n < required {
        return Err(MeshError::TooFewStations {
            required,
            actual: n,
        });
    }

    let (before, after) = if closed {
        (path[n - 1], path[0])
    } else {
        (
            path[0] - (path[1] - path[0]),
            path[n - 1] + (path[n - 1] - path[n - 2]),
        )
    };

    let padded: Vec<DVec3> = std::iter::once(before)
        .chain(path.iter().copied())
        .chain(std::iter::once(after))
        .collect();

    Ok(padded.windows(3).map(|w| w[2] - w[0]).collect())
}

// =============================================================================
// FRAME
// =============================================================================

/// Right-handed orthonormal frame placing a cross-section at a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x_axis: DVec3,
    pub y_axis: DVec3,
    pub z_axis: DVec3,
}

impl Frame {
    /// Builds the frame for a (not necessarily unit) tangent.
    ///
    /// # Errors
    ///
    /// A zero tangent has no direction.
    pub fn from_tangent(tangent: DVec3) -> Result<Self, MeshError> {
        let t = tangent
            .try_normalize()
            .ok_or_else(|| MeshError::degenerate("zero-length tangent"))?;

        let up = if t.cross(DVec3::Z).length() < PARALLEL_EPSILON {
            DVec3::Y
        } else {
            DVec3::Z
        };

        let z_axis = -t;
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);
        Ok(Self {
            x_axis,
            y_axis,
            z_axis,
        })
    }

    /// Maps a local cross-section point to world space at `origin`.
    #[inline]
    pub fn place(&self, origin: DVec3, point: DVec2) -> DVec3 {
        origin + self.x_axis * point.x + self.y_axis * point.y
    }
}

/// Places every cross-section at its station.
///
/// # Errors
///
/// Section, station and tangent counts must agree; tangents must be
/// non-zero.
pub fn place_cross_sections(
    cross_sections: &[Path2],
    path: &[DVec3],
    tangents: &[DVec3],
) -> Result<Vec<Vec<DVec3>>, MeshError> {
    if cross_sections.len() != path.len() {
        return Err(MeshError::StationMismatch {
            sections: cross_sections.len(),
            stations: path.len(),
        });
    }
    if tangents.len() != path.len() {
        return Err(MeshError::degenerate(format!(
            "{} tangents for {} stations",
            tangents.len(),
            path.len()
        )));
    }

    cross_sections
        .iter()
        .zip(path)
        .zip(tangents)
        .map(|((section, origin), tangent)| {
            let frame = Frame::from_tangent(*tangent)?;
            Ok(section
                .points()
                .iter()
                .map(|p| frame.place(*origin, *p))
                .collect())
        })
        .collect()
}
