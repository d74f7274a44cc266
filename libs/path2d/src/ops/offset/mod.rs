//! # Parallel Offset
//!
//! Displaces an open polyline a fixed distance to one side.
//!
//! ## Algorithm Overview
//!
//! 1. Drop repeated points and build an open `cavalier_contours` polyline
//! 2. `parallel_offset` it: positive distances go left of travel, concave
//!    turns are trimmed and convex turns are rounded
//! 3. Snap every input point to its nearest offset vertex (first wins on
//!    ties), so the output keeps exactly one point per input point

#[cfg(test)]
mod tests;

use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec2;

use crate::error::PathError;
use crate::path::Path2;

impl Path2 {
    /// Replaces the path by its parallel curve `distance` to the left or
    /// right of the direction of travel.
    ///
    /// A path whose points all coincide is left unchanged. Labels keep their
    /// indices since the point count is preserved.
    ///
    /// # Errors
    ///
    /// Needs at least two points; fails when the offset trims the whole
    /// curve away.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::Path2;
    ///
    /// let mut path = Path2::origin();
    /// path.append_delta(10.0, 0.0).append_delta(0.0, 10.0);
    /// path.offset(1.0, true)?;
    /// assert!((path.points()[1] - DVec2::new(9.0, 1.0)).length() < 1e-9);
    /// # Ok::<(), path2d::PathError>(())
    /// ```
    pub fn offset(&mut self, distance: f64, left: bool) -> Result<&mut Self, PathError> {
        if self.points.len() < 2 {
            return Err(PathError::too_few("offset", 2, self.points.len()));
        }
        let signed = if left { distance } else { -distance };
        if let Some(points) = offset_points(&self.points, signed)? {
            self.points = points;
        }
        Ok(self)
    }
}

/// Offsets `points` by `signed` (positive is left), one output point per
/// input point.
///
/// Returns `Ok(None)` when every point coincides.
pub fn offset_points(points: &[DVec2], signed: f64) -> Result<Option<Vec<DVec2>>, PathError> {
    let mut pline = Polyline::new();
    let mut previous: Option<DVec2> = None;
    for p in points {
        if previous.is_some_and(|q| q.distance(*p) < VERTEX_MERGE_EPSILON) {
            continue;
        }
        pline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
        previous = Some(*p);
    }
    if pline.vertex_count() < 2 {
        return Ok(None);
    }

    let candidates: Vec<DVec2> = pline
        .parallel_offset(signed)
        .iter()
        .flat_map(|shape| {
            (0..shape.vertex_count())
                .map(|i| shape.at(i))
                .map(|v| DVec2::new(v.x, v.y))
                .collect::<Vec<_>>()
        })
        .collect();
    if candidates.is_empty() {
        return Err(PathError::OffsetCollapsed { distance: signed.abs() });
    }

    Ok(Some(points.iter().map(|p| nearest(&candidates, *p)).collect()))
}

fn nearest(candidates: &[DVec2], point: DVec2) -> DVec2 {
    let mut best = candidates[0];
    let mut best_distance = best.distance_squared(point);
    for c in &candidates[1..] {
        let d = c.distance_squared(point);
        if d < best_distance {
            best = *c;
            best_distance = d;
        }
    }
    best
}
