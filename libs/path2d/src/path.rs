//! # Path2
//!
//! The owned point sequence and its label side-table, plus the basic
//! appending, labelling and rigid-transform operations. Curve operations
//! (arcs, offset, spline, resample, cut) live under [`crate::ops`].


use std::collections::HashMap;

use glam::{DVec2, DVec3};

use crate::axis::AxisSpec;
use crate::error::PathError;

// =============================================================================
// PATH
// =============================================================================

/// An ordered 2D polyline built by chained mutation.
///
/// Always holds at least one point. Labels map names to point indices and
/// are used as alternative reference points by the `*_relative_to` methods.
/// `clone()` yields an independent copy; mutating the copy never touches the
/// original's points or labels.
///
/// # Example
///
/// ```rust
/// use path2d::Path2;
///
/// let mut path = Path2::origin();
/// path.append_delta(2.0, 0.0).label("corner").append_delta(0.0, 3.0);
/// assert_eq!(path.width(), 2.0);
/// assert_eq!(path.height(), 3.0);
/// assert_eq!(path.label_index("corner"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path2 {
    pub(crate) points: Vec<DVec2>,
    pub(crate) labels: HashMap<String, usize>,
}

impl Default for Path2 {
    fn default() -> Self {
        Self::origin()
    }
}

impl Path2 {
    /// Creates a path holding a single start point.
    pub fn new(start: DVec2) -> Self {
        Self {
            points: vec![start],
            labels: HashMap::new(),
        }
    }

    /// Creates a path starting at `(0, 0)`.
    pub fn origin() -> Self {
        Self::new(DVec2::ZERO)
    }

    /// Creates a path starting at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(DVec2::new(x, y))
    }

    /// Wraps an existing point list.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for an empty list.
    pub fn from_points(points: Vec<DVec2>) -> Result<Self, PathError> {
        if points.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self {
            points,
            labels: HashMap::new(),
        })
    }

    /// Replaces the points, dropping every label.
    pub(crate) fn replace_points(&mut self, points: Vec<DVec2>) {
        debug_assert!(!points.is_empty());
        self.points = points;
        self.labels.clear();
    }

    // =========================================================================
    // APPENDING
    // =========================================================================

    /// Appends one point relative to the last point.
    ///
    /// Each axis is resolved independently by [`AxisSpec::resolve`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::{AxisSpec, Path2};
    ///
    /// let mut path = Path2::at(1.0, 1.0);
    /// path.append(AxisSpec::Absolute(5.0), AxisSpec::Relative(2.0));
    /// assert_eq!(path.last(), DVec2::new(5.0, 3.0));
    /// ```
    pub fn append(&mut self, x: AxisSpec, y: AxisSpec) -> &mut Self {
        let reference = self.last();
        self.push(DVec2::new(x.resolve(reference.x), y.resolve(reference.y)))
    }

    /// Appends one point relative to the point recorded under `label`.
    ///
    /// Unspecified axes take the labelled point's coordinate.
    pub fn append_relative_to(
        &mut self,
        label: &str,
        x: AxisSpec,
        y: AxisSpec,
    ) -> Result<&mut Self, PathError> {
        let reference = self.reference_point(Some(label))?;
        Ok(self.push(DVec2::new(x.resolve(reference.x), y.resolve(reference.y))))
    }

    /// Appends `last + (dx, dy)`.
    pub fn append_delta(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.append(AxisSpec::Relative(dx), AxisSpec::Relative(dy))
    }

    /// Appends `(x, y)` literally.
    pub fn append_absolute(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(DVec2::new(x, y))
    }

    /// Appends a literal point.
    pub fn push(&mut self, point: DVec2) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Appends every point of `other`, translated so that its first point
    /// lands on this path's last point.
    ///
    /// The shared point therefore appears twice; use [`Path2::splice`] to
    /// join without the repeat. Labels of `other` are not carried over.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::Path2;
    ///
    /// let mut step = Path2::origin();
    /// step.append_delta(1.0, 0.0).append_delta(0.0, 1.0);
    ///
    /// let mut path = Path2::at(10.0, 10.0);
    /// path.extend(&step);
    /// assert_eq!(path.len(), 4);
    /// assert_eq!(path.points()[1], DVec2::new(10.0, 10.0));
    /// assert_eq!(path.last(), DVec2::new(11.0, 11.0));
    /// ```
    pub fn extend(&mut self, other: &Path2) -> &mut Self {
        let shift = self.last() - other.first();
        self.points.extend(other.points.iter().map(|p| *p + shift));
        self
    }

    /// Like [`Path2::extend`], but `other`'s first point is dropped so the
    /// joint is a single point.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::Path2;
    ///
    /// let mut step = Path2::origin();
    /// step.append_delta(1.0, 0.0).append_delta(0.0, 1.0);
    ///
    /// let mut path = Path2::at(10.0, 10.0);
    /// path.splice(&step).splice(&step);
    /// assert_eq!(path.len(), 5);
    /// assert_eq!(path.last(), DVec2::new(12.0, 12.0));
    /// ```
    pub fn splice(&mut self, other: &Path2) -> &mut Self {
        let shift = self.last() - other.first();
        self.points
            .extend(other.points.iter().skip(1).map(|p| *p + shift));
        self
    }

    /// Appends the point obtained by rotating the direction of the last
    /// segment by `alpha`, scaled to length `delta`, and placed after the
    /// reference point (the labelled point, or the last point).
    ///
    /// # Errors
    ///
    /// Needs at least two points and a non-degenerate last segment; fails on
    /// an unknown label.
    pub fn append_angle(
        &mut self,
        alpha: f64,
        delta: f64,
        relative_to: Option<&str>,
    ) -> Result<&mut Self, PathError> {
        let direction = self.last_direction("append_angle")?;
        let reference = self.reference_point(relative_to)?;
        let rotated = DVec2::from_angle(alpha).rotate(direction);
        Ok(self.push(reference + rotated * delta))
    }

    // =========================================================================
    // LABELS
    // =========================================================================

    /// Records the index of the current last point under `name`.
    pub fn label(&mut self, name: impl Into<String>) -> &mut Self {
        let index = self.points.len() - 1;
        self.labels.insert(name.into(), index);
        self
    }

    /// Index recorded under `name`.
    pub fn label_index(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// Point recorded under `name`.
    pub fn labeled_point(&self, name: &str) -> Option<DVec2> {
        self.label_index(name).map(|i| self.points[i])
    }

    fn reference_point(&self, label: Option<&str>) -> Result<DVec2, PathError> {
        match label {
            None => Ok(self.last()),
            Some(name) => self
                .labeled_point(name)
                .ok_or_else(|| PathError::UnknownLabel(name.to_string())),
        }
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Reverses the point order; labels keep pointing at the same points.
    pub fn reverse(&mut self) -> &mut Self {
        let last = self.points.len() - 1;
        self.points.reverse();
        for index in self.labels.values_mut() {
            *index = last - *index;
        }
        self
    }

    /// Translates every point by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        let shift = DVec2::new(dx, dy);
        for p in &mut self.points {
            *p += shift;
        }
        self
    }

    /// Rotates every point about the origin by `alpha` radians
    /// (counter-clockwise).
    pub fn rotate(&mut self, alpha: f64) -> &mut Self {
        let rotation = DVec2::from_angle(alpha);
        for p in &mut self.points {
            *p = rotation.rotate(*p);
        }
        self
    }

    /// Translates the path so that its last point sits at the origin.
    pub fn update_origin(&mut self) -> &mut Self {
        let last = self.last();
        self.translate(-last.x, -last.y)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Unit normal of the last segment, on the left (counter-clockwise) or
    /// right side of the direction of travel.
    pub fn normal(&self, left: bool) -> Result<DVec2, PathError> {
        let direction = self.last_direction("normal")?;
        Ok(if left {
            direction.perp()
        } else {
            -direction.perp()
        })
    }

    /// Unit direction of the last segment.
    pub(crate) fn last_direction(&self, operation: &'static str) -> Result<DVec2, PathError> {
        let n = self.points.len();
        if n < 2 {
            return Err(PathError::too_few(operation, 2, n));
        }
        let direction = self.points[n - 1] - self.points[n - 2];
        direction
            .try_normalize()
            .ok_or(PathError::DegenerateDirection { operation })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a path holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point.
    pub fn first(&self) -> DVec2 {
        self.points[0]
    }

    /// Last point.
    pub fn last(&self) -> DVec2 {
        self.points[self.points.len() - 1]
    }

    /// The points in order.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// The points in reverse order.
    pub fn reversed_points(&self) -> Vec<DVec2> {
        self.points.iter().rev().copied().collect()
    }

    /// The points lifted to `z = 0`.
    pub fn to_points3(&self) -> Vec<DVec3> {
        self.points.iter().map(|p| p.extend(0.0)).collect()
    }

    pub fn min_x(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
    }

    pub fn max_x(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
    }

    pub fn max_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Signed area of the closed polygon through the points (shoelace).
    ///
    /// Positive when the points run counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let twice: f64 = (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum();
        twice / 2.0
    }

    /// Bounding-box extent along x.
    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    /// Bounding-box extent along y.
    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }
}
