//! # Tangent Arcs
//!
//! Circular arcs that continue the path in its current direction.

use glam::DVec2;

use crate::error::PathError;
use crate::path::Path2;

impl Path2 {
    /// Appends `n` points on a circular arc of signed angle `alpha` and
    /// radius `radius`, tangent to the path at its last point.
    ///
    /// The tangent is `reference` when given, otherwise the direction of the
    /// last segment. A positive `alpha` turns left (counter-clockwise), a
    /// negative one turns right. Every appended point lies exactly on the
    /// circle; the last one is at angle `alpha` from the starting point.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Signed turn angle in radians
    /// * `radius` - Arc radius
    /// * `n` - Number of points to append (at least 1)
    /// * `reference` - Explicit tangent direction
    ///
    /// # Errors
    ///
    /// Fails when no tangent can be derived: a single-point path without a
    /// `reference`, a zero-length last segment or a zero reference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::Path2;
    ///
    /// let mut path = Path2::origin();
    /// path.extend_arc(std::f64::consts::FRAC_PI_2, 2.0, 10, Some(DVec2::X))?;
    /// assert!((path.last() - DVec2::new(2.0, 2.0)).length() < 1e-12);
    /// # Ok::<(), path2d::PathError>(())
    /// ```
    pub fn extend_arc(
        &mut self,
        alpha: f64,
        radius: f64,
        n: usize,
        reference: Option<DVec2>,
    ) -> Result<&mut Self, PathError> {
        if n == 0 {
            return Err(PathError::InvalidCount {
                operation: "extend_arc",
                count: n,
            });
        }
        let direction = match reference {
            Some(reference) => reference
                .try_normalize()
                .ok_or(PathError::DegenerateDirection {
                    operation: "extend_arc",
                })?,
            None => self.last_direction("extend_arc")?,
        };

        let side = if alpha > 0.0 {
            direction.perp()
        } else {
            -direction.perp()
        };
        let start = self.last();
        let center = start + side * radius;
        let spoke = start - center;

        let step = alpha / n as f64;
        for i in 1..=n {
            let rotation = DVec2::from_angle(step * i as f64);
            self.points.push(center + rotation.rotate(spoke));
        }
        Ok(self)
    }
}
