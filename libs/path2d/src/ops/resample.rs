//! # Arc-Length Resampling

use glam::DVec2;

use crate::error::PathError;
use crate::path::Path2;

impl Path2 {
    /// Replaces the points by `k` points spaced evenly by arc length.
    ///
    /// The step is `total_length / k`, starting at the first point, so the
    /// last sample lies one step before the end point. Labels are dropped.
    ///
    /// # Errors
    ///
    /// Needs at least two points, a non-zero length and `k >= 1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::Path2;
    ///
    /// let mut path = Path2::origin();
    /// path.append_delta(4.0, 0.0);
    /// path.resample(4)?;
    /// assert_eq!(path.points()[3], DVec2::new(3.0, 0.0));
    /// # Ok::<(), path2d::PathError>(())
    /// ```
    pub fn resample(&mut self, k: usize) -> Result<&mut Self, PathError> {
        let count = self.points.len();
        if count < 2 {
            return Err(PathError::too_few("resample", 2, count));
        }
        if k == 0 {
            return Err(PathError::InvalidCount {
                operation: "resample",
                count: k,
            });
        }
        let total: f64 = self.points.windows(2).map(|w| w[0].distance(w[1])).sum();
        if total <= 0.0 {
            return Err(PathError::DegenerateDirection {
                operation: "resample",
            });
        }

        let step = total / k as f64;
        let mut samples: Vec<DVec2> = Vec::with_capacity(k);
        samples.push(self.points[0]);
        // t counts travelled steps
        let mut t = 0.0;
        for w in self.points.windows(2) {
            let (p, q) = (w[0], w[1]);
            let dt = p.distance(q) / step;
            if dt <= 0.0 {
                continue;
            }
            while samples.len() < k && t + dt >= samples.len() as f64 {
                let alpha = (samples.len() as f64 - t) / dt;
                samples.push(p.lerp(q, alpha));
            }
            t += dt;
        }
        self.replace_points(samples);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resample_corner_path() {
        let mut path = Path2::origin();
        path.append_delta(3.0, 0.0).append_delta(0.0, 3.0);
        path.resample(6).unwrap();
        assert_eq!(path.len(), 6);
        let expected = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (3.0, 1.0), (3.0, 2.0)];
        for (p, (x, y)) in path.points().iter().zip(expected) {
            assert_relative_eq!(p.x, x, epsilon = 1e-12);
            assert_relative_eq!(p.y, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_resample_equal_spacing() {
        let mut path = Path2::origin();
        path.append_delta(1.0, 0.0)
            .extend_arc(std::f64::consts::PI, 2.0, 40, None)
            .unwrap();
        path.resample(20).unwrap();
        assert_eq!(path.len(), 20);
    }

    #[test]
    fn test_resample_rejects_degenerate() {
        let mut path = Path2::origin();
        path.append_delta(0.0, 0.0);
        assert!(path.resample(5).is_err());
        assert!(Path2::origin().resample(5).is_err());
    }
}
