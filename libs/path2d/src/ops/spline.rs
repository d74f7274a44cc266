//! # B-Spline Smoothing
//!
//! Treats the current points as control points of a clamped uniform
//! B-spline and replaces them with samples of the curve.
//!
//! The knot vector is `degree` zeros, `0..=count - degree`, then `degree`
//! copies of `count - degree`, so the first and last control points are
//! interpolated exactly. Samples are spread evenly in parameter space and
//! evaluated with de Boor's algorithm.

use config::constants::DEFAULT_SPLINE_DEGREE;
use glam::DVec2;

use crate::error::PathError;
use crate::path::Path2;

impl Path2 {
    /// Replaces the points with `n` cubic B-spline samples.
    ///
    /// See [`Path2::splinify_with_degree`].
    pub fn splinify(&mut self, n: usize) -> Result<&mut Self, PathError> {
        self.splinify_with_degree(n, DEFAULT_SPLINE_DEGREE)
    }

    /// Replaces the points with `n` samples of the B-spline of `degree`
    /// whose control points are the current points.
    ///
    /// The degree is clipped to `[1, count - 1]`. Labels are dropped.
    ///
    /// # Errors
    ///
    /// Needs at least two control points and `n >= 2`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::Path2;
    ///
    /// let mut path = Path2::origin();
    /// path.append_delta(1.0, 2.0).append_delta(1.0, -2.0);
    /// path.splinify(20)?;
    /// assert_eq!(path.len(), 20);
    /// assert_eq!(path.first(), DVec2::ZERO);
    /// assert_eq!(path.last(), DVec2::new(2.0, 0.0));
    /// # Ok::<(), path2d::PathError>(())
    /// ```
    pub fn splinify_with_degree(&mut self, n: usize, degree: usize) -> Result<&mut Self, PathError> {
        let count = self.points.len();
        if count < 2 {
            return Err(PathError::too_few("splinify", 2, count));
        }
        if n < 2 {
            return Err(PathError::InvalidCount {
                operation: "splinify",
                count: n,
            });
        }

        let degree = degree.clamp(1, count - 1);
        let knots = clamped_knots(count, degree);
        let u_max = (count - degree) as f64;

        let samples = (0..n)
            .map(|i| {
                let u = u_max * i as f64 / (n - 1) as f64;
                de_boor(&self.points, &knots, degree, u)
            })
            .collect();
        self.replace_points(samples);
        Ok(self)
    }
}

/// Clamped uniform knot vector of length `count + degree + 1`.
fn clamped_knots(count: usize, degree: usize) -> Vec<f64> {
    let last = (count - degree) as f64;
    let mut knots = Vec::with_capacity(count + degree + 1);
    knots.extend(std::iter::repeat(0.0).take(degree));
    knots.extend((0..=count - degree).map(|k| k as f64));
    knots.extend(std::iter::repeat(last).take(degree));
    knots
}

/// Evaluates the spline at `u` with de Boor's algorithm.
fn de_boor(control: &[DVec2], knots: &[f64], degree: usize, u: f64) -> DVec2 {
    let count = control.len();
    // knot span: knots[span] <= u < knots[span + 1], clamped to the last span
    let span = (degree..count)
        .rev()
        .find(|&k| knots[k] <= u)
        .unwrap_or(degree);

    let mut d: Vec<DVec2> = (0..=degree)
        .map(|j| control[j + span - degree])
        .collect();

    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let left = knots[j + span - degree];
            let right = knots[j + 1 + span - r];
            let denominator = right - left;
            let alpha = if denominator.abs() > 0.0 {
                (u - left) / denominator
            } else {
                0.0
            };
            d[j] = d[j - 1] * (1.0 - alpha) + d[j] * alpha;
        }
    }
    d[degree]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_knots_are_clamped() {
        assert_eq!(
            clamped_knots(5, 3),
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0, 2.0]
        );
    }

    #[test]
    fn test_endpoints_interpolated() {
        let mut path = Path2::from_points(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(4.0, 3.0),
            DVec2::new(5.0, 0.0),
            DVec2::new(7.0, 1.0),
        ])
        .unwrap();
        path.splinify(33).unwrap();
        assert_eq!(path.len(), 33);
        assert_relative_eq!(path.first().x, 0.0);
        assert_relative_eq!(path.first().y, 0.0);
        assert_relative_eq!(path.last().x, 7.0, epsilon = 1e-12);
        assert_relative_eq!(path.last().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degree_one_is_the_polyline() {
        let mut path = Path2::from_points(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
        ])
        .unwrap();
        path.splinify_with_degree(5, 1).unwrap();
        let expected = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (2.0, 2.0)];
        for (p, (x, y)) in path.points().iter().zip(expected) {
            assert_relative_eq!(p.x, x, epsilon = 1e-12);
            assert_relative_eq!(p.y, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_curve_stays_in_control_hull() {
        let mut path = Path2::origin();
        path.append_delta(2.0, 4.0).append_delta(2.0, -4.0);
        path.splinify(50).unwrap();
        for p in path.points() {
            assert!(p.y >= -1e-12 && p.y <= 4.0);
            assert!(p.x >= -1e-12 && p.x <= 4.0 + 1e-12);
        }
        // quadratic Bezier apex at half height
        assert_relative_eq!(path.max_y(), 2.0, epsilon = 1e-2);
    }

    #[test]
    fn test_labels_are_dropped() {
        let mut path = Path2::origin();
        path.append_delta(1.0, 1.0).label("a").append_delta(1.0, 0.0);
        path.splinify(10).unwrap();
        assert_eq!(path.label_index("a"), None);
    }

    #[test]
    fn test_single_point_rejected() {
        assert!(Path2::origin().splinify(10).is_err());
    }
}
