//! # Axis-Aligned Cut
//!
//! Splits a polyline into sub-paths at every crossing of a vertical line
//! `x = x0` and/or a horizontal line `y = y0`.
//!
//! A segment `a -> b` is crossed when the parametric position
//! `t = (x0 - a.x) / (b.x - a.x)` lies in `[0, 1)`: the start vertex counts,
//! the end vertex does not, so a cut through a shared vertex is reported once.
//! This holds whichever way the coordinate runs along the segment.
//! Segments parallel to a cut line are never cut by it. When a segment is
//! crossed by both lines the two cuts are applied in travel order.


use glam::DVec2;

use crate::path::Path2;

impl Path2 {
    /// Splits the path at the given cut lines.
    ///
    /// The first returned path always starts at this path's first point;
    /// with no crossing the result is a single copy of the points.
    /// Labels are not carried over.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use path2d::Path2;
    ///
    /// let mut path = Path2::origin();
    /// path.append_delta(2.0, 0.0);
    /// let parts = path.cut(Some(1.0), None);
    /// assert_eq!(parts.len(), 2);
    /// assert_eq!(parts[0].last(), DVec2::new(1.0, 0.0));
    /// assert_eq!(parts[1].first(), DVec2::new(1.0, 0.0));
    /// ```
    pub fn cut(&self, x: Option<f64>, y: Option<f64>) -> Vec<Path2> {
        let mut output = Vec::new();
        let mut current = Path2::new(self.first());

        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            for crossing in crossings(a, b, x, y) {
                if current.last() != crossing {
                    current.push(crossing);
                }
                output.push(std::mem::replace(&mut current, Path2::new(crossing)));
            }
            current.push(b);
        }
        output.push(current);
        output
    }
}

/// Crossings of segment `a -> b` with the cut lines, in travel order.
fn crossings(a: DVec2, b: DVec2, x: Option<f64>, y: Option<f64>) -> Vec<DVec2> {
    let mut hits: Vec<(f64, DVec2)> = Vec::with_capacity(2);

    if let Some(x0) = x {
        if let Some(t) = parameter(a.x, b.x, x0) {
            hits.push((t, DVec2::new(x0, a.y + (b.y - a.y) * t)));
        }
    }
    if let Some(y0) = y {
        if let Some(t) = parameter(a.y, b.y, y0) {
            hits.push((t, DVec2::new(a.x + (b.x - a.x) * t, y0)));
        }
    }

    hits.sort_by(|l, r| l.0.total_cmp(&r.0));
    hits.into_iter().map(|(_, p)| p).collect()
}

/// Position of `value` along `start -> end`, if within `[0, 1)`.
fn parameter(start: f64, end: f64, value: f64) -> Option<f64> {
    if start == end {
        return None;
    }
    let t = (value - start) / (end - start);
    (0.0..1.0).contains(&t).then_some(t)
}
