//! # Axis Specification
//!
//! How one coordinate of an appended point is obtained.

/// Per-axis rule used by [`crate::Path2::append`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisSpec {
    /// Use the value literally.
    Absolute(f64),
    /// Offset the reference coordinate by this delta.
    Relative(f64),
    /// Keep the reference coordinate.
    #[default]
    Unspecified,
}

impl AxisSpec {
    /// Resolves the coordinate against the reference point's coordinate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use path2d::AxisSpec;
    ///
    /// assert_eq!(AxisSpec::Absolute(3.0).resolve(10.0), 3.0);
    /// assert_eq!(AxisSpec::Relative(3.0).resolve(10.0), 13.0);
    /// assert_eq!(AxisSpec::Unspecified.resolve(10.0), 10.0);
    /// ```
    #[inline]
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            AxisSpec::Absolute(value) => value,
            AxisSpec::Relative(delta) => reference + delta,
            AxisSpec::Unspecified => reference,
        }
    }
}
