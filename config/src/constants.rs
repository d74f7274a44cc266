//! # Configuration Constants
//!
//! Centralized constants for the goggles pipeline. Tolerances,
//! discretization defaults and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default step counts for curve discretization
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance below which a tangent is treated as parallel to the up vector.
///
/// Compared against the length of `normalize(tangent) x up`, i.e. the sine
/// of the angle between them.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Epsilon for vertex comparisons and zero-area detection.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// let a = [0.0_f64, 0.0, 0.0];
/// let b = [0.0_f64, 0.0, 1e-9];
/// let d = ((a[2] - b[2]) as f64).abs();
/// assert!(d < VERTEX_MERGE_EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of stations around the lens ellipse.
///
/// Overridden per invocation from the command line.
pub const DEFAULT_RESOLUTION: usize = 40;

/// Smallest accepted resolution. Below this the ellipse degenerates.
pub const MIN_RESOLUTION: usize = 4;

/// Largest accepted resolution.
pub const MAX_RESOLUTION: usize = 4000;

/// Default number of samples produced by spline smoothing.
pub const DEFAULT_SPLINE_POINTS: usize = 20;

/// Default B-spline degree.
pub const DEFAULT_SPLINE_DEGREE: usize = 3;

/// Default segment count for round primitives (cylinders, spheres).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 40;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
