//! # Path2D
//!
//! A fluent builder for ordered 2D point sequences. Profiles of the swept
//! solids are authored with it: start at a point, append relative or
//! absolute steps, bend with arcs, smooth with splines, offset to get a wall
//! of constant thickness, then hand the points to the sweep engine.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use path2d::{AxisSpec, Path2};
//!
//! let mut profile = Path2::origin();
//! profile
//!     .append_delta(4.0, 0.5)
//!     .label("outer")
//!     .append(AxisSpec::Relative(1.0), AxisSpec::Unspecified)
//!     .extend_arc(-std::f64::consts::FRAC_PI_2, 0.5, 8, None)?;
//! assert_eq!(profile.len(), 11);
//! assert_eq!(profile.labeled_point("outer"), Some(DVec2::new(4.0, 0.5)));
//! # Ok::<(), path2d::PathError>(())
//! ```

pub mod axis;
pub mod error;
pub mod ops;
pub mod path;

pub use axis::AxisSpec;
pub use error::PathError;
pub use path::Path2;

/// A point in a profile's local plane.
pub type Point2 = glam::DVec2;
