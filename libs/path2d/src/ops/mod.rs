//! # Curve Operations
//!
//! Operations on [`crate::Path2`] that add or replace many points at once.
//!
//! ## Modules
//!
//! - `arc`: tangent circular arcs
//! - `offset`: parallel curves (trimmed line offset)
//! - `spline`: clamped B-spline resampling
//! - `resample`: equal arc-length resampling
//! - `cut`: splitting at axis-aligned lines

pub mod arc;
pub mod cut;
pub mod offset;
pub mod resample;
pub mod spline;
