//! # Config Crate
//!
//! Centralized configuration for the goggles generator.
//! Tolerances and discretization defaults live in [`constants`]; the named
//! dimensions of the goggles live in [`GogglesConfig`], which is passed by
//! reference into every shape-generation call.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_RESOLUTION};
//! use config::GogglesConfig;
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! let cfg = GogglesConfig::default();
//! assert_eq!(cfg.resolution, DEFAULT_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No globals**: the resolution travels inside `GogglesConfig`
//! - **Derived values are methods**: changing `unit` or a thickness updates
//!   every dependent dimension

pub mod constants;
pub mod error;
pub mod goggles;

pub use error::ConfigError;
pub use goggles::GogglesConfig;
