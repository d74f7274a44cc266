//! # Goggles
//!
//! Parametric diving goggles. Every part is a pure function of a
//! [`GogglesConfig`](config::GogglesConfig) and returns a [`Solid`]
//! description ready for the boolean kernel.
//!
//! ## Architecture
//!
//! ```text
//! profile (falloffs, shell curve, ellipse) ─┐
//!                                           ├→ shell / skirt / lens / clips / mold → parts
//! primitives (rounded blocks) ──────────────┘
//! ```
//!
//! Swept parts build one cross-section per station with a generator closure
//! and hand it to [`sweep_mesh::extrude`]; the rest are primitives combined
//! with `+` and `-`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::GogglesConfig;
//! use goggles::{generate, PartKind};
//!
//! let cfg = GogglesConfig::default().with_resolution(24)?;
//! let part = generate(PartKind::Shell, &cfg)?;
//! std::fs::write("shell.scad", part.to_scad())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clips;
pub mod error;
pub mod lens;
pub mod mold;
pub mod parts;
pub mod primitives;
pub mod profile;
pub mod shell;
pub mod skirt;
pub mod slice;

pub use error::ShapeError;
pub use mold::MoldHalf;
pub use parts::{generate, generate_all, generate_parts, Part, PartKind};
pub use slice::SliceParams;
pub use sweep_mesh::Solid;
