//! # Sweep Mesh
//!
//! Builds closed polyhedral skins by sweeping 2D cross-sections along 3D
//! paths, and describes the solids built from them.
//!
//! ## Architecture
//!
//! ```text
//! path2d (profiles) → ops::extrude (placement + skin) → Mesh → Solid → OpenSCAD text
//! ```
//!
//! ## Pipeline
//!
//! 1. Cross-sections are materialized, one loop per station
//! 2. Each loop is placed in the frame given by the path tangent
//! 3. Adjacent loops are stitched with a fixed diagonal
//! 4. Ends are connected, capped or left open
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DVec2, DVec3};
//! use path2d::Path2;
//! use sweep_mesh::{build_mesh, EndTreatment};
//!
//! let square = Path2::from_points(vec![
//!     DVec2::new(-1.0, -1.0),
//!     DVec2::new(1.0, -1.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(-1.0, 1.0),
//! ])?;
//! let path = [DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0)];
//! let mesh = build_mesh(&[square.clone(), square], &path, EndTreatment::Cap)?;
//! assert_eq!(mesh.vertex_count(), 8);
//! assert!((mesh.volume() - 40.0).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod solid;

pub use error::MeshError;
pub use mesh::{CapReport, EdgeReport, Mesh};
pub use ops::extrude::{
    build_mesh, build_mesh_from_loops, compute_tangents, extrude, place_cross_sections,
    CrossSectionSource, EndTreatment, Extrude, Frame, Shapes,
};
pub use solid::Solid;
