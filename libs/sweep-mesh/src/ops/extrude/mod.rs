//! # Extrusion Operations
//!
//! Sweeps 2D cross-sections along 3D paths:
//! - **transform**: tangents and per-station frames
//! - **sweep**: skin stitching and end treatment
//! - **linear**: straight extrusion along Z
//!
//! ## Entry Points
//!
//! - [`build_mesh`]: local cross-sections plus a path, placed internally
//! - [`build_mesh_from_loops`]: loops already placed in world space
//! - [`extrude`]: builder over a [`CrossSectionSource`] returning [`Shapes`]
//!
//! All of them funnel into the same triangle emission.

mod linear;
mod sweep;
mod transform;

#[cfg(test)]
mod tests;

pub use sweep::{build_mesh, build_mesh_from_loops};
pub use transform::{compute_tangents, place_cross_sections, Frame};

use std::fmt;

use glam::DVec3;
use path2d::{Path2, PathError};

use crate::error::MeshError;
use crate::mesh::Mesh;

// =============================================================================
// END TREATMENT
// =============================================================================

/// What happens at the two ends of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTreatment {
    /// The last loop is stitched back to the first (closed tube).
    Connect,
    /// Both end loops become polygon faces.
    Cap,
    /// Both ends stay open.
    Open,
}

impl EndTreatment {
    /// Whether the sweep path is treated as closed.
    pub fn is_closed_path(self) -> bool {
        matches!(self, EndTreatment::Connect)
    }

    /// Fewest stations a sweep with this treatment accepts.
    pub fn min_stations(self) -> usize {
        match self {
            EndTreatment::Connect => 3,
            EndTreatment::Cap | EndTreatment::Open => 2,
        }
    }
}

// =============================================================================
// CROSS-SECTION SOURCE
// =============================================================================

/// Per-station generator of cross-sections: `(station, station_count)`.
pub type SectionFn<'a> = dyn Fn(usize, usize) -> Result<Path2, PathError> + 'a;

/// Where the cross-section of each station comes from.
pub enum CrossSectionSource<'a> {
    /// The same profile at every station.
    Fixed(Path2),
    /// One profile per station.
    PerStation(Vec<Path2>),
    /// A profile computed from the station index.
    Generator(Box<SectionFn<'a>>),
}

impl<'a> CrossSectionSource<'a> {
    /// Wraps a generator closure.
    pub fn generator(f: impl Fn(usize, usize) -> Result<Path2, PathError> + 'a) -> Self {
        Self::Generator(Box::new(f))
    }

    /// Produces exactly `count` cross-sections.
    ///
    /// # Errors
    ///
    /// `PerStation` with a length other than `count`, or a failing generator.
    pub fn materialize(&self, count: usize) -> Result<Vec<Path2>, MeshError> {
        match self {
            Self::Fixed(path) => Ok(vec![path.clone(); count]),
            Self::PerStation(paths) => {
                if paths.len() != count {
                    return Err(MeshError::StationMismatch {
                        sections: paths.len(),
                        stations: count,
                    });
                }
                Ok(paths.clone())
            }
            Self::Generator(f) => (0..count)
                .map(|i| f(i, count).map_err(MeshError::from))
                .collect(),
        }
    }
}

impl fmt::Debug for CrossSectionSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(path) => f.debug_tuple("Fixed").field(path).finish(),
            Self::PerStation(paths) => f.debug_tuple("PerStation").field(&paths.len()).finish(),
            Self::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

impl From<Path2> for CrossSectionSource<'_> {
    fn from(path: Path2) -> Self {
        Self::Fixed(path)
    }
}

impl From<Vec<Path2>> for CrossSectionSource<'_> {
    fn from(paths: Vec<Path2>) -> Self {
        Self::PerStation(paths)
    }
}

// =============================================================================
// EXTRUDE BUILDER
// =============================================================================

/// Starts an extrusion of `source`.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use path2d::Path2;
/// use sweep_mesh::extrude;
///
/// let mut section = Path2::at(-0.5, -0.5);
/// section.append_delta(1.0, 0.0).append_delta(0.0, 1.0).append_delta(-1.0, 0.0);
///
/// let ring: Vec<DVec3> = (0..16)
///     .map(|i| {
///         let t = std::f64::consts::TAU * i as f64 / 16.0;
///         DVec3::new(5.0 * t.cos(), 5.0 * t.sin(), 0.0)
///     })
///     .collect();
/// let mesh = extrude(section).along_closed_path(&ring)?.mesh()?;
/// assert!(mesh.is_closed());
/// assert_eq!(mesh.vertex_count(), 64);
/// # Ok::<(), sweep_mesh::MeshError>(())
/// ```
pub fn extrude<'a>(source: impl Into<CrossSectionSource<'a>>) -> Extrude<'a> {
    Extrude::new(source)
}

/// Sweep builder over a cross-section source.
#[derive(Debug)]
pub struct Extrude<'a> {
    source: CrossSectionSource<'a>,
}

impl<'a> Extrude<'a> {
    pub fn new(source: impl Into<CrossSectionSource<'a>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Sweeps along a closed path; the ends are connected.
    pub fn along_closed_path(&self, path: &[DVec3]) -> Result<Shapes, MeshError> {
        let tangents = compute_tangents(path, true)?;
        self.along_path(path, &tangents, EndTreatment::Connect)
    }

    /// Sweeps along an open path; the ends are capped.
    pub fn along_open_path(&self, path: &[DVec3]) -> Result<Shapes, MeshError> {
        let tangents = compute_tangents(path, false)?;
        self.along_path(path, &tangents, EndTreatment::Cap)
    }

    /// Sweeps along `path` using explicit per-station tangents.
    pub fn along_path(
        &self,
        path: &[DVec3],
        tangents: &[DVec3],
        ends: EndTreatment,
    ) -> Result<Shapes, MeshError> {
        let sections = self.source.materialize(path.len())?;
        let loops = place_cross_sections(&sections, path, tangents)?;
        Shapes::new(loops, ends)
    }
}

// =============================================================================
// SHAPES
// =============================================================================

/// Loops already placed in world space plus their end treatment.
#[derive(Debug, Clone, PartialEq)]
pub struct Shapes {
    loops: Vec<Vec<DVec3>>,
    ends: EndTreatment,
}

impl Shapes {
    /// Wraps placed loops, checking their layout.
    pub fn new(loops: Vec<Vec<DVec3>>, ends: EndTreatment) -> Result<Self, MeshError> {
        let sizes: Vec<usize> = loops.iter().map(Vec::len).collect();
        sweep::check_layout(&sizes, ends)?;
        Ok(Self { loops, ends })
    }

    pub fn loops(&self) -> &[Vec<DVec3>] {
        &self.loops
    }

    pub fn ends(&self) -> EndTreatment {
        self.ends
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.loops.len()
    }

    /// Stitches the loops into a mesh.
    pub fn mesh(&self) -> Result<Mesh, MeshError> {
        build_mesh_from_loops(&self.loops, self.ends)
    }
}
