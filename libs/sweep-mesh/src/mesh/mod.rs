//! # Mesh Data Structure
//!
//! Vertex list plus triangle and polygon faces produced by a sweep.
//!
//! ## Face Convention
//!
//! Faces follow the polyhedron convention of the downstream kernel
//! (OpenSCAD): vertices appear clockwise when the face is viewed from
//! outside the solid. Cap faces are planar loops kept as single polygons;
//! the kernel triangulates them.

mod validity;


pub use validity::{CapReport, EdgeReport};

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

use crate::error::MeshError;
use crate::solid::Solid;

/// A polyhedral mesh: vertices, side triangles and cap polygons.
///
/// Built once by the sweep engine and frozen afterwards; the mutating
/// methods are crate-private.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use path2d::Path2;
/// use sweep_mesh::{extrude, Mesh};
///
/// let mut triangle = Path2::origin();
/// triangle.append_delta(1.0, 0.0).append_delta(-1.0, 1.0);
/// let mesh: Mesh = extrude(triangle).along_z(2.0)?.mesh()?;
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 6);
/// assert_eq!(mesh.caps().len(), 2);
/// # Ok::<(), sweep_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions in emission order
    vertices: Vec<DVec3>,
    /// Side triangles
    triangles: Vec<[u32; 3]>,
    /// End cap polygons
    caps: Vec<Vec<u32>>,
}

impl Mesh {
    /// Creates a mesh with pre-allocated capacity.
    pub(crate) fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            caps: Vec::new(),
        }
    }

    /// Adds a vertex and returns its index.
    pub(crate) fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub(crate) fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a polygonal cap face.
    pub(crate) fn add_cap(&mut self, face: Vec<u32>) {
        self.caps.push(face);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of side triangles (caps excluded).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn caps(&self) -> &[Vec<u32>] {
        &self.caps
    }

    /// Every face as an index list: side triangles first, then caps.
    pub fn faces(&self) -> Vec<Vec<u32>> {
        self.triangles
            .iter()
            .map(|t| t.to_vec())
            .chain(self.caps.iter().cloned())
            .collect()
    }

    /// Every face as triangles; caps are fan-triangulated from their first
    /// vertex, which keeps their orientation.
    pub fn triangulated(&self) -> Vec<[u32; 3]> {
        let mut result = self.triangles.clone();
        for cap in &self.caps {
            for i in 1..cap.len().saturating_sub(1) {
                result.push([cap[0], cap[i], cap[i + 1]]);
            }
        }
        result
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Enclosed volume by the signed-tetrahedron (divergence) formula.
    ///
    /// Positive for a closed mesh in the kernel's face convention. Meaningless
    /// for open meshes.
    pub fn volume(&self) -> f64 {
        let signed: f64 = self
            .triangulated()
            .iter()
            .map(|t| {
                let a = self.vertices[t[0] as usize];
                let b = self.vertices[t[1] as usize];
                let c = self.vertices[t[2] as usize];
                a.dot(b.cross(c))
            })
            .sum();
        -signed / 6.0
    }

    /// Indices of vertices referenced by no face.
    pub fn orphan_vertices(&self) -> Vec<u32> {
        let mut used = vec![false; self.vertices.len()];
        for face in self.triangles.iter().map(|t| t.as_slice()).chain(self.caps.iter().map(Vec::as_slice)) {
            for &i in face {
                if let Some(flag) = used.get_mut(i as usize) {
                    *flag = true;
                }
            }
        }
        used.iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - No triangle repeats a vertex
    /// - No zero-area triangles
    /// - Caps have at least three vertices
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len() as u32;

        for (i, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&v| v >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "triangle {i} indexes past {vertex_count} vertices"
                )));
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!("triangle {i} repeats a vertex")));
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < VERTEX_MERGE_EPSILON {
                return Err(MeshError::validation(format!("triangle {i} has zero area")));
            }
        }

        for (i, cap) in self.caps.iter().enumerate() {
            if cap.len() < 3 {
                return Err(MeshError::validation(format!("cap {i} has fewer than 3 vertices")));
            }
            if cap.iter().any(|&v| v >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "cap {i} indexes past {vertex_count} vertices"
                )));
            }
        }

        Ok(())
    }

    /// Hands the mesh to the solid layer as a polyhedron.
    pub fn to_solid(&self) -> Solid {
        Solid::Polyhedron {
            points: self.vertices.iter().map(|v| v.to_array()).collect(),
            faces: self.faces(),
        }
    }
}
