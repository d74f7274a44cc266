//! # Skin Stitching
//!
//! Emits the vertices of every loop in station-major order, connects each
//! pair of adjacent loops with a ring of `2k` triangles, then applies the
//! end treatment.
//!
//! For loop `a` followed by loop `b`, edge `j` yields
//! `(a[j], a[j+1], b[j])` and `(a[j+1], b[j+1], b[j])`, with `j + 1` wrapping
//! to `0`. The same diagonal is used everywhere.

use config::constants::MAX_VERTICES;
use glam::DVec3;
use path2d::Path2;
use tracing::debug;

use super::transform::{compute_tangents, place_cross_sections};
use super::EndTreatment;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Sweeps local cross-sections along `path`.
///
/// # Arguments
///
/// * `cross_sections` - One loop per station, all with the same point count
/// * `path` - Station positions
/// * `ends` - End treatment; `Connect` treats the path as closed
///
/// # Returns
///
/// A mesh with `path.len() * k` vertices in station-major order.
///
/// # Errors
///
/// Mismatched counts, too few stations, or loops under three points.
pub fn build_mesh(
    cross_sections: &[Path2],
    path: &[DVec3],
    ends: EndTreatment,
) -> Result<Mesh, MeshError> {
    if cross_sections.len() != path.len() {
        return Err(MeshError::StationMismatch {
            sections: cross_sections.len(),
            stations: path.len(),
        });
    }
    let sizes: Vec<usize> = cross_sections.iter().map(Path2::len).collect();
    check_layout(&sizes, ends)?;

    let tangents = compute_tangents(path, ends.is_closed_path())?;
    let loops = place_cross_sections(cross_sections, path, &tangents)?;
    build_mesh_from_loops(&loops, ends)
}

/// Stitches loops that are already placed in world space.
pub fn build_mesh_from_loops(loops: &[Vec<DVec3>], ends: EndTreatment) -> Result<Mesh, MeshError> {
    let sizes: Vec<usize> = loops.iter().map(Vec::len).collect();
    let k = check_layout(&sizes, ends)?;
    let m = loops.len();

    let total = m * k;
    if total > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: total,
            max: MAX_VERTICES,
        });
    }

    let rings = if ends.is_closed_path() { m } else { m - 1 };
    let mut mesh = Mesh::with_capacity(total, rings * 2 * k);

    for ring in loops {
        for p in ring {
            mesh.add_vertex(*p);
        }
    }

    let k32 = k as u32;
    for i in 0..rings {
        let a = (i * k) as u32;
        let b = (((i + 1) % m) * k) as u32;
        stitch(&mut mesh, a, b, k32);
    }

    if ends == EndTreatment::Cap {
        mesh.add_cap((0..k32).rev().collect());
        let last = ((m - 1) * k) as u32;
        mesh.add_cap((last..last + k32).collect());
    }

    debug!(
        stations = m,
        loop_len = k,
        triangles = mesh.triangle_count(),
        caps = mesh.caps().len(),
        ?ends,
        "swept mesh"
    );
    Ok(mesh)
}

/// Emits the `2k` triangles joining loop `a` to loop `b`.
fn stitch(mesh: &mut Mesh, a: u32, b: u32, k: u32) {
    for j in 0..k {
        let next = (j + 1) % k;
        mesh.add_triangle(a + j, a + next, b + j);
        mesh.add_triangle(a + next, b + next, b + j);
    }
}

/// Checks station count and loop sizes; returns the common loop size.
pub(super) fn check_layout(sizes: &[usize], ends: EndTreatment) -> Result<usize, MeshError> {
    let required = ends.min_stations();
    if sizes.len() < required {
        return Err(MeshError::TooFewStations {
            required,
            actual: sizes.len(),
        });
    }
    let k = sizes[0];
    if k < 3 {
        return Err(MeshError::TooFewLoopPoints {
            required: 3,
            actual: k,
        });
    }
    if let Some((station, &actual)) = sizes.iter().enumerate().find(|(_, &size)| size != k) {
        return Err(MeshError::LoopSizeMismatch {
            station,
            expected: k,
            actual,
        });
    }
    Ok(k)
}
