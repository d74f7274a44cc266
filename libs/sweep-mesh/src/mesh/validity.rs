//! # Mesh Validity
//!
//! Topology and cap-shape diagnostics. Capping a non-convex or non-planar
//! end loop is not repaired; these reports make it observable.

use std::collections::HashMap;

use config::constants::approx_zero;
use glam::{DVec2, DVec3};
use robust::{orient2d, Coord};
use tracing::warn;

use super::Mesh;

/// Edge-adjacency statistics of a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeReport {
    /// Undirected edges.
    pub edges: usize,
    /// Edges used by a single face.
    pub boundary: usize,
    /// Edges used by more than two faces.
    pub non_manifold: usize,
    /// Directed edges used more than once (neighbouring faces wound the same way).
    pub inconsistent: usize,
}

impl EdgeReport {
    /// Every edge is shared by exactly two consistently wound faces.
    pub fn is_closed(&self) -> bool {
        self.edges > 0 && self.boundary == 0 && self.non_manifold == 0 && self.inconsistent == 0
    }
}

/// Shape diagnostics of one cap polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapReport {
    /// Index into [`Mesh::caps`].
    pub cap: usize,
    /// All turns of the projected loop have the same sense.
    pub convex: bool,
    /// Largest distance of a cap vertex from the cap's mean plane.
    pub max_plane_deviation: f64,
}

impl Mesh {
    /// Counts edge usage over all faces.
    pub fn edge_report(&self) -> EdgeReport {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        let faces = self
            .triangles()
            .iter()
            .map(|t| t.as_slice())
            .chain(self.caps().iter().map(Vec::as_slice));
        for face in faces {
            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % face.len()];
                *directed.entry((a, b)).or_default() += 1;
            }
        }

        let mut undirected: HashMap<(u32, u32), usize> = HashMap::new();
        let mut report = EdgeReport::default();
        for (&(a, b), &count) in &directed {
            if count > 1 {
                report.inconsistent += 1;
            }
            *undirected.entry((a.min(b), a.max(b))).or_default() += count;
        }
        report.edges = undirected.len();
        for &count in undirected.values() {
            match count {
                1 => report.boundary += 1,
                2 => {}
                _ => report.non_manifold += 1,
            }
        }
        report
    }

    /// Whether the mesh is a closed, consistently oriented 2-manifold.
    pub fn is_closed(&self) -> bool {
        self.edge_report().is_closed()
    }

    /// Checks every cap for convexity and planarity.
    ///
    /// Logs a warning for each non-convex cap.
    pub fn cap_convexity(&self) -> Vec<CapReport> {
        self.caps()
            .iter()
            .enumerate()
            .map(|(cap, face)| {
                let points: Vec<DVec3> = face.iter().map(|&i| self.vertices()[i as usize]).collect();
                let report = cap_report(cap, &points);
                if !report.convex {
                    warn!(cap, "non-convex cap loop; downstream triangulation may self-intersect");
                }
                report
            })
            .collect()
    }
}

fn cap_report(cap: usize, points: &[DVec3]) -> CapReport {
    let centroid = points.iter().copied().sum::<DVec3>() / points.len().max(1) as f64;

    // Newell normal
    let mut normal = DVec3::ZERO;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        normal += (*p - q).cross(*p + q) * 0.5;
    }
    let Some(normal) = normal.try_normalize() else {
        return CapReport {
            cap,
            convex: false,
            max_plane_deviation: 0.0,
        };
    };

    let max_plane_deviation = points
        .iter()
        .map(|p| (*p - centroid).dot(normal).abs())
        .fold(0.0, f64::max);

    let u = normal.any_orthonormal_vector();
    let v = normal.cross(u);
    let projected: Vec<DVec2> = points
        .iter()
        .map(|p| DVec2::new((*p - centroid).dot(u), (*p - centroid).dot(v)))
        .collect();

    CapReport {
        cap,
        convex: is_convex(&projected),
        max_plane_deviation,
    }
}

/// Whether every consecutive turn of the closed loop has the same sign.
fn is_convex(points: &[DVec2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = orient2d(
            Coord { x: a.x, y: a.y },
            Coord { x: b.x, y: b.y },
            Coord { x: c.x, y: c.y },
        );
        if approx_zero(turn) {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    true
}
