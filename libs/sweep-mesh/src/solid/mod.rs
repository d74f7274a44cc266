//! # Solid Description Tree
//!
//! The interface to the boolean modelling kernel: primitives, affine
//! transforms and boolean combinations over swept polyhedra. The tree is
//! rendered to OpenSCAD text by [`Solid::to_scad`] and evaluated by the
//! external kernel.

mod scad;


use std::ops::{Add, Sub};

use config::constants::DEFAULT_SEGMENTS;

// =============================================================================
// SOLID
// =============================================================================

/// A node in the solid description tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Polyhedron from a sweep.
    Polyhedron {
        /// Vertex positions.
        points: Vec<[f64; 3]>,
        /// Face indices, clockwise seen from outside.
        faces: Vec<Vec<u32>>,
    },

    /// Cube primitive.
    Cube {
        /// Size as [x, y, z].
        size: [f64; 3],
        /// Whether centered at origin.
        center: bool,
    },

    /// Sphere primitive.
    Sphere {
        radius: f64,
        /// Number of fragments ($fn).
        segments: u32,
    },

    /// Cylinder or cone along +Z.
    Cylinder {
        height: f64,
        /// Bottom radius.
        r1: f64,
        /// Top radius.
        r2: f64,
        center: bool,
        segments: u32,
    },

    /// 2D polygon, used under [`Solid::LinearExtrude`].
    Polygon {
        points: Vec<[f64; 2]>,
    },

    /// Linear extrusion of a 2D child.
    LinearExtrude {
        height: f64,
        center: bool,
        child: Box<Solid>,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    Translate {
        offset: [f64; 3],
        child: Box<Solid>,
    },

    /// Rotation in degrees about x, then y, then z.
    Rotate {
        angles: [f64; 3],
        child: Box<Solid>,
    },

    /// Mirror across the plane through the origin with this normal.
    Mirror {
        normal: [f64; 3],
        child: Box<Solid>,
    },

    Scale {
        factors: [f64; 3],
        child: Box<Solid>,
    },

    /// Display color; ignored by the geometry.
    Color {
        rgba: [f64; 4],
        child: Box<Solid>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    Union {
        children: Vec<Solid>,
    },

    /// Difference (first child minus rest).
    Difference {
        children: Vec<Solid>,
    },

    Intersection {
        children: Vec<Solid>,
    },

    /// Convex hull of children.
    Hull {
        children: Vec<Solid>,
    },

    /// Empty geometry.
    Empty,
}

impl Solid {
    /// Check if this is an empty node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn cube(size: [f64; 3], center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn sphere(radius: f64) -> Self {
        Self::Sphere {
            radius,
            segments: DEFAULT_SEGMENTS,
        }
    }

    pub fn cylinder(height: f64, radius: f64, center: bool) -> Self {
        Self::cone(height, radius, radius, center)
    }

    pub fn cone(height: f64, r1: f64, r2: f64, center: bool) -> Self {
        Self::Cylinder {
            height,
            r1,
            r2,
            center,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Sets the fragment count of a sphere or cylinder; other nodes are
    /// returned unchanged.
    pub fn with_segments(self, n: u32) -> Self {
        match self {
            Self::Sphere { radius, .. } => Self::Sphere {
                radius,
                segments: n,
            },
            Self::Cylinder {
                height,
                r1,
                r2,
                center,
                ..
            } => Self::Cylinder {
                height,
                r1,
                r2,
                center,
                segments: n,
            },
            other => other,
        }
    }

    pub fn polygon(points: impl IntoIterator<Item = [f64; 2]>) -> Self {
        Self::Polygon {
            points: points.into_iter().collect(),
        }
    }

    // =========================================================================
    // COMBINATORS
    // =========================================================================

    pub fn linear_extrude(self, height: f64, center: bool) -> Self {
        Self::LinearExtrude {
            height,
            center,
            child: Box::new(self),
        }
    }

    pub fn translate(self, offset: [f64; 3]) -> Self {
        Self::Translate {
            offset,
            child: Box::new(self),
        }
    }

    pub fn rotate(self, angles: [f64; 3]) -> Self {
        Self::Rotate {
            angles,
            child: Box::new(self),
        }
    }

    pub fn mirror(self, normal: [f64; 3]) -> Self {
        Self::Mirror {
            normal,
            child: Box::new(self),
        }
    }

    pub fn scale(self, factors: [f64; 3]) -> Self {
        Self::Scale {
            factors,
            child: Box::new(self),
        }
    }

    pub fn color(self, rgba: [f64; 4]) -> Self {
        Self::Color {
            rgba,
            child: Box::new(self),
        }
    }

    /// Union of all `solids`; empty nodes are dropped.
    pub fn union(solids: impl IntoIterator<Item = Solid>) -> Self {
        let children = non_empty(solids);
        if children.is_empty() {
            Self::Empty
        } else {
            Self::Union { children }
        }
    }

    /// `self` minus every solid in `others`.
    pub fn difference(self, others: impl IntoIterator<Item = Solid>) -> Self {
        if self.is_empty() {
            return Self::Empty;
        }
        let mut children = vec![self];
        children.extend(non_empty(others));
        Self::Difference { children }
    }

    pub fn intersection(solids: impl IntoIterator<Item = Solid>) -> Self {
        Self::Intersection {
            children: solids.into_iter().collect(),
        }
    }

    pub fn hull(solids: impl IntoIterator<Item = Solid>) -> Self {
        Self::Hull {
            children: non_empty(solids),
        }
    }

    /// Counts nodes in the tree.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Self::LinearExtrude { child, .. }
            | Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::Mirror { child, .. }
            | Self::Scale { child, .. }
            | Self::Color { child, .. } => child.node_count(),
            Self::Union { children }
            | Self::Difference { children }
            | Self::Intersection { children }
            | Self::Hull { children } => children.iter().map(Solid::node_count).sum(),
            _ => 0,
        }
    }
}

fn non_empty(solids: impl IntoIterator<Item = Solid>) -> Vec<Solid> {
    solids.into_iter().filter(|s| !s.is_empty()).collect()
}

// =============================================================================
// OPERATORS
// =============================================================================

/// `a + b` is the union; nested unions are flattened.
impl Add for Solid {
    type Output = Solid;

    fn add(self, rhs: Solid) -> Solid {
        match self {
            Solid::Union { mut children } => {
                if !rhs.is_empty() {
                    children.push(rhs);
                }
                Solid::Union { children }
            }
            lhs => Solid::union([lhs, rhs]),
        }
    }
}

/// `a - b` is the difference; chained subtractions share one node.
impl Sub for Solid {
    type Output = Solid;

    fn sub(self, rhs: Solid) -> Solid {
        match self {
            Solid::Difference { mut children } => {
                if !rhs.is_empty() {
                    children.push(rhs);
                }
                Solid::Difference { children }
            }
            lhs => lhs.difference([rhs]),
        }
    }
}
