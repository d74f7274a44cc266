//! # Debug Slices
//!
//! Cuts parts open to inspect their cross-sections. Each set coordinate
//! removes the half-space beyond it; the angle removes the half-space on
//! the `+y` side of a vertical plane rotated about the z axis.

use sweep_mesh::Solid;

/// Edge length of the half-space cubes; larger than any part.
const CUT_SIZE: f64 = 200.0;

/// Slice planes; unset fields cut nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliceParams {
    /// Removes everything with `x >= x`.
    pub x: Option<f64>,
    /// Removes everything with `y >= y`.
    pub y: Option<f64>,
    /// Removes everything with `z >= z`.
    pub z: Option<f64>,
    /// Rotation of the vertical cut plane about z, in degrees.
    pub angle: Option<f64>,
}

impl SliceParams {
    /// True when no plane is set.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none() && self.angle.is_none()
    }

    /// Union of the half-space cubes to subtract.
    pub fn cut(&self) -> Solid {
        let half = CUT_SIZE / 2.0;
        let cube = || Solid::cube([CUT_SIZE; 3], false);
        let planes = [
            self.x.map(|x| cube().translate([x, -half, -half])),
            self.y.map(|y| cube().translate([-half, y, -half])),
            self.z.map(|z| cube().translate([-half, -half, z])),
            self.angle
                .map(|a| cube().translate([-half, 0.0, -half]).rotate([0.0, 0.0, a])),
        ];
        Solid::union(planes.into_iter().flatten())
    }

    /// `solid` minus the cut, or `solid` unchanged when no plane is set.
    pub fn apply(&self, solid: Solid) -> Solid {
        if self.is_empty() {
            solid
        } else {
            solid - self.cut()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice_is_identity() {
        let params = SliceParams::default();
        assert!(params.is_empty());
        assert!(params.cut().is_empty());
        let cube = Solid::cube([1.0; 3], true);
        assert_eq!(params.apply(cube.clone()), cube);
    }

    #[test]
    fn test_planes_become_half_space_cubes() {
        let params = SliceParams {
            z: Some(4.0),
            angle: Some(30.0),
            ..Default::default()
        };
        let Solid::Union { children } = params.cut() else {
            panic!("expected union");
        };
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], Solid::Translate { offset, .. } if *offset == [-100.0, -100.0, 4.0]));
        assert!(matches!(&children[1], Solid::Rotate { angles, .. } if *angles == [0.0, 0.0, 30.0]));
    }

    #[test]
    fn test_apply_subtracts_cut() {
        let params = SliceParams {
            x: Some(0.0),
            ..Default::default()
        };
        let Solid::Difference { children } = params.apply(Solid::sphere(5.0)) else {
            panic!("expected difference");
        };
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], Solid::Sphere { .. }));
    }
}
