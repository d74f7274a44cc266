//! # Linear Extrusion
//!
//! Extrudes cross-sections straight up the Z axis.
//!
//! The bottom loop sits at `z = 0` and the top loop at `z = height`. Local
//! coordinates map to world x/y unchanged; each loop is emitted in reverse
//! so a counter-clockwise profile still yields kernel-oriented faces. A
//! two-profile source gives a tapered prism.

use glam::DVec3;

use super::{EndTreatment, Extrude, Shapes};
use crate::error::MeshError;

impl Extrude<'_> {
    /// Extrudes along `[(0,0,0), (0,0,height)]` with capped ends.
    ///
    /// # Errors
    ///
    /// `height` must be positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use path2d::Path2;
    /// use sweep_mesh::extrude;
    ///
    /// let mut square = Path2::origin();
    /// square.append_delta(2.0, 0.0).append_delta(0.0, 2.0).append_delta(-2.0, 0.0);
    /// let mesh = extrude(square).along_z(3.0)?.mesh()?;
    /// assert!((mesh.volume() - 12.0).abs() < 1e-9);
    /// # Ok::<(), sweep_mesh::MeshError>(())
    /// ```
    pub fn along_z(&self, height: f64) -> Result<Shapes, MeshError> {
        if height <= 0.0 {
            return Err(MeshError::degenerate("along_z height must be positive"));
        }

        let sections = self.source.materialize(2)?;
        let loops = sections
            .iter()
            .zip([0.0, height])
            .map(|(section, z)| {
                section
                    .reversed_points()
                    .into_iter()
                    .map(|p| DVec3::new(p.x, p.y, z))
                    .collect()
            })
            .collect();
        Shapes::new(loops, EndTreatment::Cap)
    }
}
