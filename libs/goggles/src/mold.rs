//! # Skirt Mold
//!
//! Two-part casting mold for the silicon skirt. The rounded mold box is
//! split on the `y = 0` plane; each half keeps the skirt cavity. Pins on the
//! front half register into matching holes on the back half.

use config::GogglesConfig;
use sweep_mesh::Solid;

use crate::error::ShapeError;
use crate::primitives::rounded_box;
use crate::skirt::skirt;

pub const PIN_RADIUS: f64 = 2.0;
pub const PIN_LENGTH: f64 = 6.0;

/// Which side of the split plane a mold half lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoldHalf {
    /// `y >= 0`, carries the pins.
    Front,
    /// `y <= 0`, carries the pin holes.
    Back,
}

impl MoldHalf {
    fn sign(self) -> f64 {
        match self {
            Self::Front => 1.0,
            Self::Back => -1.0,
        }
    }
}

/// Height of the mold box center; the box bottom sits one shell plus skirt
/// thickness below the lens seat so the liner bead is enclosed.
pub fn mold_center_z(config: &GogglesConfig) -> f64 {
    config.mold_bb_z / 2.0 - config.shell_thickness - config.skirt_thickness
}

/// Pin centers in the split plane, as `(x, z)`.
pub fn pin_positions(config: &GogglesConfig) -> [(f64, f64); 4] {
    let zc = mold_center_z(config);
    let quarter = config.mold_bb_z / 4.0;
    let corner_x = config.mold_bb_x / 2.0 - 2.0 * config.mold_radius;
    let corner_z = zc + config.mold_bb_z / 2.0 - 2.0 * config.mold_radius - PIN_RADIUS;
    [
        (0.0, zc - quarter),
        (0.0, zc + quarter),
        (-corner_x, corner_z),
        (corner_x, corner_z),
    ]
}

fn pins(config: &GogglesConfig, grow: f64) -> Vec<Solid> {
    let pin = Solid::cylinder(PIN_LENGTH + 2.0 * grow, PIN_RADIUS + grow, true)
        .rotate([90.0, 0.0, 0.0]);
    pin_positions(config)
        .into_iter()
        .map(|(x, z)| pin.clone().translate([x, 0.0, z]))
        .collect()
}

/// One half of the skirt mold.
///
/// # Errors
///
/// Fails when the skirt itself cannot be swept.
pub fn skirt_mold(config: &GogglesConfig, half: MoldHalf) -> Result<Solid, ShapeError> {
    let block = rounded_box(
        config.mold_bb_x,
        config.mold_bb_y,
        config.mold_bb_z,
        config.mold_radius,
        true,
    )
    .translate([0.0, 0.0, mold_center_z(config)]);
    let side = Solid::cube([200.0, 200.0, 200.0], true).translate([0.0, half.sign() * 100.0, 0.0]);
    let cavity = Solid::intersection([block, side]) - skirt(config)?;

    Ok(match half {
        MoldHalf::Front => cavity + Solid::union(pins(config, 0.0)),
        MoldHalf::Back => pins(config, config.tolerance)
            .into_iter()
            .fold(cavity, |mold, hole| mold - hole),
    })
}
