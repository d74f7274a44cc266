//! # Back Clip
//!
//! Rounded plate with four slots that holds the two ends of the silicon
//! head strap.

use config::GogglesConfig;
use sweep_mesh::Solid;

use crate::primitives::{rounded_box, rounded_square};

/// Height of the slot cutters; anything taller than the plate works.
const SLOT_DEPTH: f64 = 100.0;

/// Y positions of the four strap slots.
pub fn slot_positions(config: &GogglesConfig) -> [f64; 4] {
    let y = config.back_clip_y;
    let t = config.back_clip_thickness;
    [-y / 4.0 - t, -3.0 * t / 2.0, 3.0 * t / 2.0, y / 4.0 + t]
}

/// The back clip, centered on the origin.
pub fn back_clip(config: &GogglesConfig) -> Solid {
    let radius = config.back_clip_radius();
    let plate = rounded_box(
        config.back_clip_x,
        config.back_clip_y,
        config.back_clip_thickness,
        radius,
        true,
    );
    let slot = rounded_square(
        config.back_clip_x - 2.0 * config.back_clip_thickness - radius,
        config.back_clip_thickness,
        SLOT_DEPTH,
        radius,
        true,
    )
    .translate([0.0, 0.0, -SLOT_DEPTH / 2.0]);
    plate.difference(
        slot_positions(config).map(|y| slot.clone().translate([0.0, y, 0.0])),
    )
}
