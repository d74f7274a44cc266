//! # Goggles Parameter Set
//!
//! Named dimensions (millimetres) read by the profile functions and the part
//! builders. A single value is created per invocation and passed by
//! reference; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RESOLUTION, MAX_RESOLUTION, MIN_RESOLUTION};
use crate::error::ConfigError;

/// Every tunable dimension of the goggles.
///
/// Dimensions derived from others (lens height, shell
/// top corner, squashiness offsets) are exposed as methods so they always
/// follow their inputs.
///
/// # Example
///
/// ```rust
/// use config::GogglesConfig;
///
/// let cfg = GogglesConfig::default().with_resolution(80).unwrap();
/// assert_eq!(cfg.resolution, 80);
/// assert_eq!(cfg.ellipse_width, 2.0 * cfg.unit);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GogglesConfig {
    /// Number of stations used to discretize the lens ellipse.
    pub resolution: usize,
    /// Scale-invariant length other dimensions are expressed in.
    pub unit: f64,
    /// Thickness of the outer shell.
    pub shell_thickness: f64,

    /// Half-length of the lens ellipse along the horizontal axis.
    pub ellipse_width: f64,
    /// Half-length of the lens ellipse along the vertical axis.
    pub ellipse_height: f64,

    /// Back clip outer size along x.
    pub back_clip_x: f64,
    /// Back clip outer size along y.
    pub back_clip_y: f64,
    /// Back clip plate thickness.
    pub back_clip_thickness: f64,

    /// Average thickness of the skirt.
    pub skirt_thickness: f64,
    /// Skirt thickness once compressed by the lens.
    pub skirt_squashed_thickness: f64,
    /// Clearance between the skirt ring and the shell.
    pub skirt_ring_padding: f64,

    /// Width of the tooth on the top attachment.
    pub tooth_width: f64,
    /// Angular extent (fraction of a turn) of the top attachment.
    pub top_attachment_width: f64,
    /// Angular extent (fraction of a turn) of the bottom attachment.
    pub bottom_attachment_width: f64,
    /// Strap hole width in the bottom attachment.
    pub shell_bottom_hole_width: f64,
    /// Strap hole height in the bottom attachment.
    pub shell_bottom_hole_height: f64,

    /// Height of the lens above the groove.
    pub lens_top_height: f64,
    /// Depth of the lens groove the clip snaps into.
    pub lens_groove_depth: f64,
    /// Width of the lens bottom ring.
    pub lens_bottom_ring_width: f64,
    /// Width of the lens inner ring.
    pub lens_inner_ring_width: f64,
    /// Height of the lens groove.
    pub lens_groove_height: f64,
    /// Height of the lens bottom ring.
    pub lens_bottom_ring_height: f64,
    /// Edge rounding radius of the lens.
    pub lens_radius: f64,

    /// Printing clearance between mating parts.
    pub tolerance: f64,

    /// Horizontal curvature blend of the shell profile.
    pub xalpha: f64,
    /// Vertical curvature blend of the shell profile.
    pub yalpha: f64,

    /// Maximum shell height (at the nose and temple extremes).
    pub shell_max_height: f64,
    /// Maximum shell width.
    pub shell_max_width: f64,

    /// Mold bounding box size along x.
    pub mold_bb_x: f64,
    /// Mold bounding box size along y.
    pub mold_bb_y: f64,
    /// Mold bounding box size along z.
    pub mold_bb_z: f64,
    /// Mold corner rounding radius.
    pub mold_radius: f64,
}

impl Default for GogglesConfig {
    fn default() -> Self {
        let unit = 8.0;
        let skirt_thickness = 1.0;
        let xalpha = 0.95;
        Self {
            resolution: DEFAULT_RESOLUTION,
            unit,
            shell_thickness: 1.2,
            ellipse_width: unit * 2.0,
            ellipse_height: unit * 1.3,
            back_clip_x: 12.0,
            back_clip_y: 21.0,
            back_clip_thickness: 2.0,
            skirt_thickness,
            skirt_squashed_thickness: skirt_thickness * 0.8,
            skirt_ring_padding: 0.0,
            tooth_width: 2.5 * unit / 4.0,
            top_attachment_width: 0.05,
            bottom_attachment_width: 0.04,
            shell_bottom_hole_width: 8.0,
            shell_bottom_hole_height: 3.0,
            lens_top_height: 0.5,
            lens_groove_depth: 1.0,
            lens_bottom_ring_width: 2.0,
            lens_inner_ring_width: 1.0,
            lens_groove_height: 1.2,
            lens_bottom_ring_height: 0.8,
            lens_radius: 0.2,
            tolerance: 0.1,
            xalpha,
            yalpha: xalpha * 0.03,
            shell_max_height: unit * 3.0,
            shell_max_width: unit * 2.0,
            mold_bb_x: 80.0,
            mold_bb_y: 60.0,
            mold_bb_z: 55.0,
            mold_radius: 3.0,
        }
    }
}

impl GogglesConfig {
    /// Parses a TOML document. Missing keys keep their default value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::GogglesConfig;
    ///
    /// let cfg = GogglesConfig::from_toml_str("resolution = 64\nshell_thickness = 1.5").unwrap();
    /// assert_eq!(cfg.resolution, 64);
    /// assert_eq!(cfg.shell_thickness, 1.5);
    /// assert_eq!(cfg.unit, 8.0);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(source)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Returns a copy using `resolution` stations around the ellipse.
    pub fn with_resolution(&self, resolution: usize) -> Result<Self, ConfigError> {
        let cfg = Self {
            resolution,
            ..self.clone()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(ConfigError::InvalidResolution {
                value: self.resolution,
                min: MIN_RESOLUTION,
                max: MAX_RESOLUTION,
            });
        }
        let positive = [
            ("unit", self.unit),
            ("shell_thickness", self.shell_thickness),
            ("ellipse_width", self.ellipse_width),
            ("ellipse_height", self.ellipse_height),
            ("skirt_thickness", self.skirt_thickness),
            ("skirt_squashed_thickness", self.skirt_squashed_thickness),
            ("shell_max_height", self.shell_max_height),
            ("shell_max_width", self.shell_max_width),
            ("back_clip_thickness", self.back_clip_thickness),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [("xalpha", self.xalpha), ("yalpha", self.yalpha)] {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::InvalidBlend { name, value });
            }
        }
        Ok(())
    }

    /// Corner radius of the back clip.
    pub fn back_clip_radius(&self) -> f64 {
        self.back_clip_thickness / 2.0
    }

    /// How much the skirt is compressed vertically by the lens.
    pub fn lens_vertical_squashiness_offset(&self) -> f64 {
        self.skirt_thickness - self.skirt_squashed_thickness
    }

    /// How much the skirt is compressed horizontally by the lens.
    pub fn lens_horizontal_squashiness_offset(&self) -> f64 {
        self.lens_vertical_squashiness_offset()
    }

    /// Total lens stack height.
    pub fn lens_height(&self) -> f64 {
        self.lens_bottom_ring_height
            + self.lens_groove_height
            + self.lens_top_height
            + self.shell_thickness
            + self.skirt_thickness
            - self.lens_vertical_squashiness_offset()
    }

    /// X of the shell's top inner corner in profile space.
    pub fn shell_top_x(&self) -> f64 {
        self.lens_bottom_ring_width
    }

    /// Y of the shell's top inner corner in profile space.
    pub fn shell_top_y(&self) -> f64 {
        -self.shell_thickness
    }

    /// Narrowest shell cross-section width.
    pub fn shell_min_width(&self) -> f64 {
        2.0 * self.skirt_thickness
    }

    /// Lowest shell cross-section height.
    pub fn shell_min_height(&self) -> f64 {
        5.0 * self.skirt_thickness
    }
}
