//! # Part Registry
//!
//! Every printable or preview part, its output file stem, and the
//! generation entry points. Parts are pure functions of the configuration,
//! so independent parts are built in parallel with rayon and collected in
//! registry order.

use std::fmt;
use std::str::FromStr;

use config::GogglesConfig;
use rayon::prelude::*;
use sweep_mesh::Solid;
use tracing::info;

use crate::clips::back_clip;
use crate::error::ShapeError;
use crate::lens::{default_lens_clip, lens, lens_alignment, lens_bottom, lens_top};
use crate::mold::{skirt_mold, MoldHalf};
use crate::shell::shell;
use crate::skirt::skirt;

/// A named output of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Preview of skirt, lens, lens clip and shell together.
    Assembly,
    Shell,
    Skirt,
    Lens,
    LensTop,
    LensBottom,
    LensAlignment,
    LensClip,
    BackClip,
    SkirtMoldFront,
    SkirtMoldBack,
}

impl PartKind {
    /// All parts, in output order.
    pub fn all() -> &'static [PartKind] {
        &[
            Self::Assembly,
            Self::Shell,
            Self::Skirt,
            Self::Lens,
            Self::LensTop,
            Self::LensBottom,
            Self::LensAlignment,
            Self::LensClip,
            Self::BackClip,
            Self::SkirtMoldFront,
            Self::SkirtMoldBack,
        ]
    }

    /// File name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Assembly => "goggles",
            Self::Shell => "shell",
            Self::Skirt => "skirt",
            Self::Lens => "lens",
            Self::LensTop => "lens-top",
            Self::LensBottom => "lens-bot",
            Self::LensAlignment => "lens-alignment",
            Self::LensClip => "lens-clip",
            Self::BackClip => "back-clip",
            Self::SkirtMoldFront => "skirt-mold-front",
            Self::SkirtMoldBack => "skirt-mold-back",
        }
    }

    /// Whether debug slices apply; the back clip is flat and never sliced.
    pub fn sliceable(self) -> bool {
        !matches!(self, Self::BackClip)
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for PartKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.file_stem() == s)
            .ok_or_else(|| ShapeError::UnknownPart(s.to_string()))
    }
}

/// A generated part.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub kind: PartKind,
    pub solid: Solid,
}

impl Part {
    /// OpenSCAD description of the part.
    pub fn to_scad(&self) -> String {
        self.solid.to_scad()
    }
}

/// Builds one part.
///
/// # Errors
///
/// Propagates profile and sweep failures of the part.
pub fn generate(kind: PartKind, config: &GogglesConfig) -> Result<Part, ShapeError> {
    let solid = match kind {
        PartKind::Assembly => {
            skirt(config)? + lens(config) + default_lens_clip(config) + shell(config)?
        }
        PartKind::Shell => shell(config)?,
        PartKind::Skirt => skirt(config)?,
        PartKind::Lens => lens(config),
        PartKind::LensTop => lens_top(config, 0.0),
        PartKind::LensBottom => lens_bottom(config, 0.0),
        PartKind::LensAlignment => lens_alignment(config)?,
        PartKind::LensClip => default_lens_clip(config),
        PartKind::BackClip => back_clip(config),
        PartKind::SkirtMoldFront => skirt_mold(config, MoldHalf::Front)?,
        PartKind::SkirtMoldBack => skirt_mold(config, MoldHalf::Back)?,
    };
    info!(
        part = kind.file_stem(),
        nodes = solid.node_count(),
        resolution = config.resolution,
        "generated part"
    );
    Ok(Part { kind, solid })
}

/// Builds `kinds` in parallel, keeping their order.
///
/// # Errors
///
/// Returns the first failure in `kinds` order.
pub fn generate_parts(config: &GogglesConfig, kinds: &[PartKind]) -> Result<Vec<Part>, ShapeError> {
    kinds
        .par_iter()
        .map(|&kind| generate(kind, config))
        .collect()
}

/// Builds every registered part.
pub fn generate_all(config: &GogglesConfig) -> Result<Vec<Part>, ShapeError> {
    generate_parts(config, PartKind::all())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stems_round_trip_through_from_str() {
        for &kind in PartKind::all() {
            assert_eq!(kind.file_stem().parse::<PartKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.file_stem());
        }
    }

    #[test]
    fn test_unknown_part_is_rejected() {
        match "visor".parse::<PartKind>() {
            Err(ShapeError::UnknownPart(name)) => assert_eq!(name, "visor"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_only_back_clip_skips_slicing() {
        let unsliced: Vec<_> = PartKind::all().iter().filter(|k| !k.sliceable()).collect();
        assert_eq!(unsliced, [&PartKind::BackClip]);
    }

    #[test]
    fn test_generate_parts_keeps_order() {
        let cfg = GogglesConfig::default().with_resolution(8).unwrap();
        let kinds = [PartKind::BackClip, PartKind::LensTop, PartKind::LensClip];
        let parts = generate_parts(&cfg, &kinds).unwrap();
        let got: Vec<_> = parts.iter().map(|p| p.kind).collect();
        assert_eq!(got, kinds);
    }

    #[test]
    fn test_assembly_is_union_of_four_parts() {
        let cfg = GogglesConfig::default().with_resolution(12).unwrap();
        let part = generate(PartKind::Assembly, &cfg).unwrap();
        let Solid::Union { children } = part.solid else {
            panic!("expected union");
        };
        assert_eq!(children.len(), 4);
    }
}
