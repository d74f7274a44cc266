//! goggles CLI - writes the goggles parts as OpenSCAD files
//!
//! Every selected part is generated at the requested resolution, optionally
//! sliced open, and written to `<output-dir>/<part>.scad`. With `--export`,
//! each file is rendered to STL by an external OpenSCAD binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;
use config::GogglesConfig;
use goggles::{generate_parts, Part, PartKind, SliceParams};
use tracing::info;

#[derive(Parser)]
#[command(name = "goggles")]
#[command(about = "Parametric diving goggles generator", long_about = None)]
struct Cli {
    /// Number of stations around the lens ellipse
    #[arg(short, long, default_value_t = config::constants::DEFAULT_RESOLUTION)]
    resolution: usize,

    /// Cut away everything beyond this x
    #[arg(long)]
    slice_x: Option<f64>,
    /// Cut away everything beyond this y
    #[arg(long)]
    slice_y: Option<f64>,
    /// Cut away everything beyond this z
    #[arg(long)]
    slice_z: Option<f64>,
    /// Cut away one side of a vertical plane rotated by this many degrees
    #[arg(long)]
    slice_a: Option<f64>,

    /// Render every written part to STL
    #[arg(short, long)]
    export: bool,

    /// Directory for the generated files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// TOML file overriding the default dimensions
    #[arg(long)]
    config: Option<PathBuf>,

    /// Part to generate (repeatable; default: all)
    #[arg(long = "part")]
    parts: Vec<PartKind>,

    /// OpenSCAD binary used by --export
    #[arg(long, default_value = "openscad")]
    openscad: PathBuf,
}

impl Cli {
    fn slice(&self) -> SliceParams {
        SliceParams {
            x: self.slice_x,
            y: self.slice_y,
            z: self.slice_z,
            angle: self.slice_a,
        }
    }

    fn load_config(&self) -> Result<GogglesConfig> {
        let base = match &self.config {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GogglesConfig::from_toml_str(&source)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GogglesConfig::default(),
        };
        Ok(base.with_resolution(self.resolution)?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let kinds = if cli.parts.is_empty() {
        PartKind::all().to_vec()
    } else {
        cli.parts.clone()
    };

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;

    let slice = cli.slice();
    for part in generate_parts(&config, &kinds)? {
        let part = if part.kind.sliceable() {
            Part {
                solid: slice.apply(part.solid),
                ..part
            }
        } else {
            part
        };
        let scad = write_scad(&cli.output_dir, &part)?;
        if cli.export {
            export_stl(&cli.openscad, &cli.output_dir, config.resolution, &part, &scad)?;
        }
    }

    Ok(())
}

fn write_scad(dir: &Path, part: &Part) -> Result<PathBuf> {
    let path = dir.join(format!("{}.scad", part.kind.file_stem()));
    fs::write(&path, part.to_scad()).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote part");
    Ok(path)
}

fn export_stl(openscad: &Path, dir: &Path, resolution: usize, part: &Part, scad: &Path) -> Result<()> {
    let stl_dir = dir.join(format!("stl-{resolution}"));
    fs::create_dir_all(&stl_dir).with_context(|| format!("creating {}", stl_dir.display()))?;
    let stl = stl_dir.join(format!("{}.stl", part.kind.file_stem()));

    let output = Command::new(openscad)
        .arg("-o")
        .arg(&stl)
        .arg(scad)
        .output()
        .with_context(|| format!("running {}", openscad.display()))?;
    if !output.status.success() {
        anyhow::bail!(
            "{} failed on {} ({}): {}",
            openscad.display(),
            scad.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    info!(path = %stl.display(), "exported stl");
    Ok(())
}
