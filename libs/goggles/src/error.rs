//! # Shape Errors

use config::ConfigError;
use path2d::PathError;
use sweep_mesh::MeshError;
use thiserror::Error;

/// Errors raised while composing a part.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A profile could not be built.
    #[error("profile: {0}")]
    Path(#[from] PathError),

    /// A sweep could not be meshed.
    #[error("sweep: {0}")]
    Mesh(#[from] MeshError),

    /// The parameter set is out of range.
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    /// The part name is not in the registry.
    #[error("unknown part '{0}'")]
    UnknownPart(String),
}
