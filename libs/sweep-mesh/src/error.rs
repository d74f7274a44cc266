//! # Mesh Errors
//!
//! Error types for sweep and mesh construction.

use path2d::PathError;
use thiserror::Error;

/// Errors that can occur during mesh construction.
///
/// Every variant except [`MeshError::ValidationFailed`] is a caller
/// precondition violation; no partial mesh is ever returned with them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Cross-section count differs from the number of path stations.
    #[error("{sections} cross-sections for {stations} stations")]
    StationMismatch { sections: usize, stations: usize },

    /// A loop's point count differs from the first loop's.
    #[error("loop {station} has {actual} points, expected {expected}")]
    LoopSizeMismatch {
        station: usize,
        expected: usize,
        actual: usize,
    },

    /// Not enough stations for the requested end treatment.
    #[error("sweep needs at least {required} stations, got {actual}")]
    TooFewStations { required: usize, actual: usize },

    /// Loops need at least three points.
    #[error("loops need at least {required} points, got {actual}")]
    TooFewLoopPoints { required: usize, actual: usize },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// A cross-section generator failed
    #[error("cross-section: {0}")]
    Path(#[from] PathError),

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
