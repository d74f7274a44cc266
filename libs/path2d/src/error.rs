//! # Path Errors
//!
//! Precondition violations raised by the path builder.

use thiserror::Error;

/// Errors that can occur while building a path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A path needs at least one point.
    #[error("a path needs at least one point")]
    Empty,

    /// A `relative_to` lookup named a label that was never recorded.
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    /// The operation needs more points than the path holds.
    #[error("{operation} needs at least {required} points, path has {actual}")]
    TooFewPoints {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    /// A direction could not be derived (zero-length segment or reference).
    #[error("degenerate direction in {operation}")]
    DegenerateDirection { operation: &'static str },

    /// A count argument is out of range.
    #[error("{operation}: invalid count {count}")]
    InvalidCount { operation: &'static str, count: usize },

    /// The parallel offset trimmed the whole curve away.
    #[error("offset by {distance} leaves nothing of the path")]
    OffsetCollapsed { distance: f64 },
}

impl PathError {
    /// Creates a too-few-points error.
    pub fn too_few(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::TooFewPoints {
            operation,
            required,
            actual,
        }
    }
}
