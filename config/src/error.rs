//! # Config Errors

use thiserror::Error;

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A length that must be strictly positive is zero or negative.
    #[error("{name} must be positive: {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// The resolution is outside the accepted range.
    #[error("resolution must be within [{min}, {max}]: {value}")]
    InvalidResolution { value: usize, min: usize, max: usize },

    /// A blend factor is outside its interval.
    #[error("{name} must be within (0, 1]: {value}")]
    InvalidBlend { name: &'static str, value: f64 },

    /// The TOML document could not be parsed.
    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}
