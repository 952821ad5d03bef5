//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Dimension string could not be parsed as a number.
    #[error("failed to parse dimensions '{value}': {source}")]
    DimensionsParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Dimension count must be positive.
    #[error("invalid dimensions '{value}': must be greater than zero")]
    InvalidDimensions { value: usize },

    /// Length policy name was not recognised.
    #[error("invalid length policy '{value}': expected 'strict' or 'capacity'")]
    InvalidLengthPolicy { value: String },
}
