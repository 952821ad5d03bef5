//! Environment-backed quantizer configuration.
//!
//! Settings have defaults. Override with `REFLEX_BQ_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_DIMENSIONS;

/// How [`encode`](crate::BinaryQuantizer::encode) treats vectors whose length differs from
/// the fitted dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Only vectors of exactly `dimensions` components are accepted.
    #[default]
    Strict,
    /// Vectors up to the code's bit capacity are accepted; components past `dimensions`
    /// are ignored. Vectors shorter than `dimensions` are still rejected.
    Capacity,
}

impl LengthPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Capacity => "capacity",
        }
    }
}

impl fmt::Display for LengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "capacity" => Ok(Self::Capacity),
            _ => Err(ConfigError::InvalidLengthPolicy {
                value: s.to_string(),
            }),
        }
    }
}

/// Quantizer configuration loaded from environment variables.
///
/// Use [`QuantizerConfig::from_env`] to read `REFLEX_BQ_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizerConfig {
    /// Initial dimensionality before the first fit. Default: `1536`.
    pub dimensions: usize,

    /// Input length handling on encode. Default: [`LengthPolicy::Strict`].
    pub length_policy: LengthPolicy,
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
            length_policy: LengthPolicy::default(),
        }
    }
}

impl QuantizerConfig {
    const ENV_DIMENSIONS: &'static str = "REFLEX_BQ_DIMENSIONS";
    const ENV_LENGTH_POLICY: &'static str = "REFLEX_BQ_LENGTH_POLICY";

    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            ..Default::default()
        }
    }

    pub fn dimensions(mut self, value: usize) -> Self {
        self.dimensions = value;
        self
    }

    pub fn length_policy(mut self, value: LengthPolicy) -> Self {
        self.length_policy = value;
        self
    }

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let dimensions = Self::parse_dimensions_from_env(defaults.dimensions)?;
        let length_policy = Self::parse_length_policy_from_env(defaults.length_policy)?;

        Ok(Self {
            dimensions,
            length_policy,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::InvalidDimensions {
                value: self.dimensions,
            });
        }
        Ok(())
    }

    fn parse_dimensions_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_DIMENSIONS) {
            Ok(value) => {
                let dimensions: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::DimensionsParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if dimensions == 0 {
                    return Err(ConfigError::InvalidDimensions { value: dimensions });
                }

                Ok(dimensions)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_length_policy_from_env(default: LengthPolicy) -> Result<LengthPolicy, ConfigError> {
        env::var(Self::ENV_LENGTH_POLICY)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or(Ok(default), |v| v.parse())
    }
}
