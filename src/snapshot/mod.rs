//! Serializable fitted state.
//!
//! The minimal state that reproduces a quantizer is `(dimensions, means)`. Codes are meaningless
//! without the exact means that produced them, so anything persisting codes should store the
//! [`fingerprint`](QuantizerState::fingerprint) alongside them and compare it on load.
//!
//! This module only converts to and from bytes; reading and writing files is up to the caller.

pub mod error;


pub use error::{SnapshotError, SnapshotResult};

use rkyv::rancor::Error as RkyvError;
use rkyv::util::AlignedVec;
use tracing::warn;

use crate::config::LengthPolicy;
use crate::hashing::fingerprint_state;
use crate::quantizer::BinaryQuantizer;

/// Fitted quantizer state.
///
/// Stored as `rkyv` bytes or JSON.
///
/// # Example
/// ```rust
/// use reflex_bq::{BinaryQuantizer, QuantizerState};
///
/// let mut bq = BinaryQuantizer::new(2);
/// bq.fit(&[vec![1.0, 3.0]]).unwrap();
///
/// let state = QuantizerState::from_quantizer(&bq);
/// assert_eq!(state.dimensions, 2);
/// assert_eq!(state.means, vec![1.0, 3.0]);
/// ```
#[derive(
    rkyv::Archive,
    rkyv::Serialize,
    rkyv::Deserialize,
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Clone,
    PartialEq,
)]
pub struct QuantizerState {
    /// Number of vector components the quantizer was fitted for.
    pub dimensions: u64,
    /// Per-dimension thresholds, one per dimension.
    pub means: Vec<f32>,
}

impl QuantizerState {
    pub fn from_quantizer(quantizer: &BinaryQuantizer) -> Self {
        Self {
            dimensions: quantizer.dimensions() as u64,
            means: quantizer.means().to_vec(),
        }
    }

    /// Checks that `means` has exactly `dimensions` entries, all finite.
    ///
    /// JSON has no encoding for NaN or infinity, so non-finite means are rejected for both
    /// formats to keep them interchangeable.
    pub fn validate(&self) -> SnapshotResult<()> {
        if self.means.len() as u64 != self.dimensions {
            return Err(SnapshotError::MeansLengthMismatch {
                dimensions: self.dimensions,
                means: self.means.len(),
            });
        }
        if let Some((index, &value)) = self
            .means
            .iter()
            .enumerate()
            .find(|(_, m)| !m.is_finite())
        {
            return Err(SnapshotError::NonFiniteMean { index, value });
        }
        Ok(())
    }

    /// Rebuilds a quantizer with the given length policy.
    pub fn into_quantizer(self, length_policy: LengthPolicy) -> SnapshotResult<BinaryQuantizer> {
        if let Err(e) = self.validate() {
            warn!(error = %e, "Refusing to restore inconsistent quantizer state");
            return Err(e);
        }
        Ok(BinaryQuantizer::from_means(self.means, length_policy))
    }

    /// Same value as [`BinaryQuantizer::fingerprint`] for the restored quantizer.
    pub fn fingerprint(&self) -> u64 {
        fingerprint_state(self.dimensions as usize, &self.means)
    }

    pub fn to_bytes(&self) -> SnapshotResult<Vec<u8>> {
        self.validate()?;
        let bytes = rkyv::to_bytes::<RkyvError>(self)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Decodes and validates rkyv bytes produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> SnapshotResult<Self> {
        // Archived floats need aligned storage; callers may hand us any slice.
        let mut aligned = AlignedVec::<16>::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let state = rkyv::from_bytes::<Self, RkyvError>(&aligned)
            .map_err(|e| SnapshotError::Deserialization(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    pub fn to_json(&self) -> SnapshotResult<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        let state: Self = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }
}

impl From<&BinaryQuantizer> for QuantizerState {
    fn from(quantizer: &BinaryQuantizer) -> Self {
        Self::from_quantizer(quantizer)
    }
}
