use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned when exporting or restoring quantizer state.
pub enum SnapshotError {
    /// rkyv serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// rkyv bytes failed validation or deserialization.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored means do not cover the stored dimensionality.
    #[error("state has {means} means for {dimensions} dimensions")]
    MeansLengthMismatch {
        /// Stored dimensionality.
        dimensions: u64,
        /// Number of stored means.
        means: usize,
    },

    /// A stored mean is NaN or infinite and cannot be exported.
    #[error("mean at dimension {index} is not finite: {value}")]
    NonFiniteMean {
        /// Dimension of the offending mean.
        index: usize,
        /// The offending value.
        value: f32,
    },
}

/// Convenience result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
