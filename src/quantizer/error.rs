use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by quantizer operations.
///
/// Every variant is an invalid-input error: retrying with the same arguments cannot succeed.
pub enum QuantizerError {
    /// Codes passed to a distance function have different word counts.
    #[error("vectors must have same length: {left} words vs {right} words")]
    CodeLengthMismatch {
        /// Word count of the first code.
        left: usize,
        /// Word count of the second code.
        right: usize,
    },

    /// Vector to encode has more components than the quantizer accepts.
    #[error("vector longer than those used for training: limit {limit}, got {actual}")]
    VectorTooLong {
        /// Maximum accepted length.
        limit: usize,
        /// Actual vector length.
        actual: usize,
    },

    /// Vector to encode has fewer components than the fitted dimensionality.
    #[error("vector shorter than those used for training: expected {expected}, got {actual}")]
    VectorTooShort {
        /// Fitted dimensionality.
        expected: usize,
        /// Actual vector length.
        actual: usize,
    },

    /// `fit` was called without any training vectors.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Training vectors have no components.
    #[error("training vectors have zero dimensions")]
    ZeroDimensions,

    /// A training vector's length differs from the first one.
    #[error("training vector {index} has {actual} dimensions, expected {expected}")]
    RaggedTrainingSet {
        /// Position of the offending vector.
        index: usize,
        /// Length of the first vector.
        expected: usize,
        /// Length of the offending vector.
        actual: usize,
    },
}

impl QuantizerError {
    /// Returns `true` for errors caused by malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::CodeLengthMismatch { .. }
            | Self::VectorTooLong { .. }
            | Self::VectorTooShort { .. }
            | Self::EmptyTrainingSet
            | Self::ZeroDimensions
            | Self::RaggedTrainingSet { .. } => true,
        }
    }
}

/// Convenience result type for quantizer operations.
pub type QuantizerResult<T> = Result<T, QuantizerError>;
