//! Reflex binary quantizer.
//!
//! Compresses `f32` embeddings to one bit per dimension for fast candidate ranking in a
//! vector index. Each dimension is thresholded against its own training mean, codes are
//! packed into `u64` words, and codes are compared by Hamming distance.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`BinaryQuantizer`] - Fit, encode, distance
//! - [`QuantizerError`], [`QuantizerResult`] - Invalid-input errors
//! - [`distance_between_compressed_vectors`], [`hamming_distance`] - Free-standing kernels
//!
//! ## Sharing
//! - [`SharedQuantizer`] - Read/write-locked handle for an owning index
//!
//! ## Configuration
//! - [`QuantizerConfig`], [`LengthPolicy`], [`ConfigError`] - `REFLEX_BQ_*` environment config
//!
//! ## State
//! - [`QuantizerState`], [`SnapshotError`] - Serializable `(dimensions, means)` state
//! - [`fingerprint_state`] - Identity binding codes to a fitted state
//!
//! ## Constants
//! Layout helpers such as [`code_words`] and [`capacity_bits`] live in [`constants`].

pub mod config;
pub mod constants;
pub mod hashing;
pub mod quantizer;
pub mod snapshot;

pub use config::{ConfigError, LengthPolicy, QuantizerConfig};
pub use constants::{
    BITS_PER_WORD, COMPRESSION_RATIO, DEFAULT_CODE_WORDS, DEFAULT_DIMENSIONS, capacity_bits,
    code_words,
};
pub use hashing::fingerprint_state;
pub use quantizer::{
    BinaryQuantizer, QuantizerError, QuantizerResult, SharedQuantizer,
    distance_between_compressed_vectors, hamming_distance,
};
pub use snapshot::{QuantizerState, SnapshotError, SnapshotResult};
