//! Binary quantization: fit per-dimension means, encode to packed bits, compare by Hamming
//! distance.

pub mod binary;
pub mod distance;
pub mod error;
pub mod shared;


pub use binary::BinaryQuantizer;
pub use distance::{distance_between_compressed_vectors, hamming_distance};
pub use error::{QuantizerError, QuantizerResult};
pub use shared::SharedQuantizer;
