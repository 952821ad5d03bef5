//! Hamming distance between packed codes.

use super::error::{QuantizerError, QuantizerResult};

/// Counts differing bits between two codes (XOR, then popcount per word).
pub fn hamming_distance(x: &[u64], y: &[u64]) -> QuantizerResult<u32> {
    if x.len() != y.len() {
        return Err(QuantizerError::CodeLengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    Ok(x.iter().zip(y).map(|(&a, &b)| (a ^ b).count_ones()).sum())
}

/// Hamming distance as `f32`, the score consumed by the search layer (lower is closer).
///
/// Equal word counts do not guarantee the codes came from the same fitted quantizer;
/// compare fingerprints when that matters.
#[inline]
pub fn distance_between_compressed_vectors(x: &[u64], y: &[u64]) -> QuantizerResult<f32> {
    hamming_distance(x, y).map(|d| d as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_distance_identical() {
        let a = vec![0xFF, 0x00, 0xAA];
        assert_eq!(hamming_distance(&a, &a), Ok(0));
    }

    #[test]
    fn test_hamming_distance_opposite() {
        assert_eq!(hamming_distance(&[0], &[u64::MAX]), Ok(64));
    }

    #[test]
    fn test_hamming_distance_single_bit() {
        assert_eq!(hamming_distance(&[0, 0], &[0, 1 << 63]), Ok(1));
    }

    #[test]
    fn test_hamming_distance_different_lengths() {
        assert_eq!(
            hamming_distance(&[0, 0], &[0]),
            Err(QuantizerError::CodeLengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_distance_empty_codes() {
        assert_eq!(distance_between_compressed_vectors(&[], &[]), Ok(0.0));
    }

    #[test]
    fn test_distance_is_float_count() {
        let d = distance_between_compressed_vectors(&[0b1011, 0], &[0, 0b1]).unwrap();
        assert_eq!(d, 4.0);
    }
}
