//! BLAKE3 fingerprints for fitted quantizer state.

use blake3::Hasher;

/// Fingerprints a fitted quantizer state.
///
/// Covers `dimensions` and every mean in order, using their little-endian bit patterns, so
/// the value is stable across platforms and changes whenever any threshold changes (including
/// `0.0` vs `-0.0`). Codes are only comparable when they were produced under the same
/// fingerprint.
///
/// # Collision Probability
///
/// With 64 bits the birthday bound is around 4.3 billion distinct states, far beyond the
/// handful of fitted versions an index keeps around. This is not a cryptographic binding.
pub fn fingerprint_state(dimensions: usize, means: &[f32]) -> u64 {
    let mut hasher = Hasher::new();
    hasher.update(&(dimensions as u64).to_le_bytes());
    hasher.update(b"|");
    for mean in means {
        hasher.update(&mean.to_le_bytes());
    }

    truncate_to_u64(hasher.finalize().as_bytes())
}

#[inline]
fn truncate_to_u64(bytes: &[u8; 32]) -> u64 {
    let mut head = [0u8; 8];
    head.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(head)
}
