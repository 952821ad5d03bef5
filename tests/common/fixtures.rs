//! Deterministic vector fixtures.

pub const TEST_DIMS: usize = 384;

/// Pseudo-random vector in `[-1, 1)`, reproducible from `seed`.
pub fn vector(seed: u64, dims: usize) -> Vec<f32> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
    (0..dims)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ((state % 2000) as f32 / 1000.0) - 1.0
        })
        .collect()
}

pub fn corpus(count: u64, dims: usize) -> Vec<Vec<f32>> {
    (0..count).map(|seed| vector(seed, dims)).collect()
}

/// `base` with `changed` leading components negated.
pub fn perturbed(base: &[f32], changed: usize) -> Vec<f32> {
    base.iter()
        .enumerate()
        .map(|(i, &v)| if i < changed { -v } else { v })
        .collect()
}
