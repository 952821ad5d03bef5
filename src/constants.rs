//! Code layout constants.
//!
//! Secondary sizes are derived from [`BITS_PER_WORD`] and [`DEFAULT_DIMENSIONS`] so they
//! cannot drift apart.
//!
//! # Code Layout
//!
//! A code for a `dims`-dimensional vector is `ceil(dims / 64)` `u64` words.
//! Dimension `j` lives in word `j / 64` at bit `j % 64`. Padding bits past `dims` in the
//! last word are always zero.

/// Bits stored per code word.
pub const BITS_PER_WORD: usize = u64::BITS as usize;

/// Bytes per code word.
pub const BYTES_PER_WORD: usize = BITS_PER_WORD / 8;

pub const DEFAULT_DIMENSIONS: usize = 1536;

pub const DEFAULT_CODE_WORDS: usize = code_words(DEFAULT_DIMENSIONS);

pub const DEFAULT_F32_BYTES: usize = f32_bytes(DEFAULT_DIMENSIONS);

pub const DEFAULT_CODE_BYTES: usize = code_bytes(DEFAULT_DIMENSIONS);

/// Full-precision bytes per code byte (one `f32` collapses into one bit).
pub const COMPRESSION_RATIO: usize = DEFAULT_F32_BYTES / DEFAULT_CODE_BYTES;

/// Number of `u64` words in a code for `dims` dimensions.
#[inline]
pub const fn code_words(dims: usize) -> usize {
    dims.div_ceil(BITS_PER_WORD)
}

/// Total bits available in a code for `dims` dimensions (including padding).
#[inline]
pub const fn capacity_bits(dims: usize) -> usize {
    code_words(dims) * BITS_PER_WORD
}

/// Bytes occupied by the full-precision vector.
#[inline]
pub const fn f32_bytes(dims: usize) -> usize {
    dims * std::mem::size_of::<f32>()
}

/// Bytes occupied by the encoded code.
#[inline]
pub const fn code_bytes(dims: usize) -> usize {
    code_words(dims) * BYTES_PER_WORD
}
