//! Mean-threshold binary quantizer.

use bitvec::prelude::*;
use tracing::{debug, instrument};

use super::distance;
use super::error::{QuantizerError, QuantizerResult};
use crate::config::{LengthPolicy, QuantizerConfig};
use crate::constants::{capacity_bits, code_words};
use crate::hashing::fingerprint_state;

/// Compresses `f32` vectors to one bit per dimension against per-dimension means.
///
/// Bit `j` of a code is set iff `vector[j] < means[j]`. Codes are packed into `u64` words,
/// dimension `j` at word `j / 64`, bit `j % 64`.
///
/// `encode` and the distance functions only read state, so a fitted quantizer can be shared
/// by reference across threads. `fit` needs `&mut self`; see
/// [`SharedQuantizer`](super::SharedQuantizer) for an owner that refits while serving reads.
///
/// # Example
/// ```rust
/// use reflex_bq::BinaryQuantizer;
///
/// let mut bq = BinaryQuantizer::new(128);
/// bq.fit(&[vec![1.0; 128], vec![-1.0; 128]]).unwrap();
///
/// let a = bq.encode(&[1.0; 128]).unwrap();
/// let b = bq.encode(&[-1.0; 128]).unwrap();
/// assert_eq!(a, vec![0, 0]);
/// assert_eq!(b, vec![u64::MAX, u64::MAX]);
/// assert_eq!(bq.distance_between_compressed_vectors(&a, &b).unwrap(), 128.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryQuantizer {
    dimensions: usize,
    means: Vec<f32>,
    length_policy: LengthPolicy,
}

impl Default for BinaryQuantizer {
    fn default() -> Self {
        Self::with_config(&QuantizerConfig::default())
    }
}

impl BinaryQuantizer {
    /// Creates an unfitted quantizer with `dimensions` zero means.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            means: vec![0.0; dimensions],
            length_policy: LengthPolicy::default(),
        }
    }

    /// Creates an unfitted quantizer from `config`.
    pub fn with_config(config: &QuantizerConfig) -> Self {
        Self::new(config.dimensions).with_length_policy(config.length_policy)
    }

    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Fits a fresh quantizer on `data` without touching any existing instance.
    pub fn fitted<V: AsRef<[f32]>>(
        data: &[V],
        config: &QuantizerConfig,
    ) -> QuantizerResult<Self> {
        let mut quantizer = Self::with_config(config);
        quantizer.fit(data)?;
        Ok(quantizer)
    }

    pub(crate) fn from_means(means: Vec<f32>, length_policy: LengthPolicy) -> Self {
        Self {
            dimensions: means.len(),
            means,
            length_policy,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn means(&self) -> &[f32] {
        &self.means
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }

    /// Number of `u64` words in every code this quantizer produces.
    pub fn code_words(&self) -> usize {
        code_words(self.dimensions)
    }

    /// Bit capacity of a code, including padding.
    pub fn capacity_bits(&self) -> usize {
        capacity_bits(self.dimensions)
    }

    /// Returns the configuration that reproduces this quantizer's shape.
    pub fn config(&self) -> QuantizerConfig {
        QuantizerConfig::new(self.dimensions).length_policy(self.length_policy)
    }

    /// Stable identity of the fitted state. Codes are comparable only under equal fingerprints.
    pub fn fingerprint(&self) -> u64 {
        fingerprint_state(self.dimensions, &self.means)
    }

    /// Computes per-dimension means over `data`, replacing any previous fit.
    ///
    /// The first vector's length becomes the new dimensionality. Each contribution is divided
    /// by the sample count before it is accumulated, so results match models fitted that way
    /// bit for bit.
    ///
    /// # Errors
    /// Fails without modifying `self` if `data` is empty, its vectors have no components,
    /// or any vector's length differs from the first.
    #[instrument(skip_all, fields(vectors = data.len()))]
    pub fn fit<V: AsRef<[f32]>>(&mut self, data: &[V]) -> QuantizerResult<()> {
        let means = column_means(data)?;

        self.dimensions = means.len();
        self.means = means;

        debug!(
            dimensions = self.dimensions,
            code_words = self.code_words(),
            "Binary quantizer fitted"
        );
        Ok(())
    }

    /// Encodes `vector` into a packed code of [`code_words`](Self::code_words) words.
    ///
    /// Padding bits past `dimensions` are zero. NaN components never set their bit.
    pub fn encode(&self, vector: &[f32]) -> QuantizerResult<Vec<u64>> {
        self.check_length(vector.len())?;

        let mut code = vec![0u64; self.code_words()];
        let bits = code.view_bits_mut::<Lsb0>();

        // Zip bounds the loop to `dimensions`; extra capacity-mode components are ignored.
        for (j, (&value, &mean)) in vector.iter().zip(&self.means).enumerate() {
            if value < mean {
                bits.set(j, true);
            }
        }

        Ok(code)
    }

    /// Encodes every vector, stopping at the first rejected one.
    pub fn encode_batch<V: AsRef<[f32]>>(&self, vectors: &[V]) -> QuantizerResult<Vec<Vec<u64>>> {
        vectors.iter().map(|v| self.encode(v.as_ref())).collect()
    }

    /// Hamming distance between two codes as `f32`.
    ///
    /// Only the word counts are checked; both codes must come from this quantizer's fit for
    /// the result to be meaningful.
    pub fn distance_between_compressed_vectors(
        &self,
        x: &[u64],
        y: &[u64],
    ) -> QuantizerResult<f32> {
        distance::distance_between_compressed_vectors(x, y)
    }

    fn check_length(&self, len: usize) -> QuantizerResult<()> {
        let capacity = self.capacity_bits();
        let rejection = if len > capacity {
            Some(QuantizerError::VectorTooLong {
                limit: capacity,
                actual: len,
            })
        } else if len < self.dimensions {
            Some(QuantizerError::VectorTooShort {
                expected: self.dimensions,
                actual: len,
            })
        } else if self.length_policy == LengthPolicy::Strict && len != self.dimensions {
            Some(QuantizerError::VectorTooLong {
                limit: self.dimensions,
                actual: len,
            })
        } else {
            None
        };

        match rejection {
            Some(err) => {
                debug!(error = %err, policy = %self.length_policy, "Rejected vector for encoding");
                Err(err)
            }
            None => Ok(()),
        }
    }
}

fn column_means<V: AsRef<[f32]>>(data: &[V]) -> QuantizerResult<Vec<f32>> {
    let first = data.first().ok_or(QuantizerError::EmptyTrainingSet)?;
    let dimensions = first.as_ref().len();
    if dimensions == 0 {
        return Err(QuantizerError::ZeroDimensions);
    }

    if let Some((index, actual)) = data
        .iter()
        .map(|row| row.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != dimensions)
    {
        return Err(QuantizerError::RaggedTrainingSet {
            index,
            expected: dimensions,
            actual,
        });
    }

    let norm = data.len() as f32;
    let mut means = vec![0.0f32; dimensions];
    for row in data {
        for (mean, &value) in means.iter_mut().zip(row.as_ref()) {
            *mean += value / norm;
        }
    }

    Ok(means)
}
