//! Lock-guarded quantizer handle for an owning index.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use tracing::debug;

use super::binary::BinaryQuantizer;
use super::error::QuantizerResult;

#[derive(Debug, Clone)]
/// Cloneable handle around one [`BinaryQuantizer`].
///
/// Encodes hold the read lock. Refits train a new instance outside the lock and swap it in
/// under the write lock, so readers never observe a half-fitted state.
pub struct SharedQuantizer {
    inner: Arc<RwLock<BinaryQuantizer>>,
}

impl SharedQuantizer {
    pub fn new(quantizer: BinaryQuantizer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(quantizer)),
        }
    }

    /// Refits on `data`, keeping the length policy in effect when the new fit is swapped in.
    ///
    /// Fits and replacements are last-writer-wins: a `replace` that lands while this fit is
    /// training is overwritten, but its length policy carries over.
    pub fn fit<V: AsRef<[f32]>>(&self, data: &[V]) -> QuantizerResult<()> {
        let mut fitted = BinaryQuantizer::new(0);
        fitted.fit(data)?;

        let fingerprint = {
            let mut guard = self.inner.write();
            let policy = guard.length_policy();
            *guard = fitted.with_length_policy(policy);
            guard.fingerprint()
        };

        debug!(fingerprint, "Swapped in refitted quantizer");
        Ok(())
    }

    /// Replaces the quantizer wholesale (e.g. after restoring a snapshot).
    pub fn replace(&self, quantizer: BinaryQuantizer) -> BinaryQuantizer {
        std::mem::replace(&mut *self.inner.write(), quantizer)
    }

    pub fn encode(&self, vector: &[f32]) -> QuantizerResult<Vec<u64>> {
        self.inner.read().encode(vector)
    }

    pub fn encode_batch<V: AsRef<[f32]>>(&self, vectors: &[V]) -> QuantizerResult<Vec<Vec<u64>>> {
        self.inner.read().encode_batch(vectors)
    }

    pub fn distance_between_compressed_vectors(
        &self,
        x: &[u64],
        y: &[u64],
    ) -> QuantizerResult<f32> {
        self.inner.read().distance_between_compressed_vectors(x, y)
    }

    pub fn dimensions(&self) -> usize {
        self.inner.read().dimensions()
    }

    pub fn fingerprint(&self) -> u64 {
        self.inner.read().fingerprint()
    }

    /// Read guard for several operations against one consistent fit.
    pub fn read(&self) -> RwLockReadGuard<'_, BinaryQuantizer> {
        self.inner.read()
    }

    /// Clones the current quantizer.
    pub fn snapshot(&self) -> BinaryQuantizer {
        self.inner.read().clone()
    }
}

impl From<BinaryQuantizer> for SharedQuantizer {
    fn from(quantizer: BinaryQuantizer) -> Self {
        Self::new(quantizer)
    }
}
