use std::sync::RwLock;

use fxhash::FxHashMap;

use varank_core::models::{PathogenicityData, Variant};

/// Per-variant memo cache for pathogenicity lookups.
///
/// Keyed by the variant's chrom:pos:ref>alt identity, read-mostly and shared
/// across threads. Unbounded: a run is scoped to one sample, so eviction is
/// not worth the bookkeeping.
#[derive(Debug, Default)]
pub struct EvidenceCache {
    inner: RwLock<FxHashMap<String, PathogenicityData>>,
}

impl EvidenceCache {
    pub fn new() -> Self {
        EvidenceCache::default()
    }

    /// Return the cached entry for `variant`, computing and storing it on a
    /// miss. A poisoned lock falls through to `fetch` so evidence retrieval
    /// keeps working even after a panicked writer.
    pub fn get_or_fetch<F>(&self, variant: &Variant, fetch: F) -> PathogenicityData
    where
        F: FnOnce() -> PathogenicityData,
    {
        let key = variant.key();
        if let Ok(cache) = self.inner.read() {
            if let Some(data) = cache.get(&key) {
                return data.clone();
            }
        }
        let data = fetch();
        if let Ok(mut cache) = self.inner.write() {
            cache.insert(key, data.clone());
        }
        data
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
