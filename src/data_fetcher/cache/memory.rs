//! In-process LRU cache of finished fixture lists

use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::store::CacheStore;
use crate::constants::MEMORY_CACHE_CAPACITY;
use crate::data_fetcher::models::CanonicalFixture;
use crate::error::AppError;

/// Bounded in-memory [`CacheStore`]; least recently used dates are evicted first.
pub struct MemoryCache {
    entries: RwLock<LruCache<String, Vec<CanonicalFixture>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_CACHE_CAPACITY)
    }

    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for MemoryCache {
    #[instrument(skip(self), fields(cache_key = %key))]
    async fn get(&self, key: &str) -> Result<Option<Vec<CanonicalFixture>>, AppError> {
        // LruCache::get promotes the entry, which needs a write lock
        let mut entries = self.entries.write().await;
        let hit = entries.get(key).cloned();
        debug!("Memory cache lookup: key={}, hit={}", key, hit.is_some());
        Ok(hit)
    }

    #[instrument(skip(self, fixtures), fields(cache_key = %key))]
    async fn set(&self, key: &str, fixtures: &[CanonicalFixture]) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.put(key.to_string(), fixtures.to_vec());
        debug!(
            "Memory cache entry stored: key={}, fixtures={}",
            key,
            fixtures.len()
        );
        Ok(())
    }
}
