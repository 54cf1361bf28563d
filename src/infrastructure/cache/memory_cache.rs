//! In-memory session response cache.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::domain::ports::{CacheKey, CacheStats, CachedResponse, ResponseCachePort};

/// Unbounded key-value cache living for the whole session.
/// Thread-safe; reads only take a shared lock.
#[derive(Default)]
pub struct MemoryResponseCache {
    entries: RwLock<HashMap<CacheKey, CachedResponse>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseCachePort for MemoryResponseCache {
    fn get(&self, key: &CacheKey) -> Option<CachedResponse> {
        let entries = self.entries.read();
        if let Some(response) = entries.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Response cache hit");
            Some(response.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Response cache miss");
            None
        }
    }

    fn put(&self, key: CacheKey, response: CachedResponse) {
        debug!(key = %key, "Storing response in cache");
        self.entries.write().insert(key, response);
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn clear(&self) {
        self.entries.write().clear();
        debug!("Cleared response cache");
    }

    #[allow(clippy::cast_precision_loss)]
    fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            size: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Pokemon;
    use std::sync::Arc;

    fn pikachu() -> CachedResponse {
        CachedResponse::Pokemon(Arc::new(Pokemon::new(25, "pikachu")))
    }

    #[test]
    fn test_cache_put_and_get() {
        let cache = MemoryResponseCache::new();
        let key = CacheKey::Pokemon("25".to_string());

        cache.put(key.clone(), pikachu());

        assert_eq!(cache.get(&key), Some(pikachu()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_miss() {
        let cache = MemoryResponseCache::new();
        assert!(cache.get(&CacheKey::TypeList).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_entries_do_not_evict() {
        let cache = MemoryResponseCache::new();
        for id in 1..=500 {
            cache.put(
                CacheKey::Pokemon(id.to_string()),
                CachedResponse::Pokemon(Arc::new(Pokemon::new(id, format!("p{id}")))),
            );
        }
        cache.put(CacheKey::TypeList, CachedResponse::TypeList(Arc::from(vec![])));

        assert_eq!(cache.len(), 501);
        assert!(cache.get(&CacheKey::Pokemon("1".to_string())).is_some());
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = MemoryResponseCache::new();
        cache.put(CacheKey::Pokemon("25".to_string()), pikachu());
        cache.put(
            CacheKey::TypeList,
            CachedResponse::TypeList(Arc::from(vec!["normal".to_string()])),
        );

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get(&CacheKey::TypeList).is_none());
    }

    #[test]
    fn test_cache_stats() {
        let cache = MemoryResponseCache::new();
        let key = CacheKey::Pokemon("25".to_string());
        cache.put(key.clone(), pikachu());

        let _ = cache.get(&key);
        let _ = cache.get(&CacheKey::Pokemon("missing".to_string()));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }
}
