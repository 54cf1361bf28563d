//! Port definition for the session response cache.

use std::sync::Arc;

use crate::domain::entities::Pokemon;

/// Key under which a response is memoized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// A Pokémon detail, keyed by the canonical ID or name string.
    Pokemon(String),
    /// The filtered type list.
    TypeList,
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pokemon(key) => write!(f, "pokemon:{key}"),
            Self::TypeList => write!(f, "types"),
        }
    }
}

/// A memoized response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedResponse {
    Pokemon(Arc<Pokemon>),
    TypeList(Arc<[String]>),
}

/// Hit/miss counters of a response cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Percentage of lookups that hit.
    pub hit_rate: f64,
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} entries, {:.1}% hit rate ({} hits, {} misses)",
            self.size, self.hit_rate, self.hits, self.misses
        )
    }
}

/// Port for response memoization.
///
/// Entries never expire; the only invalidation is [`ResponseCachePort::clear`].
/// Implementations must be thread-safe.
pub trait ResponseCachePort: Send + Sync {
    /// Returns the cached response for `key`, if any.
    fn get(&self, key: &CacheKey) -> Option<CachedResponse>;

    /// Stores a response, replacing any previous entry.
    fn put(&self, key: CacheKey, response: CachedResponse);

    /// Returns the number of cached entries.
    fn len(&self) -> usize;

    /// Returns true if nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry. Counters keep running.
    fn clear(&self);

    /// Returns lookup counters and the current size.
    fn stats(&self) -> CacheStats;
}
