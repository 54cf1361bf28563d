mod pokedex_port;
mod response_cache_port;

pub use pokedex_port::PokedexPort;
pub use response_cache_port::{CacheKey, CacheStats, CachedResponse, ResponseCachePort};
