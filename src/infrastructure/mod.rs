//! Infrastructure layer with external service adapters.

/// In-memory response cache.
pub mod cache;
/// Application configuration.
pub mod config;
/// PokéAPI HTTP client.
pub mod pokeapi;

pub use cache::MemoryResponseCache;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use pokeapi::PokeApiClient;
