//! Domain layer with core catalog entities and port definitions.

/// Filtering and pagination rules over the loaded catalog.
pub mod catalog;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use catalog::{PaginationState, SearchQuery};
pub use entities::{NamedResource, Pokemon, PokemonId, PokemonRef, PokemonSpecies};
pub use errors::ApiError;
pub use ports::{PokedexPort, ResponseCachePort};
