//! Remote Pokédex data port.

use async_trait::async_trait;

use crate::domain::entities::{
    NamedResource, PageWindow, Pokemon, PokemonId, PokemonPage, PokemonRef, PokemonSpecies,
};
use crate::domain::errors::ApiError;

/// Port for the four read-only catalog endpoints (plus type membership).
#[async_trait]
pub trait PokedexPort: Send + Sync {
    /// Fetches one window of the Pokémon list.
    async fn fetch_pokemon_page(&self, window: PageWindow) -> Result<PokemonPage, ApiError>;

    /// Fetches full details for one Pokémon.
    async fn fetch_pokemon(&self, reference: &PokemonRef) -> Result<Pokemon, ApiError>;

    /// Fetches species metadata.
    async fn fetch_species(&self, id: PokemonId) -> Result<PokemonSpecies, ApiError>;

    /// Fetches every type known to the API, placeholders included.
    async fn fetch_types(&self) -> Result<Vec<NamedResource>, ApiError>;

    /// Fetches references to every Pokémon of the given type.
    async fn fetch_type_members(&self, type_name: &str) -> Result<Vec<NamedResource>, ApiError>;
}
