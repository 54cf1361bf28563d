//! Detail loading use case.

use tracing::{debug, warn};

use crate::application::dto::PokemonDetail;
use crate::application::services::PokedexService;
use crate::domain::entities::{PokemonId, PokemonRef};
use crate::domain::errors::ApiError;

/// Loads a Pokémon and its species together for the detail screen.
#[derive(Clone)]
pub struct LoadDetailUseCase {
    service: PokedexService,
    language: String,
}

impl LoadDetailUseCase {
    #[must_use]
    pub fn new(service: PokedexService, language: impl Into<String>) -> Self {
        Self {
            service,
            language: language.into(),
        }
    }

    /// Loads the detail view for a raw identifier.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidIdentifier`] unless `raw_id` is a positive
    /// integer, or the first error from either request.
    pub async fn execute(&self, raw_id: &str) -> Result<PokemonDetail, ApiError> {
        let id = PokemonId::parse_positive(raw_id).ok_or_else(|| {
            warn!(raw_id, "Rejected invalid Pokémon identifier");
            ApiError::invalid_identifier(raw_id)
        })?;

        debug!(id = %id, "Loading Pokémon detail");

        let reference = PokemonRef::Id(id);
        let (pokemon, species) = tokio::try_join!(
            self.service.get_pokemon(&reference),
            self.service.get_species(id)
        )?;

        Ok(PokemonDetail::new(pokemon, &species, &self.language))
    }
}
