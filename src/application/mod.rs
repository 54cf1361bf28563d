//! Application layer with services, use cases and view models.

/// View models.
pub mod dto;
/// Gateway and catalog state services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{PokemonDetail, StatLine, StatRating};
pub use services::{CatalogState, PokedexService};
pub use use_cases::LoadDetailUseCase;
