//! Domain entity definitions.

mod pokemon;
mod resource;
mod species;

pub use pokemon::{Pokemon, PokemonAbility, PokemonId, PokemonStat, PokemonTypeSlot, Sprites};
pub use resource::{NamedResource, PageWindow, PokemonPage, PokemonRef};
pub use species::{FlavorTextEntry, Genus, PokemonSpecies};
