pub mod catalog_state;
pub mod pokedex_service;

pub use catalog_state::{CatalogState, DEFAULT_INITIAL_LIMIT, DEFAULT_PAGE_SIZE, LOAD_MORE_LIMIT};
pub use pokedex_service::{PokedexService, TYPE_MEMBER_LIMIT};
