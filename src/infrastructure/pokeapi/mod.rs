//! PokéAPI adapter.

mod client;
mod dto;
mod status_messages;

pub use client::{DEFAULT_TIMEOUT, POKEAPI_BASE, PokeApiClient};
