//! API resource references and list pages.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::PokemonId;

/// A `{name, url}` pointer to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Extracts the trailing numeric ID segment from the resource URL.
    ///
    /// # Panics
    ///
    /// Panics if the internal regex is invalid.
    #[must_use]
    pub fn id_from_url(&self) -> Option<u32> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"/(\d+)/?$").expect("Invalid regex"));
        re.captures(&self.url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// Addresses a Pokémon either by Pokédex number or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokemonRef {
    Id(PokemonId),
    Name(String),
}

impl PokemonRef {
    /// Canonical string form, used both as the URL path segment and the cache key.
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<PokemonId> for PokemonRef {
    fn from(value: PokemonId) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for PokemonRef {
    fn from(value: &str) -> Self {
        PokemonId::parse_positive(value)
            .map_or_else(|| Self::Name(value.trim().to_lowercase()), Self::Id)
    }
}

impl From<&NamedResource> for PokemonRef {
    /// Prefers the numeric ID in the URL; falls back to the name.
    fn from(value: &NamedResource) -> Self {
        match value.id_from_url() {
            Some(id) if id > 0 => Self::Id(PokemonId(id)),
            _ => Self::Name(value.name.trim().to_lowercase()),
        }
    }
}

/// One fetch slice of the remote list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u32,
    pub limit: u32,
}

impl PageWindow {
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }
}

/// A page of the remote list together with the total catalog size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonPage {
    pub window: PageWindow,
    /// Total number of records the remote reports.
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl PokemonPage {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
