//! Pokémon entity.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// National Pokédex number. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PokemonId(pub u32);

impl PokemonId {
    /// Returns the underlying u32 value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Parses a user-supplied identifier, accepting only positive integers.
    #[must_use]
    pub fn parse_positive(value: &str) -> Option<Self> {
        match value.trim().parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }

    /// Returns the zero-padded Pokédex label, e.g. `#001`.
    #[must_use]
    pub fn dex_label(self) -> String {
        format!("#{:03}", self.0)
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PokemonId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A type assignment in its display slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    pub name: String,
}

/// A named base stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub base_stat: u32,
    pub effort: u32,
}

impl PokemonStat {
    #[must_use]
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            name: name.into(),
            base_stat,
            effort: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub name: String,
    pub is_hidden: bool,
    pub slot: u8,
}

/// Image references. The API returns `null` for missing artwork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
    pub official_artwork_shiny: Option<String>,
    pub dream_world: Option<String>,
}

impl Sprites {
    /// Returns the best available artwork URL.
    #[must_use]
    pub fn preferred(&self) -> Option<&str> {
        self.official_artwork
            .as_deref()
            .or(self.front_default.as_deref())
            .or(self.dream_world.as_deref())
    }
}

/// A Pokémon record as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    id: PokemonId,
    name: String,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStat>,
    abilities: Vec<PokemonAbility>,
    /// Decimetres.
    height: u32,
    /// Hectograms.
    weight: u32,
    sprites: Sprites,
    species: NamedResource,
}

impl Pokemon {
    /// Creates a Pokémon with the given ID and name and no other data.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        let id = PokemonId(id);
        Self {
            species: NamedResource::new(
                name.clone(),
                format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
            ),
            id,
            name,
            types: Vec::new(),
            stats: Vec::new(),
            abilities: Vec::new(),
            height: 0,
            weight: 0,
            sprites: Sprites::default(),
        }
    }

    /// Sets the types, assigning slots in the given order starting at 1.
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types
            .into_iter()
            .zip(1_u8..)
            .map(|(name, slot)| PokemonTypeSlot {
                slot,
                name: name.into(),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_type_slots(mut self, mut types: Vec<PokemonTypeSlot>) -> Self {
        types.sort_by_key(|t| t.slot);
        self.types = types;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Vec<PokemonStat>) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: Vec<PokemonAbility>) -> Self {
        self.abilities = abilities;
        self
    }

    /// Sets height (decimetres) and weight (hectograms).
    #[must_use]
    pub const fn with_measurements(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_sprites(mut self, sprites: Sprites) -> Self {
        self.sprites = sprites;
        self
    }

    #[must_use]
    pub fn with_species(mut self, species: NamedResource) -> Self {
        self.species = species;
        self
    }

    #[must_use]
    pub const fn id(&self) -> PokemonId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns type slots ordered by slot.
    #[must_use]
    pub fn types(&self) -> &[PokemonTypeSlot] {
        &self.types
    }

    /// Returns the type names in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    /// Returns the first-slot type, if any.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.name.as_str())
    }

    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.name == type_name)
    }

    #[must_use]
    pub fn stats(&self) -> &[PokemonStat] {
        &self.stats
    }

    #[must_use]
    pub fn abilities(&self) -> &[PokemonAbility] {
        &self.abilities
    }

    /// Height in decimetres.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Weight in hectograms.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub const fn sprites(&self) -> &Sprites {
        &self.sprites
    }

    /// Back-reference to the species record holding descriptions.
    #[must_use]
    pub const fn species(&self) -> &NamedResource {
        &self.species
    }

    /// Sum of all base stats.
    #[must_use]
    pub fn total_base_stats(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }
}
