//! Species metadata (descriptions, genus, evolution chain).

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A Pokédex description from one game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub text: String,
    pub language: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: String,
}

/// Extended metadata for a Pokémon species.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    flavor_text_entries: Vec<FlavorTextEntry>,
    genera: Vec<Genus>,
    evolution_chain: Option<NamedResource>,
}

impl PokemonSpecies {
    #[must_use]
    pub fn new(flavor_text_entries: Vec<FlavorTextEntry>, genera: Vec<Genus>) -> Self {
        Self {
            flavor_text_entries,
            genera,
            evolution_chain: None,
        }
    }

    #[must_use]
    pub fn with_evolution_chain(mut self, chain: NamedResource) -> Self {
        self.evolution_chain = Some(chain);
        self
    }

    #[must_use]
    pub fn flavor_text_entries(&self) -> &[FlavorTextEntry] {
        &self.flavor_text_entries
    }

    #[must_use]
    pub fn genera(&self) -> &[Genus] {
        &self.genera
    }

    #[must_use]
    pub const fn evolution_chain(&self) -> Option<&NamedResource> {
        self.evolution_chain.as_ref()
    }

    /// First description in `language`, with line breaks and form feeds flattened.
    #[must_use]
    pub fn description(&self, language: &str) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language == language)
            .map(|entry| {
                entry
                    .text
                    .split(['\u{c}', '\n', '\r'])
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
    }

    /// Genus label in `language`, e.g. "Seed Pokémon".
    #[must_use]
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language == language)
            .map(|g| g.genus.as_str())
    }

    /// Numeric ID of the evolution chain resource.
    #[must_use]
    pub fn evolution_chain_id(&self) -> Option<u32> {
        self.evolution_chain.as_ref().and_then(NamedResource::id_from_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, language: &str) -> FlavorTextEntry {
        FlavorTextEntry {
            text: text.to_string(),
            language: language.to_string(),
            version: "red".to_string(),
        }
    }

    #[test]
    fn test_description_picks_language_and_flattens() {
        let species = PokemonSpecies::new(
            vec![
                entry("Una semilla", "es"),
                entry("A strange seed was\nplanted on its\u{c}back at birth.", "en"),
            ],
            Vec::new(),
        );

        assert_eq!(
            species.description("en").as_deref(),
            Some("A strange seed was planted on its back at birth.")
        );
        assert_eq!(species.description("es").as_deref(), Some("Una semilla"));
        assert_eq!(species.description("fr"), None);
    }

    #[test]
    fn test_genus() {
        let species = PokemonSpecies::new(
            Vec::new(),
            vec![Genus {
                genus: "Seed Pokémon".to_string(),
                language: "en".to_string(),
            }],
        );

        assert_eq!(species.genus("en"), Some("Seed Pokémon"));
        assert_eq!(species.genus("ja"), None);
    }

    #[test]
    fn test_evolution_chain_id() {
        let species = PokemonSpecies::default().with_evolution_chain(NamedResource::new(
            "",
            "https://pokeapi.co/api/v2/evolution-chain/1/",
        ));

        assert_eq!(species.evolution_chain_id(), Some(1));
        assert_eq!(PokemonSpecies::default().evolution_chain_id(), None);
    }
}
