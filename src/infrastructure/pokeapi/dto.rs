use serde::Deserialize;

use crate::domain::entities::{
    FlavorTextEntry, Genus, NamedResource, PageWindow, Pokemon, PokemonAbility, PokemonPage,
    PokemonSpecies, PokemonStat, PokemonTypeSlot, Sprites,
};

/// `GET /pokemon?offset&limit` response.
#[derive(Debug, Deserialize)]
pub struct PokemonListResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl PokemonListResponse {
    pub fn into_page(self, window: PageWindow) -> PokemonPage {
        PokemonPage {
            window,
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results,
        }
    }
}

/// `GET /pokemon/{id-or-name}` response, trimmed to the fields we render.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlotResponse>,
    #[serde(default)]
    pub stats: Vec<StatResponse>,
    #[serde(default)]
    pub abilities: Vec<AbilityResponse>,
    #[serde(default)]
    pub sprites: SpritesResponse,
    pub species: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlotResponse {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatResponse {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilityResponse {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpritesResponse {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: OtherSpritesResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSpritesResponse {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkResponse,
    #[serde(default)]
    pub dream_world: ArtworkResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtworkResponse {
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

impl From<PokemonResponse> for Pokemon {
    fn from(response: PokemonResponse) -> Self {
        let types = response
            .types
            .into_iter()
            .map(|t| PokemonTypeSlot {
                slot: t.slot,
                name: t.kind.name,
            })
            .collect();

        let stats = response
            .stats
            .into_iter()
            .map(|s| PokemonStat {
                name: s.stat.name,
                base_stat: s.base_stat,
                effort: s.effort,
            })
            .collect();

        let abilities = response
            .abilities
            .into_iter()
            .map(|a| PokemonAbility {
                name: a.ability.name,
                is_hidden: a.is_hidden,
                slot: a.slot,
            })
            .collect();

        let sprites = response.sprites;
        let sprites = Sprites {
            front_default: sprites.front_default,
            front_shiny: sprites.front_shiny,
            back_default: sprites.back_default,
            back_shiny: sprites.back_shiny,
            official_artwork: sprites.other.official_artwork.front_default,
            official_artwork_shiny: sprites.other.official_artwork.front_shiny,
            dream_world: sprites.other.dream_world.front_default,
        };

        Self::new(response.id, response.name)
            .with_type_slots(types)
            .with_stats(stats)
            .with_abilities(abilities)
            .with_measurements(response.height, response.weight)
            .with_sprites(sprites)
            .with_species(response.species)
    }
}

/// `GET /pokemon-species/{id}` response.
#[derive(Debug, Deserialize)]
pub struct SpeciesResponse {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextResponse>,
    #[serde(default)]
    pub genera: Vec<GenusResponse>,
    pub evolution_chain: Option<UrlResource>,
}

#[derive(Debug, Deserialize)]
pub struct FlavorTextResponse {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: Option<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub struct GenusResponse {
    pub genus: String,
    pub language: NamedResource,
}

/// An unnamed resource pointer, e.g. the evolution chain.
#[derive(Debug, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

impl From<SpeciesResponse> for PokemonSpecies {
    fn from(response: SpeciesResponse) -> Self {
        let entries = response
            .flavor_text_entries
            .into_iter()
            .map(|e| FlavorTextEntry {
                text: e.flavor_text,
                language: e.language.name,
                version: e.version.map(|v| v.name).unwrap_or_default(),
            })
            .collect();

        let genera = response
            .genera
            .into_iter()
            .map(|g| Genus {
                genus: g.genus,
                language: g.language.name,
            })
            .collect();

        let species = Self::new(entries, genera);
        match response.evolution_chain {
            Some(chain) => species.with_evolution_chain(NamedResource::new("", chain.url)),
            None => species,
        }
    }
}

/// `GET /type` response.
#[derive(Debug, Deserialize)]
pub struct TypeListResponse {
    pub results: Vec<NamedResource>,
}

/// `GET /type/{name}` response.
#[derive(Debug, Deserialize)]
pub struct TypeDetailResponse {
    #[serde(default)]
    pub pokemon: Vec<TypeMemberResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TypeMemberResponse {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_response_mapping() {
        let json = r#"{
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "types": [
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}},
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}
            ],
            "stats": [
                {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": ""}}
            ],
            "abilities": [
                {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "chlorophyll", "url": ""}, "is_hidden": true, "slot": 3}
            ],
            "sprites": {
                "front_default": "front.png",
                "front_shiny": null,
                "back_default": null,
                "back_shiny": null,
                "other": {
                    "official-artwork": {"front_default": "art.png", "front_shiny": "art-shiny.png"},
                    "dream_world": {"front_default": null}
                }
            },
            "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"}
        }"#;

        let response: PokemonResponse = serde_json::from_str(json).unwrap();
        let pokemon = Pokemon::from(response);

        assert_eq!(pokemon.id().as_u32(), 1);
        assert_eq!(pokemon.type_names().collect::<Vec<_>>(), ["grass", "poison"]);
        assert_eq!(pokemon.total_base_stats(), 94);
        assert!(pokemon.abilities()[1].is_hidden);
        assert_eq!(pokemon.sprites().preferred(), Some("art.png"));
        assert_eq!(pokemon.sprites().dream_world, None);
        assert_eq!(pokemon.species().id_from_url(), Some(1));
    }

    #[test]
    fn test_species_response_mapping() {
        let json = r#"{
            "flavor_text_entries": [
                {
                    "flavor_text": "A strange seed was\nplanted on its\fback at birth.",
                    "language": {"name": "en", "url": ""},
                    "version": {"name": "red", "url": ""}
                }
            ],
            "genera": [{"genus": "Seed Pokémon", "language": {"name": "en", "url": ""}}],
            "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/1/"}
        }"#;

        let response: SpeciesResponse = serde_json::from_str(json).unwrap();
        let species = PokemonSpecies::from(response);

        assert_eq!(species.flavor_text_entries()[0].version, "red");
        assert_eq!(species.genus("en"), Some("Seed Pokémon"));
        assert_eq!(species.evolution_chain_id(), Some(1));
    }
}
