//! Detail screen view model.

use std::sync::Arc;

use crate::domain::entities::{Pokemon, PokemonSpecies, PokemonStat};

/// Highest base stat any Pokémon can have; bars are scaled against it.
pub const MAX_BASE_STAT: u32 = 255;

/// Coarse grading of a base stat, used to colour the stat bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatRating {
    /// 100 and above.
    High,
    /// 60 to 99.
    Medium,
    /// Below 60.
    Low,
}

impl StatRating {
    #[must_use]
    pub const fn for_value(value: u32) -> Self {
        if value >= 100 {
            Self::High
        } else if value >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One rendered row of the stats tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: String,
    pub value: u32,
    /// Share of [`MAX_BASE_STAT`], capped at 100.
    pub percentage: u16,
    pub rating: StatRating,
}

impl From<&PokemonStat> for StatLine {
    fn from(stat: &PokemonStat) -> Self {
        Self {
            label: stat_label(&stat.name).to_string(),
            value: stat.base_stat,
            percentage: stat_percentage(stat.base_stat),
            rating: StatRating::for_value(stat.base_stat),
        }
    }
}

/// Everything the detail screen shows, pre-formatted.
#[derive(Debug, Clone)]
pub struct PokemonDetail {
    pub pokemon: Arc<Pokemon>,
    /// Pokédex number, e.g. `#025`.
    pub number: String,
    pub description: Option<String>,
    pub genus: Option<String>,
    pub height: String,
    pub weight: String,
    pub stats: Vec<StatLine>,
    pub total_stats: u32,
    pub evolution_chain_id: Option<u32>,
}

impl PokemonDetail {
    /// Builds the view model, picking texts in `language`.
    #[must_use]
    pub fn new(pokemon: Arc<Pokemon>, species: &PokemonSpecies, language: &str) -> Self {
        Self {
            number: pokemon.id().dex_label(),
            description: species.description(language),
            genus: species.genus(language).map(ToString::to_string),
            height: format_height(pokemon.height()),
            weight: format_weight(pokemon.weight()),
            stats: pokemon.stats().iter().map(StatLine::from).collect(),
            total_stats: pokemon.total_base_stats(),
            evolution_chain_id: species.evolution_chain_id(),
            pokemon,
        }
    }
}

/// Display label for an API stat name. Unknown names pass through.
#[must_use]
pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

#[must_use]
pub fn stat_percentage(value: u32) -> u16 {
    let percent = (value.saturating_mul(100) / MAX_BASE_STAT).min(100);
    u16::try_from(percent).unwrap_or(100)
}

/// Decimetres to metres, one decimal.
#[must_use]
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1}m", f64::from(decimetres) / 10.0)
}

/// Hectograms to kilograms, one decimal.
#[must_use]
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1}kg", f64::from(hectograms) / 10.0)
}
