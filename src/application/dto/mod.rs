//! Data transfer objects for the application layer.

mod detail_dto;

pub use detail_dto::{
    MAX_BASE_STAT, PokemonDetail, StatLine, StatRating, format_height, format_weight,
    stat_label, stat_percentage,
};
