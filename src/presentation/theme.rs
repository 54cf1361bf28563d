//! Colours for type badges, stat bars and chrome.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::application::dto::StatRating;

/// Colour used for type names without an entry in the palette.
pub const FALLBACK_TYPE_COLOR: u32 = 0x77_77_77;

pub const ACCENT: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const MUTED: Color = Color::DarkGray;

const TYPE_COLORS: [(&str, u32); 18] = [
    ("normal", 0xA8_A8_78),
    ("fire", 0xF0_80_30),
    ("water", 0x68_90_F0),
    ("electric", 0xF8_D0_30),
    ("grass", 0x78_C8_50),
    ("ice", 0x98_D8_D8),
    ("fighting", 0xC0_30_28),
    ("poison", 0xA0_40_A0),
    ("ground", 0xE0_C0_68),
    ("flying", 0xA8_90_F0),
    ("psychic", 0xF8_58_88),
    ("bug", 0xA8_B8_20),
    ("rock", 0xB8_A0_38),
    ("ghost", 0x70_58_98),
    ("dragon", 0x70_38_F8),
    ("dark", 0x70_58_48),
    ("steel", 0xB8_B8_D0),
    ("fairy", 0xEE_99_AC),
];

#[must_use]
pub fn u32_to_color(color: u32) -> Color {
    Color::Rgb(
        u8::try_from((color >> 16) & 0xFF).unwrap_or(0),
        u8::try_from((color >> 8) & 0xFF).unwrap_or(0),
        u8::try_from(color & 0xFF).unwrap_or(0),
    )
}

#[must_use]
pub fn type_color(type_name: &str) -> Color {
    let rgb = TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map_or(FALLBACK_TYPE_COLOR, |(_, rgb)| *rgb);
    u32_to_color(rgb)
}

/// A padded, coloured type label such as ` fire `.
#[must_use]
pub fn type_badge(type_name: &str) -> Span<'static> {
    Span::styled(
        format!(" {type_name} "),
        Style::default()
            .bg(type_color(type_name))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

#[must_use]
pub const fn rating_color(rating: StatRating) -> Color {
    match rating {
        StatRating::High => Color::Rgb(0x66, 0xBB, 0x6A),
        StatRating::Medium => Color::Rgb(0xFF, 0xA7, 0x26),
        StatRating::Low => Color::Rgb(0xEF, 0x53, 0x50),
    }
}

/// Uppercases the first letter: `bulbasaur` → `Bulbasaur`.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
