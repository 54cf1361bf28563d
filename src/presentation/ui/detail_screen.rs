//! Pokémon detail screen with About, Stats and Evolution tabs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget, Wrap},
};

use crate::application::dto::{MAX_BASE_STAT, PokemonDetail, StatLine};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::{ACCENT, MUTED, capitalize, rating_color, type_badge};
use crate::presentation::widgets::StatusBar;

const STAT_BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    About,
    Stats,
    Evolution,
}

impl DetailTab {
    const ALL: [Self; 3] = [Self::About, Self::Stats, Self::Evolution];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "1 About",
            Self::Stats => "2 Stats",
            Self::Evolution => "3 Evolution",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Stats => 1,
            Self::Evolution => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    None,
    Back,
    Quit,
}

pub struct DetailScreenState {
    detail: PokemonDetail,
    tab: DetailTab,
}

impl DetailScreenState {
    #[must_use]
    pub fn new(detail: PokemonDetail) -> Self {
        Self {
            detail,
            tab: DetailTab::default(),
        }
    }

    #[must_use]
    pub const fn detail(&self) -> &PokemonDetail {
        &self.detail
    }

    #[must_use]
    pub const fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DetailAction {
        if EventHandler::is_interrupt(&key) {
            return DetailAction::Quit;
        }
        if EventHandler::is_back_event(&key) {
            return DetailAction::Back;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Right => self.tab = self.tab.next(),
            KeyCode::BackTab | KeyCode::Left => self.tab = self.tab.previous(),
            KeyCode::Char('1') => self.tab = DetailTab::About,
            KeyCode::Char('2') => self.tab = DetailTab::Stats,
            KeyCode::Char('3') => self.tab = DetailTab::Evolution,
            KeyCode::Char('q') => return DetailAction::Quit,
            _ => {}
        }
        DetailAction::None
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(format!("{text:<10}"), Style::default().fg(MUTED))
}

fn about_lines(detail: &PokemonDetail) -> Vec<Line<'_>> {
    let pokemon = &detail.pokemon;
    let mut lines = vec![
        Line::from(
            detail
                .description
                .as_deref()
                .unwrap_or("No description available."),
        ),
        Line::from(""),
        Line::from(vec![label("Height"), Span::raw(detail.height.as_str())]),
        Line::from(vec![label("Weight"), Span::raw(detail.weight.as_str())]),
    ];

    let abilities: Vec<String> = pokemon
        .abilities()
        .iter()
        .map(|a| {
            if a.is_hidden {
                format!("{} (hidden)", a.name)
            } else {
                a.name.clone()
            }
        })
        .collect();
    if !abilities.is_empty() {
        lines.push(Line::from(vec![label("Abilities"), Span::raw(abilities.join(", "))]));
    }

    if let Some(artwork) = pokemon.sprites().preferred() {
        lines.push(Line::from(vec![
            label("Artwork"),
            Span::styled(artwork, Style::default().fg(Color::Blue)),
        ]));
    }

    lines
}

fn stat_line(stat: &StatLine) -> Line<'_> {
    let filled = STAT_BAR_WIDTH * usize::from(stat.percentage) / 100;
    let color = rating_color(stat.rating);
    Line::from(vec![
        Span::styled(format!("{:<9}", stat.label), Style::default().fg(MUTED)),
        Span::styled(
            format!("{:>3} ", stat.value),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(STAT_BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn stats_lines(detail: &PokemonDetail) -> Vec<Line<'_>> {
    let mut lines: Vec<Line> = detail.stats.iter().map(stat_line).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<9}", "Total"), Style::default().fg(MUTED)),
        Span::styled(
            detail.total_stats.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("bars are scaled to {MAX_BASE_STAT}"),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn evolution_lines(detail: &PokemonDetail) -> Vec<Line<'_>> {
    let species = detail.pokemon.species();
    let mut lines = vec![Line::from(vec![
        label("Species"),
        Span::raw(capitalize(&species.name)),
    ])];
    match detail.evolution_chain_id {
        Some(id) => lines.push(Line::from(vec![
            label("Chain"),
            Span::styled(format!("#{id}"), Style::default().fg(ACCENT)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "No evolution data.",
            Style::default().fg(MUTED),
        ))),
    }
    lines
}

pub struct DetailScreen<'a> {
    state: &'a DetailScreenState,
    status: &'a StatusBar,
}

impl<'a> DetailScreen<'a> {
    #[must_use]
    pub const fn new(state: &'a DetailScreenState, status: &'a StatusBar) -> Self {
        Self { state, status }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let detail = &self.state.detail;
        let mut title = vec![
            Span::styled(format!("{} ", detail.number), Style::default().fg(MUTED)),
            Span::styled(
                capitalize(detail.pokemon.name()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(genus) = &detail.genus {
            title.push(Span::styled(format!("  {genus}"), Style::default().fg(MUTED)));
        }

        let mut badges = Vec::new();
        for type_name in detail.pokemon.type_names() {
            badges.push(type_badge(type_name));
            badges.push(Span::raw(" "));
        }

        Paragraph::new(vec![Line::from(title), Line::from(badges)])
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}

impl Widget for DetailScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, tabs_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(header_area, buf);

        Tabs::new(DetailTab::ALL.iter().map(|t| t.title()))
            .select(self.state.tab.index())
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .render(tabs_area, buf);

        let detail = &self.state.detail;
        let lines = match self.state.tab {
            DetailTab::About => about_lines(detail),
            DetailTab::Stats => stats_lines(detail),
            DetailTab::Evolution => evolution_lines(detail),
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP))
            .render(body_area, buf);

        self.status.render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::entities::{Pokemon, PokemonSpecies, PokemonStat};
    use crossterm::event::{KeyEventKind, KeyModifiers};
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn state() -> DetailScreenState {
        let pokemon = Pokemon::new(25, "pikachu")
            .with_types(["electric"])
            .with_stats(vec![PokemonStat::new("speed", 90), PokemonStat::new("hp", 35)])
            .with_measurements(4, 60);
        let detail = PokemonDetail::new(Arc::new(pokemon), &PokemonSpecies::default(), "en");
        DetailScreenState::new(detail)
    }

    #[test_case(KeyCode::Char('2'), DetailTab::Stats)]
    #[test_case(KeyCode::Char('3'), DetailTab::Evolution)]
    #[test_case(KeyCode::Tab, DetailTab::Stats ; "tab_cycles_forward")]
    #[test_case(KeyCode::BackTab, DetailTab::Evolution ; "backtab_wraps")]
    fn test_tab_switching(code: KeyCode, expected: DetailTab) {
        let mut state = state();

        assert_eq!(state.handle_key(key(code)), DetailAction::None);
        assert_eq!(state.tab(), expected);
    }

    #[test_case(KeyCode::Esc, DetailAction::Back)]
    #[test_case(KeyCode::Backspace, DetailAction::Back)]
    #[test_case(KeyCode::Char('q'), DetailAction::Quit)]
    fn test_navigation_keys(code: KeyCode, expected: DetailAction) {
        assert_eq!(state().handle_key(key(code)), expected);
    }

    #[test]
    fn test_render_stats_tab() {
        let mut state = state();
        state.handle_key(key(KeyCode::Char('2')));
        let status = StatusBar::info("");
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);

        DetailScreen::new(&state, &status).render(area, &mut buf);

        let screen: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(screen.contains("#025"));
        assert!(screen.contains("Pikachu"));
        assert!(screen.contains("Speed"));
        assert!(screen.contains("Total    125"));
    }
}
