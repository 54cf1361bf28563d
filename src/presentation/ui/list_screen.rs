//! Catalog list with search, type picker and pagination.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};

use crate::application::services::CatalogState;
use crate::domain::entities::Pokemon;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::{ACCENT, MUTED, capitalize, type_badge, type_color};
use crate::presentation::widgets::{InputAction, PaginationBar, StatusBar, TextInput};

const NAME_COLUMN_WIDTH: usize = 16;

/// Which part of the list screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Browse,
    Search,
    Jump,
    TypePicker,
}

/// What the app should do after a key on the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    None,
    Quit,
    /// Open the detail screen for a raw Pokédex number.
    OpenDetail(String),
    SearchChanged(String),
    ToggleType(String),
    LoadTypeMembers(String),
    ClearFilters,
    PreviousPage,
    NextPage,
    LoadMore,
    Reload,
}

pub struct ListScreenState {
    mode: ListMode,
    list_state: ListState,
    picker_state: ListState,
    search: TextInput,
    jump: TextInput,
}

impl Default for ListScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: ListMode::Browse,
            list_state: ListState::default().with_selected(Some(0)),
            picker_state: ListState::default(),
            search: TextInput::new(" Search ").placeholder("name or number, press /"),
            jump: TextInput::new(" Go to number "),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ListMode {
        self.mode
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Moves the highlight back to the first row of the page.
    pub fn reset_selection(&mut self) {
        self.list_state.select(Some(0));
    }

    /// Clears the search box after filters were reset elsewhere.
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent, catalog: &CatalogState) -> ListAction {
        match self.mode {
            ListMode::Browse => self.handle_browse_key(key, catalog),
            ListMode::Search => self.handle_search_key(key),
            ListMode::Jump => self.handle_jump_key(key),
            ListMode::TypePicker => self.handle_picker_key(key, catalog.available_types()),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, catalog: &CatalogState) -> ListAction {
        if EventHandler::is_quit_event(&key) {
            return ListAction::Quit;
        }

        let page_items = catalog.current_page_items();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                select_previous(&mut self.list_state, page_items.len());
                ListAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                select_next(&mut self.list_state, page_items.len());
                ListAction::None
            }
            KeyCode::Left => ListAction::PreviousPage,
            KeyCode::Right => ListAction::NextPage,
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| page_items.get(i))
                .map_or(ListAction::None, |p| {
                    ListAction::OpenDetail(p.id().to_string())
                }),
            KeyCode::Char('/') => {
                self.mode = ListMode::Search;
                self.search.set_focused(true);
                ListAction::None
            }
            KeyCode::Char('g') => {
                self.mode = ListMode::Jump;
                self.jump.clear();
                self.jump.set_focused(true);
                ListAction::None
            }
            KeyCode::Char('t') => {
                self.mode = ListMode::TypePicker;
                let selected = (!catalog.available_types().is_empty()).then_some(0);
                self.picker_state.select(selected);
                ListAction::None
            }
            KeyCode::Char('c') => {
                self.search.clear();
                ListAction::ClearFilters
            }
            KeyCode::Char('m') => ListAction::LoadMore,
            KeyCode::Char('r') => ListAction::Reload,
            _ => ListAction::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> ListAction {
        match self.search.handle_key(key) {
            InputAction::Changed => ListAction::SearchChanged(self.search.value().to_string()),
            InputAction::Submit | InputAction::Cancel => {
                self.mode = ListMode::Browse;
                self.search.set_focused(false);
                self.reset_selection();
                ListAction::None
            }
            InputAction::None => ListAction::None,
        }
    }

    fn handle_jump_key(&mut self, key: KeyEvent) -> ListAction {
        match self.jump.handle_key(key) {
            InputAction::Submit => {
                self.mode = ListMode::Browse;
                self.jump.set_focused(false);
                ListAction::OpenDetail(self.jump.value().trim().to_string())
            }
            InputAction::Cancel => {
                self.mode = ListMode::Browse;
                self.jump.set_focused(false);
                ListAction::None
            }
            InputAction::Changed | InputAction::None => ListAction::None,
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent, types: &[String]) -> ListAction {
        let highlighted = self.picker_state.selected().and_then(|i| types.get(i)).cloned();

        match key.code {
            KeyCode::Esc | KeyCode::Char('t' | 'q') => {
                self.mode = ListMode::Browse;
                self.reset_selection();
                ListAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                select_previous(&mut self.picker_state, types.len());
                ListAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                select_next(&mut self.picker_state, types.len());
                ListAction::None
            }
            KeyCode::Char(' ') => highlighted.map_or(ListAction::None, ListAction::ToggleType),
            KeyCode::Enter => {
                let action = highlighted.map_or(ListAction::None, ListAction::LoadTypeMembers);
                self.mode = ListMode::Browse;
                self.reset_selection();
                action
            }
            _ => ListAction::None,
        }
    }
}

fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let next = state.selected().map_or(0, |i| if i + 1 >= len { 0 } else { i + 1 });
    state.select(Some(next));
}

fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let previous = state
        .selected()
        .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
    state.select(Some(previous));
}

fn pokemon_row(pokemon: &Pokemon) -> ListItem<'static> {
    let name = capitalize(pokemon.name());
    let mut spans = vec![
        Span::styled(
            format!("{} ", pokemon.id().dex_label()),
            Style::default().fg(MUTED),
        ),
        Span::styled(
            format!("{name:<NAME_COLUMN_WIDTH$}"),
            Style::default().fg(Color::White),
        ),
    ];
    for type_name in pokemon.type_names() {
        spans.push(type_badge(type_name));
        spans.push(Span::raw(" "));
    }
    ListItem::new(Line::from(spans))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// The list screen, rendered against the current catalog.
pub struct ListScreen<'a> {
    catalog: &'a CatalogState,
    status: &'a StatusBar,
}

impl<'a> ListScreen<'a> {
    #[must_use]
    pub const fn new(catalog: &'a CatalogState, status: &'a StatusBar) -> Self {
        Self { catalog, status }
    }

    fn render_filters(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("types: ", Style::default().fg(MUTED))];
        if self.catalog.selected_types().is_empty() {
            spans.push(Span::styled("all", Style::default().fg(MUTED)));
        } else {
            for type_name in self.catalog.selected_types() {
                spans.push(type_badge(type_name));
                spans.push(Span::raw(" "));
            }
        }
        spans.push(Span::styled(
            format!(
                "   loaded {} of {}",
                self.catalog.items().len(),
                self.catalog.total_count()
            ),
            Style::default().fg(MUTED),
        ));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer, state: &mut ListScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Pokédex ");

        let page_items = self.catalog.current_page_items();
        if page_items.is_empty() {
            let message = match self.catalog.error() {
                Some(error) if self.catalog.items().is_empty() => {
                    format!("{error}\n\nPress r to retry.")
                }
                _ if self.catalog.is_loading() => "Loading…".to_string(),
                _ if self.catalog.has_active_filters() => {
                    "No Pokémon match the current filters. Press c to clear them.".to_string()
                }
                _ => "Nothing loaded yet. Press r to load the catalog.".to_string(),
            };
            Paragraph::new(message)
                .style(Style::default().fg(MUTED))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(area, buf);
            return;
        }

        if state.list_state.selected().is_none_or(|i| i >= page_items.len()) {
            state.list_state.select(Some(0));
        }

        let rows: Vec<ListItem> = page_items.iter().map(|p| pokemon_row(p)).collect();
        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }

    fn render_type_picker(&self, area: Rect, buf: &mut Buffer, state: &mut ListScreenState) {
        let area = centered_rect(40, 70, area);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Types ")
            .title_bottom(" space toggle · enter load 20 · esc close ");

        if self.catalog.available_types().is_empty() {
            Paragraph::new("Type list unavailable.")
                .style(Style::default().fg(MUTED))
                .block(block)
                .render(area, buf);
            return;
        }

        let rows: Vec<ListItem> = self
            .catalog
            .available_types()
            .iter()
            .map(|type_name| {
                let checked = self.catalog.selected_types().contains(type_name);
                let marker = if checked { "[x] " } else { "[ ] " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(type_name.clone(), Style::default().fg(type_color(type_name))),
                ]))
            })
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        StatefulWidget::render(list, area, buf, &mut state.picker_state);
    }
}

impl StatefulWidget for ListScreen<'_> {
    type State = ListScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [search_area, filter_area, list_area, pagination_area, status_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        (&state.search).render(search_area, buf);
        self.render_filters(filter_area, buf);
        self.render_list(list_area, buf, state);
        (&PaginationBar::new(self.catalog.pagination())).render(pagination_area, buf);
        self.status.render(status_area, buf);

        match state.mode {
            ListMode::TypePicker => self.render_type_picker(list_area, buf, state),
            ListMode::Jump => {
                let popup = centered_rect(30, 100, list_area);
                let [popup] = Layout::vertical([Constraint::Length(3)])
                    .flex(Flex::Center)
                    .areas(popup);
                Clear.render(popup, buf);
                (&state.jump).render(popup, buf);
            }
            ListMode::Browse | ListMode::Search => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::services::PokedexService;
    use crate::domain::ports::mocks::MockPokedexPort;
    use crate::infrastructure::cache::MemoryResponseCache;
    use crossterm::event::{KeyEventKind, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    async fn loaded_catalog() -> CatalogState {
        let port = MockPokedexPort::new(vec![
            Pokemon::new(1, "bulbasaur").with_types(["grass", "poison"]),
            Pokemon::new(4, "charmander").with_types(["fire"]),
            Pokemon::new(7, "squirtle").with_types(["water"]),
        ])
        .with_types(&["fire", "grass", "water"]);
        let service = PokedexService::new(Arc::new(port), Arc::new(MemoryResponseCache::new()));
        let mut catalog = CatalogState::new(service);
        catalog.load_initial(3).await;
        catalog.load_types().await;
        catalog
    }

    #[tokio::test]
    async fn test_enter_opens_selected_pokemon() {
        let catalog = loaded_catalog().await;
        let mut state = ListScreenState::new();

        state.handle_key(key(KeyCode::Down), &catalog);
        let action = state.handle_key(key(KeyCode::Enter), &catalog);

        assert_eq!(action, ListAction::OpenDetail("4".to_string()));
    }

    #[tokio::test]
    async fn test_selection_wraps() {
        let catalog = loaded_catalog().await;
        let mut state = ListScreenState::new();

        state.handle_key(key(KeyCode::Up), &catalog);

        assert_eq!(state.selected_index(), Some(2));
    }

    #[tokio::test]
    async fn test_search_mode_emits_term_changes() {
        let catalog = loaded_catalog().await;
        let mut state = ListScreenState::new();

        state.handle_key(key(KeyCode::Char('/')), &catalog);
        assert_eq!(state.mode(), ListMode::Search);

        let action = state.handle_key(key(KeyCode::Char('q')), &catalog);
        assert_eq!(action, ListAction::SearchChanged("q".to_string()));

        state.handle_key(key(KeyCode::Esc), &catalog);
        assert_eq!(state.mode(), ListMode::Browse);
    }

    #[tokio::test]
    async fn test_type_picker_toggle_and_load() {
        let catalog = loaded_catalog().await;
        let mut state = ListScreenState::new();

        state.handle_key(key(KeyCode::Char('t')), &catalog);
        assert_eq!(state.mode(), ListMode::TypePicker);

        state.handle_key(key(KeyCode::Down), &catalog);
        let toggle = state.handle_key(key(KeyCode::Char(' ')), &catalog);
        assert_eq!(toggle, ListAction::ToggleType("grass".to_string()));

        let load = state.handle_key(key(KeyCode::Enter), &catalog);
        assert_eq!(load, ListAction::LoadTypeMembers("grass".to_string()));
        assert_eq!(state.mode(), ListMode::Browse);
    }

    #[tokio::test]
    async fn test_jump_submits_raw_input() {
        let catalog = loaded_catalog().await;
        let mut state = ListScreenState::new();

        state.handle_key(key(KeyCode::Char('g')), &catalog);
        state.handle_key(key(KeyCode::Char('2')), &catalog);
        state.handle_key(key(KeyCode::Char('5')), &catalog);
        let action = state.handle_key(key(KeyCode::Enter), &catalog);

        assert_eq!(action, ListAction::OpenDetail("25".to_string()));
        assert_eq!(state.mode(), ListMode::Browse);
    }

    #[tokio::test]
    async fn test_browse_keys() {
        let catalog = loaded_catalog().await;
        let mut state = ListScreenState::new();

        assert_eq!(state.handle_key(key(KeyCode::Right), &catalog), ListAction::NextPage);
        assert_eq!(state.handle_key(key(KeyCode::Left), &catalog), ListAction::PreviousPage);
        assert_eq!(state.handle_key(key(KeyCode::Char('m')), &catalog), ListAction::LoadMore);
        assert_eq!(state.handle_key(key(KeyCode::Char('r')), &catalog), ListAction::Reload);
        assert_eq!(state.handle_key(key(KeyCode::Char('c')), &catalog), ListAction::ClearFilters);
        assert_eq!(state.handle_key(key(KeyCode::Char('q')), &catalog), ListAction::Quit);
    }

    #[tokio::test]
    async fn test_render_shows_current_page() {
        let catalog = loaded_catalog().await;
        let status = StatusBar::info("ready");
        let mut state = ListScreenState::new();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);

        ListScreen::new(&catalog, &status).render(area, &mut buf, &mut state);

        let screen: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(screen.contains("Bulbasaur"));
        assert!(screen.contains("#007"));
        assert!(screen.contains("[1]"));
    }
}
