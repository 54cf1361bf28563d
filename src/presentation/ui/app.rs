//! Main application orchestrator.

use crossterm::event::{EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

use crate::application::services::CatalogState;
use crate::application::use_cases::LoadDetailUseCase;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::detail_screen::{DetailAction, DetailScreen, DetailScreenState};
use crate::presentation::ui::list_screen::{ListAction, ListScreen, ListScreenState};
use crate::presentation::widgets::StatusBar;

const LIST_HINTS: &str = "/ search · t types · g go to · ←→ page · m more · r reload · q quit";
const DETAIL_HINTS: &str = "tab/1-3 switch · esc back · q quit";

/// Work that needs the network. Runs between frames, after a loading frame is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    LoadInitial,
    Reload,
    RequestPage(usize),
    LoadMore,
    LoadTypeMembers(String),
    OpenDetail(String),
}

impl Command {
    fn loading_message(&self) -> String {
        match self {
            Self::LoadInitial => "Loading Pokémon…".to_string(),
            Self::Reload => "Reloading catalog…".to_string(),
            Self::RequestPage(page) => format!("Fetching page {page}…"),
            Self::LoadMore => "Loading more Pokémon…".to_string(),
            Self::LoadTypeMembers(type_name) => format!("Loading {type_name} Pokémon…"),
            Self::OpenDetail(raw) => format!("Loading #{raw}…"),
        }
    }
}

enum CurrentScreen {
    List,
    Detail(Box<DetailScreenState>),
}

/// Top-level TUI state: the catalog, the active screen and pending network work.
pub struct App {
    catalog: CatalogState,
    detail_use_case: LoadDetailUseCase,
    initial_limit: u32,
    screen: CurrentScreen,
    list_state: ListScreenState,
    status: StatusBar,
    pending: Option<Command>,
}

impl App {
    #[must_use]
    pub fn new(
        catalog: CatalogState,
        detail_use_case: LoadDetailUseCase,
        initial_limit: u32,
    ) -> Self {
        Self {
            catalog,
            detail_use_case,
            initial_limit,
            screen: CurrentScreen::List,
            list_state: ListScreenState::new(),
            status: StatusBar::new().hints(LIST_HINTS),
            pending: Some(Command::LoadInitial),
        }
    }

    /// # Errors
    /// Returns error if drawing to or reading from the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        loop {
            if let Some(command) = self.pending.take() {
                self.status = StatusBar::loading(command.loading_message());
                terminal.draw(|frame| self.render(frame))?;
                self.execute(command).await;
            }

            terminal.draw(|frame| self.render(frame))?;

            let Some(event) = terminal_events.next().await else {
                break;
            };
            let Some(key) = EventHandler::key_press(&event?) else {
                continue;
            };

            if self.handle_key(key) == EventResult::Exit {
                break;
            }
        }

        info!(
            cache = %self.catalog.service().cache_stats(),
            "Application exiting normally"
        );
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match &self.screen {
            CurrentScreen::List => frame.render_stateful_widget(
                ListScreen::new(&self.catalog, &self.status),
                frame.area(),
                &mut self.list_state,
            ),
            CurrentScreen::Detail(state) => {
                frame.render_widget(DetailScreen::new(state, &self.status), frame.area());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_interrupt(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Detail(state) => match state.handle_key(key) {
                DetailAction::Back => {
                    self.screen = CurrentScreen::List;
                    self.status = self.list_status();
                    EventResult::Consumed
                }
                DetailAction::Quit => EventResult::Exit,
                DetailAction::None => EventResult::Continue,
            },
            CurrentScreen::List => {
                let action = self.list_state.handle_key(key, &self.catalog);
                self.apply_list_action(action)
            }
        }
    }

    fn apply_list_action(&mut self, action: ListAction) -> EventResult {
        match action {
            ListAction::None => return EventResult::Continue,
            ListAction::Quit => return EventResult::Exit,
            ListAction::OpenDetail(raw) => self.pending = Some(Command::OpenDetail(raw)),
            ListAction::LoadTypeMembers(type_name) => {
                self.pending = Some(Command::LoadTypeMembers(type_name));
            }
            ListAction::LoadMore => self.pending = Some(Command::LoadMore),
            ListAction::Reload => self.pending = Some(Command::Reload),
            ListAction::SearchChanged(term) => {
                self.catalog.update_search_term(term);
                self.list_state.reset_selection();
            }
            ListAction::ToggleType(type_name) => self.catalog.toggle_type_filter(&type_name),
            ListAction::ClearFilters => {
                self.catalog.clear_filters();
                self.list_state.clear_search();
                self.list_state.reset_selection();
            }
            ListAction::PreviousPage => {
                self.catalog.previous_page();
                self.list_state.reset_selection();
            }
            ListAction::NextPage => {
                if !self.next_page() {
                    self.status = StatusBar::warning("Already on the last page").hints(LIST_HINTS);
                    return EventResult::Consumed;
                }
            }
        }

        if self.pending.is_none() {
            self.status = self.list_status();
        }
        EventResult::Consumed
    }

    /// Advances within the loaded items, or queues a fetch of the next page
    /// when the last loaded page is showing and the remote has more.
    /// Returns false when there is nowhere to go.
    fn next_page(&mut self) -> bool {
        let pagination = self.catalog.pagination();
        if pagination.has_next() {
            self.catalog.next_page();
            self.list_state.reset_selection();
            return true;
        }

        if !self.catalog.has_active_filters()
            && self.catalog.list_offset() < self.catalog.total_count()
        {
            debug!(page = pagination.current_page + 1, "Next page is not loaded yet");
            self.pending = Some(Command::RequestPage(pagination.current_page + 1));
            return true;
        }
        false
    }

    async fn execute(&mut self, command: Command) {
        debug!(?command, "Executing command");

        match command {
            Command::LoadInitial => {
                self.catalog.load_types().await;
                self.catalog.load_initial(self.initial_limit).await;
            }
            Command::Reload => {
                self.catalog.reload(self.initial_limit).await;
                self.catalog.load_types().await;
            }
            Command::RequestPage(page) => self.catalog.request_page(page).await,
            Command::LoadMore => self.catalog.load_more().await,
            Command::LoadTypeMembers(type_name) => {
                self.catalog.load_type_members(&type_name).await;
            }
            Command::OpenDetail(raw) => {
                self.open_detail(&raw).await;
                return;
            }
        }

        self.list_state.reset_selection();
        self.status = self.list_status();
    }

    async fn open_detail(&mut self, raw: &str) {
        match self.detail_use_case.execute(raw).await {
            Ok(detail) => {
                info!(id = %detail.pokemon.id(), name = detail.pokemon.name(), "Opened detail");
                self.screen = CurrentScreen::Detail(Box::new(DetailScreenState::new(detail)));
                self.status = StatusBar::info("").hints(DETAIL_HINTS);
            }
            Err(e) => {
                warn!(raw, error = %e, "Failed to open detail");
                self.screen = CurrentScreen::List;
                self.status = StatusBar::error(e.to_string()).hints(LIST_HINTS);
            }
        }
    }

    fn list_status(&self) -> StatusBar {
        let status = match self.catalog.error() {
            Some(error) => StatusBar::error(error),
            None => StatusBar::info(format!(
                "{} loaded · {} shown",
                self.catalog.items().len(),
                self.catalog.filtered_count()
            )),
        };
        status.hints(LIST_HINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::services::PokedexService;
    use crate::domain::entities::{Pokemon, PokemonSpecies};
    use crate::domain::ports::mocks::MockPokedexPort;
    use crate::infrastructure::cache::MemoryResponseCache;
    use crate::presentation::widgets::StatusLevel;
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn app(count: u32, initial_limit: u32) -> App {
        let mut port = MockPokedexPort::new(
            (1..=count)
                .map(|id| Pokemon::new(id, format!("mon-{id}")).with_types(["normal"]))
                .collect(),
        );
        for id in 1..=count {
            port = port.with_species(id, PokemonSpecies::default());
        }
        let service = PokedexService::new(Arc::new(port), Arc::new(MemoryResponseCache::new()));
        let catalog = CatalogState::new(service.clone()).with_page_size(5);
        App::new(catalog, LoadDetailUseCase::new(service, "en"), initial_limit)
    }

    async fn started(count: u32, initial_limit: u32) -> App {
        let mut app = app(count, initial_limit);
        let command = app.pending.take().unwrap();
        app.execute(command).await;
        app
    }

    #[tokio::test]
    async fn test_startup_loads_catalog() {
        let app = started(12, 10).await;

        assert_eq!(app.catalog.items().len(), 10);
        assert_eq!(app.status.text(), "10 loaded · 10 shown");
    }

    #[tokio::test]
    async fn test_open_and_close_detail() {
        let mut app = started(12, 10).await;

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.pending, Some(Command::OpenDetail("2".to_string())));

        let command = app.pending.take().unwrap();
        app.execute(command).await;
        assert!(matches!(app.screen, CurrentScreen::Detail(_)));

        assert_eq!(app.handle_key(key(KeyCode::Esc)), EventResult::Consumed);
        assert!(matches!(app.screen, CurrentScreen::List));
    }

    #[tokio::test]
    async fn test_invalid_jump_stays_on_list_with_error() {
        let mut app = started(3, 3).await;

        app.execute(Command::OpenDetail("abc".to_string())).await;

        assert!(matches!(app.screen, CurrentScreen::List));
        assert_eq!(app.status.current_level(), StatusLevel::Error);
    }

    #[tokio::test]
    async fn test_next_page_past_loaded_items_requests_more() {
        let mut app = started(12, 10).await;

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.catalog.current_page(), 2);
        assert_eq!(app.pending, None);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.pending, Some(Command::RequestPage(3)));

        let command = app.pending.take().unwrap();
        app.execute(command).await;
        assert_eq!(app.catalog.items().len(), 12);
        assert_eq!(app.catalog.current_page(), 3);
    }

    #[tokio::test]
    async fn test_next_page_on_last_page_warns() {
        let mut app = started(5, 5).await;

        app.handle_key(key(KeyCode::Right));

        assert_eq!(app.pending, None);
        assert_eq!(app.catalog.current_page(), 1);
        assert_eq!(app.status.current_level(), StatusLevel::Warning);
    }

    #[tokio::test]
    async fn test_ctrl_c_exits_from_search_mode() {
        let mut app = started(3, 3).await;
        app.handle_key(key(KeyCode::Char('/')));

        let ctrl_c = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );

        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_search_updates_status() {
        let mut app = started(12, 12).await;
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('1')));

        assert_eq!(app.catalog.search_term(), "1");
        assert_eq!(app.status.text(), "12 loaded · 4 shown");
    }
}
