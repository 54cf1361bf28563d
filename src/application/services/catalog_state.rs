//! Catalog browsing state: loaded items, filters and pagination.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::pokedex_service::PokedexService;
use crate::domain::catalog::{PaginationState, SearchQuery, matches_types};
use crate::domain::entities::{Pokemon, PokemonId};
use crate::domain::errors::ApiError;

/// Number of Pokémon loaded at startup: the first generation.
pub const DEFAULT_INITIAL_LIMIT: u32 = 151;
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Window size used by [`CatalogState::load_more`].
pub const LOAD_MORE_LIMIT: u32 = 20;

/// Single owner of the loaded catalog and the user's browsing choices.
///
/// Filtered and paginated views are recomputed on every read; the only
/// stored page state is `current_page`, which is kept within
/// `1..=total_pages` (or 1 when nothing matches).
pub struct CatalogState {
    service: PokedexService,
    items: Vec<Arc<Pokemon>>,
    /// Entries of the remote list consumed so far. Type members appended out
    /// of list order do not count.
    list_offset: u32,
    total_count: u32,
    current_page: usize,
    page_size: usize,
    search_term: String,
    selected_types: Vec<String>,
    available_types: Vec<String>,
    loading: bool,
    error: Option<String>,
}

impl CatalogState {
    #[must_use]
    pub fn new(service: PokedexService) -> Self {
        Self {
            service,
            items: Vec::new(),
            list_offset: 0,
            total_count: 0,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: String::new(),
            selected_types: Vec::new(),
            available_types: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Sets the initial page size. Zero is ignored.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    #[must_use]
    pub const fn service(&self) -> &PokedexService {
        &self.service
    }

    #[must_use]
    pub fn items(&self) -> &[Arc<Pokemon>] {
        &self.items
    }

    /// Total catalog size reported by the remote.
    /// How far into the remote list the catalog has loaded.
    #[must_use]
    pub const fn list_offset(&self) -> u32 {
        self.list_offset
    }

    #[must_use]
    pub const fn total_count(&self) -> u32 {
        self.total_count
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn selected_types(&self) -> &[String] {
        &self.selected_types
    }

    #[must_use]
    pub fn available_types(&self) -> &[String] {
        &self.available_types
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !SearchQuery::new(&self.search_term).is_blank() || !self.selected_types.is_empty()
    }

    /// Items matching the search term and the type filter, in load order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Arc<Pokemon>> {
        let query = SearchQuery::new(&self.search_term);
        self.items
            .iter()
            .filter(|p| query.matches(p) && matches_types(p, &self.selected_types))
            .collect()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    #[must_use]
    pub fn pagination(&self) -> PaginationState {
        PaginationState::new(self.current_page, self.page_size, self.filtered_count())
    }

    /// The filtered items on the current page.
    #[must_use]
    pub fn current_page_items(&self) -> Vec<Arc<Pokemon>> {
        let filtered = self.filtered();
        let range =
            PaginationState::new(self.current_page, self.page_size, filtered.len()).slice_range();
        filtered[range].iter().map(|p| Arc::clone(p)).collect()
    }

    #[must_use]
    pub fn page_numbers(&self) -> Vec<usize> {
        self.pagination().page_numbers()
    }

    /// Replaces the catalog with the first `limit` Pokémon.
    ///
    /// On failure the error is recorded and the item list is emptied.
    pub async fn load_initial(&mut self, limit: u32) {
        self.loading = true;
        self.error = None;

        match self.fetch_window(0, limit).await {
            Ok((count, pokemon)) => {
                info!(loaded = pokemon.len(), total = count, "Loaded initial catalog");
                self.total_count = count;
                self.list_offset = len_u32(&pokemon);
                self.items = pokemon;
            }
            Err(e) => {
                error!(error = %e, limit, "Failed to load initial catalog");
                self.error = Some(e.to_string());
                self.items.clear();
                self.list_offset = 0;
            }
        }

        self.loading = false;
        self.clamp_page();
    }

    /// Clears the response cache and loads the catalog again.
    pub async fn reload(&mut self, limit: u32) {
        self.service.clear_cache();
        self.load_initial(limit).await;
    }

    /// Refetches enough items to show `page` and moves there if it exists.
    ///
    /// Without filters the window covers exactly `page` pages. Filtering is
    /// client-side, so with filters active the whole remote catalog is
    /// requested. On failure items and page are left untouched.
    pub async fn request_page(&mut self, page: usize) {
        if page < 1 {
            return;
        }

        let wanted = page.saturating_mul(self.page_size);
        let limit = if self.has_active_filters() {
            wanted.max(self.total_count as usize)
        } else {
            wanted
        };
        let limit = u32::try_from(limit).unwrap_or(u32::MAX);

        self.loading = true;
        self.error = None;

        match self.fetch_window(0, limit).await {
            Ok((count, pokemon)) => {
                debug!(page, limit, loaded = pokemon.len(), "Fetched page window");
                self.total_count = count;
                self.list_offset = len_u32(&pokemon);
                self.items = pokemon;
                self.clamp_page();
                if self.pagination().contains(page) {
                    self.current_page = page;
                }
            }
            Err(e) => {
                warn!(error = %e, page, "Failed to fetch page");
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Appends the next [`LOAD_MORE_LIMIT`] Pokémon of the remote list.
    ///
    /// Entries already present (from [`Self::load_type_members`]) are skipped.
    pub async fn load_more(&mut self) {
        let offset = self.list_offset;
        self.loading = true;
        self.error = None;

        match self.fetch_window(offset, LOAD_MORE_LIMIT).await {
            Ok((count, pokemon)) => {
                self.total_count = count;
                self.list_offset = offset.saturating_add(len_u32(&pokemon));
                let added = self.append_new(pokemon);
                debug!(offset, added, "Loaded more Pokémon");
            }
            Err(e) => {
                warn!(error = %e, offset, "Failed to load more Pokémon");
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
        self.clamp_page();
    }

    /// Loads members of a type that are not in the catalog yet, then filters by it.
    pub async fn load_type_members(&mut self, type_name: &str) {
        self.loading = true;
        self.error = None;

        match self.fetch_type_members(type_name).await {
            Ok(pokemon) => {
                let added = self.append_new(pokemon);
                debug!(type_name, added, "Loaded type members");
                self.add_type_filter(type_name);
            }
            Err(e) => {
                warn!(error = %e, type_name, "Failed to load type members");
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Loads the selectable type names. Failures leave the list empty.
    pub async fn load_types(&mut self) {
        match self.service.get_all_types().await {
            Ok(types) => self.available_types = types.to_vec(),
            Err(e) => warn!(error = %e, "Failed to load type list"),
        }
    }

    pub fn update_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Adds a type to the filter set. Blank names are ignored.
    pub fn add_type_filter(&mut self, type_name: &str) {
        if type_name.trim().is_empty() {
            return;
        }
        if !self.selected_types.iter().any(|t| t == type_name) {
            self.selected_types.push(type_name.to_string());
        }
        self.current_page = 1;
    }

    pub fn remove_type_filter(&mut self, type_name: &str) {
        self.selected_types.retain(|t| t != type_name);
        self.current_page = 1;
    }

    pub fn toggle_type_filter(&mut self, type_name: &str) {
        if self.selected_types.iter().any(|t| t == type_name) {
            self.remove_type_filter(type_name);
        } else {
            self.add_type_filter(type_name);
        }
    }

    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.selected_types.clear();
        self.current_page = 1;
    }

    /// Moves to `page` if it exists in the filtered view.
    pub fn go_to_page(&mut self, page: usize) {
        if self.pagination().contains(page) {
            self.current_page = page;
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Changes rows per page and returns to page 1. Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Drops every loaded item and filter.
    pub fn reset(&mut self) {
        self.items.clear();
        self.list_offset = 0;
        self.total_count = 0;
        self.loading = false;
        self.error = None;
        self.clear_filters();
    }

    async fn fetch_window(
        &self,
        offset: u32,
        limit: u32,
    ) -> Result<(u32, Vec<Arc<Pokemon>>), ApiError> {
        let page = self.service.fetch_page(offset, limit).await?;
        let pokemon = self.service.get_pokemon_batch(&page.results).await?;
        Ok((page.count, pokemon))
    }

    async fn fetch_type_members(&self, type_name: &str) -> Result<Vec<Arc<Pokemon>>, ApiError> {
        let members = self.service.get_pokemon_by_type(type_name).await?;
        self.service.get_pokemon_batch(&members).await
    }

    /// Appends the Pokémon whose ids are not loaded yet; returns how many.
    fn append_new(&mut self, pokemon: Vec<Arc<Pokemon>>) -> usize {
        let mut known: HashSet<PokemonId> = self.items.iter().map(|p| p.id()).collect();
        let before = self.items.len();
        self.items
            .extend(pokemon.into_iter().filter(|p| known.insert(p.id())));
        self.items.len() - before
    }

    fn clamp_page(&mut self) {
        let total_pages = self.pagination().total_pages;
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}

fn len_u32(pokemon: &[Arc<Pokemon>]) -> u32 {
    u32::try_from(pokemon.len()).unwrap_or(u32::MAX)
}
