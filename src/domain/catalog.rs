use crate::domain::entities::Pokemon;

/// Maximum number of page links shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A normalized search term: trimmed and lowercased once, matched many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            term: raw.trim().to_lowercase(),
        }
    }

    /// Blank queries match everything.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-insensitive substring on the name, or substring on the decimal ID.
    #[must_use]
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        self.is_blank()
            || pokemon.name().to_lowercase().contains(&self.term)
            || pokemon.id().to_string().contains(&self.term)
    }
}

/// Returns whether `pokemon` carries any of `types`. An empty set matches everything.
#[must_use]
pub fn matches_types(pokemon: &Pokemon, types: &[String]) -> bool {
    types.is_empty() || types.iter().any(|t| pokemon.has_type(t))
}

/// Read-only pagination descriptor over the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Number of items after filtering.
    pub total_items: usize,
}

impl PaginationState {
    #[must_use]
    pub const fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages: total_items.div_ceil(page_size),
            page_size,
            total_items,
        }
    }

    #[must_use]
    pub const fn contains(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Index range of the current page within the filtered set.
    #[must_use]
    pub fn slice_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page.saturating_sub(1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Page numbers to display, at most [`MAX_VISIBLE_PAGES`], centred on the current page.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<usize> {
        if self.total_pages <= MAX_VISIBLE_PAGES {
            return (1..=self.total_pages).collect();
        }

        let mut start = self.current_page.saturating_sub(2).max(1);
        let end = (start + MAX_VISIBLE_PAGES - 1).min(self.total_pages);

        if end - start < MAX_VISIBLE_PAGES - 1 {
            start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }

        (start..=end).collect()
    }
}
