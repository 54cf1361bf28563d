//! Page selector line under the catalog list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::PaginationState;
use crate::presentation::theme::ACCENT;

/// Renders `‹ 3 4 [5] 6 7 ›  page 5/12`.
pub struct PaginationBar {
    state: PaginationState,
    page_numbers: Vec<usize>,
}

impl PaginationBar {
    #[must_use]
    pub fn new(state: PaginationState) -> Self {
        Self {
            page_numbers: state.page_numbers(),
            state,
        }
    }

    fn arrow(symbol: &'static str, enabled: bool) -> Span<'static> {
        let color = if enabled { Color::White } else { Color::DarkGray };
        Span::styled(symbol, Style::default().fg(color))
    }

    fn line(&self) -> Line<'static> {
        if self.state.total_pages == 0 {
            return Line::from(Span::styled(
                "no results",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut spans = vec![Self::arrow("‹ ", self.state.has_previous())];
        for page in &self.page_numbers {
            if *page == self.state.current_page {
                spans.push(Span::styled(
                    format!("[{page}]"),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(format!(" {page} ")));
            }
        }
        spans.push(Self::arrow(" ›", self.state.has_next()));
        spans.push(Span::styled(
            format!(
                "  page {}/{} · {} shown",
                self.state.current_page, self.state.total_pages, self.state.total_items
            ),
            Style::default().fg(Color::DarkGray),
        ));

        Line::from(spans)
    }
}

impl Widget for &PaginationBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
