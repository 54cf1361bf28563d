//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// A request is in flight.
    Loading,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Loading => Color::Yellow,
            Self::Warning => Color::LightYellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line bar with a message on the left and key hints on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    message: String,
    hints: String,
    level: StatusLevel,
}

impl StatusBar {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            hints: String::new(),
            level: StatusLevel::Info,
        }
    }

    #[must_use]
    pub fn message(mut self, content: impl Into<String>) -> Self {
        self.message = content.into();
        self
    }

    /// Sets the right-aligned key hints.
    #[must_use]
    pub fn hints(mut self, content: impl Into<String>) -> Self {
        self.hints = content.into();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Info)
    }

    #[must_use]
    pub fn loading(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Loading)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Warning)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Error)
    }

    #[must_use]
    pub const fn current_level(&self) -> StatusLevel {
        self.level
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.message
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let hint_style = Style::default().fg(Color::DarkGray);

        let width = area.width as usize;
        let message_width = self.message.width();
        let hints_width = self.hints.width();

        let mut spans = vec![Span::styled(self.message.as_str(), style)];

        // Hints are dropped before the message is truncated.
        if !self.hints.is_empty() && message_width + 1 + hints_width <= width {
            let padding = width - message_width - hints_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(self.hints.as_str(), hint_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
