//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// Palette and text helpers.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
