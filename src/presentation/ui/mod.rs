//! UI screens.

mod app;
mod detail_screen;
mod list_screen;

pub use app::App;
pub use detail_screen::{DetailAction, DetailScreen, DetailScreenState, DetailTab};
pub use list_screen::{ListAction, ListMode, ListScreen, ListScreenState};
