mod input;
mod pagination_bar;
mod status_bar;

pub use input::{InputAction, TextInput};
pub use pagination_bar::PaginationBar;
pub use status_bar::{StatusBar, StatusLevel};
