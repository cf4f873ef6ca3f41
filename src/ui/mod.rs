//! Terminal UI: a hot-seat game view for two players sharing a keyboard.

mod app;
mod game_view;

pub use app::App;
