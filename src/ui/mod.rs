//! Terminal UI: the event-loop [`App`] and the game view that renders the
//! board, status line, and end-of-game dialog.

mod app;
mod game_view;

pub use app::App;
