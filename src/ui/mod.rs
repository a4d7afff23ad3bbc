//! Terminal UI: a thin adapter that turns key presses into controller calls
//! and renders the board, turn status and win tally.

mod app;
mod game_view;

pub use app::App;
