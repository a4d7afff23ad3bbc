//! Core Connect Four game logic: board, win detection, turn phases, and the
//! controller that presentation code drives.

mod board;
mod controller;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS};
pub use controller::{Controller, WinTally};
pub use player::Player;
pub use state::{GameOutcome, GameState, Phase};
pub use win::check_win;
