//! # Connect Four Bot
//!
//! Connect Four against a computer opponent. The computer searches with
//! depth-bounded minimax and alpha-beta pruning over a window-scoring
//! heuristic, and blunders into a random column with a configurable
//! probability. A Ratatui terminal front end drives the game controller.
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, turn phases, controller and win tally
//! - [`ai`] — Heuristic, minimax search, blunder-or-search move selector
//! - [`ui`] — Terminal UI adapter over the controller
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
