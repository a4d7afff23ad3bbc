//! The computer opponent: heuristic evaluation, minimax search with
//! alpha-beta pruning, and the blunder-or-search move selector.

mod agent;
pub mod heuristic;
mod random;
pub mod search;
mod selector;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use random::RandomAgent;
pub use search::{MinimaxSearcher, SearchOutcome, DEFAULT_DEPTH};
pub use selector::MoveSelector;
