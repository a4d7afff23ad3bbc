use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::error::SearchError;
use crate::game::Board;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random open column, shared with the blunder path of
/// [`super::MoveSelector`].
pub(crate) fn random_column<R: Rng>(rng: &mut R, board: &Board) -> Result<usize, SearchError> {
    let columns = board.valid_columns();
    if columns.is_empty() {
        return Err(SearchError::NoValidColumns);
    }
    Ok(columns[rng.random_range(0..columns.len())])
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board) -> Result<usize, SearchError> {
        random_column(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
