use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use super::random::random_column;
use super::search::MinimaxSearcher;
use crate::config::EngineConfig;
use crate::error::{ConfigError, SearchError};
use crate::game::Board;

/// The computer's move choice: a random blunder with probability
/// `blunder_probability`, otherwise the minimax recommendation.
pub struct MoveSelector {
    searcher: MinimaxSearcher,
    blunder_probability: f64,
    rng: StdRng,
}

impl MoveSelector {
    pub fn new(searcher: MinimaxSearcher, blunder_probability: f64, rng: StdRng) -> Self {
        MoveSelector {
            searcher,
            blunder_probability,
            rng,
        }
    }

    /// Build from engine settings; seeds the RNG from `seed` when given.
    ///
    /// Rejects settings that fail [`EngineConfig::validate`].
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(
            MinimaxSearcher::new(config.search_depth),
            config.blunder_probability,
            rng,
        ))
    }
}

impl Agent for MoveSelector {
    fn select_column(&mut self, board: &Board) -> Result<usize, SearchError> {
        let roll: f64 = self.rng.random();
        if roll < self.blunder_probability {
            let col = random_column(&mut self.rng, board)?;
            debug!("blunder roll {roll:.3} < {}: random column {col}", self.blunder_probability);
            return Ok(col);
        }

        self.searcher
            .search(board)?
            .column
            .ok_or(SearchError::NoValidColumns)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    fn selector(depth: usize, blunder_probability: f64, seed: u64) -> MoveSelector {
        MoveSelector::from_config(&EngineConfig {
            search_depth: depth,
            blunder_probability,
            seed: Some(seed),
        })
        .unwrap()
    }

    #[test]
    fn rejects_invalid_settings() {
        for (search_depth, blunder_probability) in [(0, 0.4), (5, 1.5), (5, -0.1), (5, f64::NAN)] {
            let result = MoveSelector::from_config(&EngineConfig {
                search_depth,
                blunder_probability,
                seed: Some(1),
            });
            assert!(
                matches!(result, Err(ConfigError::Validation(_))),
                "depth {search_depth}, blunder {blunder_probability}"
            );
        }
    }

    #[test]
    fn never_blunders_at_zero() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "O......",
            "XXX...O",
        ])
        .unwrap();
        let mut agent = selector(5, 0.0, 1);
        for _ in 0..10 {
            assert_eq!(agent.select_column(&board), Ok(3));
        }
    }

    #[test]
    fn zero_blunder_matches_search() {
        let mut board = Board::new();
        board.place(3, Cell::Human).unwrap();
        let expected = MinimaxSearcher::new(4).search(&board).unwrap().column;

        let mut agent = selector(4, 0.0, 99);
        assert_eq!(agent.select_column(&board).ok(), expected);
    }

    #[test]
    fn always_blunders_at_one() {
        // Column 3 would be the searched answer; a certain blunder must
        // still only ever pick open columns, and eventually others.
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(6, Cell::Human).unwrap();
        }
        let mut agent = selector(5, 1.0, 3);
        let mut non_center = 0;
        for _ in 0..50 {
            let col = agent.select_column(&board).unwrap();
            assert!(col < 6, "column {col} is full");
            if col != 3 {
                non_center += 1;
            }
        }
        assert!(non_center > 0);
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new();
        let mut a = selector(3, 0.4, 2024);
        let mut b = selector(3, 0.4, 2024);
        for _ in 0..20 {
            assert_eq!(a.select_column(&board), b.select_column(&board));
        }
    }

    #[test]
    fn full_board_is_error() {
        let mut board = Board::new();
        for col in 0..7 {
            for _ in 0..ROWS {
                board.place(col, Cell::Computer).unwrap();
            }
        }
        assert_eq!(
            selector(3, 0.0, 0).select_column(&board),
            Err(SearchError::NoValidColumns)
        );
        assert_eq!(
            selector(3, 1.0, 0).select_column(&board),
            Err(SearchError::NoValidColumns)
        );
    }
}
