//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The computer is the maximizing side. There is no separate win check at
//! interior nodes: a completed four only shows up through the heuristic's
//! window bonus once the search reaches its horizon.

use log::debug;

use super::heuristic::{Heuristic, WindowHeuristic};
use crate::error::SearchError;
use crate::game::{Board, Player};

/// Default number of plies searched.
pub const DEFAULT_DEPTH: usize = 5;

/// Result of a search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub score: i32,
    /// Best column, or `None` at a leaf.
    pub column: Option<usize>,
    /// Positions visited, including the root.
    pub nodes: usize,
}

/// Minimax searcher with alpha-beta pruning.
pub struct MinimaxSearcher {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxSearcher {
    pub fn new(depth: usize) -> Self {
        MinimaxSearcher {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxSearcher { depth, heuristic }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Search for the computer's best column.
    ///
    /// Works on a private copy of `board`; the caller's board is untouched.
    pub fn search(&self, board: &Board) -> Result<SearchOutcome, SearchError> {
        if board.valid_columns().is_empty() {
            return Err(SearchError::NoValidColumns);
        }

        let mut scratch = *board;
        let mut nodes = 0;
        let (score, column) =
            self.alpha_beta(&mut scratch, self.depth, true, i32::MIN, i32::MAX, &mut nodes);
        debug_assert_eq!(&scratch, board);

        debug!(
            "minimax depth {}: score {score}, column {column:?}, {nodes} nodes",
            self.depth
        );
        Ok(SearchOutcome {
            score,
            column,
            nodes,
        })
    }

    /// Every placement made here is lifted again before the next sibling is
    /// tried, so `board` leaves this call exactly as it entered.
    fn alpha_beta(
        &self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut usize,
    ) -> (i32, Option<usize>) {
        *nodes += 1;

        let valid = board.valid_columns();
        if depth == 0 || valid.is_empty() {
            return (self.heuristic.evaluate(board), None);
        }

        let mover = if maximizing { Player::Computer } else { Player::Human };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_column = None;

        for col in valid {
            if board.place(col, mover.to_cell()).is_err() {
                continue;
            }
            let (score, _) = self.alpha_beta(board, depth - 1, !maximizing, alpha, beta, nodes);
            board.lift(col);

            if maximizing {
                if score > best_score || best_column.is_none() {
                    best_score = score;
                    best_column = Some(col);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score || best_column.is_none() {
                    best_score = score;
                    best_column = Some(col);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_column)
    }
}

impl Default for MinimaxSearcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS};
    use proptest::prelude::*;

    /// Plain minimax without pruning, for comparison.
    fn minimax(board: &mut Board, depth: usize, maximizing: bool) -> i32 {
        let valid = board.valid_columns();
        if depth == 0 || valid.is_empty() {
            return WindowHeuristic.evaluate(board);
        }
        let mover = if maximizing { Cell::Computer } else { Cell::Human };
        let scores = valid.into_iter().map(|col| {
            board.place(col, mover).unwrap();
            let score = minimax(board, depth - 1, !maximizing);
            board.lift(col);
            score
        });
        let scores: Vec<i32> = scores.collect();
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    fn reachable_board(moves: &[usize]) -> Board {
        let mut board = Board::new();
        let mut cell = Cell::Human;
        for &col in moves {
            if board.place(col, cell).is_ok() {
                cell = if cell == Cell::Human { Cell::Computer } else { Cell::Human };
            }
        }
        board
    }

    #[test]
    fn full_board_is_contract_violation() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..6 {
                board.place(col, Cell::Human).unwrap();
            }
        }
        assert_eq!(
            MinimaxSearcher::new(3).search(&board),
            Err(SearchError::NoValidColumns)
        );
    }

    #[test]
    fn returns_a_valid_column() {
        let board = Board::from_rows(&[
            "XOXOXO.",
            "XOXOXOX",
            "OXOXOXO",
            "OXOXOXO",
            "XOXOXOX",
            "XOXOXOX",
        ])
        .unwrap();
        let outcome = MinimaxSearcher::new(5).search(&board).unwrap();
        assert_eq!(outcome.column, Some(6));
    }

    #[test]
    fn empty_board_prefers_center() {
        let outcome = MinimaxSearcher::new(1).search(&Board::new()).unwrap();
        assert_eq!(outcome.column, Some(3));
        assert_eq!(outcome.score, 3);
    }

    struct Flat;

    impl Heuristic for Flat {
        fn evaluate(&self, _board: &Board) -> i32 {
            0
        }
    }

    #[test]
    fn ties_go_to_lowest_column() {
        let mut board = Board::new();
        for _ in 0..6 {
            board.place(0, Cell::Human).unwrap();
        }
        let searcher = MinimaxSearcher::with_heuristic(3, Box::new(Flat));
        assert_eq!(searcher.depth(), 3);
        let outcome = searcher.search(&board).unwrap();
        assert_eq!(outcome.column, Some(1));
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn depth_one_counts_every_child() {
        let outcome = MinimaxSearcher::new(1).search(&Board::new()).unwrap();
        assert_eq!(outcome.nodes, 1 + COLS);
    }

    #[test]
    fn leaves_input_board_untouched() {
        let board = reachable_board(&[3, 3, 2, 4, 4]);
        let copy = board;
        MinimaxSearcher::new(4).search(&board).unwrap();
        assert_eq!(board, copy);
    }

    #[test]
    fn blocks_open_three() {
        // Human threatens to complete the bottom row at column 3.
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "O......",
            "XXX...O",
        ])
        .unwrap();
        let outcome = MinimaxSearcher::new(DEFAULT_DEPTH).search(&board).unwrap();
        assert_eq!(outcome.column, Some(3));
    }

    #[test]
    fn completes_vertical_four() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "O......",
            "O...X..",
            "O..XX..",
        ])
        .unwrap();
        let outcome = MinimaxSearcher::new(DEFAULT_DEPTH).search(&board).unwrap();
        assert_eq!(outcome.column, Some(0));
    }

    #[test]
    fn pruning_matches_plain_minimax_on_opening() {
        let board = reachable_board(&[3, 2, 3, 4]);
        let pruned = MinimaxSearcher::new(4).search(&board).unwrap();
        let mut scratch = board;
        assert_eq!(pruned.score, minimax(&mut scratch, 4, true));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_pruning_preserves_score(
            moves in prop::collection::vec(0usize..COLS, 0..30),
            depth in 1usize..=4,
        ) {
            let board = reachable_board(&moves);
            prop_assume!(!board.is_full());

            let pruned = MinimaxSearcher::new(depth).search(&board).unwrap();
            let mut scratch = board;
            prop_assert_eq!(pruned.score, minimax(&mut scratch, depth, true), "\n{}", board);
            prop_assert_eq!(scratch, board);
        }

        #[test]
        fn prop_search_is_deterministic(moves in prop::collection::vec(0usize..COLS, 0..30)) {
            let board = reachable_board(&moves);
            prop_assume!(!board.is_full());

            let searcher = MinimaxSearcher::new(3);
            let first = searcher.search(&board).unwrap();
            let second = searcher.search(&board).unwrap();
            prop_assert_eq!(first, second);
            let column = first.column.unwrap();
            prop_assert!(board.valid_columns().contains(&column));
        }
    }
}
