use log::debug;

use super::win::check_win;
use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Whose input the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingComputer,
    GameOver(GameOutcome),
}

impl Phase {
    /// The player expected to move, if any
    pub fn to_move(self) -> Option<Player> {
        match self {
            Phase::AwaitingHuman => Some(Player::Human),
            Phase::AwaitingComputer => Some(Player::Computer),
            Phase::GameOver(_) => None,
        }
    }
}

/// Board plus turn phase. Owned by the controller; the board is only
/// mutated through [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    phase: Phase,
    last_move: Option<(usize, usize)>,
}

impl GameState {
    /// Create initial game state. The human moves first.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// (row, col) of the most recent mark
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::GameOver(outcome) => outcome,
            _ => GameOutcome::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Place `player`'s mark in `column` and advance the phase.
    ///
    /// Rejected moves leave the state untouched.
    pub fn apply_move(&mut self, player: Player, column: usize) -> Result<GameOutcome, MoveError> {
        match self.phase.to_move() {
            None => return Err(MoveError::GameOver),
            Some(expected) if expected != player => {
                return Err(MoveError::IllegalTurn {
                    attempted: player,
                    phase: self.phase,
                })
            }
            Some(_) => {}
        }

        let row = self.board.place(column, player.to_cell())?;
        self.last_move = Some((row, column));
        debug!("{} played column {column} (row {row})", player.name());

        let outcome = if check_win(&self.board, row, column, player) {
            GameOutcome::Winner(player)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        };

        self.phase = match outcome {
            GameOutcome::InProgress => match player {
                Player::Human => Phase::AwaitingComputer,
                Player::Computer => Phase::AwaitingHuman,
            },
            terminal => Phase::GameOver(terminal),
        };

        Ok(outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
