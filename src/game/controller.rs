use log::{debug, error, info};

use super::state::{GameOutcome, GameState, Phase};
use super::{Board, Player};
use crate::ai::{Agent, MoveSelector};
use crate::config::EngineConfig;
use crate::error::{ConfigError, MoveError};

/// Games won by each side since the controller was built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinTally {
    pub human_wins: u32,
    pub computer_wins: u32,
}

/// Drives one session: turn alternation, the computer's replies, and the
/// win tally. Presentation code talks to the game only through this type.
pub struct Controller {
    state: GameState,
    computer: Box<dyn Agent>,
    tally: WinTally,
}

impl Controller {
    pub fn new(computer: Box<dyn Agent>) -> Self {
        Controller {
            state: GameState::initial(),
            computer,
            tally: WinTally::default(),
        }
    }

    /// Controller whose computer is a [`MoveSelector`] built from `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Box::new(MoveSelector::from_config(config)?)))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.state.last_move()
    }

    pub fn computer_name(&self) -> &str {
        self.computer.name()
    }

    /// Play the human's move in `column`.
    ///
    /// An `Err` means the move was rejected and nothing changed.
    pub fn on_human_move(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        self.play(Player::Human, column)
    }

    /// Let the computer choose and play its move. Returns the column played
    /// along with the resulting outcome.
    pub fn on_computer_turn(&mut self) -> Result<(usize, GameOutcome), MoveError> {
        if self.state.phase() != Phase::AwaitingComputer {
            let err = self.reject(Player::Computer);
            return Err(err);
        }

        let column = self.computer.select_column(self.state.board()).map_err(|e| {
            error!("{} failed on\n{}: {e}", self.computer.name(), self.state.board());
            MoveError::from(e)
        })?;
        let outcome = self.play(Player::Computer, column)?;
        Ok((column, outcome))
    }

    /// Start a new game. The tally is kept.
    pub fn on_reset(&mut self) {
        debug!("game reset");
        self.state = GameState::initial();
    }

    pub fn win_tally(&self) -> WinTally {
        self.tally
    }

    fn play(&mut self, player: Player, column: usize) -> Result<GameOutcome, MoveError> {
        let outcome = self.state.apply_move(player, column).map_err(|e| {
            debug!("rejected {} move in column {column}: {e}", player.name());
            e
        })?;

        match outcome {
            GameOutcome::Winner(Player::Human) => self.tally.human_wins += 1,
            GameOutcome::Winner(Player::Computer) => self.tally.computer_wins += 1,
            GameOutcome::Draw | GameOutcome::InProgress => {}
        }
        if outcome.is_terminal() {
            info!(
                "game over: {outcome:?} (tally {}-{})",
                self.tally.human_wins, self.tally.computer_wins
            );
        }

        Ok(outcome)
    }

    fn reject(&self, attempted: Player) -> MoveError {
        let err = match self.state.phase() {
            Phase::GameOver(_) => MoveError::GameOver,
            phase => MoveError::IllegalTurn { attempted, phase },
        };
        debug!("rejected {} turn: {err}", attempted.name());
        err
    }
}
