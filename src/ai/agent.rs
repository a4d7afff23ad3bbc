use crate::error::SearchError;
use crate::game::Board;

/// Anything that can choose the computer's column.
pub trait Agent: Send {
    /// Select a column for the computer on `board`.
    ///
    /// Returns [`SearchError::NoValidColumns`] when the board has no open
    /// column; callers never ask on a full board.
    fn select_column(&mut self, board: &Board) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
