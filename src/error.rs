use std::path::PathBuf;

use crate::game::{Phase, Player};

/// Reasons a move is rejected. A rejected move never changes game state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range or full")]
    InvalidColumn(usize),

    #[error("{} cannot move while the game is {:?}", .attempted.name(), .phase)]
    IllegalTurn { attempted: Player, phase: Phase },

    #[error("game is over")]
    GameOver,

    #[error("computer failed to choose a move: {0}")]
    Search(#[from] SearchError),
}

/// Errors raised by the computer's move choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search invoked on a board with no valid columns")]
    NoValidColumns,
}

/// Reasons an ASCII board rendering fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, got {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: unknown cell symbol '{symbol}'")]
    UnknownSymbol { row: usize, symbol: char },

    #[error("column {col}: mark at row {row} is floating")]
    FloatingMark { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
