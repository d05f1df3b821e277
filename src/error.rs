use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors that can occur while operating on a game.
///
/// All of these are recoverable at the service boundary: a failed operation
/// leaves the game state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {0} is outside the grid")]
    InvalidColumn(usize),

    #[error("column {0} is already full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("player {0} is not in the roster")]
    UnknownPlayer(PlayerId),

    #[error("no legal moves remain")]
    NoLegalMoves,

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors that can occur when loading or validating configuration.
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
