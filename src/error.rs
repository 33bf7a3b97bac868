//! Centralized error types for the simulation core.
//!
//! Errors only surface while building a world or a game. Once a game is running,
//! nothing crosses the tick boundary as an error.

/// Main error type for the simulation core.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("High score error: {0}")]
    HighScore(#[from] HighScoreError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),
    #[error("Board has no rows")]
    EmptyBoard,
    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("House door must have exactly 2 positions, found {0}")]
    InvalidHouseDoorCount(usize),
    #[error("Tunnel on row {0} does not reach both edges of the board")]
    UnpairedTunnel(i32),
}

/// Errors raised by a high score store.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HighScoreError {
    #[error("High score store unavailable: {0}")]
    Unavailable(String),
    #[error("High score write rejected: {0}")]
    Rejected(String),
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
