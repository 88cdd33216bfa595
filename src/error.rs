//! Error types for the crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A decision was requested for a state without any successor.
    #[error("no legal actions available")]
    NoLegalActions,

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("position ({row}, {col}) is out of bounds (must be 0-2)")]
    PositionOutOfBounds { row: usize, col: usize },

    #[error("joint action must contain exactly one move, got {got}")]
    InvalidJointAction { got: usize },

    #[error("invalid cell value {value} at ({row}, {col}) (expected 1, -1 or 0)")]
    InvalidCellValue { value: i8, row: usize, col: usize },

    #[error("no player registered for '{player}'")]
    MissingPlayer { player: String },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
