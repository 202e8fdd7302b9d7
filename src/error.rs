//! Error types for hex-walk.

use thiserror::Error;

use crate::game::CubeCoordinate;

/// Result type for hex-walk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while walking the board.
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup of a cell the player has never visited
    #[error("tile {0} has not been discovered")]
    TileNotFound(CubeCoordinate),

    /// Fractal walks start at depth 1
    #[error("walk depth must be at least 1, got {0}")]
    InvalidWalkDepth(u32),

    /// A walk string contained a letter outside the move alphabet
    #[error("unknown move letter {0:?}")]
    UnknownMove(char),

    /// IO error from a frontend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
