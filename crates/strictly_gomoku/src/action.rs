//! Moves and the errors a move request can produce.

use super::board::BoardError;
use super::{Coordinate, MarkKind};
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
///
/// Returned to the host after every accepted move so it can draw
/// the new mark without diffing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Kind of the placed mark.
    pub mark: MarkKind,
    /// Where the mark was placed.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: MarkKind, coordinate: Coordinate) -> Self {
        Self { mark, coordinate }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coordinate)
    }
}

/// Error that can occur when requesting a move.
///
/// Every variant is recoverable: the session is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The requested cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),

    /// The game has already been won.
    #[display("Game has already ended")]
    GameAlreadyEnded,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::AlreadyOccupied(coordinate) => MoveError::CellOccupied(coordinate),
        }
    }
}
