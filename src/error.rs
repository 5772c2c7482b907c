//! Error types for board and game operations

use crate::board::Pos;

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidReason {
    #[display("cell is off the board")]
    OffBoard,
    #[display("cell is already occupied")]
    Occupied,
    #[display("no game in progress")]
    NotInProgress,
}

/// Errors raised by the board, the heuristic and the turn controller.
///
/// Both are recoverable: a rejected move leaves every piece of state as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The move cannot be played.
    #[display("Invalid move at {}: {}", _0, _1)]
    InvalidMove(Pos, InvalidReason),

    /// The heuristic was asked for a move on a full board.
    #[display("No legal move: the board is full")]
    NoLegalMove,
}

impl std::error::Error for GameError {}
