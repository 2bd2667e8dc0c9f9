//! Errors reported by the engine.
//!
//! Every rejected submission is reported as a `MoveError` and leaves the
//! `GameState` it was submitted against untouched. The variants split into
//! two groups:
//! - Submission errors (`GameAlreadyOver`, `WrongMover`, `WrongBoard`,
//!   `MustRespondToCheck`, `IllegalMove`) are normal outcomes; callers present
//!   them to the player and let them submit a corrected move.
//! - `MissingKing` means a board reached the engine without a king of the
//!   given color. The move pipeline can never produce such a board, so this
//!   indicates corruption upstream (a bad fixture or persisted document) and
//!   must be treated as fatal by callers.

use thiserror::Error;

use crate::game_state::chess_types::{BoardKind, Color, PieceId, Square};

/// Why a move failed chess legality on its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// No piece stands on the from-square.
    EmptySquare,
    /// The caller's idea of the moving piece differs from the board.
    IdentityMismatch { expected: PieceId, found: PieceId },
    /// The piece cannot reach the destination under its movement rules.
    Unreachable,
    /// The move would leave the mover's own king attacked.
    LeavesKingInCheck,
    /// A castle side was given that does not match the destination, or
    /// castling is not available.
    CastleMismatch,
    /// Promotion requested for a move that does not promote, or to a kind a
    /// pawn cannot become.
    InvalidPromotion,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::EmptySquare => write!(f, "no piece on the from-square"),
            IllegalMoveReason::IdentityMismatch { expected, found } => {
                write!(f, "expected {expected} on the from-square, found {found}")
            }
            IllegalMoveReason::Unreachable => write!(f, "the piece cannot move there"),
            IllegalMoveReason::LeavesKingInCheck => write!(f, "the move leaves the king in check"),
            IllegalMoveReason::CastleMismatch => write!(f, "castling is not possible here"),
            IllegalMoveReason::InvalidPromotion => write!(f, "invalid promotion"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("{piece} belongs to {owner}, but it is {turn}'s turn")]
    WrongMover {
        piece: PieceId,
        owner: Color,
        turn: Color,
    },

    #[error("move submitted on the {played} board while the {active} board is active")]
    WrongBoard { played: BoardKind, active: BoardKind },

    #[error("check must be answered on the {board} board, not the {played} board")]
    MustRespondToCheck { board: BoardKind, played: BoardKind },

    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },

    #[error("no {color} king on the board; the game state is corrupted")]
    MissingKing { color: Color },
}

impl MoveError {
    #[inline]
    pub fn illegal(from: Square, to: Square, reason: IllegalMoveReason) -> Self {
        MoveError::IllegalMove { from, to, reason }
    }

    /// True for corruption errors that callers must not retry.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, MoveError::MissingKing { .. })
    }
}

pub type MoveResult<T> = Result<T, MoveError>;
