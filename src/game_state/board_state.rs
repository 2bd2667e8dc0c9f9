//! Per-board side state.
//!
//! `BoardPosition` is everything chess legality needs on one board; the
//! `BoardState` wraps it with the board's outcome and repetition history.

use serde::{Deserialize, Serialize};

use crate::dual_board::repetition::PositionHistory;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardPosition {
    pub board: Board,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}

impl BoardPosition {
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
        }
    }

    /// Position without castling rights or en-passant target, as used by
    /// hand-built fixtures.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub position: BoardPosition,
    pub outcome: BoardOutcome,
    pub history: PositionHistory,
}

impl BoardState {
    pub fn new(position: BoardPosition) -> Self {
        Self {
            position,
            outcome: BoardOutcome::Active,
            history: PositionHistory::default(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// Move the outcome out of `Active`; a resolved board is left untouched.
    pub fn resolve(&mut self, outcome: BoardOutcome) -> bool {
        if self.outcome.is_active() && !outcome.is_active() {
            self.outcome = outcome;
            true
        } else {
            false
        }
    }
}
