//! Move vocabulary.
//!
//! `MoveIntent` is what a caller submits; `MoveDescription` is a fully
//! resolved candidate produced by the generator, carrying everything needed
//! to apply it to a position without looking at the board again.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveIntent {
    pub from: Square,
    pub to: Square,
    /// Kind a pawn becomes on the last rank; `None` means Queen.
    pub promotion: Option<PieceKind>,
    /// Castling is a king move two squares toward the rook; when a side is
    /// given the destination must match it.
    pub castle: Option<CastleSide>,
    /// Identity the caller believes stands on `from`, checked for consistency.
    pub piece: Option<PieceId>,
}

impl MoveIntent {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            castle: None,
            piece: None,
        }
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    pub fn with_castle(mut self, castle: CastleSide) -> Self {
        self.castle = Some(castle);
        self
    }

    pub fn with_piece(mut self, id: PieceId) -> Self {
        self.piece = Some(id);
        self
    }
}

/// Piece removed by a move, and the square it was removed from (differs
/// from the destination for en passant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub piece: Piece,
    pub square: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveFlag {
    Quiet,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Capture>,
    pub promotion: Option<PieceKind>,
    pub flag: MoveFlag,
}

impl MoveDescription {
    #[inline]
    pub fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            flag: MoveFlag::Quiet,
        }
    }

    #[inline]
    pub fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Self {
            captured: Some(Capture {
                piece: captured,
                square: to,
            }),
            ..Self::quiet(from, to, piece)
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flag == MoveFlag::EnPassant
    }

    #[inline]
    pub fn castle_side(&self) -> Option<CastleSide> {
        match self.flag {
            MoveFlag::Castle(side) => Some(side),
            _ => None,
        }
    }

    /// Kind standing on the destination after the move.
    #[inline]
    pub fn landing_kind(&self) -> PieceKind {
        self.promotion.unwrap_or(self.piece.kind)
    }

    /// Intent that reproduces this move.
    pub fn to_intent(&self) -> MoveIntent {
        MoveIntent {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
            castle: self.castle_side(),
            piece: Some(self.piece.id),
        }
    }
}
