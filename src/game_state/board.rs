//! 8x8 grid of identified pieces.
//!
//! `Board` is a plain `Copy` value: every snapshot handed out is independent,
//! so a board referenced by one state can never be mutated through another.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting layout with the legacy identity ordinals: pawns
    /// numbered by file, paired pieces numbered queen side first.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back_row = color.home_row();
            let pawn_row = (back_row as i8 + color.pawn_direction()) as u8;
            let mut seen = [0u8; 6];
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                seen[kind.index()] += 1;
                let id = PieceId::new(color, *kind, seen[kind.index()]);
                board.set(Square::new(back_row, col as u8), Some(Piece::original(id)));

                let pawn = PieceId::new(color, PieceKind::Pawn, col as u8 + 1);
                board.set(Square::new(pawn_row, col as u8), Some(Piece::original(pawn)));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    /// Clear a square, returning what stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64).filter_map(move |index| {
            let square = Square::from_index(index);
            self.piece_at(square).map(|piece| (square, piece))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    pub fn occupancy(&self, color: Color) -> SquareMask {
        self.pieces_of(color)
            .fold(0u64, |acc, (square, _)| acc | square.mask())
    }

    pub fn occupancy_all(&self) -> SquareMask {
        self.pieces().fold(0u64, |acc, (square, _)| acc | square.mask())
    }

    /// Linear scan for a piece identity.
    pub fn find(&self, id: PieceId) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.id == id)
            .map(|(square, _)| square)
    }

    /// Remove the piece carrying `id`, returning where it stood.
    pub fn remove_identity(&mut self, id: PieceId) -> Option<(Square, Piece)> {
        let square = self.find(id)?;
        self.take(square).map(|piece| (square, piece))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
}
