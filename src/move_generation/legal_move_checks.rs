//! Attack maps and check detection on a single board.
//!
//! Check status is always evaluated per board; nothing here looks at the
//! other board of the game.

use crate::chess_errors::{MoveError, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares attacked by the piece on `square`, given the board occupancy.
/// Own pieces inside the pattern are included (they are defended).
#[inline]
pub fn piece_attacks(piece: Piece, square: Square, occupancy: SquareMask) -> SquareMask {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color(), square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

/// Union of every attack pattern of `color` on the board.
pub fn attacked_squares(board: &Board, color: Color) -> SquareMask {
    let occupancy = board.occupancy_all();
    board
        .pieces_of(color)
        .fold(0u64, |acc, (square, piece)| {
            acc | piece_attacks(piece, square, occupancy)
        })
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let occupancy = board.occupancy_all();
    let target = square.mask();
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(piece, from, occupancy) & target != 0)
}

/// Squares holding pieces of `attacker_color` that attack `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    let occupancy = board.occupancy_all();
    let target = square.mask();
    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| piece_attacks(*piece, *from, occupancy) & target != 0)
        .map(|(from, _)| from)
        .collect()
}

/// Location of the king of `color`; a missing king is corruption.
#[inline]
pub fn king_square(board: &Board, color: Color) -> MoveResult<Square> {
    board
        .king_square(color)
        .ok_or(MoveError::MissingKing { color })
}

pub fn is_king_in_check(board: &Board, color: Color) -> MoveResult<bool> {
    let king = king_square(board, color)?;
    Ok(is_square_attacked(board, king, color.opposite()))
}
