//! Knight, bishop, rook, and queen move generation from attack patterns.

use crate::game_state::board::Board;
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::piece_attacks;
use crate::moves::move_descriptions::MoveDescription;

pub fn generate_piece_moves(
    position: &BoardPosition,
    from: Square,
    piece: Piece,
    out: &mut Vec<MoveDescription>,
) {
    let board = &position.board;
    let targets = piece_attacks(piece, from, board.occupancy_all());
    push_target_moves(board, from, piece, targets, out);
}

/// Emit a quiet move or capture for every target not holding an own piece
/// or a king.
pub(crate) fn push_target_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    targets: SquareMask,
    out: &mut Vec<MoveDescription>,
) {
    let reachable = targets & !board.occupancy(piece.color());
    for to in Square::iter_mask(reachable) {
        match board.piece_at(to) {
            None => out.push(MoveDescription::quiet(from, to, piece)),
            Some(target) if target.kind != PieceKind::King => {
                out.push(MoveDescription::capture(from, to, piece, target))
            }
            Some(_) => {}
        }
    }
}
