//! King steps and castling.

use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_pieces::push_target_moves;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{MoveDescription, MoveFlag};

pub fn generate_king_moves(
    position: &BoardPosition,
    from: Square,
    king: Piece,
    out: &mut Vec<MoveDescription>,
) {
    push_target_moves(&position.board, from, king, king_attacks(from), out);
    generate_castling_moves(position, from, king, out);
}

fn generate_castling_moves(
    position: &BoardPosition,
    king_from: Square,
    king: Piece,
    out: &mut Vec<MoveDescription>,
) {
    let board = &position.board;
    let side = king.color();
    let enemy = side.opposite();
    let home_row = side.home_row();

    if king_from != Square::new(home_row, KING_HOME_COL) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    for castle in [CastleSide::Kingside, CastleSide::Queenside] {
        if !position.castling_rights.allows(side, castle) {
            continue;
        }

        let rook_square = Square::new(home_row, castle.rook_home_col());
        let rook_ready = matches!(
            board.piece_at(rook_square),
            Some(rook) if rook.color() == side && rook.kind == PieceKind::Rook
        );
        if !rook_ready {
            continue;
        }

        let (low, high) = if castle.rook_home_col() < KING_HOME_COL {
            (castle.rook_home_col() + 1, KING_HOME_COL)
        } else {
            (KING_HOME_COL + 1, castle.rook_home_col())
        };
        let path_clear = (low..high).all(|col| board.piece_at(Square::new(home_row, col)).is_none());
        if !path_clear {
            continue;
        }

        let king_to = Square::new(home_row, castle.king_target_col());
        let transit = Square::new(home_row, castle.rook_target_col());
        if is_square_attacked(board, transit, enemy) || is_square_attacked(board, king_to, enemy) {
            continue;
        }

        out.push(MoveDescription {
            flag: MoveFlag::Castle(castle),
            ..MoveDescription::quiet(king_from, king_to, king)
        });
    }
}
