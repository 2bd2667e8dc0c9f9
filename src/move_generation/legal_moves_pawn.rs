//! Pawn move generation: pushes, double steps from the starting row,
//! diagonal captures, en passant, and promotions.

use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Capture, MoveDescription, MoveFlag};

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

pub fn generate_pawn_moves(
    position: &BoardPosition,
    from: Square,
    pawn: Piece,
    out: &mut Vec<MoveDescription>,
) {
    let board = &position.board;
    let side = pawn.color();
    let direction = side.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.piece_at(one_step).is_none() {
            push_with_promotions(MoveDescription::quiet(from, one_step, pawn), out);

            if from.row == pawn_start_row(side) {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(MoveDescription {
                            flag: MoveFlag::DoublePawnPush,
                            ..MoveDescription::quiet(from, two_step, pawn)
                        });
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(direction, col_delta) else {
            continue;
        };

        match board.piece_at(to) {
            Some(target) if target.color() != side && target.kind != PieceKind::King => {
                push_with_promotions(MoveDescription::capture(from, to, pawn, target), out);
            }
            Some(_) => {}
            None if position.en_passant_target == Some(to) => {
                // The double-stepped pawn sits beside the capturing pawn.
                let victim_square = Square::new(from.row, to.col);
                if let Some(victim) = board.piece_at(victim_square) {
                    if victim.color() != side && victim.kind == PieceKind::Pawn {
                        out.push(MoveDescription {
                            captured: Some(Capture {
                                piece: victim,
                                square: victim_square,
                            }),
                            flag: MoveFlag::EnPassant,
                            ..MoveDescription::quiet(from, to, pawn)
                        });
                    }
                }
            }
            None => {}
        }
    }
}

fn push_with_promotions(base: MoveDescription, out: &mut Vec<MoveDescription>) {
    if base.to.row == promotion_row(base.piece.color()) {
        for kind in PROMOTION_KINDS {
            out.push(MoveDescription {
                promotion: Some(kind),
                ..base
            });
        }
    } else {
        out.push(base);
    }
}
