//! Standard algebraic notation for the move log.
//!
//! `+` marks a move that gives check: the opponent's king is attacked after
//! the move from a square that did not attack it before. A check left over
//! from a removal on the other board is not repeated on the next quiet move.
//! `#` marks any move after which the opponent is mated on that board.

use crate::chess_errors::MoveResult;
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{attackers_to_square, king_square};
use crate::move_generation::legal_move_generator::{board_status, legal_moves, BoardStatus};
use crate::moves::move_descriptions::MoveDescription;

/// SAN for `mv`, played from `before` and yielding `after`. The check suffix
/// looks only at the board the move was played on.
pub fn move_to_san(
    before: &BoardPosition,
    mv: &MoveDescription,
    after: &BoardPosition,
) -> MoveResult<String> {
    let mut san = match mv.castle_side() {
        Some(CastleSide::Kingside) => "O-O".to_owned(),
        Some(CastleSide::Queenside) => "O-O-O".to_owned(),
        None if mv.piece.kind == PieceKind::Pawn => pawn_san(mv),
        None => piece_san(before, mv)?,
    };

    let opponent = mv.piece.color().opposite();
    if board_status(after, opponent)? == BoardStatus::Checkmated {
        san.push('#');
    } else if gives_check(before, after, mv.piece.color())? {
        san.push('+');
    }

    Ok(san)
}

fn gives_check(before: &BoardPosition, after: &BoardPosition, mover: Color) -> MoveResult<bool> {
    let opponent = mover.opposite();
    let checkers = attackers_to_square(&after.board, king_square(&after.board, opponent)?, mover);
    if checkers.is_empty() {
        return Ok(false);
    }
    let standing = attackers_to_square(&before.board, king_square(&before.board, opponent)?, mover);
    Ok(checkers.iter().any(|square| !standing.contains(square)))
}

fn pawn_san(mv: &MoveDescription) -> String {
    let mut san = String::with_capacity(8);
    if mv.is_capture() {
        san.push(mv.from.file_char());
        san.push('x');
    }
    san.push_str(&mv.to.to_string());
    if let Some(kind) = mv.promotion {
        san.push('=');
        san.push(kind.letter());
    }
    san
}

fn piece_san(before: &BoardPosition, mv: &MoveDescription) -> MoveResult<String> {
    let mut san = String::with_capacity(8);
    san.push(mv.piece.kind.letter());

    let rivals: Vec<Square> = legal_moves(before, mv.piece.color())?
        .into_iter()
        .filter(|other| {
            other.to == mv.to && other.from != mv.from && other.piece.kind == mv.piece.kind
        })
        .map(|other| other.from)
        .collect();

    if !rivals.is_empty() {
        let file_unique = rivals.iter().all(|sq| sq.col != mv.from.col);
        let rank_unique = rivals.iter().all(|sq| sq.row != mv.from.row);
        if file_unique {
            san.push(mv.from.file_char());
        } else if rank_unique {
            san.push(mv.from.rank_char());
        } else {
            san.push(mv.from.file_char());
            san.push(mv.from.rank_char());
        }
    }

    if mv.is_capture() {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());
    Ok(san)
}
