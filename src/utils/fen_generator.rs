//! FEN-style rendering of one board, used as the repetition signature.

use crate::game_state::board::Board;
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::*;

/// Placement, side to move, castling, and en-passant fields. Move counters
/// are left out so repeated positions compare equal.
pub fn position_signature(position: &BoardPosition, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = position
        .en_passant_target
        .map(|square| square.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {}",
        generate_board_field(&position.board),
        side,
        generate_castling_field(&position.castling_rights),
        en_passant
    )
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: &CastlingRights) -> String {
    let mut out = String::new();

    if rights.white.kingside {
        out.push('K');
    }
    if rights.white.queenside {
        out.push('Q');
    }
    if rights.black.kingside {
        out.push('k');
    }
    if rights.black.queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
