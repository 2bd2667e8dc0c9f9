//! FEN-to-position parser for fixtures and externally supplied setups.
//!
//! Identities are assigned in scan order (rank 8 to rank 1, a-file to
//! h-file), numbering each color and kind from 1. For the standard starting
//! placement this reproduces the legacy ordinals of `Board::standard`.

use crate::game_state::board::Board;
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Parse the piece-placement field of a FEN string.
pub fn parse_board(placement: &str) -> Result<Board, String> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();
    let mut seen = [[0u8; 6]; 2];

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_letter(ch).ok_or_else(|| format!("Invalid FEN piece '{ch}'"))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if col >= 8 {
                return Err(format!("Too many squares in rank: {row_str}"));
            }

            let counter = &mut seen[color.index()][kind.index()];
            *counter += 1;
            let id = PieceId::new(color, kind, *counter);
            board.set(Square::new(row as u8, col as u8), Some(Piece::original(id)));
            col += 1;
        }

        if col != 8 {
            return Err(format!("Rank does not cover 8 squares: {row_str}"));
        }
    }

    Ok(board)
}

/// Parse a FEN string into one board's position and its side to move.
/// The half-move and full-move fields are optional and ignored.
pub fn parse_position(fen: &str) -> Result<(BoardPosition, Color), String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| format!("Invalid move counter in FEN: {clock}"))?;
    }
    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let side = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = if en_passant_part == "-" {
        None
    } else {
        Some(algebraic_to_square(en_passant_part)?)
    };

    Ok((
        BoardPosition {
            board,
            castling_rights,
            en_passant_target,
        },
        side,
    ))
}

fn parse_side_to_move(side: &str) -> Result<Color, String> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side to move: {side}")),
    }
}

fn parse_castling_rights(field: &str) -> Result<CastlingRights, String> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }
    for ch in field.chars() {
        match ch {
            'K' => rights.white.kingside = true,
            'Q' => rights.white.queenside = true,
            'k' => rights.black.kingside = true,
            'q' => rights.black.queenside = true,
            _ => return Err(format!("Invalid castling rights character '{ch}'")),
        }
    }
    Ok(rights)
}
