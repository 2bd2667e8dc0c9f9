//! Full legal move generation for one side on one board.
//!
//! Dispatches piece-wise pseudo-legal generation, plays each candidate on a
//! copy of the position, and drops candidates that leave the mover's own king
//! attacked. Checkmate and stalemate are derived from the same pipeline.

use crate::chess_errors::MoveResult;
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::play_move_description;
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::generate_piece_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::MoveDescription;

/// How a side stands on one board when it is its turn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    Playable,
    Checkmated,
    Stalemated,
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(
        &self,
        position: &BoardPosition,
        color: Color,
    ) -> MoveResult<Vec<MoveDescription>> {
        legal_moves(position, color)
    }
}

/// Candidate moves of the piece on `from`, ignoring self-check.
pub fn pseudo_legal_moves(position: &BoardPosition, from: Square) -> Vec<MoveDescription> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = position.board.piece_at(from) {
        generate_for_piece(position, from, piece, &mut out);
    }
    out
}

fn generate_for_piece(
    position: &BoardPosition,
    from: Square,
    piece: Piece,
    out: &mut Vec<MoveDescription>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece, out),
        PieceKind::King => generate_king_moves(position, from, piece, out),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_piece_moves(position, from, piece, out)
        }
    }
}

/// True when playing `mv` keeps the mover's own king safe.
#[inline]
pub fn keeps_king_safe(position: &BoardPosition, mv: &MoveDescription) -> MoveResult<bool> {
    let next = play_move_description(position, mv);
    Ok(!is_king_in_check(&next.board, mv.piece.color())?)
}

pub fn legal_moves_from(position: &BoardPosition, from: Square) -> MoveResult<Vec<MoveDescription>> {
    let mut legal = Vec::new();
    for mv in pseudo_legal_moves(position, from) {
        if keeps_king_safe(position, &mv)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

pub fn legal_moves(position: &BoardPosition, color: Color) -> MoveResult<Vec<MoveDescription>> {
    king_square(&position.board, color)?;

    let mut pseudo = Vec::<MoveDescription>::with_capacity(64);
    for (from, piece) in position.board.pieces_of(color) {
        generate_for_piece(position, from, piece, &mut pseudo);
    }

    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if keeps_king_safe(position, &mv)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

pub fn has_any_legal_move(position: &BoardPosition, color: Color) -> MoveResult<bool> {
    king_square(&position.board, color)?;

    let mut pseudo = Vec::<MoveDescription>::with_capacity(28);
    for (from, piece) in position.board.pieces_of(color) {
        pseudo.clear();
        generate_for_piece(position, from, piece, &mut pseudo);
        for mv in &pseudo {
            if keeps_king_safe(position, mv)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

pub fn board_status(position: &BoardPosition, color: Color) -> MoveResult<BoardStatus> {
    if has_any_legal_move(position, color)? {
        return Ok(BoardStatus::Playable);
    }
    if is_king_in_check(&position.board, color)? {
        Ok(BoardStatus::Checkmated)
    } else {
        Ok(BoardStatus::Stalemated)
    }
}

pub fn is_checkmate(position: &BoardPosition, color: Color) -> MoveResult<bool> {
    Ok(is_king_in_check(&position.board, color)? && !has_any_legal_move(position, color)?)
}

pub fn is_stalemate(position: &BoardPosition, color: Color) -> MoveResult<bool> {
    Ok(!is_king_in_check(&position.board, color)? && !has_any_legal_move(position, color)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::{parse_board, parse_position};

    #[test]
    fn start_position_has_twenty_moves_for_each_side() {
        let position = BoardPosition::standard();
        assert_eq!(legal_moves(&position, Color::White).expect("white moves").len(), 20);
        assert_eq!(legal_moves(&position, Color::Black).expect("black moves").len(), 20);
    }

    #[test]
    fn queen_and_king_mate_in_the_corner() {
        let board = parse_board("7k/6Q1/8/8/8/8/8/K7").expect("fixture should parse");
        let position = BoardPosition::from_board(board);

        // An undefended queen on g7 can simply be taken.
        assert!(!is_checkmate(&position, Color::Black).expect("kings present"));

        let board = parse_board("7k/6Q1/5K2/8/8/8/8/8").expect("fixture should parse");
        let position = BoardPosition::from_board(board);
        assert!(is_checkmate(&position, Color::Black).expect("kings present"));
        assert!(!is_stalemate(&position, Color::Black).expect("kings present"));
        assert_eq!(
            board_status(&position, Color::Black).expect("kings present"),
            BoardStatus::Checkmated
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemated() {
        let board = parse_board("7k/5Q2/6K1/8/8/8/8/8").expect("fixture should parse");
        let position = BoardPosition::from_board(board);
        assert!(is_stalemate(&position, Color::Black).expect("kings present"));
        assert!(!is_checkmate(&position, Color::Black).expect("kings present"));
        assert_eq!(
            board_status(&position, Color::Black).expect("kings present"),
            BoardStatus::Stalemated
        );
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let (position, _) =
            parse_position("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("fixture should parse");
        let knight_moves = legal_moves_from(&position, Square::new(6, 4)).expect("king present");
        assert!(knight_moves.is_empty());
    }

    #[test]
    fn check_must_be_answered() {
        let (position, _) =
            parse_position("4k3/8/8/8/8/8/3PP3/r3K3 w - - 0 1").expect("fixture should parse");
        let moves = legal_moves(&position, Color::White).expect("white king present");
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(keeps_king_safe(&position, mv).expect("king present"));
            assert_eq!(mv.piece.kind, PieceKind::King);
        }
    }
}
