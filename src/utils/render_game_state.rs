//! Terminal-oriented Unicode board renderer.
//!
//! Draws one board, or both boards of a game side by side, for debugging,
//! tests, and trace logging.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render one board to a Unicode string, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');
    for row in 0..8u8 {
        out.push_str(&render_rank(board, row));
        out.push('\n');
    }
    out.push_str(FILE_LABELS);
    out
}

/// Both boards next to each other with the scheduler state underneath.
pub fn render_game_state(game_state: &GameState) -> String {
    let gap = "    ";
    let mut out = String::new();

    out.push_str(&format!(
        "{:<19}{gap}{}\n",
        format!("main ({})", outcome_label(game_state.main.outcome)),
        format!("secondary ({})", outcome_label(game_state.secondary.outcome)),
    ));
    out.push_str(&format!("{FILE_LABELS:<19}{gap}{FILE_LABELS}\n"));
    for row in 0..8u8 {
        out.push_str(&render_rank(game_state.main.board(), row));
        out.push_str(gap);
        out.push_str(&render_rank(game_state.secondary.board(), row));
        out.push('\n');
    }
    out.push_str(&format!("{FILE_LABELS:<19}{gap}{FILE_LABELS}\n"));

    match game_state.winner {
        Some(winner) => out.push_str(&format!("game over: {winner}")),
        None => out.push_str(&format!(
            "{} to move on the {} board",
            game_state.turn, game_state.phase
        )),
    }
    out
}

fn render_rank(board: &Board, row: u8) -> String {
    let rank = Square::new(row, 0).rank_char();
    let mut out = String::with_capacity(40);
    out.push(rank);
    out.push(' ');
    for col in 0..8u8 {
        match board.piece_at(Square::new(row, col)) {
            Some(piece) => out.push(piece_to_unicode(piece.color(), piece.kind)),
            None => out.push('·'),
        }
        if col < 7 {
            out.push(' ');
        }
    }
    out.push(' ');
    out.push(rank);
    out
}

fn outcome_label(outcome: BoardOutcome) -> String {
    match outcome {
        BoardOutcome::Active => "active".to_owned(),
        BoardOutcome::Won(color) => format!("won by {color}"),
        BoardOutcome::Drawn(DrawReason::Stalemate) => "drawn, stalemate".to_owned(),
        BoardOutcome::Drawn(DrawReason::Repetition) => "drawn, repetition".to_owned(),
    }
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
