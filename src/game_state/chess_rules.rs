//! Canonical rule constants.
//!
//! Starting layout, repetition threshold, and the bound on the scheduler's
//! phase-resolution loop.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;

/// Occurrences of one position signature that draw a board.
pub const DEFAULT_REPETITION_THRESHOLD: usize = 3;

/// Upper bound on board hand-offs while looking for a playable phase.
pub const MAX_PHASE_RESOLUTION_PASSES: usize = 3;
