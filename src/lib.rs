//! Crate root module declarations for the dual-board chess engine.
//!
//! Two boards, main and secondary, are played in one game with a shared set
//! of piece identities. This file exposes the subsystems (game state, move
//! tables, legality, the dual-board scheduler, the room wrapper, and utility
//! helpers) so tests, benches, and embedding services can import stable
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod variant_rules;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod move_generator;
    pub mod perft;
}

pub mod dual_board {
    pub mod arbitration;
    pub mod cross_board_capture;
    pub mod repetition;
    pub mod turn_phase;
}

pub mod room {
    pub mod game_room;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod notation;
    pub mod random_playout;
    pub mod render_game_state;
}
