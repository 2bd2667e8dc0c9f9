//! Pawn capture patterns. Forward pushes are not attacks and live in the
//! legal move generator instead.

use crate::game_state::chess_types::{Color, Square, SquareMask};
use crate::moves::knight_moves::set_if_valid;

pub const WHITE_PAWN_ATTACKS: [SquareMask; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [SquareMask; 64] = generate_pawn_attacks(1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareMask {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(direction: i32) -> [SquareMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        table[sq] = set_if_valid(row + direction, col - 1) | set_if_valid(row + direction, col + 1);
        sq += 1;
    }

    table
}
