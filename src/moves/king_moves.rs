//! King attack table, indexed by `Square::index()`.

use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::knight_moves::set_if_valid;

pub const KING_ATTACKS: [SquareMask; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> SquareMask {
    KING_ATTACKS[square.index()]
}

const fn generate_king_attacks() -> [SquareMask; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 1, col - 1);
        attacks |= set_if_valid(row - 1, col);
        attacks |= set_if_valid(row - 1, col + 1);
        attacks |= set_if_valid(row, col - 1);
        attacks |= set_if_valid(row, col + 1);
        attacks |= set_if_valid(row + 1, col - 1);
        attacks |= set_if_valid(row + 1, col);
        attacks |= set_if_valid(row + 1, col + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}
