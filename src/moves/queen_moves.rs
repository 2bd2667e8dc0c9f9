use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}
