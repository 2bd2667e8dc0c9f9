//! Diagonal sliding attacks.

use crate::game_state::chess_types::{Square, SquareMask};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, (d_row, d_col)| {
            acc | trace_ray(square, *d_row, *d_col, occupancy)
        })
}
