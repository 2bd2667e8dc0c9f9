//! Orthogonal sliding attacks. Rays stop at the first occupied square and
//! include it.

use crate::game_state::chess_types::{Square, SquareMask};

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareMask) -> SquareMask {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, (d_row, d_col)| {
            acc | trace_ray(square, *d_row, *d_col, occupancy)
        })
}

pub(crate) fn trace_ray(square: Square, d_row: i32, d_col: i32, occupancy: SquareMask) -> SquareMask {
    let mut row = square.row as i32 + d_row;
    let mut col = square.col as i32 + d_col;
    let mut attacks = 0u64;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        let bit = 1u64 << (row * 8 + col);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += d_row;
        col += d_col;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn open_board_rook_sees_fourteen_squares() {
        assert_eq!(rook_attacks(Square::new(4, 3), 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = Square::new(7, 0);
        let a4 = Square::new(4, 0);
        let attacks = rook_attacks(a1, a4.mask());

        assert_ne!(attacks & a4.mask(), 0);
        assert_eq!(attacks & Square::new(3, 0).mask(), 0);
    }
}
