//! Per-board position history for repetition detection.

use serde::{Deserialize, Serialize};

use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::Color;
use crate::utils::fen_generator::position_signature;

/// Append-only list of position signatures, one per move played on the
/// board. Never truncated within a game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionHistory {
    signatures: Vec<String>,
}

impl PositionHistory {
    /// Record the position reached after a move, with `side_to_move` being
    /// the side that would move next on this board.
    pub fn record(&mut self, position: &BoardPosition, side_to_move: Color) {
        self.signatures
            .push(position_signature(position, side_to_move));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.signatures.last().map(String::as_str)
    }

    /// How often the most recent signature appears in the full history.
    pub fn occurrences_of_last(&self) -> usize {
        match self.signatures.last() {
            Some(last) => self.signatures.iter().filter(|s| *s == last).count(),
            None => 0,
        }
    }

    #[inline]
    pub fn is_repetition(&self, threshold: usize) -> bool {
        self.occurrences_of_last() >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::PositionHistory;
    use crate::game_state::board_state::BoardPosition;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::moves::move_descriptions::MoveIntent;
    use crate::utils::algebraic::algebraic_to_square;

    fn play(position: &BoardPosition, mover: Color, from: &str, to: &str) -> BoardPosition {
        let intent = MoveIntent::new(
            algebraic_to_square(from).expect("from square"),
            algebraic_to_square(to).expect("to square"),
        );
        apply_move(position, mover, &intent)
            .expect("shuffle move should be legal")
            .position
    }

    #[test]
    fn third_occurrence_reaches_default_threshold() {
        let mut history = PositionHistory::default();
        let mut position = BoardPosition::standard();
        let shuffle = [
            (Color::White, "g1", "f3"),
            (Color::Black, "g8", "f6"),
            (Color::White, "f3", "g1"),
            (Color::Black, "f6", "g8"),
        ];

        let mut flags = Vec::new();
        for _ in 0..2 {
            for (mover, from, to) in shuffle {
                position = play(&position, mover, from, to);
                history.record(&position, mover.opposite());
                flags.push(history.is_repetition(3));
            }
        }
        // The start position has been reached twice after eight plies.
        assert_eq!(flags, vec![false; 8]);
        assert_eq!(history.occurrences_of_last(), 2);

        for (mover, from, to) in shuffle {
            position = play(&position, mover, from, to);
            history.record(&position, mover.opposite());
        }
        assert_eq!(history.occurrences_of_last(), 3);
        assert!(history.is_repetition(3));
        assert_eq!(history.len(), 12);
    }

    #[test]
    fn empty_history_never_repeats() {
        let history = PositionHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        assert!(!history.is_repetition(2));
    }
}
