//! Whole-game state for the two-board variant.
//!
//! `GameState` is a plain value: the scheduler clones it, applies one
//! transition to the clone, and hands back the result. A rejected submission
//! therefore never leaves a partially updated state behind.

use serde::{Deserialize, Serialize};

use crate::dual_board::cross_board_capture::PropagatedRemoval;
use crate::game_state::board_state::{BoardPosition, BoardState};
use crate::game_state::chess_types::*;
use crate::game_state::variant_rules::VariantRules;

/// One accepted move, as kept in the move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub board: BoardKind,
    pub color: Color,
    /// SAN on the board the move was played on, with `+`/`#` for that board.
    pub notation: String,
    pub piece: PieceId,
    pub captured: Option<PieceId>,
    pub propagated: Option<PropagatedRemoval>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub main: BoardState,
    pub secondary: BoardState,
    pub turn: Color,
    pub phase: BoardKind,
    /// Board on which the side to move must answer a check.
    pub responding_to_check: Option<BoardKind>,
    pub game_over: bool,
    pub winner: Option<Winner>,
    pub move_log: Vec<MoveRecord>,
    #[serde(default)]
    pub rules: VariantRules,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position mirrored on both boards, White to move on
    /// the main board.
    pub fn new_game() -> Self {
        Self::with_rules(VariantRules::default())
    }

    pub fn with_rules(rules: VariantRules) -> Self {
        let mut state = Self::from_positions(
            BoardPosition::standard(),
            BoardPosition::standard(),
            Color::White,
        );
        state.rules = rules;
        state
    }

    /// Game over arbitrary positions, `turn` to move on the main board.
    pub fn from_positions(main: BoardPosition, secondary: BoardPosition, turn: Color) -> Self {
        Self {
            main: BoardState::new(main),
            secondary: BoardState::new(secondary),
            turn,
            phase: BoardKind::Main,
            responding_to_check: None,
            game_over: false,
            winner: None,
            move_log: Vec::new(),
            rules: VariantRules::default(),
        }
    }

    #[inline]
    pub fn board(&self, kind: BoardKind) -> &BoardState {
        match kind {
            BoardKind::Main => &self.main,
            BoardKind::Secondary => &self.secondary,
        }
    }

    #[inline]
    pub fn board_mut(&mut self, kind: BoardKind) -> &mut BoardState {
        match kind {
            BoardKind::Main => &mut self.main,
            BoardKind::Secondary => &mut self.secondary,
        }
    }

    #[inline]
    pub fn outcome(&self, kind: BoardKind) -> BoardOutcome {
        self.board(kind).outcome
    }

    /// Board the side to move has to play on, `None` once the game is over.
    pub fn active_board(&self) -> Option<BoardKind> {
        if self.game_over {
            None
        } else {
            Some(self.phase)
        }
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_log.last()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::utils::render_game_state::render_game_state(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;

    #[test]
    fn new_game_mirrors_the_start_position() {
        let state = GameState::new_game();
        assert_eq!(state.main.position, state.secondary.position);
        assert_eq!(*state.main.board(), Board::standard());
        assert_eq!(state.turn, Color::White);
        assert_eq!(state.phase, BoardKind::Main);
        assert_eq!(state.outcome(BoardKind::Main), BoardOutcome::Active);
        assert_eq!(state.outcome(BoardKind::Secondary), BoardOutcome::Active);
        assert_eq!(state.responding_to_check, None);
        assert_eq!(state.active_board(), Some(BoardKind::Main));
        assert!(state.move_log.is_empty());
        assert!(state.main.history.is_empty());
    }

    #[test]
    fn board_accessors_select_the_right_side() {
        let mut state = GameState::new_game();
        state.board_mut(BoardKind::Secondary).position.board = Board::empty();
        assert_eq!(state.board(BoardKind::Secondary).board().pieces().count(), 0);
        assert_eq!(state.board(BoardKind::Main).board().pieces().count(), 32);
    }
}
