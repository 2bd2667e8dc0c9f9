use crate::chess_errors::MoveResult;
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::MoveDescription;

/// Source of fully legal moves for one side on one board.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(
        &self,
        position: &BoardPosition,
        color: Color,
    ) -> MoveResult<Vec<MoveDescription>>;
}
