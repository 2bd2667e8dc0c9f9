//! Removal of captured identities from the other board.
//!
//! A capture on the main board always removes the same identity from the
//! secondary board. En-passant captures propagate from whichever board they
//! happened on. Ordinary secondary-board captures only propagate when
//! `VariantRules::propagate_secondary_captures` is enabled.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_types::*;
use crate::game_state::variant_rules::VariantRules;
use crate::moves::move_descriptions::MoveDescription;

/// A piece taken off the other board because it was captured on the board
/// where the move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagatedRemoval {
    pub board: BoardKind,
    pub square: Square,
    pub piece: PieceId,
}

/// Whether a capture made by `mv` on `played` must also be removed from the
/// other board.
pub fn should_propagate(played: BoardKind, mv: &MoveDescription, rules: &VariantRules) -> bool {
    if !mv.is_capture() {
        return false;
    }
    match played {
        BoardKind::Main => true,
        BoardKind::Secondary => mv.is_en_passant() || rules.propagate_secondary_captures,
    }
}

/// Remove `captured` from `target` by identity. Finding nothing is a no-op:
/// the piece was already removed there earlier. At most one square is
/// cleared.
pub fn remove_captured_identity(
    target: &mut BoardPosition,
    captured: PieceId,
) -> Option<(Square, Piece)> {
    let (square, piece) = target.board.remove_identity(captured)?;
    if piece.kind == PieceKind::Rook {
        target.castling_rights.revoke_for_rook_home(square);
    }
    Some((square, piece))
}

/// Apply the propagation rules for `mv` played on `played`, editing the
/// position of the other board.
pub fn propagate_capture(
    played: BoardKind,
    mv: &MoveDescription,
    other: &mut BoardPosition,
    rules: &VariantRules,
) -> Option<PropagatedRemoval> {
    if !should_propagate(played, mv, rules) {
        return None;
    }
    let captured = mv.captured?.piece.id;
    let target = played.other();

    match remove_captured_identity(other, captured) {
        Some((square, _)) => {
            trace!("removed {captured} from {square} on the {target} board");
            Some(PropagatedRemoval {
                board: target,
                square,
                piece: captured,
            })
        }
        None => {
            trace!("{captured} already absent from the {target} board");
            None
        }
    }
}
