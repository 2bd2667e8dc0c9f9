//! Validate one intended move against one board and apply it.
//!
//! Everything here is pure: the input position is never touched and the
//! result is a fresh `BoardPosition` together with the resolved move and its
//! notation.

use crate::chess_errors::{IllegalMoveReason, MoveError, MoveResult};
use crate::game_state::board_state::BoardPosition;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{keeps_king_safe, pseudo_legal_moves};
use crate::moves::move_descriptions::{MoveDescription, MoveFlag, MoveIntent};
use crate::utils::notation::move_to_san;

/// Result of applying a move on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub description: MoveDescription,
    pub position: BoardPosition,
    pub notation: String,
}

pub fn apply_move(
    position: &BoardPosition,
    mover: Color,
    intent: &MoveIntent,
) -> MoveResult<AppliedMove> {
    let description = resolve_intent(position, mover, intent)?;
    let next = play_move_description(position, &description);
    let notation = move_to_san(position, &description, &next)?;

    Ok(AppliedMove {
        description,
        position: next,
        notation,
    })
}

/// Match an intent against the fully legal moves of `mover` on this board.
pub fn resolve_intent(
    position: &BoardPosition,
    mover: Color,
    intent: &MoveIntent,
) -> MoveResult<MoveDescription> {
    let illegal = |reason| MoveError::illegal(intent.from, intent.to, reason);

    let piece = position
        .board
        .piece_at(intent.from)
        .ok_or_else(|| illegal(IllegalMoveReason::EmptySquare))?;

    if piece.color() != mover {
        return Err(MoveError::WrongMover {
            piece: piece.id,
            owner: piece.color(),
            turn: mover,
        });
    }

    if let Some(expected) = intent.piece {
        if expected != piece.id {
            return Err(illegal(IllegalMoveReason::IdentityMismatch {
                expected,
                found: piece.id,
            }));
        }
    }

    if let Some(kind) = intent.promotion {
        if !kind.is_promotion_target() {
            return Err(illegal(IllegalMoveReason::InvalidPromotion));
        }
    }

    let castle_attempt = piece.kind == PieceKind::King
        && intent.from == Square::new(mover.home_row(), KING_HOME_COL)
        && intent.from.row == intent.to.row
        && intent.from.col.abs_diff(intent.to.col) == 2;

    if let Some(castle) = intent.castle {
        let king_to = Square::new(mover.home_row(), castle.king_target_col());
        if !castle_attempt || intent.to != king_to {
            return Err(illegal(IllegalMoveReason::CastleMismatch));
        }
    }

    let candidates: Vec<MoveDescription> = pseudo_legal_moves(position, intent.from)
        .into_iter()
        .filter(|mv| mv.to == intent.to)
        .collect();

    if candidates.is_empty() {
        return Err(illegal(if castle_attempt {
            IllegalMoveReason::CastleMismatch
        } else {
            IllegalMoveReason::Unreachable
        }));
    }

    let chosen = if candidates.iter().any(|mv| mv.promotion.is_some()) {
        let wanted = intent.promotion.unwrap_or(PieceKind::Queen);
        candidates
            .into_iter()
            .find(|mv| mv.promotion == Some(wanted))
            .ok_or_else(|| illegal(IllegalMoveReason::InvalidPromotion))?
    } else if intent.promotion.is_some() {
        return Err(illegal(IllegalMoveReason::InvalidPromotion));
    } else {
        candidates[0]
    };

    if !keeps_king_safe(position, &chosen)? {
        return Err(illegal(IllegalMoveReason::LeavesKingInCheck));
    }

    Ok(chosen)
}

/// Play a resolved move on a copy of the position: carry the identity to the
/// destination, clear captured squares, move the castling rook, and refresh
/// castling rights and the en-passant target.
pub fn play_move_description(position: &BoardPosition, mv: &MoveDescription) -> BoardPosition {
    let mut next = *position;
    let board = &mut next.board;

    board.take(mv.from);
    if let Some(capture) = mv.captured {
        board.take(capture.square);
    }
    let landing = match mv.promotion {
        Some(kind) => mv.piece.promoted_to(kind),
        None => mv.piece,
    };
    board.set(mv.to, Some(landing));

    if let MoveFlag::Castle(castle) = mv.flag {
        let row = mv.from.row;
        let rook = board.take(Square::new(row, castle.rook_home_col()));
        board.set(Square::new(row, castle.rook_target_col()), rook);
    }

    update_castling_rights(&mut next.castling_rights, mv);

    next.en_passant_target = if mv.flag == MoveFlag::DoublePawnPush {
        mv.from.offset(mv.piece.color().pawn_direction(), 0)
    } else {
        None
    };

    next
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &MoveDescription) {
    match mv.piece.kind {
        PieceKind::King => rights.revoke_all(mv.piece.color()),
        PieceKind::Rook => rights.revoke_for_rook_home(mv.from),
        _ => {}
    }

    // Capturing a rook on its original square also removes the right.
    if let Some(capture) = mv.captured {
        if capture.piece.kind == PieceKind::Rook {
            rights.revoke_for_rook_home(capture.square);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::fen_parser::parse_position;

    fn sq(name: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(name).expect("square name should parse")
    }

    fn position(fen: &str) -> BoardPosition {
        parse_position(fen).expect("fixture FEN should parse").0
    }

    #[test]
    fn quiet_move_carries_identity() {
        let start = BoardPosition::standard();
        let knight = start.board.piece_at(sq("g1")).expect("g1 knight");
        let applied = apply_move(&start, Color::White, &MoveIntent::new(sq("g1"), sq("f3")))
            .expect("Nf3 is legal");

        assert_eq!(applied.position.board.piece_at(sq("f3")), Some(knight));
        assert_eq!(applied.position.board.piece_at(sq("g1")), None);
        assert_eq!(applied.notation, "Nf3");
        assert_eq!(applied.position.en_passant_target, None);
        // Input untouched.
        assert_eq!(start.board.piece_at(sq("g1")), Some(knight));
    }

    #[test]
    fn double_step_sets_en_passant_target() {
        let start = BoardPosition::standard();
        let applied = apply_move(&start, Color::White, &MoveIntent::new(sq("e2"), sq("e4")))
            .expect("e4 is legal");
        assert_eq!(applied.position.en_passant_target, Some(sq("e3")));
        assert_eq!(applied.notation, "e4");

        let reply = apply_move(
            &applied.position,
            Color::Black,
            &MoveIntent::new(sq("g8"), sq("f6")),
        )
        .expect("Nf6 is legal");
        assert_eq!(reply.position.en_passant_target, None);
    }

    #[test]
    fn en_passant_removes_pawn_behind_destination() {
        let pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let victim = pos.board.piece_at(sq("d5")).expect("d5 pawn");
        let applied = apply_move(&pos, Color::White, &MoveIntent::new(sq("e5"), sq("d6")))
            .expect("exd6 e.p. is legal");

        assert!(applied.description.is_en_passant());
        assert_eq!(applied.description.captured.map(|c| c.piece), Some(victim));
        assert_eq!(applied.position.board.piece_at(sq("d5")), None);
        assert_eq!(applied.notation, "exd6");
    }

    #[test]
    fn promotion_defaults_to_queen_and_keeps_identity() {
        let pos = position("k7/4P3/8/8/8/8/8/4K3 w - - 0 1");
        let pawn = pos.board.piece_at(sq("e7")).expect("e7 pawn");
        let applied = apply_move(&pos, Color::White, &MoveIntent::new(sq("e7"), sq("e8")))
            .expect("e8 promotion is legal");

        let promoted = applied.position.board.piece_at(sq("e8")).expect("piece on e8");
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color(), Color::White);
        assert_eq!(promoted.id, pawn.id);
        assert_eq!(applied.notation, "e8=Q+");
    }

    #[test]
    fn under_promotion_and_bad_promotion_requests() {
        let pos = position("k7/4P3/8/8/8/8/8/4K3 w - - 0 1");
        let knight = apply_move(
            &pos,
            Color::White,
            &MoveIntent::new(sq("e7"), sq("e8")).with_promotion(PieceKind::Knight),
        )
        .expect("underpromotion is legal");
        assert_eq!(knight.notation, "e8=N");

        let king = apply_move(
            &pos,
            Color::White,
            &MoveIntent::new(sq("e7"), sq("e8")).with_promotion(PieceKind::King),
        );
        assert!(matches!(
            king,
            Err(MoveError::IllegalMove {
                reason: IllegalMoveReason::InvalidPromotion,
                ..
            })
        ));

        let stray = apply_move(
            &pos,
            Color::White,
            &MoveIntent::new(sq("e1"), sq("d1")).with_promotion(PieceKind::Queen),
        );
        assert!(matches!(
            stray,
            Err(MoveError::IllegalMove {
                reason: IllegalMoveReason::InvalidPromotion,
                ..
            })
        ));
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let rook = pos.board.piece_at(sq("h1")).expect("h1 rook");
        let applied = apply_move(
            &pos,
            Color::White,
            &MoveIntent::new(sq("e1"), sq("g1")).with_castle(CastleSide::Kingside),
        )
        .expect("O-O is legal");

        assert_eq!(applied.position.board.piece_at(sq("f1")), Some(rook));
        assert_eq!(applied.position.board.piece_at(sq("h1")), None);
        assert_eq!(applied.notation, "O-O");
        assert!(!applied.position.castling_rights.allows(Color::White, CastleSide::Kingside));
        assert!(!applied.position.castling_rights.allows(Color::White, CastleSide::Queenside));
        assert!(applied.position.castling_rights.allows(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn castle_side_must_match_destination() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let err = apply_move(
            &pos,
            Color::White,
            &MoveIntent::new(sq("e1"), sq("g1")).with_castle(CastleSide::Queenside),
        )
        .expect_err("mismatched castle side must fail");
        assert!(matches!(
            err,
            MoveError::IllegalMove {
                reason: IllegalMoveReason::CastleMismatch,
                ..
            }
        ));

        let no_rights = position("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1");
        let err = apply_move(&no_rights, Color::White, &MoveIntent::new(sq("e1"), sq("c1")))
            .expect_err("castling without rights must fail");
        assert!(matches!(
            err,
            MoveError::IllegalMove {
                reason: IllegalMoveReason::CastleMismatch,
                ..
            }
        ));
    }

    #[test]
    fn capturing_home_rook_revokes_opponent_right() {
        let pos = position("r3k2r/8/8/8/8/8/1B6/R3K2R w KQkq - 0 1");
        let applied = apply_move(&pos, Color::White, &MoveIntent::new(sq("b2"), sq("h8")))
            .expect("Bxh8 is legal");
        assert!(!applied.position.castling_rights.allows(Color::Black, CastleSide::Kingside));
        assert!(applied.position.castling_rights.allows(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn self_check_is_rejected_before_application() {
        let pos = position("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let err = apply_move(&pos, Color::White, &MoveIntent::new(sq("e2"), sq("c3")))
            .expect_err("pinned knight must not move");
        assert!(matches!(
            err,
            MoveError::IllegalMove {
                reason: IllegalMoveReason::LeavesKingInCheck,
                ..
            }
        ));
    }

    #[test]
    fn applied_moves_never_leave_own_king_in_check() {
        let start = BoardPosition::standard();
        for mv in crate::move_generation::legal_move_generator::legal_moves(&start, Color::White)
            .expect("white king present")
        {
            let applied = apply_move(&start, Color::White, &mv.to_intent()).expect("legal move");
            assert!(!is_king_in_check(&applied.position.board, Color::White).expect("king present"));
        }
    }

    #[test]
    fn wrong_identity_and_empty_square_are_reported() {
        let start = BoardPosition::standard();
        let bogus = PieceId::new(Color::White, PieceKind::Pawn, 1);
        let err = apply_move(
            &start,
            Color::White,
            &MoveIntent::new(sq("e2"), sq("e4")).with_piece(bogus),
        )
        .expect_err("identity mismatch must fail");
        assert!(matches!(
            err,
            MoveError::IllegalMove {
                reason: IllegalMoveReason::IdentityMismatch { .. },
                ..
            }
        ));

        let err = apply_move(&start, Color::White, &MoveIntent::new(sq("e4"), sq("e5")))
            .expect_err("empty from-square must fail");
        assert!(matches!(
            err,
            MoveError::IllegalMove {
                reason: IllegalMoveReason::EmptySquare,
                ..
            }
        ));

        let err = apply_move(&start, Color::White, &MoveIntent::new(sq("e7"), sq("e5")))
            .expect_err("moving an enemy piece must fail");
        assert!(matches!(err, MoveError::WrongMover { .. }));
    }
}
