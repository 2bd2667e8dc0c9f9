//! Turn and phase scheduling across the two boards.
//!
//! Every transition takes the current `GameState` by reference and returns a
//! new one. Validation happens before anything is copied, and the copy is
//! only returned once the whole transition succeeded, so a rejected move is
//! never partially visible.
//!
//! Normal flow for one color is a move on the main board followed by a move
//! on the secondary board, then the turn passes. A check delivered on either
//! board hands the turn to the opponent immediately and locks them to that
//! board until they have answered it.

use log::{debug, info};

use crate::chess_errors::{MoveError, MoveResult};
use crate::dual_board::arbitration::arbitrate;
use crate::dual_board::cross_board_capture::propagate_capture;
use crate::game_state::chess_rules::MAX_PHASE_RESOLUTION_PASSES;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, MoveRecord};
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{board_status, legal_moves, BoardStatus};
use crate::moves::move_descriptions::MoveIntent;

#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Submission checks that do not depend on the board contents.
fn validate_submission(state: &GameState, played: BoardKind) -> MoveResult<()> {
    if state.game_over {
        return Err(MoveError::GameAlreadyOver);
    }
    if let Some(board) = state.responding_to_check {
        if board != played {
            return Err(MoveError::MustRespondToCheck { board, played });
        }
    }
    if played != state.phase {
        return Err(MoveError::WrongBoard {
            played,
            active: state.phase,
        });
    }
    Ok(())
}

/// Play `intent` for the side to move on `played` and advance the schedule.
pub fn apply_move(state: &GameState, played: BoardKind, intent: &MoveIntent) -> MoveResult<GameState> {
    validate_submission(state, played)?;

    let mover = state.turn;
    let opponent = mover.opposite();
    let applied = legal_move_apply::apply_move(&state.board(played).position, mover, intent)?;
    let description = applied.description;

    let mut next = state.clone();
    next.responding_to_check = None;
    next.board_mut(played).position = applied.position;

    let rules = next.rules.clone();
    let propagated = propagate_capture(
        played,
        &description,
        &mut next.board_mut(played.other()).position,
        &rules,
    );

    if rules.shared_castling_rights {
        let mut shared = next.main.position.castling_rights;
        shared.intersect(&next.secondary.position.castling_rights);
        next.main.position.castling_rights = shared;
        next.secondary.position.castling_rights = shared;
    }

    let played_position = next.board(played).position;
    next.board_mut(played).history.record(&played_position, opponent);
    next.move_log.push(MoveRecord {
        board: played,
        color: mover,
        notation: applied.notation,
        piece: description.piece.id,
        captured: description.captured.map(|capture| capture.piece.id),
        propagated,
    });
    debug!(
        "{mover} played {} on the {played} board",
        next.move_log.last().map(|record| record.notation.as_str()).unwrap_or_default()
    );

    let opponent_status = board_status(&played_position, opponent)?;
    if opponent_status == BoardStatus::Checkmated {
        resolve_board(&mut next, played, BoardOutcome::Won(mover));
        finish(&mut next, Winner::Side(mover));
        return Ok(next);
    }

    let candidate = if next.board(played).history.is_repetition(rules.repetition_threshold) {
        resolve_board(&mut next, played, BoardOutcome::Drawn(DrawReason::Repetition));
        advance_phase(&mut next, played, mover)?
    } else if state.responding_to_check == Some(played) {
        // The answer to a check keeps play on this board for the reply.
        (opponent, played)
    } else if is_king_in_check(&played_position.board, opponent)? {
        next.turn = opponent;
        next.phase = played;
        next.responding_to_check = Some(played);
        debug!("{opponent} must answer check on the {played} board");
        return Ok(next);
    } else {
        if opponent_status == BoardStatus::Stalemated {
            resolve_board(&mut next, played, BoardOutcome::Drawn(DrawReason::Stalemate));
        }
        advance_phase(&mut next, played, mover)?
    };

    resolve_phase(&mut next, candidate)?;
    Ok(next)
}

/// Candidate (turn, phase) after an ordinary move. After a main-board move
/// the mover continues on the secondary board if it is still in play for
/// them; otherwise the turn passes to the opponent on the main board.
fn advance_phase(
    next: &mut GameState,
    played: BoardKind,
    mover: Color,
) -> MoveResult<(Color, BoardKind)> {
    let opponent = mover.opposite();
    if played == BoardKind::Secondary || !next.secondary.outcome.is_active() {
        return Ok((opponent, BoardKind::Main));
    }

    match board_status(&next.secondary.position, mover)? {
        BoardStatus::Playable => Ok((mover, BoardKind::Secondary)),
        BoardStatus::Stalemated => {
            resolve_board(next, BoardKind::Secondary, BoardOutcome::Drawn(DrawReason::Stalemate));
            Ok((opponent, BoardKind::Main))
        }
        BoardStatus::Checkmated => {
            resolve_board(next, BoardKind::Secondary, BoardOutcome::Won(opponent));
            Ok((opponent, BoardKind::Main))
        }
    }
}

/// Settle on a board where `turn` can actually move, resolving boards that
/// turn out to be mate or stalemate along the way, and end the game once
/// arbitration yields a result.
fn resolve_phase(next: &mut GameState, candidate: (Color, BoardKind)) -> MoveResult<()> {
    let (turn, mut phase) = candidate;

    for _ in 0..MAX_PHASE_RESOLUTION_PASSES {
        if let Some(winner) = arbitrate(next.main.outcome, next.secondary.outcome) {
            finish(next, winner);
            return Ok(());
        }

        if !next.board(phase).outcome.is_active() {
            phase = phase.other();
        }

        match board_status(&next.board(phase).position, turn)? {
            BoardStatus::Playable => {
                next.turn = turn;
                next.phase = phase;
                debug!("{turn} to move on the {phase} board");
                return Ok(());
            }
            BoardStatus::Checkmated => {
                resolve_board(next, phase, BoardOutcome::Won(turn.opposite()));
            }
            BoardStatus::Stalemated => {
                resolve_board(next, phase, BoardOutcome::Drawn(DrawReason::Stalemate));
                phase = phase.other();
            }
        }
    }

    // Each pass either returns or resolves a board, so both are resolved here.
    let winner = arbitrate(next.main.outcome, next.secondary.outcome).unwrap_or(Winner::Draw);
    finish(next, winner);
    Ok(())
}

fn resolve_board(next: &mut GameState, kind: BoardKind, outcome: BoardOutcome) {
    if next.board_mut(kind).resolve(outcome) {
        info!("{kind} board resolved: {outcome:?}");
    }
}

fn finish(next: &mut GameState, winner: Winner) {
    next.game_over = true;
    next.winner = Some(winner);
    next.responding_to_check = None;
    info!("game over: {winner}");
}

/// Ends the game in `winner`'s favour without a mate: every board still in
/// play is awarded to `winner`.
pub fn forfeit_win(state: &GameState, winner: Color) -> MoveResult<GameState> {
    if state.game_over {
        return Err(MoveError::GameAlreadyOver);
    }

    let mut next = state.clone();
    for kind in [BoardKind::Main, BoardKind::Secondary] {
        resolve_board(&mut next, kind, BoardOutcome::Won(winner));
    }
    info!("{} forfeits", winner.opposite());
    finish(&mut next, Winner::Side(winner));
    Ok(next)
}

/// `loser` resigns. Takes the losing side, unlike [`forfeit_win`].
#[inline]
pub fn concede(state: &GameState, loser: Color) -> MoveResult<GameState> {
    forfeit_win(state, loser.opposite())
}

/// Every legal intent for the side to move on the active board.
pub fn legal_intents(state: &GameState) -> MoveResult<Vec<MoveIntent>> {
    let Some(board) = state.active_board() else {
        return Ok(Vec::new());
    };
    Ok(legal_moves(&state.board(board).position, state.turn)?
        .iter()
        .map(|mv| mv.to_intent())
        .collect())
}
