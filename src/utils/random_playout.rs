//! Random legal play over both boards.
//!
//! Used for soak tests and benches: picks uniformly among the legal moves of
//! the side to move on the active board and feeds them through the scheduler.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::MoveResult;
use crate::dual_board::turn_phase;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::MoveIntent;

pub struct RandomPlayer {
    move_generator: LegalMoveGenerator,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }

    /// A random legal intent for the side to move, `None` once the game is
    /// over.
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        rng: &mut R,
    ) -> MoveResult<Option<MoveIntent>> {
        let Some(board) = state.active_board() else {
            return Ok(None);
        };
        let legal_moves = self
            .move_generator
            .generate_legal_moves(&state.board(board).position, state.turn)?;
        Ok(legal_moves.as_slice().choose(rng).map(|mv| mv.to_intent()))
    }

    /// Play one random move; `None` once the game is over.
    pub fn step<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> MoveResult<Option<GameState>> {
        match self.choose_move(state, rng)? {
            Some(intent) => turn_phase::apply_move(state, state.phase, &intent).map(Some),
            None => Ok(None),
        }
    }

    /// Play until the game ends or `max_submissions` moves were made.
    pub fn play_out<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        rng: &mut R,
        max_submissions: usize,
    ) -> MoveResult<GameState> {
        let mut current = state.clone();
        for _ in 0..max_submissions {
            match self.step(&current, rng)? {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(current)
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Random game from the start position using the thread-local generator.
pub fn random_game(max_submissions: usize) -> MoveResult<GameState> {
    let mut rng = rand::rng();
    RandomPlayer::new().play_out(&GameState::new_game(), &mut rng, max_submissions)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::move_generation::legal_move_generator::{has_any_legal_move, is_checkmate, is_stalemate};

    fn assert_identities_unique(board: &Board, known: &HashSet<PieceId>) {
        let mut seen = HashSet::new();
        for (square, piece) in board.pieces() {
            assert!(known.contains(&piece.id), "unknown identity {} on {square}", piece.id);
            assert!(seen.insert(piece.id), "duplicate identity {} on {square}", piece.id);
        }
    }

    fn assert_step_invariants(before: &GameState, after: &GameState, known: &HashSet<PieceId>) {
        for kind in [BoardKind::Main, BoardKind::Secondary] {
            let old = before.outcome(kind);
            if !old.is_active() {
                assert_eq!(after.outcome(kind), old, "{kind} outcome changed after resolving");
            }
            assert_identities_unique(after.board(kind).board(), known);
        }

        let record = after.last_move().expect("accepted move is logged");
        let played = after.board(record.board).board();
        assert!(
            !is_king_in_check(played, record.color).expect("mover king present"),
            "{} left its own king in check with {}",
            record.color,
            record.notation
        );

        if let (BoardKind::Main, Some(captured)) = (record.board, record.captured) {
            assert_eq!(after.main.board().find(captured), None);
            assert_eq!(after.secondary.board().find(captured), None);
        }

        if !after.game_over {
            let position = &after.board(after.phase).position;
            assert!(after.outcome(after.phase).is_active());
            assert!(has_any_legal_move(position, after.turn).expect("king present"));
        }

        for kind in [BoardKind::Main, BoardKind::Secondary] {
            for color in [Color::White, Color::Black] {
                let position = &after.board(kind).position;
                let mate = is_checkmate(position, color).expect("king present");
                let stalemate = is_stalemate(position, color).expect("king present");
                assert!(!(mate && stalemate));
                if mate || stalemate {
                    assert!(!has_any_legal_move(position, color).expect("king present"));
                }
            }
        }
    }

    #[test]
    fn seeded_playouts_hold_game_invariants() {
        let known: HashSet<PieceId> = Board::standard().pieces().map(|(_, piece)| piece.id).collect();
        assert_eq!(known.len(), 32);

        let player = RandomPlayer::new();
        for seed in 0..12u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = GameState::new_game();
            for _ in 0..240 {
                let Some(next) = player.step(&state, &mut rng).expect("random legal move applies") else {
                    break;
                };
                assert_step_invariants(&state, &next, &known);
                state = next;
            }
            if state.game_over {
                assert!(state.winner.is_some());
                assert_eq!(state.responding_to_check, None);
            }
        }
    }

    #[test]
    fn same_seed_same_game() {
        let player = RandomPlayer::new();
        let start = GameState::new_game();
        let first = player
            .play_out(&start, &mut StdRng::seed_from_u64(7), 60)
            .expect("playout succeeds");
        let second = player
            .play_out(&start, &mut StdRng::seed_from_u64(7), 60)
            .expect("playout succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn mid_game_state_survives_json() {
        let state = RandomPlayer::new()
            .play_out(&GameState::new_game(), &mut StdRng::seed_from_u64(3), 40)
            .expect("playout succeeds");
        let json = serde_json::to_string(&state).expect("state serializes");
        let back: GameState = serde_json::from_str(&json).expect("state deserializes");
        assert_eq!(back, state);
    }

    #[test]
    fn finished_games_yield_no_moves() {
        let over = turn_phase::concede(&GameState::new_game(), Color::White).expect("concede");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(RandomPlayer::new().choose_move(&over, &mut rng).expect("no lookup"), None);
        assert!(random_game(4).expect("short random game").move_log.len() <= 4);
    }
}
