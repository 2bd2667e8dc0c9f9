//! One game room: serialized access to a single `GameState`.
//!
//! Transitions run one at a time under the room lock. A transition that
//! fails commits nothing, so later submissions always observe the last
//! accepted state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::chess_errors::MoveResult;
use crate::dual_board::turn_phase;
use crate::game_state::chess_types::{BoardKind, Color};
use crate::game_state::game_state::GameState;
use crate::game_state::variant_rules::VariantRules;
use crate::moves::move_descriptions::MoveIntent;
use crate::utils::render_game_state::render_game_state;

/// Committed state of a room as handed to persistence and broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub state: GameState,
    /// Incremented on every committed transition.
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

pub struct GameRoom {
    id: String,
    inner: Mutex<RoomSnapshot>,
}

impl GameRoom {
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_state(id, GameState::new_game())
    }

    pub fn with_rules(id: impl Into<String>, rules: VariantRules) -> Self {
        Self::from_state(id, GameState::with_rules(rules))
    }

    /// Room resuming a previously persisted state.
    pub fn from_state(id: impl Into<String>, state: GameState) -> Self {
        Self {
            id: id.into(),
            inner: Mutex::new(RoomSnapshot {
                state,
                revision: 0,
                updated_at: Utc::now(),
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    // The guarded snapshot is only ever replaced whole.
    fn lock(&self) -> MutexGuard<'_, RoomSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        self.lock().clone()
    }

    pub fn submit_move(&self, board: BoardKind, intent: &MoveIntent) -> MoveResult<RoomSnapshot> {
        self.transition(|state| turn_phase::apply_move(state, board, intent))
    }

    /// `loser` resigns the room's game.
    pub fn concede(&self, loser: Color) -> MoveResult<RoomSnapshot> {
        self.transition(|state| turn_phase::concede(state, loser))
    }

    /// Start over from the initial position, keeping the room's rules.
    pub fn reset(&self) -> RoomSnapshot {
        let mut guard = self.lock();
        let rules = guard.state.rules.clone();
        guard.state = GameState::with_rules(rules);
        Self::commit(&self.id, &mut guard);
        guard.clone()
    }

    /// Change a variant option by name. Only allowed before the first move.
    pub fn set_option(&self, name: &str, value: &str) -> Result<RoomSnapshot, String> {
        let mut guard = self.lock();
        if !guard.state.move_log.is_empty() {
            return Err(format!("Room {}: options are fixed once play has started", self.id));
        }
        guard.state.rules.set_option(name, value)?;
        Self::commit(&self.id, &mut guard);
        Ok(guard.clone())
    }

    fn transition<F>(&self, apply: F) -> MoveResult<RoomSnapshot>
    where
        F: FnOnce(&GameState) -> MoveResult<GameState>,
    {
        let mut guard = self.lock();
        match apply(&guard.state) {
            Ok(next) => {
                guard.state = next;
                Self::commit(&self.id, &mut guard);
                Ok(guard.clone())
            }
            Err(err) => {
                warn!("room {}: rejected at revision {}: {err}", self.id, guard.revision);
                Err(err)
            }
        }
    }

    fn commit(id: &str, snapshot: &mut RoomSnapshot) {
        snapshot.revision += 1;
        snapshot.updated_at = Utc::now();
        trace!(
            "room {id} revision {}\n{}",
            snapshot.revision,
            render_game_state(&snapshot.state)
        );
    }
}
