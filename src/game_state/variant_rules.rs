//! Tunable variant options.
//!
//! The rules travel inside `GameState` so every transition stays a pure
//! function of its inputs. Options can be loaded with serde (missing fields
//! take their defaults) or changed by name with `set_option`, mirroring a
//! UCI `setoption name <Name> value <Value>` command.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::DEFAULT_REPETITION_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantRules {
    /// Apply every castling-rights change to both boards.
    pub shared_castling_rights: bool,
    /// Propagate ordinary secondary-board captures to the main board.
    /// En-passant captures propagate either way regardless.
    pub propagate_secondary_captures: bool,
    pub repetition_threshold: usize,
}

impl Default for VariantRules {
    fn default() -> Self {
        Self {
            shared_castling_rights: false,
            propagate_secondary_captures: false,
            repetition_threshold: DEFAULT_REPETITION_THRESHOLD,
        }
    }
}

impl VariantRules {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        if name.eq_ignore_ascii_case("SharedCastlingRights") {
            self.shared_castling_rights = parse_bool(value)?;
        } else if name.eq_ignore_ascii_case("PropagateSecondaryCaptures") {
            self.propagate_secondary_captures = parse_bool(value)?;
        } else if name.eq_ignore_ascii_case("RepetitionThreshold") {
            let threshold = value
                .parse::<usize>()
                .map_err(|_| format!("Invalid RepetitionThreshold value: {value}"))?;
            if threshold < 2 {
                return Err(format!("RepetitionThreshold must be at least 2, got {threshold}"));
            }
            self.repetition_threshold = threshold;
        } else {
            return Err(format!("Unknown option: {name}"));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("Expected true or false, got {value}"))
    }
}
