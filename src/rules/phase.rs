//! Match phases and input states.

use serde::{Deserialize, Serialize};

use crate::core::TOKEN_COUNT;

/// Which movement rule applies.
///
/// Derived from token state on every use, never stored: PLACEMENT while
/// fewer than all six tokens have been placed, MOVEMENT afterwards. Tokens
/// never become unplaced, so the phase only moves forward within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Any free point is a legal destination.
    Placement,
    /// Destinations must be adjacent to the token's point.
    Movement,
}

impl Phase {
    /// Phase for a match where `placed` tokens have been placed.
    #[must_use]
    pub const fn from_placed_count(placed: usize) -> Self {
        if placed < TOKEN_COUNT {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }
}

/// What input the match is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// No token selected; the active player must pick one of theirs.
    AwaitingSelection,
    /// A token is selected; waiting for its destination.
    AwaitingDestination,
    /// A winner exists. Only restart is accepted.
    GameOver,
}
