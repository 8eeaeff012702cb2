//! Rejected-move errors.
//!
//! Every rejection is recoverable: the match state is left unchanged and
//! the error's display text becomes the status message.

use crate::core::Position;

/// Why an input was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The token does not belong to the player, or the player is not on turn.
    #[error("Wrong token: not your token")]
    NotYourToken,

    /// A destination was chosen before any token was selected.
    #[error("Please select a token first")]
    NoSelection,

    /// The destination already holds another token.
    #[error("Slot occupied: {0} already holds a token")]
    OccupiedSlot(Position),

    /// Movement-phase destination is not next to the token's point.
    #[error("Illegal move: {to} is not adjacent to {from}")]
    IllegalAdjacency { from: Position, to: Position },

    /// The match has a winner; only restart is accepted.
    #[error("Game over. Restart to play again.")]
    GameOver,
}
