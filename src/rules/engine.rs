//! Rules engine trait.
//!
//! The presentation shell and tests drive a match through this trait:
//! - What the active player may select
//! - Where a token may go
//! - How an action changes the match
//! - Whether the match is over

use crate::core::{Action, Color, MoveRecord, Position, TokenId};

use super::error::MoveError;
use super::phase::Phase;

/// What an accepted action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A token was selected; a destination is awaited.
    Selected(TokenId),
    /// A token moved and the turn passed to `next`.
    Moved { record: MoveRecord, next: Color },
    /// A token moved and completed a winning line.
    Won { record: MoveRecord, winner: Color },
}

impl Transition {
    /// The move made, if this transition moved a token.
    #[must_use]
    pub fn record(&self) -> Option<MoveRecord> {
        match self {
            Transition::Selected(_) => None,
            Transition::Moved { record, .. } | Transition::Won { record, .. } => Some(*record),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_tokens`: empty once the match is over
/// - `legal_destinations`: empty for tokens the active player may not move
/// - `apply`: a rejected action must leave the match unchanged
pub trait RulesEngine {
    /// Color whose turn it is.
    fn active_color(&self) -> Color;

    /// Current movement rule.
    fn phase(&self) -> Phase;

    /// The currently selected token.
    fn selected_token(&self) -> Option<TokenId>;

    /// The winner, once the match is over.
    fn winner(&self) -> Option<Color>;

    /// Tokens the active player may select.
    fn legal_tokens(&self) -> Vec<TokenId>;

    /// Points `token` may move to if selected now.
    fn legal_destinations(&self, token: TokenId) -> Vec<Position>;

    /// Apply an action.
    ///
    /// # Errors
    ///
    /// Returns the reason the action was rejected; the match is unchanged.
    fn apply(&mut self, action: Action) -> Result<Transition, MoveError>;

    // === Convenience Methods ===

    /// Check if the match is over.
    fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Enumerate every action that would currently be accepted.
    fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }

        let player = self.active_color();
        let mut actions: Vec<Action> = self
            .legal_tokens()
            .into_iter()
            .map(|token| Action::SelectToken { player, token })
            .collect();

        if let Some(token) = self.selected_token() {
            actions.extend(
                self.legal_destinations(token)
                    .into_iter()
                    .map(Action::SelectDestination),
            );
        }

        actions
    }
}
