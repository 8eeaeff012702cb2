//! A side of the match and its three tokens.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::SlotRegistry;
use crate::core::{Color, Position, TokenId, TOKENS_PER_PLAYER};
use crate::rules::MoveError;

use super::token::Token;

/// Points held by one player (at most three, stack-allocated).
pub type HeldPositions = SmallVec<[Position; TOKENS_PER_PLAYER]>;

/// One player: a color, a display name and exactly three tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    name: String,
    tokens: [Token; TOKENS_PER_PLAYER],
}

impl Player {
    /// Create a player with all three tokens at home.
    pub fn new(color: Color, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
            tokens: [0, 1, 2].map(|i| Token::new(TokenId::new(color, i))),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Check if `token` belongs to this player.
    ///
    /// Out-of-range IDs belong to nobody.
    #[must_use]
    pub fn owns_token(&self, token: TokenId) -> bool {
        token.is_valid() && token.color() == self.color
    }

    /// Look up one of this player's tokens.
    #[must_use]
    pub fn token(&self, token: TokenId) -> Option<&Token> {
        if self.owns_token(token) {
            Some(&self.tokens[token.home_index()])
        } else {
            None
        }
    }

    pub(crate) fn token_mut(&mut self, token: TokenId) -> Option<&mut Token> {
        if self.owns_token(token) {
            Some(&mut self.tokens[token.home_index()])
        } else {
            None
        }
    }

    pub(crate) fn tokens_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.tokens.iter_mut()
    }

    /// Number of tokens that have been placed at least once.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_placed()).count()
    }

    /// Points currently held by this player's tokens.
    #[must_use]
    pub fn held_positions(&self) -> HeldPositions {
        self.tokens.iter().filter_map(Token::position).collect()
    }

    /// Move one of this player's tokens to `destination`.
    ///
    /// No adjacency or phase checks happen here; the match decides those.
    ///
    /// # Errors
    ///
    /// - `MoveError::NotYourToken` if `token` belongs to the other player
    /// - `MoveError::OccupiedSlot` if another token holds `destination`
    pub fn move_token(
        &mut self,
        slots: &mut SlotRegistry,
        token: TokenId,
        destination: Position,
    ) -> Result<(), MoveError> {
        let piece = self.token_mut(token).ok_or(MoveError::NotYourToken)?;
        slots.place(token, destination)?;
        piece.move_to(destination);
        Ok(())
    }
}
