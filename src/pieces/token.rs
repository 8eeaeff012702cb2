//! A single movable piece.
//!
//! Tokens never validate anything themselves. Legality is decided by the
//! match before `move_to` is called, and the "only one selected token"
//! rule is enforced by the match, which clears every other token when one
//! is selected.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Position, TokenId, TokenLocation};

/// A player's piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    location: TokenLocation,
    placed: bool,
    selected: bool,
}

impl Token {
    /// Create a token waiting on its home slot.
    #[must_use]
    pub fn new(id: TokenId) -> Self {
        Self {
            id,
            location: TokenLocation::Home(id.home_index()),
            placed: false,
            selected: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Owning color (fixed for the token's lifetime).
    #[must_use]
    pub fn color(&self) -> Color {
        self.id.color()
    }

    #[must_use]
    pub fn location(&self) -> TokenLocation {
        self.location
    }

    /// The board point this token stands on, if placed.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.location.position()
    }

    /// True once the token has stood on a board point at least once.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Mark this token as selected.
    pub fn select(&mut self) {
        self.selected = true;
    }

    /// Clear the selection mark.
    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Move to `position` unconditionally and mark the token placed.
    pub fn move_to(&mut self, position: Position) {
        self.location = TokenLocation::Board(position);
        self.placed = true;
    }
}
