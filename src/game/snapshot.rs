//! Read-only match snapshots for the presentation shell.
//!
//! A snapshot is a plain serializable copy of everything the shell draws:
//! slot occupants, token locations and marks, whose turn it is and the
//! status line. Taking one never changes the match.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Position, TokenId, TokenLocation};
use crate::pieces::Token;
use crate::rules::{MatchState, Phase};

/// One board point and its occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub position: Position,
    pub occupant: Option<TokenId>,
}

/// One token as the shell sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub id: TokenId,
    pub color: Color,
    pub location: TokenLocation,
    pub placed: bool,
    pub selected: bool,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id(),
            color: token.color(),
            location: token.location(),
            placed: token.is_placed(),
            selected: token.is_selected(),
        }
    }
}

/// Everything the shell needs to render one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub active: Color,
    pub phase: Phase,
    pub state: MatchState,
    /// All nine points in board order.
    pub slots: Vec<SlotView>,
    /// All six tokens in ID order.
    pub tokens: Vec<TokenView>,
    pub winner: Option<Color>,
    pub status: String,
    pub turn: u32,
}

impl MatchSnapshot {
    /// The occupant of `position` in this snapshot.
    #[must_use]
    pub fn occupant_at(&self, position: Position) -> Option<TokenId> {
        self.slots
            .iter()
            .find(|s| s.position == position)
            .and_then(|s| s.occupant)
    }

    /// The view of `token` in this snapshot.
    #[must_use]
    pub fn token(&self, token: TokenId) -> Option<&TokenView> {
        self.tokens.iter().find(|t| t.id == token)
    }
}
