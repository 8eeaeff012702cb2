//! Token identification.
//!
//! Every token in a match has a unique `TokenId`.
//!
//! ## ID Layout
//!
//! IDs are allocated per color in index order:
//! - `0..3`: BLUE's tokens, home slots 0, 1, 2
//! - `3..6`: GREEN's tokens, home slots 0, 1, 2
//!
//! The owner and home slot are therefore derivable from the ID alone.
//!
//! ```
//! use star_morris::core::{Color, TokenId};
//!
//! let token = TokenId::new(Color::Green, 1);
//! assert_eq!(token.raw(), 4);
//! assert_eq!(token.color(), Color::Green);
//! assert_eq!(token.home_index(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::color::{Color, COLOR_COUNT};

/// Tokens owned by each player.
pub const TOKENS_PER_PLAYER: usize = 3;

/// Tokens in a whole match.
pub const TOKEN_COUNT: usize = TOKENS_PER_PLAYER * COLOR_COUNT;

/// Unique identifier for a token.
///
/// The raw field is public for convenience, so out-of-range values can be
/// built by hand; the match rejects them through [`TokenId::is_valid`].
/// Deserialization only accepts in-range values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create the ID of `color`'s token at `home_index`.
    ///
    /// Panics if `home_index` is not in `0..3`.
    #[must_use]
    pub const fn new(color: Color, home_index: usize) -> Self {
        assert!(home_index < TOKENS_PER_PLAYER, "home index out of range");
        Self((color.index() * TOKENS_PER_PLAYER + home_index) as u8)
    }

    /// Build an ID from its raw value, if it is in range.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < TOKEN_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Check if this ID names one of the six tokens of a match.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < TOKEN_COUNT
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Dense index in `0..6`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The color that owns this token.
    #[must_use]
    pub const fn color(self) -> Color {
        if self.index() < TOKENS_PER_PLAYER {
            Color::Blue
        } else {
            Color::Green
        }
    }

    /// The home slot this token starts on (`0..3`).
    #[must_use]
    pub const fn home_index(self) -> usize {
        self.index() % TOKENS_PER_PLAYER
    }

    /// All token IDs of one color, in home-slot order.
    pub fn of_color(color: Color) -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_PLAYER).map(move |i| TokenId::new(color, i))
    }

    /// All token IDs of the match.
    pub fn all() -> impl Iterator<Item = TokenId> {
        (0..TOKEN_COUNT as u8).map(TokenId)
    }
}

/// Error returned when a raw value does not name a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token id out of range: {0}")]
pub struct InvalidTokenId(pub u8);

impl TryFrom<u8> for TokenId {
    type Error = InvalidTokenId;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(InvalidTokenId(raw))
    }
}

impl From<TokenId> for u8 {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} token {}", self.color(), self.home_index())
    }
}
