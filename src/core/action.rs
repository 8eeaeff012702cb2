//! Input actions and move records.
//!
//! The presentation shell resolves raw input (mouse hits, keys) into one of
//! two logical actions before calling into a match:
//! - "Select token X" for player P
//! - "Select destination position Y"
//!
//! `ClickTarget` is the coarser form: "something was clicked", where the
//! match decides whether it is a selection or a destination.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::entity::TokenId;
use super::position::Position;

/// A logical input to a match.
///
/// ## Example
///
/// ```
/// use star_morris::core::{Action, Color, Position, TokenId};
///
/// let pick = Action::SelectToken { player: Color::Blue, token: TokenId::new(Color::Blue, 0) };
/// let drop = Action::SelectDestination(Position::Center);
/// assert_ne!(pick, drop);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// `player` picks up `token`.
    SelectToken { player: Color, token: TokenId },
    /// The selected token should go to this position.
    SelectDestination(Position),
}

/// Something the user clicked on, already hit-tested by the shell.
///
/// Tokens are drawn above slots, so a click on a placed token arrives as
/// `Token`, never as the `Position` beneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickTarget {
    Token(TokenId),
    Position(Position),
}

/// Where a token currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenLocation {
    /// Not yet placed; waiting on its color's home slot `0..3`.
    Home(usize),
    /// Standing on a board point.
    Board(Position),
}

impl TokenLocation {
    /// The board point, if the token is on the board.
    #[must_use]
    pub const fn position(self) -> Option<Position> {
        match self {
            TokenLocation::Board(p) => Some(p),
            TokenLocation::Home(_) => None,
        }
    }

    /// Check if the token is still at home.
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, TokenLocation::Home(_))
    }
}

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Showing the last move in the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub color: Color,

    /// The token moved.
    pub token: TokenId,

    /// Where the token was before the move.
    pub from: TokenLocation,

    /// Where the token went.
    pub to: Position,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(color: Color, token: TokenId, from: TokenLocation, to: Position, turn: u32) -> Self {
        Self {
            color,
            token,
            from,
            to,
            turn,
        }
    }
}
