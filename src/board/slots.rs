//! Slot registry: which token stands on which point.
//!
//! The registry tracks occupancy in both directions:
//! - point -> token, for "what is at top_left?"
//! - token -> point, so a token's old slot can be cleared when it moves
//!
//! A point holds at most one token and a token stands on at most one
//! point. Placing onto a point held by a different token fails and leaves
//! the registry unchanged.

use rustc_hash::FxHashMap;

use crate::core::{Position, TokenId};
use crate::rules::MoveError;

/// Occupancy of the nine board points.
///
/// ## Usage
///
/// ```
/// use star_morris::board::SlotRegistry;
/// use star_morris::core::{Color, Position, TokenId};
///
/// let mut slots = SlotRegistry::new();
/// let token = TokenId::new(Color::Blue, 0);
///
/// slots.place(token, Position::TopLeft).unwrap();
/// assert_eq!(slots.occupant_at(Position::TopLeft), Some(token));
///
/// slots.place(token, Position::Center).unwrap();
/// assert_eq!(slots.occupant_at(Position::TopLeft), None);
/// assert_eq!(slots.position_of(token), Some(Position::Center));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotRegistry {
    /// point -> occupying token
    occupants: FxHashMap<Position, TokenId>,

    /// token -> point it stands on
    locations: FxHashMap<TokenId, Position>,
}

impl SlotRegistry {
    /// Create a registry with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The token standing on `position`, if any.
    #[must_use]
    pub fn occupant_at(&self, position: Position) -> Option<TokenId> {
        self.occupants.get(&position).copied()
    }

    /// The point `token` stands on, if it has been placed.
    #[must_use]
    pub fn position_of(&self, token: TokenId) -> Option<Position> {
        self.locations.get(&token).copied()
    }

    /// Check if a slot is empty.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        !self.occupants.contains_key(&position)
    }

    /// Check if `position` is held by a token other than `token`.
    #[must_use]
    pub fn is_blocked_for(&self, position: Position, token: TokenId) -> bool {
        matches!(self.occupant_at(position), Some(other) if other != token)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupants.len()
    }

    /// Put `token` on `position`, vacating its previous slot.
    ///
    /// Placing a token onto the slot it already holds is a no-op.
    ///
    /// # Errors
    ///
    /// `MoveError::OccupiedSlot` if a different token holds `position`.
    pub fn place(&mut self, token: TokenId, position: Position) -> Result<(), MoveError> {
        if self.is_blocked_for(position, token) {
            return Err(MoveError::OccupiedSlot(position));
        }

        if let Some(old) = self.locations.insert(token, position) {
            self.occupants.remove(&old);
        }
        self.occupants.insert(position, token);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn blue(i: usize) -> TokenId {
        TokenId::new(Color::Blue, i)
    }

    fn green(i: usize) -> TokenId {
        TokenId::new(Color::Green, i)
    }

    #[test]
    fn test_new_registry_is_empty() {
        let slots = SlotRegistry::new();
        for p in Position::ALL {
            assert!(slots.is_empty(p));
            assert_eq!(slots.occupant_at(p), None);
        }
        assert_eq!(slots.occupied_count(), 0);
    }

    #[test]
    fn test_place_and_move() {
        let mut slots = SlotRegistry::new();
        slots.place(blue(0), Position::TopLeft).unwrap();
        slots.place(blue(0), Position::TopRight).unwrap();

        assert!(slots.is_empty(Position::TopLeft));
        assert_eq!(slots.occupant_at(Position::TopRight), Some(blue(0)));
        assert_eq!(slots.occupied_count(), 1);
    }

    #[test]
    fn test_place_on_occupied_slot_fails() {
        let mut slots = SlotRegistry::new();
        slots.place(blue(0), Position::TopLeft).unwrap();
        slots.place(green(0), Position::Center).unwrap();

        let before = slots.clone();
        let err = slots.place(green(0), Position::TopLeft).unwrap_err();

        assert_eq!(err, MoveError::OccupiedSlot(Position::TopLeft));
        assert_eq!(slots, before);
    }

    #[test]
    fn test_place_on_own_slot_is_noop() {
        let mut slots = SlotRegistry::new();
        slots.place(blue(1), Position::Center).unwrap();
        slots.place(blue(1), Position::Center).unwrap();

        assert_eq!(slots.occupant_at(Position::Center), Some(blue(1)));
        assert_eq!(slots.occupied_count(), 1);
    }

    #[test]
    fn test_is_blocked_for() {
        let mut slots = SlotRegistry::new();
        slots.place(blue(0), Position::LeftLower).unwrap();

        assert!(!slots.is_blocked_for(Position::LeftLower, blue(0)));
        assert!(slots.is_blocked_for(Position::LeftLower, green(2)));
        assert!(!slots.is_blocked_for(Position::Center, green(2)));
    }
}
