//! Builder for creating a match.

use crate::core::{Color, MatchConfig};

use super::coordinator::Match;

/// Builder for creating a [`Match`].
///
/// ```
/// use star_morris::core::Color;
/// use star_morris::game::MatchBuilder;
///
/// let game = MatchBuilder::new()
///     .first_mover(Color::Green)
///     .name(Color::Blue, "Sam")
///     .build();
///
/// assert_eq!(game.active_color(), Color::Green);
/// assert_eq!(game.player(Color::Blue).name(), "Sam");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: MatchConfig,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn first_mover(mut self, color: Color) -> Self {
        self.config.first_mover = color;
        self
    }

    /// Set a display name. Panics if `name` is blank.
    pub fn name(mut self, color: Color, name: impl Into<String>) -> Self {
        self.config = self.config.with_name(color, name);
        self
    }

    /// Build the match.
    pub fn build(self) -> Match {
        Match::new(self.config)
    }
}
