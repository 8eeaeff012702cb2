//! Match configuration.
//!
//! A match is configured once at construction and the same configuration
//! is reused by `restart`. Only two knobs exist: which color moves first
//! and the display name of each side.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Color that takes the first turn (and wins ties in the win check).
    pub first_mover: Color,

    /// Display name per color. `None` falls back to the upper-case color name.
    pub names: ColorMap<Option<String>>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_mover: Color::Blue,
            names: ColorMap::default(),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration (BLUE first, color names).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first mover.
    #[must_use]
    pub fn with_first_mover(mut self, color: Color) -> Self {
        self.first_mover = color;
        self
    }

    /// Set the display name for one color.
    ///
    /// Panics if `name` is empty or only whitespace.
    #[must_use]
    pub fn with_name(mut self, color: Color, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Player name must not be blank");
        self.names[color] = Some(name);
        self
    }

    /// Resolve the display name of a color.
    ///
    /// Blank names (only reachable through deserialization) fall back to
    /// the color name.
    #[must_use]
    pub fn display_name(&self, color: Color) -> String {
        match &self.names[color] {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => color.name().to_uppercase(),
        }
    }
}
