//! Named points of the star board.
//!
//! The board has nine points: eight on the outer ring plus the center.
//! Ring points are numbered clockwise starting from `TopLeft`, so the
//! point diametrically opposite ring index `i` is `(i + 4) % 8`.
//!
//! ## Usage
//!
//! ```
//! use star_morris::core::Position;
//!
//! let p: Position = "top_left".parse().unwrap();
//! assert_eq!(p, Position::TopLeft);
//! assert_eq!(p.name(), "top_left");
//! assert_eq!(p.opposite(), Some(Position::BottomRight));
//! assert_eq!(Position::Center.opposite(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of points on the board.
pub const POSITION_COUNT: usize = 9;

/// Number of points on the outer ring.
pub const RING_SIZE: usize = 8;

/// One of the nine fixed points of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    TopLeft,
    TopRight,
    RightUpper,
    RightLower,
    BottomRight,
    BottomLeft,
    LeftLower,
    LeftUpper,
    Center,
}

/// Error returned when a string does not name a board point.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: {0:?}")]
pub struct ParsePositionError(pub String);

impl Position {
    /// All points: the ring in clockwise order, then the center.
    pub const ALL: [Position; POSITION_COUNT] = [
        Position::TopLeft,
        Position::TopRight,
        Position::RightUpper,
        Position::RightLower,
        Position::BottomRight,
        Position::BottomLeft,
        Position::LeftLower,
        Position::LeftUpper,
        Position::Center,
    ];

    /// The ring points in clockwise order.
    pub const RING: [Position; RING_SIZE] = [
        Position::TopLeft,
        Position::TopRight,
        Position::RightUpper,
        Position::RightLower,
        Position::BottomRight,
        Position::BottomLeft,
        Position::LeftLower,
        Position::LeftUpper,
    ];

    /// Dense index in `0..9`. Ring points use their clockwise index, center is 8.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check whether this is the center point.
    #[must_use]
    pub const fn is_center(self) -> bool {
        matches!(self, Position::Center)
    }

    /// Clockwise ring index, or `None` for the center.
    #[must_use]
    pub const fn ring_index(self) -> Option<usize> {
        if self.is_center() {
            None
        } else {
            Some(self.index())
        }
    }

    /// The ring point diametrically opposite this one.
    #[must_use]
    pub const fn opposite(self) -> Option<Self> {
        match self.ring_index() {
            Some(i) => Some(Self::RING[(i + RING_SIZE / 2) % RING_SIZE]),
            None => None,
        }
    }

    /// Identifier used by the presentation layer (`"top_left"`, `"center"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Position::TopLeft => "top_left",
            Position::TopRight => "top_right",
            Position::RightUpper => "right_upper",
            Position::RightLower => "right_lower",
            Position::BottomRight => "bottom_right",
            Position::BottomLeft => "bottom_left",
            Position::LeftLower => "left_lower",
            Position::LeftUpper => "left_upper",
            Position::Center => "center",
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
