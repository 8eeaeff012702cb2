//! Static board graph.
//!
//! Each ring point touches its two ring neighbours and the center; the
//! center touches all eight ring points. The four winning lines are the
//! diameters: a ring point, the center and the opposite ring point.
//!
//! Everything here is computed from `Position` alone and needs no
//! allocation beyond the small neighbour lists.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Position, RING_SIZE};

/// Neighbour list of one point (at most 8 entries, never heap-allocated).
pub type Neighbours = SmallVec<[Position; RING_SIZE]>;

/// Three points that win the game when held by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [Position; 3]);

impl WinningLine {
    /// The points of this line.
    #[must_use]
    pub const fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    /// Check if `p` is on this line.
    #[must_use]
    pub fn contains(&self, p: Position) -> bool {
        self.0.contains(&p)
    }

    /// Check if `held` is exactly this line, in any order.
    ///
    /// `held` must contain distinct points.
    #[must_use]
    pub fn matches(&self, held: &[Position]) -> bool {
        held.len() == self.0.len() && held.iter().all(|p| self.contains(*p))
    }
}

/// The four winning lines, in fixed check order.
pub const WINNING_LINES: [WinningLine; 4] = [
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    WinningLine([Position::RightUpper, Position::Center, Position::LeftLower]),
    WinningLine([Position::RightLower, Position::Center, Position::LeftUpper]),
];

/// Read-only view of the board graph.
///
/// Zero-sized: the graph is fixed, so every `Topology` value is the same
/// board and can be shared freely.
///
/// ```
/// use star_morris::board::Topology;
/// use star_morris::core::Position;
///
/// let board = Topology;
/// assert!(board.is_adjacent(Position::TopLeft, Position::Center));
/// assert!(!board.is_adjacent(Position::TopLeft, Position::BottomRight));
/// assert_eq!(board.adjacents(Position::Center).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Topology;

impl Topology {
    /// Neighbours of `p`. Ring points list the center last.
    #[must_use]
    pub fn adjacents(&self, p: Position) -> Neighbours {
        match p.ring_index() {
            Some(i) => {
                let prev = Position::RING[(i + RING_SIZE - 1) % RING_SIZE];
                let next = Position::RING[(i + 1) % RING_SIZE];
                SmallVec::from_slice(&[prev, next, Position::Center])
            }
            None => SmallVec::from_slice(&Position::RING),
        }
    }

    /// Check whether `a` and `b` are joined by an edge.
    #[must_use]
    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        match (a.ring_index(), b.ring_index()) {
            (None, None) => false,
            (None, Some(_)) | (Some(_), None) => true,
            (Some(i), Some(j)) => {
                let d = (i + RING_SIZE - j) % RING_SIZE;
                d == 1 || d == RING_SIZE - 1
            }
        }
    }

    /// The four winning lines, in fixed check order.
    #[must_use]
    pub fn winning_lines(&self) -> &'static [WinningLine] {
        &WINNING_LINES
    }

    /// The first winning line that `held` occupies exactly, if any.
    #[must_use]
    pub fn line_formed_by(&self, held: &[Position]) -> Option<WinningLine> {
        self.winning_lines().iter().copied().find(|line| line.matches(held))
    }
}
