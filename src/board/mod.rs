//! The board: a fixed point graph plus the mutable slot occupancy.
//!
//! - `topology`: adjacency and winning lines (immutable)
//! - `slots`: which token stands where

pub mod slots;
pub mod topology;

pub use slots::SlotRegistry;
pub use topology::{Neighbours, Topology, WinningLine, WINNING_LINES};
