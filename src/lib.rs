//! # star-morris
//!
//! Rules engine for three men's morris played on a nine-point star: eight
//! points on a ring plus a center, two players with three tokens each.
//!
//! ## Rules
//!
//! 1. **Placement**: until all six tokens have been placed, the player on
//!    turn moves one of their tokens to any free point.
//!
//! 2. **Movement**: afterwards, a token may only move along an edge of the
//!    star (to a ring neighbour or between ring and center).
//!
//! 3. **Winning**: a player whose three tokens stand on a diameter (two
//!    opposite ring points and the center) wins immediately.
//!
//! ## Architecture
//!
//! - **Single aggregate**: `Match` owns all mutable state. Input is two
//!   kinds of event, "select token" and "select destination", each
//!   resolved completely before returning.
//!
//! - **Recoverable rejections**: illegal input returns a `MoveError` and
//!   updates the status line; the match itself is never changed by it.
//!
//! - **Presentation-free**: rendering, hit-testing and input polling live
//!   in a separate shell. The optional `python` feature exposes the match
//!   to a Python shell.
//!
//! ## Modules
//!
//! - `core`: positions, colors, token IDs, actions, configuration
//! - `board`: static topology and slot occupancy
//! - `pieces`: tokens and players
//! - `rules`: phases, errors, the `RulesEngine` trait
//! - `game`: the `Match` state machine and snapshots

pub mod board;
pub mod core;
pub mod game;
pub mod pieces;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ClickTarget, Color, ColorMap, MatchConfig, MoveRecord, Position, TokenId,
    TokenLocation,
};

pub use crate::board::{SlotRegistry, Topology, WinningLine};

pub use crate::pieces::{Player, Token};

pub use crate::rules::{MatchState, MoveError, Phase, RulesEngine, Transition};

pub use crate::game::{Match, MatchBuilder, MatchSnapshot};
