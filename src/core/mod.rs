//! Core types: board points, colors, token IDs, actions, configuration.
//!
//! These are plain value types shared by every other module. None of them
//! hold mutable match state.

pub mod action;
pub mod color;
pub mod config;
pub mod entity;
pub mod position;

pub use action::{Action, ClickTarget, MoveRecord, TokenLocation};
pub use color::{Color, ColorMap, COLOR_COUNT};
pub use config::MatchConfig;
pub use entity::{InvalidTokenId, TokenId, TOKENS_PER_PLAYER, TOKEN_COUNT};
pub use position::{ParsePositionError, Position, POSITION_COUNT, RING_SIZE};
