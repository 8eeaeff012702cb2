//! Move legality, phases and the rules-engine trait.
//!
//! The match implements `RulesEngine`; callers that only need to drive a
//! game (the shell, property tests) can stay generic over the trait.

pub mod engine;
pub mod error;
pub mod phase;

pub use engine::{RulesEngine, Transition};
pub use error::MoveError;
pub use phase::{MatchState, Phase};
