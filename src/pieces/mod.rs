//! Tokens and the players that own them.

pub mod player;
pub mod token;

pub use player::{HeldPositions, Player};
pub use token::Token;
