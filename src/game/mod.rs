//! The match state machine and its shell-facing views.
//!
//! - `coordinator`: `Match`, the turn/phase/win state machine
//! - `builder`: `MatchBuilder` for configured construction
//! - `snapshot`: serializable read-only copies for rendering
//! - `status`: status line texts

mod builder;
mod coordinator;
pub mod snapshot;
pub mod status;

pub use builder::MatchBuilder;
pub use coordinator::Match;
pub use snapshot::{MatchSnapshot, SlotView, TokenView};
