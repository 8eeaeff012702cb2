//! Status line texts shown by the shell.

use crate::rules::Phase;

/// Prompt for the player on turn: `"BLUE'S TURN"`.
pub fn your_turn(name: &str) -> String {
    format!("{}'S TURN", name.to_uppercase())
}

/// After a token is picked up.
pub fn token_selected(phase: Phase) -> String {
    match phase {
        Phase::Placement => "Token selected. Click on a star to place your token.".to_string(),
        Phase::Movement => "Token selected. Click on a star to move your token.".to_string(),
    }
}

/// After an accepted move that did not end the match.
pub fn token_moved(next_name: &str) -> String {
    format!("Token moved. {}", your_turn(next_name))
}

/// After the winning move.
pub fn winner(name: &str) -> String {
    format!("{} WINS! Restart to play again.", name.to_uppercase())
}
