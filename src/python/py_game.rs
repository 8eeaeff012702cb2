//! Match bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ClickTarget, Color, MatchConfig};
use crate::game::Match;
use crate::rules::{MatchState, Phase, RulesEngine};

use super::py_core::{location_tuple, parse_color, parse_position, PyTokenId};

/// Python wrapper for Match.
///
/// Mutating calls return `True` when the input was accepted. Rejections
/// never raise; they only update `status`.
#[pyclass(name = "Match")]
pub struct PyMatch {
    inner: Match,
}

#[pymethods]
impl PyMatch {
    /// Create a new match.
    ///
    /// # Arguments
    /// - first_mover: "blue" or "green"
    /// - blue_name / green_name: optional display names
    #[new]
    #[pyo3(signature = (first_mover = "blue", blue_name = None, green_name = None))]
    fn new(first_mover: &str, blue_name: Option<String>, green_name: Option<String>) -> PyResult<Self> {
        let mut config = MatchConfig::new().with_first_mover(parse_color(first_mover)?);
        for (color, name) in [(Color::Blue, blue_name), (Color::Green, green_name)] {
            if let Some(name) = name {
                if name.trim().is_empty() {
                    return Err(PyErr::new::<PyValueError, _>(format!(
                        "{color} name must not be blank"
                    )));
                }
                config = config.with_name(color, name);
            }
        }
        Ok(Self {
            inner: Match::new(config),
        })
    }

    /// Select `token` for the named player.
    fn select_token(&mut self, player: &str, token: &PyTokenId) -> PyResult<bool> {
        let player = parse_color(player)?;
        Ok(self.inner.select_token(player, token.0).is_ok())
    }

    /// Send the selected token to the named position.
    fn select_destination(&mut self, position: &str) -> PyResult<bool> {
        let position = parse_position(position)?;
        Ok(self.inner.select_destination(position).is_ok())
    }

    /// A token was clicked.
    fn click_token(&mut self, token: &PyTokenId) -> bool {
        self.inner.click(ClickTarget::Token(token.0)).is_ok()
    }

    /// A board point was clicked.
    fn click_position(&mut self, position: &str) -> PyResult<bool> {
        let position = parse_position(position)?;
        Ok(self.inner.click(ClickTarget::Position(position)).is_ok())
    }

    /// Start over with the same configuration.
    fn restart(&mut self) {
        self.inner.restart();
    }

    #[getter]
    fn active(&self) -> &'static str {
        self.inner.active_color().name()
    }

    #[getter]
    fn phase(&self) -> &'static str {
        match self.inner.phase() {
            Phase::Placement => "placement",
            Phase::Movement => "movement",
        }
    }

    #[getter]
    fn state(&self) -> &'static str {
        match self.inner.state() {
            MatchState::AwaitingSelection => "awaiting_selection",
            MatchState::AwaitingDestination => "awaiting_destination",
            MatchState::GameOver => "game_over",
        }
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.inner.winner().map(|c| c.name())
    }

    #[getter]
    fn status(&self) -> String {
        self.inner.status_message().to_string()
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.inner.turn_number()
    }

    /// The token on a position, if any.
    fn occupant_at(&self, position: &str) -> PyResult<Option<PyTokenId>> {
        let position = parse_position(position)?;
        Ok(self.inner.occupant_at(position).map(PyTokenId))
    }

    /// Where a token is: `("home", "0")` or `("board", "center")`.
    fn token_location(&self, token: &PyTokenId) -> (&'static str, String) {
        location_tuple(self.inner.token(token.0).location())
    }

    fn is_selected(&self, token: &PyTokenId) -> bool {
        self.inner.token(token.0).is_selected()
    }

    fn is_placed(&self, token: &PyTokenId) -> bool {
        self.inner.token(token.0).is_placed()
    }

    /// Positions the token could move to right now.
    fn legal_destinations(&self, token: &PyTokenId) -> Vec<&'static str> {
        self.inner
            .legal_destinations(token.0)
            .into_iter()
            .map(|p| p.name())
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Match(turn={}, active={}, state={})",
            self.inner.turn_number(),
            self.active(),
            self.state()
        )
    }
}
