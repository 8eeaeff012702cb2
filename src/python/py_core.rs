//! Core type bindings for Python.
//!
//! Positions and colors cross the boundary as their lower-case names
//! (`"top_left"`, `"blue"`); tokens as `TokenId` objects.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Color, Position, TokenId, TokenLocation};

/// Parse a position name, raising `ValueError` for unknown names.
pub(crate) fn parse_position(name: &str) -> PyResult<Position> {
    name.parse::<Position>()
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Parse a color name, raising `ValueError` for unknown names.
pub(crate) fn parse_color(name: &str) -> PyResult<Color> {
    Color::ALL
        .into_iter()
        .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("unknown color: {name:?}")))
}

/// Python wrapper for TokenId.
#[pyclass(name = "TokenId")]
#[derive(Clone, Debug)]
pub struct PyTokenId(pub TokenId);

#[pymethods]
impl PyTokenId {
    /// Create the ID of `color`'s token on home slot `home_index` (0-2).
    #[new]
    fn new(color: &str, home_index: usize) -> PyResult<Self> {
        let color = parse_color(color)?;
        if home_index >= crate::core::TOKENS_PER_PLAYER {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "home index out of range: {home_index}"
            )));
        }
        Ok(Self(TokenId::new(color, home_index)))
    }

    /// Owning color name.
    #[getter]
    fn color(&self) -> &'static str {
        self.0.color().name()
    }

    #[getter]
    fn home_index(&self) -> usize {
        self.0.home_index()
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0.raw()
    }

    fn __repr__(&self) -> String {
        format!("TokenId({}, {})", self.0.color(), self.0.home_index())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.raw() as u64
    }
}

/// All position names in board order.
#[pyfunction]
pub fn position_names() -> Vec<&'static str> {
    Position::ALL.iter().map(|p| p.name()).collect()
}

/// Token location as `("home", index)` or `("board", position_name)`.
pub(crate) fn location_tuple(location: TokenLocation) -> (&'static str, String) {
    match location {
        TokenLocation::Home(i) => ("home", i.to_string()),
        TokenLocation::Board(p) => ("board", p.name().to_string()),
    }
}
