//! Python bindings for the star_morris rules engine.
//!
//! Lets a Python presentation shell (pygame or similar) drive the rules
//! core: the shell hit-tests clicks, calls into the match and redraws
//! from the match's read-only state.
//!
//! # Quick Start
//!
//! ```python
//! import star_morris as sm
//!
//! game = sm.Match()
//! token = sm.TokenId("blue", 0)
//!
//! game.click_token(token)
//! game.click_position("center")
//! print(game.status)  # "Token moved. GREEN'S TURN"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// star_morris: three men's morris on a nine-point star.
#[pymodule]
fn star_morris(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTokenId>()?;
    m.add_class::<PyMatch>()?;
    m.add_function(wrap_pyfunction!(py_core::position_names, m)?)?;

    Ok(())
}
