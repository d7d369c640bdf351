//! Python bindings for the memory-pairs engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_pairs as mp
//!
//! game = mp.MemoryGame(seed=42, manual_clock=True)
//! game.new_standard_game()
//!
//! first, second = [c.id for c in game.cards()][:2]
//! game.select_card(first)
//! game.select_card(second)   # "matched" or "mismatched"
//!
//! game.advance(1000)         # flip a mismatch back
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// memory_pairs: a memory-matching card game engine.
#[pymodule]
fn memory_pairs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyGameEvent>()?;
    m.add_class::<PyMemoryGame>()?;

    Ok(())
}
