//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;
use crate::events::GameEvent;

/// Python wrapper for a card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Unique id of this copy; pass it to `select_card`.
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    /// Symbol shared with the partner card.
    #[getter]
    fn symbol(&self) -> u32 {
        self.0.symbol.raw()
    }

    #[getter]
    fn revealed(&self) -> bool {
        self.0.revealed
    }

    #[getter]
    fn matched(&self) -> bool {
        self.0.matched
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(id={}, symbol={}, revealed={}, matched={})",
            self.0.id.raw(),
            self.0.symbol.raw(),
            self.0.revealed,
            self.0.matched
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for an engine event.
#[pyclass(name = "GameEvent")]
#[derive(Clone, Debug)]
pub struct PyGameEvent(pub GameEvent);

#[pymethods]
impl PyGameEvent {
    /// Event name, e.g. `"pair_matched"`.
    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Ids of the cards the event concerns.
    #[getter]
    fn cards(&self) -> Vec<u32> {
        self.0.cards().into_iter().map(|id| id.raw()).collect()
    }

    /// Turn count carried by completion events.
    #[getter]
    fn turns(&self) -> Option<u32> {
        match self.0 {
            GameEvent::AllMatched { turns } | GameEvent::CompletionShown { turns } => Some(turns),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("GameEvent({:?})", self.0)
    }
}
