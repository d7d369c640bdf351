//! Engine events for the presentation layer.

mod event;

pub use event::GameEvent;
