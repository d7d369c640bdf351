//! Game rules: the engine and the outcome of a selection.
//!
//! `MemoryGame` is the only component that mutates cards. Everything else
//! observes `EngineState` snapshots and `GameEvent`s.

pub mod engine;
pub mod outcome;

pub use engine::MemoryGame;
pub use outcome::{IgnoreReason, SelectOutcome};
