//! # memory-pairs
//!
//! Engine for a memory-matching ("pairs") card game: a shuffled deck of
//! doubled symbols, two picks per turn, matches stay face-up, mismatches
//! flip back after a short delay.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: No rendering, animation or assets. The engine hands out
//!    `EngineState` snapshots and `GameEvent`s; a presentation layer draws them.
//!
//! 2. **Injectable time**: Delays run on a `Clock`. Tests use `ManualClock`
//!    and fast-forward instead of sleeping.
//!
//! 3. **Generations**: Each `new_game` starts a generation. Deferred tasks
//!    from an earlier generation never touch the new deck.
//!
//! 4. **Deterministic when seeded**: Decks are dealt from a ChaCha8 `GameRng`
//!    with a uniform Fisher–Yates shuffle.
//!
//! ## Modules
//!
//! - `core`: ids, RNG, configuration, errors, state snapshots
//! - `cards`: card instances and deck construction
//! - `timing`: clocks and the deferred task queue
//! - `events`: signals for the presentation layer
//! - `rules`: the `MemoryGame` engine

pub mod cards;
pub mod core;
pub mod events;
pub mod rules;
pub mod timing;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    standard_symbols, EngineConfig, EngineState, GameError, GameRng, GameRngState, Generation, InstanceId,
    Phase, ShuffleStrategy, SymbolId,
};

pub use crate::cards::{Card, DeckBuilder};

pub use crate::events::GameEvent;

pub use crate::rules::{IgnoreReason, MemoryGame, SelectOutcome};

pub use crate::timing::{Clock, ManualClock, SystemClock};
