//! Core engine types: ids, RNG, configuration, errors, state snapshots.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{
    standard_symbols, EngineConfig, ShuffleStrategy, DEFAULT_CELEBRATION_DELAY, DEFAULT_MISMATCH_DELAY,
    STANDARD_SYMBOL_COUNT,
};
pub use entity::{Generation, InstanceId, SymbolId};
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};
pub use state::{EngineState, Phase, Selection};
