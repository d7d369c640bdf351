//! Engine configuration.
//!
//! `EngineConfig` holds everything a host may tune before dealing:
//! display delays, the shuffle strategy, and an optional fixed seed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::SymbolId;

/// How long a mismatched pair stays face-up before flipping back.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// How long the celebration runs before completion is shown.
pub const DEFAULT_CELEBRATION_DELAY: Duration = Duration::from_millis(2000);

/// Number of symbols in a standard game.
pub const STANDARD_SYMBOL_COUNT: u32 = 6;

/// The symbols dealt by a standard game.
#[must_use]
pub fn standard_symbols() -> Vec<SymbolId> {
    SymbolId::range(STANDARD_SYMBOL_COUNT)
}

/// Algorithm used to order a freshly built deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleStrategy {
    /// Fisher–Yates. Uniform over all permutations.
    #[default]
    FisherYates,
    /// Sort by an independent random key per card.
    RandomKeys,
    /// Keep construction order: every symbol once, then every symbol again.
    ///
    /// Meant for deterministic harnesses that need a known layout.
    Preserve,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Delay before a mismatched pair is hidden again.
    pub mismatch_delay: Duration,

    /// Delay between all pairs matching and completion being shown.
    pub celebration_delay: Duration,

    /// Deck ordering strategy.
    pub shuffle: ShuffleStrategy,

    /// Fixed RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            celebration_delay: DEFAULT_CELEBRATION_DELAY,
            shuffle: ShuffleStrategy::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the celebration delay.
    #[must_use]
    pub fn with_celebration_delay(mut self, delay: Duration) -> Self {
        self.celebration_delay = delay;
        self
    }

    /// Set the shuffle strategy.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleStrategy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
