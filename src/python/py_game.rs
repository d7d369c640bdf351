//! Engine bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, InstanceId, Phase, ShuffleStrategy, SymbolId};
use crate::rules::{MemoryGame, SelectOutcome};
use crate::timing::{Clock, ManualClock, SystemClock};

use super::py_core::{PyCard, PyGameEvent};

/// Clock chosen at construction time from Python.
enum HostClock {
    System(SystemClock),
    Manual(ManualClock),
}

impl Clock for HostClock {
    fn now(&self) -> Duration {
        match self {
            HostClock::System(clock) => clock.now(),
            HostClock::Manual(clock) => clock.now(),
        }
    }
}

fn parse_shuffle(name: &str) -> PyResult<ShuffleStrategy> {
    match name {
        "fisher_yates" => Ok(ShuffleStrategy::FisherYates),
        "random_keys" => Ok(ShuffleStrategy::RandomKeys),
        "preserve" => Ok(ShuffleStrategy::Preserve),
        other => Err(PyValueError::new_err(format!("unknown shuffle strategy: {other}"))),
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Empty => "empty",
        Phase::Idle => "idle",
        Phase::OneChosen => "one_chosen",
        Phase::Resolving => "resolving",
        Phase::Celebrating => "celebrating",
        Phase::Completed => "completed",
    }
}

/// Python wrapper for the memory game engine.
#[pyclass(name = "MemoryGame", unsendable)]
pub struct PyMemoryGame {
    game: MemoryGame<HostClock>,
    manual: Option<ManualClock>,
}

#[pymethods]
impl PyMemoryGame {
    /// Create an engine with no game dealt.
    ///
    /// # Arguments
    /// - seed: RNG seed; random if omitted
    /// - mismatch_delay_ms: How long a mismatched pair stays face-up
    /// - celebration_delay_ms: Delay before completion is shown
    /// - manual_clock: Drive time with `advance` instead of real time
    /// - shuffle: "fisher_yates", "random_keys" or "preserve"
    #[new]
    #[pyo3(signature = (
        seed = None,
        mismatch_delay_ms = 1000,
        celebration_delay_ms = 2000,
        manual_clock = false,
        shuffle = "fisher_yates"
    ))]
    fn new(
        seed: Option<u64>,
        mismatch_delay_ms: u64,
        celebration_delay_ms: u64,
        manual_clock: bool,
        shuffle: &str,
    ) -> PyResult<Self> {
        let mut config = EngineConfig::new()
            .with_mismatch_delay(Duration::from_millis(mismatch_delay_ms))
            .with_celebration_delay(Duration::from_millis(celebration_delay_ms))
            .with_shuffle(parse_shuffle(shuffle)?);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }

        let (clock, manual) = if manual_clock {
            let clock = ManualClock::new();
            (HostClock::Manual(clock.clone()), Some(clock))
        } else {
            (HostClock::System(SystemClock::new()), None)
        };

        Ok(Self {
            game: MemoryGame::new(config, clock),
            manual,
        })
    }

    /// Deal a new game from the given symbol ids.
    fn new_game(&mut self, symbols: Vec<u32>) -> PyResult<()> {
        let symbols: Vec<SymbolId> = symbols.into_iter().map(SymbolId).collect();
        self.game
            .new_game(&symbols)
            .map(|_| ())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Deal a new game with the six standard symbols.
    fn new_standard_game(&mut self) -> PyResult<()> {
        self.game
            .new_standard_game()
            .map(|_| ())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Pick a card. Returns "first_pick", "matched", "mismatched",
    /// or "ignored: <reason>".
    fn select_card(&mut self, card_id: u32) -> String {
        match self.game.select(InstanceId(card_id)) {
            SelectOutcome::FirstPick { .. } => "first_pick".to_string(),
            SelectOutcome::Matched { .. } => "matched".to_string(),
            SelectOutcome::Mismatched { .. } => "mismatched".to_string(),
            SelectOutcome::Ignored(reason) => format!("ignored: {reason}"),
        }
    }

    /// Fire due tasks. Returns how many took effect.
    fn poll(&mut self) -> usize {
        self.game.poll()
    }

    /// Move a manual clock forward and fire what became due.
    fn advance(&mut self, ms: u64) -> PyResult<usize> {
        let clock = self
            .manual
            .as_ref()
            .ok_or_else(|| PyValueError::new_err("advance requires manual_clock=True"))?;
        clock.advance(Duration::from_millis(ms));
        Ok(self.game.poll())
    }

    /// Milliseconds on the engine clock at which the next task is due.
    fn next_deadline_ms(&self) -> Option<u64> {
        self.game
            .next_deadline()
            .map(|due| u64::try_from(due.as_millis()).unwrap_or(u64::MAX))
    }

    /// Cards in table order.
    fn cards(&mut self) -> Vec<PyCard> {
        self.game.snapshot().cards().iter().copied().map(PyCard).collect()
    }

    /// Number of pair comparisons so far.
    fn turns(&mut self) -> u32 {
        self.game.snapshot().turns()
    }

    /// Current phase name.
    fn phase(&mut self) -> &'static str {
        phase_name(self.game.snapshot().phase())
    }

    fn is_resolving(&mut self) -> bool {
        self.game.snapshot().is_resolving()
    }

    fn is_completed(&mut self) -> bool {
        self.game.snapshot().is_completed()
    }

    fn is_completion_visible(&mut self) -> bool {
        self.game.snapshot().is_completion_visible()
    }

    /// Take buffered events.
    fn drain_events(&mut self) -> Vec<PyGameEvent> {
        self.game.drain_events().into_iter().map(PyGameEvent).collect()
    }

    fn __repr__(&mut self) -> String {
        let state = self.game.snapshot();
        format!(
            "MemoryGame(phase={}, turns={}, pairs={}/{})",
            phase_name(state.phase()),
            state.turns(),
            state.matched_pairs(),
            state.total_pairs()
        )
    }
}
