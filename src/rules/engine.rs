//! The memory game engine.
//!
//! `MemoryGame` owns the deck, the turn counter, the pending selection, the
//! `resolving` lock, and the deferred tasks. Hosts feed it player intents
//! (`new_game`, `select_card`) and render the `EngineState` it returns.
//!
//! ## Turn flow
//!
//! ```text
//! Idle --pick--> OneChosen --pick--> match ----------------------> Idle
//!                                  \-> mismatch (Resolving) --delay--> Idle
//! Idle --last pair--> Celebrating --delay--> Completed
//! any --new_game--> Idle
//! ```
//!
//! ## Timing
//!
//! Every entry point first fires all tasks that are due on the engine's
//! [`Clock`], so returned state never lags the clock. A host loop that wants
//! updates without player input sleeps until [`MemoryGame::next_deadline`]
//! and calls [`MemoryGame::poll`].
//!
//! ```
//! use std::time::Duration;
//! use memory_pairs::core::{EngineConfig, ShuffleStrategy, SymbolId};
//! use memory_pairs::rules::{MemoryGame, SelectOutcome};
//! use memory_pairs::timing::ManualClock;
//!
//! let clock = ManualClock::new();
//! let config = EngineConfig::new().with_shuffle(ShuffleStrategy::Preserve);
//! let mut game = MemoryGame::new(config, clock.clone());
//!
//! // Layout: [A1, B1, A2, B2]
//! let state = game.new_game(&SymbolId::range(2)).unwrap();
//! let ids: Vec<_> = state.cards().iter().map(|c| c.id).collect();
//!
//! game.select(ids[0]);
//! assert!(matches!(game.select(ids[1]), SelectOutcome::Mismatched { .. }));
//!
//! clock.advance(Duration::from_millis(1000));
//! let state = game.snapshot();
//! assert!(!state.is_resolving());
//! assert_eq!(state.turns(), 1);
//! ```

use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use super::outcome::{IgnoreReason, SelectOutcome};
use crate::cards::{Card, DeckBuilder};
use crate::core::{
    standard_symbols, EngineConfig, EngineState, GameRng, GameRngState, InstanceId, Result, SymbolId,
};
use crate::events::GameEvent;
use crate::timing::{Clock, ScheduledTask, SystemClock, TimerQueue, TimerTask};

/// Memory-matching game engine.
pub struct MemoryGame<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
    rng: GameRng,
    state: EngineState,
    /// Table position of every card in the current deck.
    positions: FxHashMap<InstanceId, usize>,
    timers: TimerQueue,
    next_id: InstanceId,
    events: Vec<GameEvent>,
}

impl MemoryGame<SystemClock> {
    /// Engine running on real time.
    #[must_use]
    pub fn with_system_clock(config: EngineConfig) -> Self {
        Self::new(config, SystemClock::new())
    }
}

impl<C: Clock> MemoryGame<C> {
    /// Create an engine with no game dealt.
    #[must_use]
    pub fn new(config: EngineConfig, clock: C) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            clock,
            rng,
            state: EngineState::empty(),
            positions: FxHashMap::default(),
            timers: TimerQueue::new(),
            next_id: InstanceId::FIRST,
            events: Vec::new(),
        }
    }

    /// Create an engine whose RNG resumes from a saved position.
    ///
    /// The first deal reproduces the deal that followed `rng_state()` on the
    /// engine that saved it. `config.seed` is ignored.
    #[must_use]
    pub fn with_rng_state(config: EngineConfig, clock: C, rng_state: &GameRngState) -> Self {
        let mut game = Self::new(config, clock);
        game.rng = GameRng::from_state(rng_state);
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// RNG position, enough to reproduce the next deal via
    /// [`MemoryGame::with_rng_state`].
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Player intents ===

    /// Deal a fresh game, replacing whatever was in progress.
    ///
    /// Pending tasks of the previous game are cancelled. On error the
    /// current game is left as it was.
    pub fn new_game(&mut self, symbols: &[SymbolId]) -> Result<EngineState> {
        self.fire_due();

        let cards = DeckBuilder::new(symbols)
            .with_shuffle(self.config.shuffle)
            .deal(&mut self.rng, &mut self.next_id)?;

        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "cancelled pending tasks of previous game");
        }

        let generation = self.state.generation().next();
        self.positions = cards.iter().enumerate().map(|(position, card)| (card.id, position)).collect();
        self.state = EngineState::dealt(generation, cards);

        let card_count = self.state.cards().len();
        info!(%generation, cards = card_count, "dealt new game");
        self.events.push(GameEvent::GameStarted {
            generation,
            cards: card_count,
        });

        Ok(self.state.clone())
    }

    /// Deal a game with the standard six symbols.
    pub fn new_standard_game(&mut self) -> Result<EngineState> {
        self.new_game(&standard_symbols())
    }

    /// Pick a card and return the resulting state.
    pub fn select_card(&mut self, id: InstanceId) -> EngineState {
        self.select(id);
        self.state.clone()
    }

    /// Pick a card and report what happened.
    pub fn select(&mut self, id: InstanceId) -> SelectOutcome {
        self.fire_due();

        let position = match self.selectable_position(id) {
            Ok(position) => position,
            Err(reason) => {
                trace!(card = %id, %reason, "selection ignored");
                return SelectOutcome::Ignored(reason);
            }
        };

        if let Some(card) = self.state.card_mut(position) {
            card.revealed = true;
        }
        self.state.push_selection(id);
        self.events.push(GameEvent::CardRevealed { card: id });

        let first = match self.state.selection() {
            [first, _] => *first,
            _ => {
                trace!(card = %id, "first pick");
                return SelectOutcome::FirstPick { card: id };
            }
        };

        self.state.count_turn();
        self.state.set_resolving(true);
        self.resolve_pair(first, id)
    }

    // === Timing ===

    /// Fire every due task. Returns how many took effect.
    pub fn poll(&mut self) -> usize {
        self.fire_due()
    }

    /// When the next pending task becomes due, on the engine's clock.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    // === Observation ===

    /// Current state, after firing due tasks.
    pub fn snapshot(&mut self) -> EngineState {
        self.fire_due();
        self.state.clone()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.fire_due();
        std::mem::take(&mut self.events)
    }

    // === Internals ===

    fn selectable_position(&self, id: InstanceId) -> std::result::Result<usize, IgnoreReason> {
        if self.state.is_completed() {
            return Err(IgnoreReason::GameCompleted);
        }
        if self.state.is_resolving() {
            return Err(IgnoreReason::Resolving);
        }
        if self.state.selection().len() >= 2 {
            return Err(IgnoreReason::SelectionFull);
        }

        let position = *self.positions.get(&id).ok_or(IgnoreReason::UnknownCard)?;
        let card = self.state.card_at(position).ok_or(IgnoreReason::UnknownCard)?;
        if card.matched {
            Err(IgnoreReason::AlreadyMatched)
        } else if card.is_selectable() {
            Ok(position)
        } else {
            Err(IgnoreReason::AlreadyRevealed)
        }
    }

    fn card_by_id(&self, id: InstanceId) -> Option<Card> {
        self.positions
            .get(&id)
            .and_then(|&position| self.state.card_at(position))
            .copied()
    }

    fn set_card<F: FnOnce(&mut Card)>(&mut self, id: InstanceId, update: F) {
        if let Some(card) = self.positions.get(&id).and_then(|&p| self.state.card_mut(p)) {
            update(card);
        }
    }

    fn resolve_pair(&mut self, first: InstanceId, second: InstanceId) -> SelectOutcome {
        let turns = self.state.turns();
        match (self.card_by_id(first), self.card_by_id(second)) {
            (Some(a), Some(b)) if a.pairs_with(&b) => {
                let symbol = a.symbol;
                self.set_card(first, |card| card.matched = true);
                self.set_card(second, |card| card.matched = true);
                self.state.clear_selection();
                self.state.set_resolving(false);

                debug!(%symbol, %first, %second, turns, "pair matched");
                self.events.push(GameEvent::PairMatched {
                    symbol,
                    first,
                    second,
                });

                if self.state.refresh_completed() {
                    self.on_all_matched();
                }

                SelectOutcome::Matched {
                    symbol,
                    first,
                    second,
                }
            }
            _ => {
                let due = self.clock.now().saturating_add(self.config.mismatch_delay);
                self.timers
                    .schedule(due, self.state.generation(), TimerTask::FlipBack { first, second });

                debug!(%first, %second, turns, ?due, "pair mismatched");
                self.events.push(GameEvent::PairMismatched { first, second });

                SelectOutcome::Mismatched { first, second }
            }
        }
    }

    fn on_all_matched(&mut self) {
        let turns = self.state.turns();
        let due = self.clock.now().saturating_add(self.config.celebration_delay);
        self.timers
            .schedule(due, self.state.generation(), TimerTask::Celebration);

        info!(turns, "all pairs matched");
        self.events.push(GameEvent::AllMatched { turns });
    }

    fn fire_due(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(task) = self.timers.pop_due(now) {
            if self.apply(task) {
                fired += 1;
            }
        }
        fired
    }

    fn apply(&mut self, scheduled: ScheduledTask) -> bool {
        if scheduled.generation != self.state.generation() {
            debug!(
                task_generation = %scheduled.generation,
                current = %self.state.generation(),
                "dropped stale task"
            );
            return false;
        }

        match scheduled.task {
            TimerTask::FlipBack { first, second } => {
                self.set_card(first, |card| card.revealed = card.matched);
                self.set_card(second, |card| card.revealed = card.matched);
                self.state.clear_selection();
                self.state.set_resolving(false);

                trace!(%first, %second, "mismatched pair hidden");
                self.events.push(GameEvent::CardsHidden { first, second });
            }
            TimerTask::Celebration => {
                if !self.state.is_completed() {
                    return false;
                }
                self.state.show_completion();

                let turns = self.state.turns();
                info!(turns, "completion shown");
                self.events.push(GameEvent::CompletionShown { turns });
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, Generation, Phase, ShuffleStrategy};
    use crate::timing::ManualClock;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Engine with a known [A1, B1, A2, B2] layout.
    fn preserved_game() -> (MemoryGame<ManualClock>, ManualClock, Vec<InstanceId>) {
        let clock = ManualClock::new();
        let config = EngineConfig::new()
            .with_shuffle(ShuffleStrategy::Preserve)
            .with_seed(42);
        let mut game = MemoryGame::new(config, clock.clone());
        let state = game.new_game(&SymbolId::range(2)).unwrap();
        let ids = state.cards().iter().map(|c| c.id).collect();
        (game, clock, ids)
    }

    #[test]
    fn test_engine_starts_empty() {
        let mut game = MemoryGame::new(EngineConfig::new().with_seed(1), ManualClock::new());
        let state = game.snapshot();

        assert_eq!(state.phase(), Phase::Empty);
        assert_eq!(
            game.select(InstanceId(1)),
            SelectOutcome::Ignored(IgnoreReason::UnknownCard)
        );
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_first_pick() {
        let (mut game, _clock, ids) = preserved_game();

        assert_eq!(game.select(ids[0]), SelectOutcome::FirstPick { card: ids[0] });

        let state = game.snapshot();
        assert!(state.card(ids[0]).unwrap().revealed);
        assert_eq!(state.selection(), &[ids[0]]);
        assert_eq!(state.turns(), 0);
        assert_eq!(state.phase(), Phase::OneChosen);
    }

    #[test]
    fn test_match_resolves_immediately() {
        let (mut game, _clock, ids) = preserved_game();

        game.select(ids[0]);
        let outcome = game.select(ids[2]);

        assert_eq!(
            outcome,
            SelectOutcome::Matched {
                symbol: SymbolId(0),
                first: ids[0],
                second: ids[2],
            }
        );
        assert_eq!(game.next_deadline(), None);

        let state = game.snapshot();
        assert!(state.card(ids[0]).unwrap().matched);
        assert!(state.card(ids[2]).unwrap().matched);
        assert!(!state.is_resolving());
        assert_eq!(state.turns(), 1);
    }

    #[test]
    fn test_mismatch_schedules_flip_back() {
        let (mut game, clock, ids) = preserved_game();
        clock.advance(ms(250));

        game.select(ids[0]);
        game.select(ids[1]);

        assert_eq!(game.next_deadline(), Some(ms(1250)));
        assert!(game.snapshot().is_resolving());

        clock.advance(ms(1000));
        assert_eq!(game.poll(), 1);

        let state = game.snapshot();
        assert!(!state.is_resolving());
        assert!(!state.card(ids[0]).unwrap().revealed);
        assert!(!state.card(ids[1]).unwrap().revealed);
        assert!(state.selection().is_empty());
        assert_eq!(game.poll(), 0);
    }

    #[test]
    fn test_event_sequence_for_full_game() {
        let (mut game, clock, ids) = preserved_game();
        game.drain_events();

        game.select(ids[0]);
        game.select(ids[2]);
        game.select(ids[1]);
        game.select(ids[3]);
        clock.advance(ms(2000));

        let names: Vec<_> = game.drain_events().iter().map(GameEvent::name).collect();
        assert_eq!(
            names,
            vec![
                "card_revealed",
                "card_revealed",
                "pair_matched",
                "card_revealed",
                "card_revealed",
                "pair_matched",
                "all_matched",
                "completion_shown",
            ]
        );
    }

    #[test]
    fn test_new_game_bumps_generation_and_ids() {
        let (mut game, _clock, ids) = preserved_game();
        assert_eq!(game.snapshot().generation(), Generation(1));

        let state = game.new_game(&SymbolId::range(2)).unwrap();

        assert_eq!(state.generation(), Generation(2));
        assert!(state.cards().iter().all(|c| !ids.contains(&c.id)));
        assert_eq!(
            game.select(ids[0]),
            SelectOutcome::Ignored(IgnoreReason::UnknownCard)
        );
    }

    #[test]
    fn test_seeded_engines_deal_alike() {
        let deal = || {
            let mut game = MemoryGame::new(EngineConfig::new().with_seed(77), ManualClock::new());
            game.new_standard_game().unwrap()
        };
        assert_eq!(deal(), deal());
    }

    #[test]
    fn test_rng_state_advances_with_deals() {
        let mut game = MemoryGame::new(EngineConfig::new().with_seed(3), ManualClock::new());
        let before = game.rng_state();

        game.new_standard_game().unwrap();

        assert_ne!(game.rng_state(), before);
        assert_eq!(game.rng_state().seed, 3);
    }

    #[test]
    fn test_restored_rng_state_repeats_next_deal() {
        let symbols = |state: &EngineState| state.cards().iter().map(|c| c.symbol).collect::<Vec<_>>();

        let mut original = MemoryGame::new(EngineConfig::new().with_seed(5), ManualClock::new());
        original.new_standard_game().unwrap();
        let saved = original.rng_state();
        let expected = original.new_standard_game().unwrap();

        let mut restored = MemoryGame::with_rng_state(EngineConfig::new(), ManualClock::new(), &saved);
        assert_eq!(restored.rng_state(), saved);
        let actual = restored.new_standard_game().unwrap();

        assert_eq!(symbols(&actual), symbols(&expected));
        assert_eq!(restored.rng_state(), original.rng_state());
    }

    #[test]
    fn test_exhausted_ids_keep_current_game() {
        let (mut game, _clock, ids) = preserved_game();
        game.select(ids[0]);
        let before = game.snapshot();

        game.next_id = InstanceId(u32::MAX - 2);
        assert_eq!(
            game.new_game(&SymbolId::range(2)),
            Err(GameError::IdsExhausted(4))
        );

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.next_id, InstanceId(u32::MAX - 2));

        // One pair still fits in what is left.
        let state = game.new_game(&SymbolId::range(1)).unwrap();
        assert!(state.cards().iter().all(|c| !ids.contains(&c.id)));
        assert_eq!(game.next_id, InstanceId(u32::MAX));
    }
}
