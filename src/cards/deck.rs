//! Deck construction.
//!
//! A deck holds every requested symbol exactly twice. Ids are handed out in
//! construction order (`s1, s2, .., sN, s1, s2, .., sN`) before the deck is
//! shuffled, so the id of a card says nothing about where it ends up.

use im::Vector;
use rustc_hash::FxHashSet;

use super::instance::Card;
use crate::core::config::ShuffleStrategy;
use crate::core::entity::{InstanceId, SymbolId};
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Largest symbol set whose doubled deck fits in the id space.
pub const MAX_SYMBOLS: usize = (u32::MAX / 2) as usize;

/// Builds shuffled decks from a symbol set.
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder<'a> {
    symbols: &'a [SymbolId],
    shuffle: ShuffleStrategy,
}

impl<'a> DeckBuilder<'a> {
    /// Create a builder for the given symbols.
    #[must_use]
    pub fn new(symbols: &'a [SymbolId]) -> Self {
        Self {
            symbols,
            shuffle: ShuffleStrategy::default(),
        }
    }

    /// Set the shuffle strategy.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleStrategy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Reject empty, oversized, or repeated symbol sets.
    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(GameError::EmptySymbolSet);
        }
        if self.symbols.len() > MAX_SYMBOLS {
            return Err(GameError::TooManySymbols(self.symbols.len()));
        }

        let mut seen = FxHashSet::default();
        for &symbol in self.symbols {
            if !seen.insert(symbol) {
                return Err(GameError::DuplicateSymbol(symbol));
            }
        }
        Ok(())
    }

    /// Build and shuffle a deck.
    ///
    /// `next_id` is advanced past every id handed out. On error nothing is
    /// allocated and the RNG is untouched.
    pub fn deal(&self, rng: &mut GameRng, next_id: &mut InstanceId) -> Result<Vector<Card>> {
        self.validate()?;

        let needed = self.symbols.len() * 2;
        let end = next_id.checked_advance(needed).ok_or(GameError::IdsExhausted(needed))?;

        let mut cards: Vec<Card> = (next_id.raw()..end.raw())
            .map(InstanceId)
            .zip(self.symbols.iter().chain(self.symbols))
            .map(|(id, &symbol)| Card::new(id, symbol))
            .collect();
        *next_id = end;

        let cards = match self.shuffle {
            ShuffleStrategy::FisherYates => {
                rng.shuffle(&mut cards);
                cards
            }
            ShuffleStrategy::RandomKeys => rng.shuffle_by_keys(cards),
            ShuffleStrategy::Preserve => cards,
        };

        Ok(cards.into_iter().collect())
    }
}
