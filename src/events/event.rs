//! Game event types.
//!
//! Events are signals for the presentation layer: what changed and why.
//! Flip animations hang off `CardRevealed` / `CardsHidden`, the match
//! highlight off `PairMatched`, confetti off `AllMatched`, and the
//! "play again" screen off `CompletionShown`.
//!
//! The engine buffers events until drained; it never reads them back.

use serde::{Deserialize, Serialize};

use crate::core::{Generation, InstanceId, SymbolId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was dealt.
    GameStarted {
        generation: Generation,
        cards: usize,
    },

    /// A card was turned face-up.
    CardRevealed { card: InstanceId },

    /// Two cards with the same symbol were found.
    PairMatched {
        symbol: SymbolId,
        first: InstanceId,
        second: InstanceId,
    },

    /// Two different cards are on display until the flip-back fires.
    PairMismatched {
        first: InstanceId,
        second: InstanceId,
    },

    /// A mismatched pair was turned face-down again.
    CardsHidden {
        first: InstanceId,
        second: InstanceId,
    },

    /// The last pair was found.
    AllMatched { turns: u32 },

    /// The celebration delay elapsed; completion may be shown.
    CompletionShown { turns: u32 },
}

impl GameEvent {
    /// Short name, for logs and bindings.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::CardRevealed { .. } => "card_revealed",
            GameEvent::PairMatched { .. } => "pair_matched",
            GameEvent::PairMismatched { .. } => "pair_mismatched",
            GameEvent::CardsHidden { .. } => "cards_hidden",
            GameEvent::AllMatched { .. } => "all_matched",
            GameEvent::CompletionShown { .. } => "completion_shown",
        }
    }

    /// Cards this event concerns.
    #[must_use]
    pub fn cards(&self) -> Vec<InstanceId> {
        match *self {
            GameEvent::CardRevealed { card } => vec![card],
            GameEvent::PairMatched { first, second, .. }
            | GameEvent::PairMismatched { first, second }
            | GameEvent::CardsHidden { first, second } => vec![first, second],
            GameEvent::GameStarted { .. } | GameEvent::AllMatched { .. } | GameEvent::CompletionShown { .. } => {
                Vec::new()
            }
        }
    }
}
