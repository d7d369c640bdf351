//! Card instances - runtime card state.
//!
//! A `Card` never moves once dealt. Play only flips its two flags:
//! `revealed` (face-up) and `matched` (part of a found pair). A matched
//! card stays revealed.

use serde::{Deserialize, Serialize};

use crate::core::entity::{InstanceId, SymbolId};

/// One physical card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity of this copy.
    pub id: InstanceId,

    /// Face shared with exactly one other card.
    pub symbol: SymbolId,

    /// Is this card face-up?
    pub revealed: bool,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: InstanceId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Can a player pick this card right now (ignoring turn state)?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Is `other` the partner of this card?
    ///
    /// Same symbol, different physical card.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.symbol == other.symbol && self.id != other.id
    }
}
