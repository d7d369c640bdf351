//! Identifier types.
//!
//! - `SymbolId`: a card face. Exactly two cards per deck share one.
//! - `InstanceId`: one physical card. Unique for the lifetime of an engine.
//! - `Generation`: one dealt game. Bumped by every `new_game`.
//!
//! ## Usage
//!
//! ```
//! use memory_pairs::core::{InstanceId, SymbolId};
//!
//! let symbols = SymbolId::range(3);
//! assert_eq!(symbols, vec![SymbolId(0), SymbolId(1), SymbolId(2)]);
//!
//! let next = InstanceId(7);
//! assert_eq!(next.checked_advance(4), Some(InstanceId(11)));
//! assert_eq!(InstanceId(u32::MAX).checked_advance(1), None);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a card face.
///
/// The engine only compares symbols for equality. Mapping a symbol to an
/// image or a name is up to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The symbols `0..count`, in order.
    #[must_use]
    pub fn range(count: u32) -> Vec<Self> {
        (0..count).map(Self).collect()
    }
}

impl From<u32> for SymbolId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Identifier of a single physical card.
///
/// Allocated from a counter the engine never resets, so an id handed out in
/// one game is unknown to every later game. The counter never wraps: once
/// it runs out, dealing fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// First id handed out by a fresh engine.
    pub const FIRST: Self = Self(1);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The counter value after handing out `count` ids starting here, or
    /// `None` if that would overflow.
    #[must_use]
    pub fn checked_advance(self, count: usize) -> Option<Self> {
        u32::try_from(count)
            .ok()
            .and_then(|count| self.0.checked_add(count))
            .map(Self)
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Epoch of play started by `new_game`.
///
/// Deferred tasks remember the generation that scheduled them and are dropped
/// if it is no longer current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}
