//! What a selection did.

use serde::{Deserialize, Serialize};

use crate::core::{InstanceId, SymbolId};

/// Why a selection was ignored.
///
/// Ignored selections leave the engine untouched. Most of them are ordinary
/// input races (clicking while a pair is on display) rather than bugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Every pair is already found.
    GameCompleted,
    /// A mismatched pair is still on display.
    Resolving,
    /// Two cards are already pending.
    SelectionFull,
    /// No card with this id in the current deck.
    UnknownCard,
    /// The card's pair was already found.
    AlreadyMatched,
    /// The card is already face-up.
    AlreadyRevealed,
}

impl IgnoreReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::GameCompleted => "game completed",
            IgnoreReason::Resolving => "resolving",
            IgnoreReason::SelectionFull => "selection full",
            IgnoreReason::UnknownCard => "unknown card",
            IgnoreReason::AlreadyMatched => "already matched",
            IgnoreReason::AlreadyRevealed => "already revealed",
        }
    }
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one `select` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First card of the turn turned face-up.
    FirstPick { card: InstanceId },
    /// Second card completed a pair.
    Matched {
        symbol: SymbolId,
        first: InstanceId,
        second: InstanceId,
    },
    /// Second card differs from the first; both flip back after the delay.
    Mismatched {
        first: InstanceId,
        second: InstanceId,
    },
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// Did this selection complete a pair comparison (and count a turn)?
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        let first = SelectOutcome::FirstPick { card: InstanceId(1) };
        assert!(!first.is_ignored());
        assert!(!first.ends_turn());

        let mismatch = SelectOutcome::Mismatched {
            first: InstanceId(1),
            second: InstanceId(2),
        };
        assert!(mismatch.ends_turn());

        let ignored = SelectOutcome::Ignored(IgnoreReason::Resolving);
        assert!(ignored.is_ignored());
        assert!(!ignored.ends_turn());
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(IgnoreReason::UnknownCard.to_string(), "unknown card");
    }
}
