//! Engine state: the snapshot handed to the presentation layer.
//!
//! ## EngineState
//!
//! Everything a renderer needs without knowing any rules:
//! - The deck, in table order, with per-card flags
//! - Turn counter
//! - Pending selection and the `resolving` lock
//! - `completed` (all pairs found) and `completion_visible` (celebration over)
//!
//! Uses `im` persistent data structures so handing out a snapshot after every
//! mutation costs O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::{Generation, InstanceId};
use crate::cards::Card;

/// Cards chosen this turn but not yet resolved. Never more than two.
pub type Selection = SmallVec<[InstanceId; 2]>;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been dealt.
    Empty,
    /// Waiting for the first card of a turn.
    Idle,
    /// One card is face-up, waiting for its partner.
    OneChosen,
    /// A mismatched pair is on display; input is locked.
    Resolving,
    /// Every pair is found; the celebration delay is running.
    Celebrating,
    /// The celebration is over. Only `new_game` leaves this phase.
    Completed,
}

/// Snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    generation: Generation,
    cards: Vector<Card>,
    turns: u32,
    selection: Selection,
    resolving: bool,
    completed: bool,
    completion_visible: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::empty()
    }
}

impl EngineState {
    /// State of an engine that has not dealt yet.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            generation: Generation::default(),
            cards: Vector::new(),
            turns: 0,
            selection: Selection::new(),
            resolving: false,
            completed: false,
            completion_visible: false,
        }
    }

    /// Fresh state for a newly dealt deck.
    #[must_use]
    pub(crate) fn dealt(generation: Generation, cards: Vector<Card>) -> Self {
        Self {
            generation,
            cards,
            ..Self::empty()
        }
    }

    // === Queries ===

    /// Generation that dealt this deck.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The deck, in table order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Card at a table position.
    #[must_use]
    pub fn card_at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Number of completed pair comparisons.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Pending selection for this turn.
    #[must_use]
    pub fn selection(&self) -> &[InstanceId] {
        &self.selection
    }

    /// Is input locked while a pair is on display?
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// Are all pairs found? Set the moment the last pair matches.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Has the celebration delay elapsed since completion?
    #[must_use]
    pub fn is_completion_visible(&self) -> bool {
        self.completion_visible
    }

    /// Number of pairs already found.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Current phase, derived from the flags above.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.cards.is_empty() {
            Phase::Empty
        } else if self.completion_visible {
            Phase::Completed
        } else if self.completed {
            Phase::Celebrating
        } else if self.resolving {
            Phase::Resolving
        } else if self.selection.len() == 1 {
            Phase::OneChosen
        } else {
            Phase::Idle
        }
    }

    // === Mutation (engine only) ===

    pub(crate) fn card_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    pub(crate) fn push_selection(&mut self, id: InstanceId) {
        self.selection.push(id);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub(crate) fn count_turn(&mut self) {
        self.turns += 1;
    }

    pub(crate) fn set_resolving(&mut self, resolving: bool) {
        self.resolving = resolving;
    }

    /// Re-derive `completed` from the card flags. Returns true on the
    /// transition into completion.
    pub(crate) fn refresh_completed(&mut self) -> bool {
        let all_matched = !self.cards.is_empty() && self.cards.iter().all(|c| c.matched);
        let newly = all_matched && !self.completed;
        self.completed = all_matched;
        newly
    }

    pub(crate) fn show_completion(&mut self) {
        self.completion_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::SymbolId;

    fn two_pair_deck() -> Vector<Card> {
        [(1, 0), (2, 1), (3, 0), (4, 1)]
            .into_iter()
            .map(|(id, s)| Card::new(InstanceId(id), SymbolId(s)))
            .collect()
    }

    #[test]
    fn test_empty_state() {
        let state = EngineState::empty();

        assert_eq!(state.phase(), Phase::Empty);
        assert_eq!(state.turns(), 0);
        assert!(!state.is_completed());
        assert_eq!(state.total_pairs(), 0);
    }

    #[test]
    fn test_empty_deck_never_completed() {
        let mut state = EngineState::empty();
        assert!(!state.refresh_completed());
        assert!(!state.is_completed());
    }

    #[test]
    fn test_dealt_state() {
        let state = EngineState::dealt(Generation(3), two_pair_deck());

        assert_eq!(state.generation(), Generation(3));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.total_pairs(), 2);
        assert_eq!(state.card(InstanceId(2)).map(|c| c.symbol), Some(SymbolId(1)));
        assert_eq!(state.card_at(2).map(|c| c.id), Some(InstanceId(3)));
        assert!(state.card(InstanceId(9)).is_none());
    }

    #[test]
    fn test_phase_progression() {
        let mut state = EngineState::dealt(Generation(1), two_pair_deck());

        state.push_selection(InstanceId(1));
        assert_eq!(state.phase(), Phase::OneChosen);

        state.push_selection(InstanceId(2));
        state.set_resolving(true);
        assert_eq!(state.phase(), Phase::Resolving);

        state.clear_selection();
        state.set_resolving(false);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_refresh_completed_transition() {
        let mut state = EngineState::dealt(Generation(1), two_pair_deck());

        for position in 0..3 {
            state.card_mut(position).unwrap().matched = true;
        }
        assert!(!state.refresh_completed());
        assert_eq!(state.matched_pairs(), 1);

        state.card_mut(3).unwrap().matched = true;
        assert!(state.refresh_completed());
        assert!(state.is_completed());
        assert_eq!(state.phase(), Phase::Celebrating);

        // Only the first transition reports
        assert!(!state.refresh_completed());

        state.show_completion();
        assert_eq!(state.phase(), Phase::Completed);
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut state = EngineState::dealt(Generation(1), two_pair_deck());
        let before = state.clone();

        state.card_mut(0).unwrap().revealed = true;

        assert_ne!(state, before);
        assert!(!before.card_at(0).unwrap().revealed);
    }

    #[test]
    fn test_state_serde() {
        let mut state = EngineState::dealt(Generation(2), two_pair_deck());
        state.push_selection(InstanceId(4));
        state.count_turn();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
