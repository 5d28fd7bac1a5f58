//! Flip-card deck for the memory gallery.

use std::collections::BTreeSet;

use crate::error::{CardError, CardResult};

/// Tracks which memory cards are showing their back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlipDeck {
    /// Card ids in display order
    ids: Vec<u32>,
    flipped: BTreeSet<u32>,
}

impl FlipDeck {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            flipped: BTreeSet::new(),
        }
    }

    /// Flip a card over, or back if it is already flipped.
    ///
    /// Returns the new flipped state of the card.
    pub fn toggle(&mut self, id: u32) -> CardResult<bool> {
        if !self.ids.contains(&id) {
            return Err(CardError::UnknownCard(id));
        }
        if self.flipped.remove(&id) {
            Ok(false)
        } else {
            self.flipped.insert(id);
            Ok(true)
        }
    }

    pub fn is_flipped(&self, id: u32) -> bool {
        self.flipped.contains(&id)
    }

    pub fn flipped_count(&self) -> usize {
        self.flipped.len()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Every card shows its message. An empty deck is never "all flipped".
    pub fn all_flipped(&self) -> bool {
        !self.ids.is_empty() && self.flipped.len() == self.ids.len()
    }

    /// Share of flipped cards, 0.0 to 100.0.
    pub fn progress_percent(&self) -> f64 {
        if self.ids.is_empty() {
            return 0.0;
        }
        self.flipped.len() as f64 / self.ids.len() as f64 * 100.0
    }

    pub fn reset(&mut self) {
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_unflips() {
        let mut deck = FlipDeck::new([1, 2, 3]);
        assert!(deck.toggle(2).unwrap());
        assert!(deck.is_flipped(2));
        assert!(!deck.toggle(2).unwrap());
        assert!(!deck.is_flipped(2));
    }

    #[test]
    fn unknown_card_is_rejected() {
        let mut deck = FlipDeck::new([1, 2, 3]);
        assert!(matches!(deck.toggle(9), Err(CardError::UnknownCard(9))));
        assert_eq!(deck.flipped_count(), 0);
    }

    #[test]
    fn progress_tracks_flips() {
        let mut deck = FlipDeck::new([1, 2, 3]);
        assert_eq!(deck.progress_percent(), 0.0);
        deck.toggle(1).unwrap();
        assert!((deck.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
        deck.toggle(2).unwrap();
        deck.toggle(3).unwrap();
        assert!(deck.all_flipped());
        assert_eq!(deck.progress_percent(), 100.0);
    }

    #[test]
    fn empty_deck_is_never_complete() {
        let deck = FlipDeck::new([]);
        assert!(deck.is_empty());
        assert!(!deck.all_flipped());
        assert_eq!(deck.progress_percent(), 0.0);
    }

    #[test]
    fn reset_clears_flips() {
        let mut deck = FlipDeck::new([1, 2]);
        deck.toggle(1).unwrap();
        deck.reset();
        assert_eq!(deck.flipped_count(), 0);
        assert_eq!(deck.len(), 2);
    }
}
