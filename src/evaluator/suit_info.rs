use crate::cards::{Card, Suit};

/// The shared suit of five cards, if they all have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let suit = cards[0].suit();
        let flush_suit = cards.iter().all(|c| c.suit() == suit).then_some(suit);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
