use crate::cards::{Card, Rank, Suit};
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("the deck has no cards left to deal")]
    Exhausted,
}

/// A single 52-card deck. The top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An unshuffled deck, suit by suit.
    ///
    /// ```
    /// use hotseat_holdem::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.remaining(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with a ChaCha stream seeded by `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    /// Build a deck that deals `order[0]` first, then `order[1]`, and so on.
    ///
    /// ```
    /// use hotseat_holdem::cards::parse_cards;
    /// use hotseat_holdem::deck::Deck;
    ///
    /// let mut deck = Deck::from_cards(parse_cards("As Kd").unwrap());
    /// assert_eq!(deck.deal_card().unwrap().to_string(), "As");
    /// ```
    pub fn from_cards(order: Vec<Card>) -> Self {
        let mut cards = order;
        cards.reverse();
        Self { cards }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Remove and return the top card.
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Deal `n` cards, failing without dealing any if fewer remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Exhausted);
        }
        let at = self.cards.len() - n;
        let mut dealt = self.cards.split_off(at);
        dealt.reverse();
        Ok(dealt)
    }

    /// Discard the top card face down.
    pub fn burn(&mut self) -> Result<(), DeckError> {
        let card = self.deal_card()?;
        debug!("burned {card}");
        Ok(())
    }
}
