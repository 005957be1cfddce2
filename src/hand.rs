use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Fewest cards a showdown hand can be built from.
pub const MIN_HAND_CARDS: usize = 5;
/// Two hole cards plus a full board.
pub const MAX_HAND_CARDS: usize = 7;
pub const MAX_BOARD_CARDS: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("expected 5 to 7 cards, got {0}")]
    CardCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private cards.
///
/// ```
/// use hotseat_holdem::cards::{Card, Rank, Suit};
/// use hotseat_holdem::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards, revealed three, one and one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > MAX_BOARD_CARDS {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == MAX_BOARD_CARDS
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Add revealed cards; the board keeps its own invariants.
    pub fn reveal<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut next = self.cards.clone();
        next.extend(cards);
        *self = Board::try_new(next)?;
        Ok(())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Check hole cards and a partial or full board form a legal hold'em state.
///
/// ```
/// use hotseat_holdem::hand::{validate_holdem, Board, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// validate_holdem(&hole, &board).unwrap();
///
/// let clash: Board = "As 3c 4c".parse().unwrap();
/// assert!(validate_holdem(&hole, &clash).is_err());
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    Ok(())
}

/// Check a flat card list is evaluable: 5 to 7 cards, all distinct.
pub fn validate_cards(cards: &[Card]) -> Result<(), HandError> {
    if !(MIN_HAND_CARDS..=MAX_HAND_CARDS).contains(&cards.len()) {
        return Err(HandError::CardCount(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(HandError::DuplicateCard(card));
        }
    }
    Ok(())
}

/// Hole cards followed by the board, as one list.
pub fn combine(hole: &HoleCards, board: &Board) -> Vec<Card> {
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend(hole.as_array());
    cards.extend_from_slice(board.as_slice());
    cards
}
