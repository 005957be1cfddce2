pub(crate) mod combinations;
pub(crate) mod describe;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{combine, validate_cards, validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Number of tie-break slots carried by every [`HandRank`].
pub const TIEBREAK_LEN: usize = 5;

/// A hand's strength: its category plus five tie-break rank values.
///
/// Tie-break values are rank values with the Ace counted as 14, most
/// significant first. Slots a category does not use hold 0. The derived
/// ordering compares the category first, then the tie-break list
/// lexicographically, which is exactly showdown order.
///
/// ```
/// use hotseat_holdem::cards::parse_cards;
/// use hotseat_holdem::evaluator::{evaluate, Category};
///
/// let rank = evaluate(&parse_cards("Qs Qh Qd 9c 4s 3h 2d").unwrap()).unwrap();
/// assert_eq!(rank.category(), Category::ThreeOfAKind);
/// assert_eq!(rank.tiebreak(), [12, 9, 4, 0, 0]);
/// assert_eq!(rank.to_string(), "a three-of-a-kind of Queens");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    category: Category,
    tiebreak: [u8; TIEBREAK_LEN],
}

impl HandRank {
    pub const fn new(category: Category, tiebreak: [u8; TIEBREAK_LEN]) -> Self {
        Self { category, tiebreak }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn tiebreak(&self) -> [u8; TIEBREAK_LEN] {
        self.tiebreak
    }
}

/// A [`HandRank`] together with the five cards that make it.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub rank: HandRank,
    pub best_five: [Card; 5],
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Rank the best five-card hand within 5 to 7 distinct cards.
///
/// ```
/// use hotseat_holdem::cards::parse_cards;
/// use hotseat_holdem::evaluator::{evaluate, Category, EvalError};
///
/// let wheel = evaluate(&parse_cards("Ah 2c 3d 4s 5h Kc").unwrap()).unwrap();
/// assert_eq!(wheel.category(), Category::Straight);
/// assert_eq!(wheel.tiebreak()[0], 5);
///
/// let short = evaluate(&parse_cards("Ah 2c 3d 4s").unwrap());
/// assert!(matches!(short, Err(EvalError::InvalidHand(_))));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EvalError> {
    evaluate_detailed(cards).map(|eval| eval.rank)
}

/// Like [`evaluate`], also returning the winning five cards.
pub fn evaluate_detailed(cards: &[Card]) -> Result<Evaluation, EvalError> {
    use combinations::FiveCardSubsets;

    validate_cards(cards)?;

    let mut best: Option<Evaluation> = None;
    for indices in FiveCardSubsets::new(cards.len()) {
        let five = indices.map(|i| cards[i]);
        let eval = evaluate_five(&five);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    // validate_cards guarantees at least one subset
    best.ok_or(EvalError::InvalidHand(HandError::CardCount(cards.len())))
}

/// Evaluate a player's hole cards against the current board.
///
/// ```
/// use hotseat_holdem::evaluator::{evaluate_hand, Category};
/// use hotseat_holdem::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
/// let eval = evaluate_hand(&hole, &board).unwrap();
/// assert_eq!(eval.rank.category(), Category::Pair);
/// ```
pub fn evaluate_hand(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    evaluate_detailed(&combine(hole, board))
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    let rank = DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or_else(|| analysis.high_card());
    Evaluation { rank, best_five: analysis.sorted_cards }
}
