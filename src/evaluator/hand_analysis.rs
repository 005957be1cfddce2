use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, HandRank, TIEBREAK_LEN};

/// Everything the category detectors need to know about five cards,
/// computed once per subset.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = sorted_cards.map(Card::rank);

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    /// Build a rank from the given leading values, zero-padding the rest.
    pub fn rank(&self, category: Category, leading: &[Rank]) -> HandRank {
        let mut tiebreak = [0u8; TIEBREAK_LEN];
        for (slot, rank) in tiebreak.iter_mut().zip(leading) {
            *slot = rank.value();
        }
        HandRank::new(category, tiebreak)
    }

    /// All five ranks, highest first.
    pub fn high_card(&self) -> HandRank {
        self.rank(Category::HighCard, &self.ranks)
    }
}
