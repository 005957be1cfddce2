use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, HandRank};

/// One hand category. `detect` returns the category's rank when the five
/// cards qualify and `None` otherwise; detectors never see each other's
/// results, so the list order alone decides precedence.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank>;
}

pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        let top = a.straight_info.top_rank?;
        (a.suit_info.is_flush() && top == crate::cards::Rank::Ace)
            .then(|| a.rank(Category::RoyalFlush, &[top]))
    }
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        let top = a.straight_info.top_rank?;
        a.suit_info.is_flush().then(|| a.rank(Category::StraightFlush, &[top]))
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        let quad = a.rank_groups.quad()?;
        let kicker = *a.rank_groups.kickers().first()?;
        Some(a.rank(Category::FourOfAKind, &[quad, kicker]))
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        let (trips, pair) = a.rank_groups.full_house()?;
        Some(a.rank(Category::FullHouse, &[trips, pair]))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        a.suit_info.is_flush().then(|| a.rank(Category::Flush, &a.ranks))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        let top = a.straight_info.top_rank?;
        Some(a.rank(Category::Straight, &[top]))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        let trips = a.rank_groups.trips()?;
        let mut leading = vec![trips];
        leading.extend(a.rank_groups.kickers().into_iter().take(2));
        Some(a.rank(Category::ThreeOfAKind, &leading))
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        match a.rank_groups.pairs().as_slice() {
            [high, low] => {
                let mut leading = vec![*high, *low];
                leading.extend(a.rank_groups.kickers().first());
                Some(a.rank(Category::TwoPair, &leading))
            }
            _ => None,
        }
    }
}

pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        match a.rank_groups.pairs().as_slice() {
            [pair] => {
                let mut leading = vec![*pair];
                leading.extend(a.rank_groups.kickers().into_iter().take(3));
                Some(a.rank(Category::Pair, &leading))
            }
            _ => None,
        }
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<HandRank> {
        Some(a.high_card())
    }
}

/// Strongest category first.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];
