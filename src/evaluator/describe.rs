use super::{Category, HandRank};
use crate::cards::Rank;
use std::fmt;

fn rank_at(rank: &HandRank, i: usize) -> Option<Rank> {
    Rank::try_from(rank.tiebreak()[i]).ok()
}

fn name(rank: &HandRank, i: usize) -> &'static str {
    rank_at(rank, i).map_or("?", Rank::name)
}

fn plural(rank: &HandRank, i: usize) -> &'static str {
    rank_at(rank, i).map_or("?", Rank::plural)
}

fn article(word: &str) -> &'static str {
    if word.starts_with(|c: char| "AEIOU".contains(c)) {
        "an"
    } else {
        "a"
    }
}

/// Plain-English description, e.g. "a full house, Kings over Deuces".
impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            Category::RoyalFlush => write!(f, "a royal flush"),
            Category::StraightFlush => write!(f, "a straight flush, {} high", name(self, 0)),
            Category::FourOfAKind => write!(f, "a four-of-a-kind of {}", plural(self, 0)),
            Category::FullHouse => {
                write!(f, "a full house, {} over {}", plural(self, 0), plural(self, 1))
            }
            Category::Flush => write!(f, "a flush, {} high", name(self, 0)),
            Category::Straight => write!(f, "a straight, {} high", name(self, 0)),
            Category::ThreeOfAKind => write!(f, "a three-of-a-kind of {}", plural(self, 0)),
            Category::TwoPair => {
                write!(f, "two pair, {} over {}", plural(self, 0), plural(self, 1))
            }
            Category::Pair => write!(f, "a pair of {}", plural(self, 0)),
            Category::HighCard => {
                let top = name(self, 0);
                write!(f, "{} {top} high", article(top))
            }
        }
    }
}
