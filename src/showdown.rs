//! Ordering hands at showdown and grouping players who tie.

use crate::evaluator::HandRank;
use crate::pot::PlayerId;
use core::cmp::Ordering;

/// Compare two ranks: category first, then tie-break values in order.
///
/// ```
/// use hotseat_holdem::cards::parse_cards;
/// use hotseat_holdem::evaluator::evaluate;
/// use hotseat_holdem::showdown::compare;
/// use std::cmp::Ordering;
///
/// let aces = evaluate(&parse_cards("As Ah Qc Jd 9h 3s 2c").unwrap()).unwrap();
/// let kings = evaluate(&parse_cards("Ks Kh Qc Jd 9h 3s 2c").unwrap()).unwrap();
/// assert_eq!(compare(&aces, &kings), Ordering::Greater);
/// ```
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.category()
        .ordinal()
        .cmp(&b.category().ordinal())
        .then_with(|| a.tiebreak().cmp(&b.tiebreak()))
}

/// Group players into tie groups, best hand first.
///
/// Players inside a group keep their input order.
///
/// ```
/// use hotseat_holdem::evaluator::{Category, HandRank};
/// use hotseat_holdem::showdown::tie_groups;
///
/// let pair = HandRank::new(Category::Pair, [9, 14, 8, 4, 0]);
/// let flush = HandRank::new(Category::Flush, [13, 9, 7, 4, 2]);
/// let groups = tie_groups(&[(0, pair), (1, flush), (2, pair)]);
/// assert_eq!(groups, vec![vec![1], vec![0, 2]]);
/// ```
pub fn tie_groups(ranked: &[(PlayerId, HandRank)]) -> Vec<Vec<PlayerId>> {
    let mut sorted = ranked.to_vec();
    // stable: equal hands stay in seat order
    sorted.sort_by(|(_, a), (_, b)| compare(b, a));

    let mut groups: Vec<Vec<PlayerId>> = Vec::new();
    let mut last: Option<HandRank> = None;
    for (id, rank) in sorted {
        let tied = last.is_some_and(|prev| compare(&prev, &rank) == Ordering::Equal);
        match groups.last_mut() {
            Some(group) if tied => group.push(id),
            _ => groups.push(vec![id]),
        }
        last = Some(rank);
    }
    groups
}
