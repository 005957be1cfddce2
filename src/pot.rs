//! Paying out a round's contributions, side pots included.

use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Seat index of a player at the table.
pub type PlayerId = usize;

/// Chips each player put in this round.
pub type Contributions = BTreeMap<PlayerId, u64>;

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Tie groups of the players still in the hand, best group first.
    Showdown(Vec<Vec<PlayerId>>),
    /// Everyone else folded.
    FoldOut(PlayerId),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettleError {
    #[error("invalid settlement state: {0}")]
    InvalidState(String),
}

/// Chips awarded to every contributor. Players who win nothing map to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    awards: BTreeMap<PlayerId, u64>,
}

impl Settlement {
    pub fn award(&self, id: PlayerId) -> u64 {
        self.awards.get(&id).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.awards.values().sum()
    }

    /// Players who receive at least one chip, by seat.
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.awards.iter().filter(|(_, &amount)| amount > 0).map(|(&id, _)| id)
    }

    fn credit(&mut self, id: PlayerId, amount: u64) {
        *self.awards.entry(id).or_default() += amount;
    }
}

/// Distribute `contributions` according to `outcome`.
///
/// The sum of the awards always equals the sum of the contributions.
/// Within a tie group, the member with the smallest remaining stake is
/// paid out first and collects at most that stake from each contributor.
/// Members still holding a stake share the rest against later groups. An
/// indivisible chip goes to the member being paid out, and equal stakes
/// are paid in seat order. Chips nobody is eligible to win go back to the
/// player who put them in.
///
/// ```
/// use hotseat_holdem::pot::{settle, Contributions, Outcome};
///
/// // A is all-in for 5 with the best hand, B and C tie for second.
/// let contributions = Contributions::from([(0, 5), (1, 10), (2, 10)]);
/// let s = settle(&contributions, &Outcome::Showdown(vec![vec![0], vec![1, 2]])).unwrap();
/// assert_eq!((s.award(0), s.award(1), s.award(2)), (15, 5, 5));
/// ```
pub fn settle(contributions: &Contributions, outcome: &Outcome) -> Result<Settlement, SettleError> {
    let mut settlement =
        Settlement { awards: contributions.keys().map(|&id| (id, 0)).collect() };

    match outcome {
        Outcome::FoldOut(winner) => {
            if !contributions.contains_key(winner) {
                return Err(SettleError::InvalidState(format!(
                    "fold-out winner {winner} has no stake in the pot"
                )));
            }
            settlement.credit(*winner, contributions.values().sum());
        }
        Outcome::Showdown(groups) => {
            check_groups(contributions, groups)?;
            let mut remaining = contributions.clone();
            for group in groups {
                pay_group(&mut remaining, group, &mut settlement);
            }
            for (id, left) in remaining.into_iter().filter(|&(_, left)| left > 0) {
                debug!("returning {left} uncontested chips to player {id}");
                settlement.credit(id, left);
            }
        }
    }

    Ok(settlement)
}

fn check_groups(contributions: &Contributions, groups: &[Vec<PlayerId>]) -> Result<(), SettleError> {
    if groups.is_empty() {
        return Err(SettleError::InvalidState("showdown without any tie groups".into()));
    }
    let mut seen = BTreeSet::new();
    for (rank, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(SettleError::InvalidState(format!("tie group {rank} is empty")));
        }
        for id in group {
            if !contributions.contains_key(id) {
                return Err(SettleError::InvalidState(format!("unknown player {id} in tie group {rank}")));
            }
            if !seen.insert(*id) {
                return Err(SettleError::InvalidState(format!("player {id} appears in two tie groups")));
            }
        }
    }
    Ok(())
}

fn stake(remaining: &Contributions, id: PlayerId) -> u64 {
    remaining.get(&id).copied().unwrap_or(0)
}

fn pay_group(remaining: &mut Contributions, group: &[PlayerId], settlement: &mut Settlement) {
    let mut members: Vec<PlayerId> =
        group.iter().copied().filter(|&id| stake(remaining, id) > 0).collect();
    members.sort_by_key(|&id| (stake(remaining, id), id));

    for (i, &m) in members.iter().enumerate() {
        let cap = stake(remaining, m);
        if cap == 0 {
            continue;
        }
        let pot: u64 = remaining.values().map(|&left| left.min(cap)).sum();
        let sharers = &members[i..];
        let heads = sharers.len() as u64;
        for &id in sharers {
            settlement.credit(id, pot / heads);
        }
        settlement.credit(m, pot % heads);
        debug!("pot of {pot} capped at {cap} split between {heads} player(s)");

        for left in remaining.values_mut() {
            *left -= (*left).min(cap);
        }
    }
}

/// Current pot split into the main pot and side pots by contribution level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PotBreakdown {
    pub main: u64,
    pub sides: Vec<u64>,
}

impl PotBreakdown {
    pub fn total(&self) -> u64 {
        self.main + self.sides.iter().sum::<u64>()
    }
}

/// ```
/// use hotseat_holdem::pot::{pot_breakdown, Contributions};
///
/// let pots = pot_breakdown(&Contributions::from([(0, 50), (1, 100), (2, 200)]));
/// assert_eq!(pots.main, 150);
/// assert_eq!(pots.sides, vec![100, 100]);
/// ```
pub fn pot_breakdown(contributions: &Contributions) -> PotBreakdown {
    let mut levels: Vec<u64> = contributions.values().copied().filter(|&c| c > 0).collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev = 0u64;
    for level in levels {
        let reaching = contributions.values().filter(|&&c| c >= level).count() as u64;
        pots.push((level - prev) * reaching);
        prev = level;
    }

    let mut pots = pots.into_iter();
    PotBreakdown { main: pots.next().unwrap_or(0), sides: pots.collect() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contrib(pairs: &[(PlayerId, u64)]) -> Contributions {
        pairs.iter().copied().collect()
    }

    #[test]
    fn fold_out_takes_everything() {
        let c = contrib(&[(0, 10), (1, 6), (2, 2)]);
        let s = settle(&c, &Outcome::FoldOut(0)).unwrap();
        assert_eq!(s.award(0), 18);
        assert_eq!(s.award(1), 0);
        assert_eq!(s.award(2), 0);
        assert_eq!(s.total(), 18);
    }

    #[test]
    fn clear_winner_with_equal_stakes() {
        let c = contrib(&[(0, 10), (1, 10), (2, 10)]);
        let s = settle(&c, &Outcome::Showdown(vec![vec![0], vec![1], vec![2]])).unwrap();
        assert_eq!(s.award(0), 30);
        assert_eq!(s.winners().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn odd_chip_goes_to_lower_seat_on_equal_stakes() {
        // C folded after putting in one chip, so is absent from the groups
        let c = contrib(&[(0, 10), (1, 10), (2, 1)]);
        let s = settle(&c, &Outcome::Showdown(vec![vec![1, 0]])).unwrap();
        assert_eq!(s.award(0), 11);
        assert_eq!(s.award(1), 10);
        assert_eq!(s.award(2), 0);
    }

    #[test]
    fn odd_chip_goes_to_short_stack_of_the_split() {
        // 0 is all-in for 3 and ties with 1; pot 3+3+1 = 7 is split 3/3 with 1 left over
        let c = contrib(&[(0, 3), (1, 8), (2, 1)]);
        let s = settle(&c, &Outcome::Showdown(vec![vec![0, 1]])).unwrap();
        assert_eq!(s.award(0), 4);
        assert_eq!(s.award(1), 3 + 5);
        assert_eq!(s.total(), 12);
    }

    #[test]
    fn excess_over_every_winner_goes_back() {
        // settle alone cannot rule this out; a real round turns a free fold into a check
        let c = contrib(&[(0, 4), (1, 20)]);
        let s = settle(&c, &Outcome::Showdown(vec![vec![0]])).unwrap();
        assert_eq!(s.award(0), 8);
        assert_eq!(s.award(1), 16);
    }

    #[test]
    fn rejects_malformed_showdowns() {
        let c = contrib(&[(0, 4), (1, 4)]);
        for groups in [vec![], vec![vec![]], vec![vec![0], vec![7]], vec![vec![0, 1], vec![1]]] {
            assert!(matches!(
                settle(&c, &Outcome::Showdown(groups)),
                Err(SettleError::InvalidState(_))
            ));
        }
        assert!(settle(&c, &Outcome::FoldOut(5)).is_err());
    }

    #[test]
    fn breakdown_of_empty_pot() {
        let pots = pot_breakdown(&Contributions::new());
        assert_eq!(pots, PotBreakdown::default());
        assert_eq!(pot_breakdown(&contrib(&[(0, 5), (1, 5)])).total(), 10);
    }
}
