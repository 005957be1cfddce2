use crate::cards::Rank;

/// Ranks of a five-card hand grouped by multiplicity, ordered by
/// (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// `rank_counts` is indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Unmatched ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        Some((self.trips()?, self.with_count(2).next()?))
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
