use crate::cards::Rank;

/// Top card of a five-card straight, if the ranks form one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// `ranks` must be sorted descending.
    ///
    /// The Ace plays low only in the wheel (A-2-3-4-5), whose top card is the Five.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let consecutive = ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if consecutive {
            return StraightInfo { top_rank: Some(ranks[0]) };
        }

        const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
        if *ranks == WHEEL {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }

    #[cfg(test)]
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn broadway() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn no_wraparound() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Four, Rank::Three, Rank::Two]);
        assert!(!info.is_straight());
    }

    #[test]
    fn paired_ranks_are_not_straight() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert_eq!(info.top_rank, None);
    }
}
