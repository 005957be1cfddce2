//! Seats, stacks, the dealer button and blinds.

use crate::hand::HoleCards;
use crate::pot::{Contributions, PlayerId, Settlement};
use log::info;

/// One seated player's chips and this round's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStake {
    name: String,
    chips: u64,
    contribution: u64,
    folded: bool,
    hole: Option<HoleCards>,
}

impl PlayerStake {
    pub fn new(name: impl Into<String>, chips: u64) -> Self {
        Self { name: name.into(), chips, contribution: 0, folded: false, hole: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chips behind, not counting this round's contribution.
    pub fn chips(&self) -> u64 {
        self.chips
    }

    pub fn contribution(&self) -> u64 {
        self.contribution
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Still in the hand with nothing left to bet.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.chips == 0
    }

    /// Still in the hand and able to put in more chips.
    pub fn can_act(&self) -> bool {
        !self.folded && self.chips > 0
    }

    /// Move up to `amount` chips into the pot; returns what was actually paid.
    pub fn contribute(&mut self, amount: u64) -> u64 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.contribution += paid;
        paid
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn set_hole(&mut self, hole: HoleCards) {
        self.hole = Some(hole);
    }

    fn collect(&mut self, award: u64) {
        self.chips += award;
        self.contribution = 0;
        self.folded = false;
        self.hole = None;
    }
}

/// The players in seat order and the dealer button.
///
/// ```
/// use hotseat_holdem::table::Table;
///
/// let mut table = Table::with_names(["Ann", "Bo", "Cy"], 50);
/// assert_eq!(table.rotate_dealer(), 0);
/// assert_eq!(table.blind_seats(), (1, 2));
/// assert_eq!(table.post_blinds(1, 2), (1, 2));
/// assert_eq!(table.player(2).unwrap().chips(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<PlayerStake>,
    dealer: usize,
}

impl Table {
    /// The button starts on the last seat so the first rotation lands on seat 0.
    pub fn new(players: Vec<PlayerStake>) -> Self {
        let dealer = players.len().saturating_sub(1);
        Self { players, dealer }
    }

    pub fn with_names<I, S>(names: I, chips: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(|n| PlayerStake::new(n, chips)).collect())
    }

    pub fn players(&self) -> &[PlayerStake] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerStake> {
        self.players.get(id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut PlayerStake> {
        self.players.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    /// The seat `offset` places after `seat`, wrapping around the table.
    pub fn seat_after(&self, seat: PlayerId, offset: usize) -> PlayerId {
        if self.players.is_empty() {
            return 0;
        }
        (seat + offset) % self.players.len()
    }

    pub fn rotate_dealer(&mut self) -> PlayerId {
        self.dealer = self.seat_after(self.dealer, 1);
        self.dealer
    }

    /// Small and big blind seats: the two seats after the dealer.
    pub fn blind_seats(&self) -> (PlayerId, PlayerId) {
        (self.seat_after(self.dealer, 1), self.seat_after(self.dealer, 2))
    }

    /// Post both blinds. A short stack posts what it has.
    pub fn post_blinds(&mut self, small: u64, big: u64) -> (u64, u64) {
        let (sb, bb) = self.blind_seats();
        let posted_small = self.players.get_mut(sb).map_or(0, |p| p.contribute(small));
        let posted_big = self.players.get_mut(bb).map_or(0, |p| p.contribute(big));
        (posted_small, posted_big)
    }

    pub fn contributions(&self) -> Contributions {
        self.players.iter().enumerate().map(|(id, p)| (id, p.contribution)).collect()
    }

    /// Players who have not folded, in seat order.
    pub fn live_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().enumerate().filter(|(_, p)| !p.folded).map(|(id, _)| id)
    }

    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| p.chips + p.contribution).sum()
    }

    /// Pay out awards and clear every player's round state.
    pub fn apply_settlement(&mut self, settlement: &Settlement) {
        for (id, player) in self.players.iter_mut().enumerate() {
            player.collect(settlement.award(id));
        }
    }

    /// Drop players with no chips left; returns their names.
    ///
    /// The button is moved back to the nearest surviving seat at or before
    /// it, so the next rotation continues from the seat after the old dealer.
    pub fn remove_busted(&mut self) -> Vec<String> {
        let survivors_up_to_dealer =
            self.players.iter().take(self.dealer + 1).filter(|p| p.chips > 0).count();

        let (kept, busted): (Vec<PlayerStake>, Vec<PlayerStake>) =
            std::mem::take(&mut self.players).into_iter().partition(|p| p.chips > 0);
        self.players = kept;

        self.dealer = match survivors_up_to_dealer {
            0 => self.players.len().saturating_sub(1),
            n => n - 1,
        };

        busted
            .into_iter()
            .map(|p| {
                info!("{} has run out of chips and leaves the table", p.name);
                p.name
            })
            .collect()
    }

    /// The last player standing, once everyone else has busted.
    pub fn champion(&self) -> Option<&PlayerStake> {
        match self.players.as_slice() {
            [winner] => Some(winner),
            _ => None,
        }
    }
}
