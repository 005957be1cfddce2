//! One round of hold'em: blinds, deal, betting, reveals, showdown, payout.

use crate::config::MIN_PLAYERS;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_hand, EvalError, Evaluation};
use crate::format::join_short;
use crate::hand::{Board, HandError, HoleCards};
use crate::pot::{pot_breakdown, settle, Outcome, PlayerId, PotBreakdown, SettleError};
use crate::showdown::tie_groups;
use crate::table::{PlayerStake, Table};
use log::{debug, info};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::io;

/// What a player chose to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    /// Match the highest contribution; a check when nothing is owed.
    CheckCall,
    /// Call, then add this many chips on top. Zero is a call.
    Raise(u64),
    AllIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Street::Preflop => "pre-flop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinds {
    pub small: u64,
    pub big: u64,
}

/// Read-only view handed to a [`Decider`] when a player must act.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub table: &'a Table,
    pub board: &'a Board,
    pub seat: PlayerId,
    pub round: u32,
    pub street: Street,
    pub highest_bet: u64,
}

impl<'a> Turn<'a> {
    pub fn player(&self) -> Option<&'a PlayerStake> {
        self.table.player(self.seat)
    }

    pub fn to_call(&self) -> u64 {
        self.player().map_or(0, |p| self.highest_bet.saturating_sub(p.contribution()))
    }

    /// Largest raise on top of a call that the player can still cover.
    pub fn max_raise(&self) -> u64 {
        self.player().map_or(0, |p| p.chips().saturating_sub(self.to_call()))
    }

    /// Calling would take the player's whole stack.
    pub fn must_go_all_in(&self) -> bool {
        self.player().is_some_and(|p| self.to_call() >= p.chips())
    }

    pub fn pots(&self) -> PotBreakdown {
        pot_breakdown(&self.table.contributions())
    }
}

/// Source of betting decisions, one call per turn.
pub trait Decider {
    fn decide(&mut self, turn: &Turn<'_>) -> io::Result<Action>;
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RoundError {
    #[error("a round needs at least two players, {0} seated")]
    NotEnoughPlayers(usize),
    #[error("{0} reached showdown without hole cards")]
    MissingHoleCards(String),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Settle(#[from] SettleError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("input failed: {0}")]
    Io(#[from] io::Error),
}

/// A player's hand at showdown. `place` is the index of their tie group.
#[derive(Debug, Clone)]
pub struct Standing {
    pub name: String,
    pub place: usize,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone)]
pub enum RoundResult {
    FoldOut { winner: String },
    /// Best hands first.
    Showdown { standings: Vec<Standing> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub name: String,
    pub amount: u64,
}

/// Everything that happened in a finished round, by player name.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub number: u32,
    pub board: Board,
    pub result: RoundResult,
    pub awards: Vec<Award>,
    pub eliminated: Vec<String>,
}

impl RoundReport {
    /// Players sharing the best hand, or the last player standing.
    pub fn winners(&self) -> Vec<&str> {
        match &self.result {
            RoundResult::FoldOut { winner } => vec![winner.as_str()],
            RoundResult::Showdown { standings } => standings
                .iter()
                .filter(|s| s.place == 0)
                .map(|s| s.name.as_str())
                .collect(),
        }
    }

    pub fn award_for(&self, name: &str) -> u64 {
        self.awards.iter().filter(|a| a.name == name).map(|a| a.amount).sum()
    }
}

const REVEALS: [(Street, usize); 3] = [(Street::Flop, 3), (Street::Turn, 1), (Street::River, 1)];

/// Play one full round at `table`, dealing from `deck`.
///
/// The button moves first, then the blinds are posted and hole cards dealt
/// starting left of the dealer. Pre-flop action opens three seats after the
/// dealer, later streets open on the seat after the dealer. A card is burned
/// before each reveal. The pot is settled and paid, and players left with
/// no chips are removed before the report is returned.
pub fn play_round<D: Decider + ?Sized>(
    table: &mut Table,
    deck: &mut Deck,
    blinds: Blinds,
    number: u32,
    decider: &mut D,
) -> Result<RoundReport, RoundError> {
    if table.len() < MIN_PLAYERS {
        return Err(RoundError::NotEnoughPlayers(table.len()));
    }

    let dealer = table.rotate_dealer();
    info!(
        "round {number}: {} has the button",
        table.player(dealer).map_or("?", PlayerStake::name)
    );
    let (small, big) = table.post_blinds(blinds.small, blinds.big);
    debug!("blinds posted: {small}/{big}");
    deal_hole_cards(table, deck)?;

    let mut board = Board::default();
    betting_round(table, &board, number, Street::Preflop, 3, decider)?;

    for (street, count) in REVEALS {
        if table.live_players().count() < 2 {
            break;
        }
        deck.burn()?;
        board.reveal(deck.deal_n(count)?)?;
        debug!("{street}: {}", join_short(board.as_slice()));
        betting_round(table, &board, number, street, 1, decider)?;
    }

    let (outcome, result) = showdown(table, &board)?;
    let settlement = settle(&table.contributions(), &outcome)?;

    let awards: Vec<Award> = table
        .players()
        .iter()
        .enumerate()
        .filter_map(|(id, p)| {
            let amount = settlement.award(id);
            (amount > 0).then(|| Award { name: p.name().to_string(), amount })
        })
        .collect();
    for award in &awards {
        info!("round {number}: {} collects {}", award.name, award.amount);
    }

    table.apply_settlement(&settlement);
    let eliminated = table.remove_busted();

    Ok(RoundReport { number, board, result, awards, eliminated })
}

fn deal_hole_cards(table: &mut Table, deck: &mut Deck) -> Result<(), RoundError> {
    let n = table.len();
    let first = table.seat_after(table.dealer(), 1);
    let mut dealt = vec![Vec::with_capacity(2); n];
    for _ in 0..2 {
        for i in 0..n {
            dealt[table.seat_after(first, i)].push(deck.deal_card()?);
        }
    }
    for (seat, cards) in dealt.iter().enumerate() {
        let hole = HoleCards::from_slice(cards)?;
        if let Some(player) = table.player_mut(seat) {
            player.set_hole(hole);
        }
    }
    Ok(())
}

fn showdown(table: &Table, board: &Board) -> Result<(Outcome, RoundResult), RoundError> {
    let live: Vec<PlayerId> = table.live_players().collect();
    let name = |seat: PlayerId| table.player(seat).map_or_else(String::new, |p| p.name().to_string());

    if let [winner] = live.as_slice() {
        info!("{} wins uncontested", name(*winner));
        return Ok((Outcome::FoldOut(*winner), RoundResult::FoldOut { winner: name(*winner) }));
    }

    let mut evaluations = BTreeMap::new();
    for &seat in &live {
        let hole = table
            .player(seat)
            .and_then(PlayerStake::hole)
            .ok_or_else(|| RoundError::MissingHoleCards(name(seat)))?;
        evaluations.insert(seat, evaluate_hand(&hole, board)?);
    }

    let ranked: Vec<_> = evaluations.iter().map(|(&seat, eval)| (seat, eval.rank)).collect();
    let groups = tie_groups(&ranked);

    let mut standings = Vec::with_capacity(live.len());
    for (place, group) in groups.iter().enumerate() {
        for seat in group {
            if let Some(&evaluation) = evaluations.get(seat) {
                debug!("{} shows {}", name(*seat), evaluation.rank);
                standings.push(Standing { name: name(*seat), place, evaluation });
            }
        }
    }

    Ok((Outcome::Showdown(groups), RoundResult::Showdown { standings }))
}

/// Run one street of betting, opening `offset` seats after the dealer.
///
/// Every player who can still bet acts at least once. A bet that raises the
/// highest contribution gives everyone else another turn.
fn betting_round<D: Decider + ?Sized>(
    table: &mut Table,
    board: &Board,
    round: u32,
    street: Street,
    offset: usize,
    decider: &mut D,
) -> Result<(), RoundError> {
    let n = table.len();
    let first = table.seat_after(table.dealer(), offset);
    let mut highest = table.players().iter().map(PlayerStake::contribution).max().unwrap_or(0);
    let mut queue: VecDeque<PlayerId> =
        (0..n).map(|i| table.seat_after(first, i)).filter(|&id| can_act(table, id)).collect();

    while let Some(seat) = queue.pop_front() {
        if table.live_players().count() < 2 {
            break;
        }
        let Some(player) = table.player(seat) else { continue };
        if !player.can_act() {
            continue;
        }
        let to_call = highest.saturating_sub(player.contribution());
        let others_can_bet = (0..n).any(|id| id != seat && can_act(table, id));
        if to_call == 0 && !others_can_bet {
            continue;
        }

        let turn = Turn { table: &*table, board, seat, round, street, highest_bet: highest };
        // Nothing is owed, so a fold becomes a check.
        let action = match decider.decide(&turn)? {
            Action::Fold if to_call == 0 => Action::CheckCall,
            action => action,
        };

        let Some(player) = table.player_mut(seat) else { continue };
        let paid = match action {
            Action::Fold => {
                player.fold();
                0
            }
            Action::CheckCall => player.contribute(to_call),
            Action::Raise(extra) => player.contribute(to_call.saturating_add(extra)),
            Action::AllIn => {
                let stack = player.chips();
                player.contribute(stack)
            }
        };
        debug!("{street}: {} {action:?} puts in {paid}", player.name());

        let contribution = player.contribution();
        if contribution > highest {
            highest = contribution;
            queue = (1..n)
                .map(|i| table.seat_after(seat, i))
                .filter(|&id| can_act(table, id))
                .collect();
        }
    }
    Ok(())
}

fn can_act(table: &Table, id: PlayerId) -> bool {
    table.player(id).is_some_and(PlayerStake::can_act)
}
