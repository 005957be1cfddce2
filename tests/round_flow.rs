use hotseat_holdem::cards::parse_cards;
use hotseat_holdem::deck::Deck;
use hotseat_holdem::pot::PotBreakdown;
use hotseat_holdem::round::{play_round, Action, Blinds, Decider, RoundResult, Street, Turn};
use hotseat_holdem::table::{PlayerStake, Table};
use std::collections::VecDeque;
use std::io;

const BLINDS: Blinds = Blinds { small: 1, big: 2 };

/// Plays back a fixed list of actions, then checks or calls.
#[derive(Default)]
struct Scripted {
    actions: VecDeque<Action>,
    seen: Vec<(usize, Street)>,
    pots: Vec<PotBreakdown>,
}

impl Scripted {
    fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self { actions: actions.into_iter().collect(), ..Self::default() }
    }
}

impl Decider for Scripted {
    fn decide(&mut self, turn: &Turn<'_>) -> io::Result<Action> {
        self.seen.push((turn.seat, turn.street));
        self.pots.push(turn.pots());
        Ok(self.actions.pop_front().unwrap_or(Action::CheckCall))
    }
}

fn stacked(order: &str) -> Deck {
    Deck::from_cards(parse_cards(order).expect("valid cards"))
}

fn chips(table: &Table) -> Vec<u64> {
    table.players().iter().map(PlayerStake::chips).collect()
}

#[test]
fn a_raise_reopens_the_action() {
    // deal order b c a b c a; b holds aces
    let mut deck = stacked("Ah 2c 7d As 3c 8d 9s Kh Kd Qs 9c Jd 9h 4s");
    let mut table = Table::with_names(["a", "b", "c"], 50);
    let mut script = Scripted::new([Action::CheckCall, Action::Raise(2)]);

    let report = play_round(&mut table, &mut deck, BLINDS, 1, &mut script).unwrap();

    use Street::*;
    assert_eq!(
        script.seen,
        vec![
            (0, Preflop),
            (1, Preflop),
            (2, Preflop),
            (0, Preflop),
            (1, Flop),
            (2, Flop),
            (0, Flop),
            (1, Turn),
            (2, Turn),
            (0, Turn),
            (1, River),
            (2, River),
            (0, River),
        ]
    );
    assert_eq!(report.winners(), vec!["b"]);
    assert_eq!(report.award_for("b"), 12);
    assert_eq!(chips(&table), vec![46, 58, 46]);
}

#[test]
fn short_all_in_creates_a_side_pot() {
    // b has aces, a sevens, c nothing; board Kh Kd Qs Jd 4s
    let mut deck = stacked("Ah 2c 7d As 3c 7s 9s Kh Kd Qs 9c Jd 9h 4s");
    let mut table = Table::new(vec![
        PlayerStake::new("a", 50),
        PlayerStake::new("b", 20),
        PlayerStake::new("c", 50),
    ]);
    let mut script = Scripted::new([
        Action::Raise(8),
        Action::AllIn,
        Action::CheckCall,
        Action::CheckCall,
        Action::Raise(10),
    ]);

    let report = play_round(&mut table, &mut deck, BLINDS, 1, &mut script).unwrap();

    // b is all-in and never asked again
    assert!(script.seen.iter().skip(4).all(|&(seat, _)| seat != 1));
    let last_view = script.pots.last().unwrap();
    assert_eq!(last_view.main, 60);
    assert_eq!(last_view.sides, vec![20]);

    let RoundResult::Showdown { standings } = &report.result else {
        panic!("expected a showdown");
    };
    let order: Vec<(&str, usize)> = standings.iter().map(|s| (s.name.as_str(), s.place)).collect();
    assert_eq!(order, vec![("b", 0), ("a", 1), ("c", 2)]);
    assert_eq!(report.award_for("b"), 60);
    assert_eq!(report.award_for("a"), 20);
    assert_eq!(report.award_for("c"), 0);
    assert_eq!(chips(&table), vec![40, 60, 20]);
    assert!(report.eliminated.is_empty());
}

#[test]
fn folding_to_a_flop_bet_ends_the_round() {
    let mut deck = Deck::shuffled(42);
    let mut table = Table::with_names(["a", "b", "c"], 50);
    let mut script = Scripted::new([
        Action::CheckCall,
        Action::CheckCall,
        Action::CheckCall,
        Action::Raise(5),
        Action::Fold,
        Action::Fold,
    ]);

    let report = play_round(&mut table, &mut deck, BLINDS, 3, &mut script).unwrap();

    assert!(matches!(&report.result, RoundResult::FoldOut { winner } if winner == "b"));
    assert_eq!(report.number, 3);
    assert_eq!(report.board.len(), 3);
    assert_eq!(report.award_for("b"), 11);
    assert_eq!(chips(&table), vec![48, 54, 48]);
    // 6 hole cards, one burn, the flop
    assert_eq!(deck.remaining(), 52 - 10);
}

#[test]
fn busted_players_leave_and_the_button_moves_on() {
    // c shoves with nothing and loses to b's aces
    let mut deck = stacked("Ah 2c 7d As 3c 8d 9s Kh Kd Qs 9c Jd 9h 4s");
    let mut table = Table::new(vec![
        PlayerStake::new("a", 50),
        PlayerStake::new("b", 50),
        PlayerStake::new("c", 10),
    ]);
    let mut script = Scripted::new([Action::Fold, Action::CheckCall, Action::AllIn, Action::CheckCall]);

    let report = play_round(&mut table, &mut deck, BLINDS, 1, &mut script).unwrap();

    assert_eq!(report.eliminated, vec!["c"]);
    assert_eq!(report.award_for("b"), 20);
    let names: Vec<&str> = table.players().iter().map(PlayerStake::name).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(chips(&table), vec![50, 60]);
    assert_eq!(table.total_chips(), 110);
    // a dealt this round, so b has the next button
    assert_eq!(table.rotate_dealer(), 1);
}
