use hotseat_holdem::cards::parse_cards;
use hotseat_holdem::deck::Deck;
use hotseat_holdem::history::{round_lines, RoundLog};
use hotseat_holdem::round::{play_round, Action, Blinds, Decider, Turn};
use hotseat_holdem::table::Table;
use std::fs;
use std::io;

struct Passive;

impl Decider for Passive {
    fn decide(&mut self, _turn: &Turn<'_>) -> io::Result<Action> {
        Ok(Action::CheckCall)
    }
}

const BLINDS: Blinds = Blinds { small: 1, big: 2 };

#[test]
fn winner_line_names_hand_and_cards() {
    // b: Ah As, c: 2c 3c, a: 7d 8d; board Kh Kd Qs Jd 4s
    let order = parse_cards("Ah 2c 7d As 3c 8d 9s Kh Kd Qs 9c Jd 9h 4s").unwrap();
    let mut table = Table::with_names(["Ann", "Bo", "Cy"], 50);
    let report =
        play_round(&mut table, &mut Deck::from_cards(order), BLINDS, 7, &mut Passive).unwrap();

    assert_eq!(
        round_lines(&report),
        vec![
            "Bo won round 7 with two pair, Aces over Kings, using the cards: \
             Ace of Spades, Ace of Hearts, King of Hearts, King of Diamonds, and Queen of Spades"
        ]
    );
}

#[test]
fn split_pot_gets_a_line_per_player() {
    // the board's broadway straight plays for everyone
    let order = parse_cards("2c 3c 2d 3d 9s Ah Kd Qs 9c Jd 9h Tc").unwrap();
    let mut table = Table::with_names(["Ann", "Bo"], 50);
    let report =
        play_round(&mut table, &mut Deck::from_cards(order), BLINDS, 2, &mut Passive).unwrap();

    let lines = round_lines(&report);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Ann split round 2 with a straight, Ace high, using the cards: "));
    assert!(lines[1].starts_with("Bo split round 2 with a straight, Ace high"));
    assert_eq!(report.award_for("Ann"), 2);
    assert_eq!(report.award_for("Bo"), 2);
}

#[test]
fn log_file_is_appended_to() {
    let path = std::env::temp_dir().join(format!("hotseat-holdem-log-{}.txt", std::process::id()));
    let _ = fs::remove_file(&path);

    for name in ["Ann", "Bo"] {
        let mut log = RoundLog::append_to(&path).unwrap();
        log.record_champion(name, 100).unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "Ann won the game!",
            "Ann managed to win a total of 100 chips. Congratulations!",
            "Bo won the game!",
            "Bo managed to win a total of 100 chips. Congratulations!",
        ]
    );
}
