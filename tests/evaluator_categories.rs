use hotseat_holdem::cards::{parse_cards, Card, Rank, Suit};
use hotseat_holdem::evaluator::{evaluate, evaluate_detailed, evaluate_five, Category, EvalError};
use hotseat_holdem::hand::HandError;

fn rank_of(cards: &str) -> hotseat_holdem::evaluator::HandRank {
    evaluate(&parse_cards(cards).expect("valid cards")).expect("valid hand")
}

#[test]
fn category_royal_flush() {
    let xs = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.rank.category(), Category::RoyalFlush);
    assert_eq!(e.rank.tiebreak(), [14, 0, 0, 0, 0]);
}

#[test]
fn category_straight_flush() {
    let r = rank_of("9h 8h 7h 6h 5h 2c 2d");
    assert_eq!(r.category(), Category::StraightFlush);
    assert_eq!(r.tiebreak(), [9, 0, 0, 0, 0]);
}

#[test]
fn steel_wheel_is_a_five_high_straight_flush() {
    let r = rank_of("Ad 2d 3d 4d 5d");
    assert_eq!(r.category(), Category::StraightFlush);
    assert_eq!(r.tiebreak()[0], 5);
}

#[test]
fn category_four_of_a_kind() {
    let r = rank_of("9c 9d 9h 9s Ac 2d");
    assert_eq!(r.category(), Category::FourOfAKind);
    assert_eq!(r.tiebreak(), [9, 14, 0, 0, 0]);
}

#[test]
fn category_full_house() {
    let r = rank_of("3c 3d 3h Js Jc");
    assert_eq!(r.category(), Category::FullHouse);
    assert_eq!(r.tiebreak(), [3, 11, 0, 0, 0]);
}

#[test]
fn two_sets_of_trips_make_a_full_house() {
    let r = rank_of("Kc Kd Kh 4s 4c 4d 2h");
    assert_eq!(r.category(), Category::FullHouse);
    assert_eq!(r.tiebreak(), [13, 4, 0, 0, 0]);
}

#[test]
fn aces_full_from_either_triplet() {
    assert_eq!(rank_of("Ac Ad Ah 4s 4c 4d 2h").tiebreak(), [14, 4, 0, 0, 0]);
    assert_eq!(rank_of("Kc Kd Kh As Ac Ad 2h").tiebreak(), [14, 13, 0, 0, 0]);
}

#[test]
fn second_triplet_or_higher_pair_fills_the_house() {
    assert_eq!(rank_of("5c 5d 5h 3s 3c 3d 9h").tiebreak(), [5, 3, 0, 0, 0]);
    assert_eq!(rank_of("5c 5d 5h 3s 3c 9d 9h").tiebreak(), [5, 9, 0, 0, 0]);
}

#[test]
fn category_flush() {
    let r = rank_of("Kh Th 8h 6h 3h");
    assert_eq!(r.category(), Category::Flush);
    assert_eq!(r.tiebreak(), [13, 10, 8, 6, 3]);
}

#[test]
fn flush_uses_the_five_highest_suited_cards() {
    let r = rank_of("Ah Jh 9h 6h 4h 2h Kc");
    assert_eq!(r.category(), Category::Flush);
    assert_eq!(r.tiebreak(), [14, 11, 9, 6, 4]);
}

#[test]
fn category_straight() {
    let r = rank_of("Ac 5c 4d 3h 2s");
    assert_eq!(r.category(), Category::Straight);
    assert_eq!(r.tiebreak(), [5, 0, 0, 0, 0]);
}

#[test]
fn broadway_beats_the_wheel() {
    assert!(rank_of("Ac Kd Qh Js Tc") > rank_of("Ac 2d 3h 4s 5c"));
}

#[test]
fn category_three_of_a_kind() {
    let r = rank_of("Qs Qh Qd 9c 4s");
    assert_eq!(r.category(), Category::ThreeOfAKind);
    assert_eq!(r.tiebreak(), [12, 9, 4, 0, 0]);
}

#[test]
fn category_two_pair_keeps_best_kicker() {
    let r = rank_of("Ah Ad Tc Ts 5h 5c 2d");
    assert_eq!(r.category(), Category::TwoPair);
    assert_eq!(r.tiebreak(), [14, 10, 5, 0, 0]);
}

#[test]
fn category_pair() {
    let r = rank_of("6s 6h Kd 9c 3s");
    assert_eq!(r.category(), Category::Pair);
    assert_eq!(r.tiebreak(), [6, 13, 9, 3, 0]);
}

#[test]
fn category_high_card() {
    let r = rank_of("Ks Jh 8d 5c 2s");
    assert_eq!(r.category(), Category::HighCard);
    assert_eq!(r.tiebreak(), [13, 11, 8, 5, 2]);
}

#[test]
fn categories_are_ordered() {
    let hands = [
        "Ks Jh 8d 5c 2s",
        "6s 6h Kd 9c 3s",
        "Ah Ad Tc Ts 5h",
        "Qs Qh Qd 9c 4s",
        "Ac 5c 4d 3h 2s",
        "Kh Th 8h 6h 3h",
        "3c 3d 3h Js Jc",
        "9c 9d 9h 9s Ac",
        "9h 8h 7h 6h 5h",
        "As Ks Qs Js Ts",
    ];
    let ranks: Vec<_> = hands.iter().map(|h| rank_of(h)).collect();
    for (rank, category) in ranks.iter().zip(Category::ALL) {
        assert_eq!(rank.category(), category);
    }
    assert!(ranks.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn best_five_are_reported() {
    let eval = evaluate_detailed(&parse_cards("2c 7d As Ks Qs Js Ts").unwrap()).unwrap();
    let mut shown: Vec<String> = eval.best_five.iter().map(Card::to_string).collect();
    shown.sort();
    assert_eq!(shown, vec!["As", "Js", "Ks", "Qs", "Ts"]);
}

#[test]
fn descriptors_read_like_sentences() {
    let cases = [
        ("As Ks Qs Js Ts", "a royal flush"),
        ("Kh Qh Jh Th 9h", "a straight flush, King high"),
        ("Qc Qd Qh Qs 2c", "a four-of-a-kind of Queens"),
        ("Kc Kd Kh 2s 2c", "a full house, Kings over Deuces"),
        ("Ah Th 8h 6h 3h", "a flush, Ace high"),
        ("Ac 2d 3h 4s 5c", "a straight, Five high"),
        ("Ah Ad Tc Ts 5h", "two pair, Aces over Tens"),
        ("6s 6h Kd 9c 3s", "a pair of Sixes"),
        ("As Jh 8d 5c 2s", "an Ace high"),
        ("Ks Jh 8d 5c 2s", "a King high"),
    ];
    for (cards, text) in cases {
        assert_eq!(rank_of(cards).to_string(), text, "{cards}");
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    let four = parse_cards("As Ks Qs Js").unwrap();
    assert_eq!(evaluate(&four), Err(EvalError::InvalidHand(HandError::CardCount(4))));

    let eight = parse_cards("As Ks Qs Js Ts 9s 8s 7s").unwrap();
    assert_eq!(evaluate(&eight), Err(EvalError::InvalidHand(HandError::CardCount(8))));

    let dup = parse_cards("As Ks Qs Js As").unwrap();
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(evaluate(&dup), Err(EvalError::InvalidHand(HandError::DuplicateCard(ace))));
}
