//! Small text helpers shared by the log and the terminal front-end.

use crate::cards::Card;

/// Join words the way a sentence lists them.
///
/// ```
/// use hotseat_holdem::format::join_natural;
///
/// assert_eq!(join_natural(&["Ann"]), "Ann");
/// assert_eq!(join_natural(&["Ann", "Bo"]), "Ann and Bo");
/// assert_eq!(join_natural(&["Ann", "Bo", "Cy"]), "Ann, Bo, and Cy");
/// ```
pub fn join_natural<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [a, b] => format!("{} and {}", a.as_ref(), b.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// "Ace of Spades, King of Hearts, and Deuce of Clubs"
pub fn join_long(cards: &[Card]) -> String {
    let names: Vec<String> = cards.iter().map(|c| c.name()).collect();
    join_natural(&names)
}

/// "As Kh 2c"
pub fn join_short(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

pub fn plural(count: u64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
