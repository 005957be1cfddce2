use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The discriminant is the rank's value with the Ace counted high. The
/// Ace-low reading only exists inside straight detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn text(self) -> (char, &'static str, &'static str) {
        RANK_TEXT[self as usize - 2]
    }

    pub const fn to_char(self) -> char {
        self.text().0
    }

    /// Spoken name, as used in hand descriptions ("Deuce", "Queen").
    pub const fn name(self) -> &'static str {
        self.text().1
    }

    /// Plural spoken name ("Deuces", "Sixes").
    pub const fn plural(self) -> &'static str {
        self.text().2
    }
}

/// Short form, name and plural of each rank, Two first.
const RANK_TEXT: [(char, &str, &str); 13] = [
    ('2', "Deuce", "Deuces"),
    ('3', "Three", "Threes"),
    ('4', "Four", "Fours"),
    ('5', "Five", "Fives"),
    ('6', "Six", "Sixes"),
    ('7', "Seven", "Sevens"),
    ('8', "Eight", "Eights"),
    ('9', "Nine", "Nines"),
    ('T', "Ten", "Tens"),
    ('J', "Jack", "Jacks"),
    ('Q', "Queen", "Queens"),
    ('K', "King", "Kings"),
    ('A', "Ace", "Aces"),
];

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
    #[error("rank value out of range: {0}")]
    OutOfRange(u8),
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Rank::ALL.iter().copied().find(|r| r.value() == v).ok_or(RankParseError::OutOfRange(v))
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "10" => Ok(Rank::Ten),
            t if t.chars().count() == 1 => {
                t.chars().next().map_or(Err(RankParseError::Invalid(s.to_string())), |c| {
                    Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string()))
                })
            }
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let up = c.to_ascii_uppercase();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.to_char() == up)
            .ok_or_else(|| RankParseError::Invalid(c.to_string()))
    }
}

/// The four suits. They carry no strength; the derived order only keeps
/// sorting deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        Suit::ALL
            .iter()
            .copied()
            .find(|suit| suit.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let lower = c.to_ascii_lowercase();
        Suit::ALL
            .iter()
            .copied()
            .find(|s| s.to_char() == lower)
            .ok_or_else(|| SuitParseError::Invalid(c.to_string()))
    }
}

/// A playing card: rank + suit.
///
/// `Display` gives the short form, [`Card::name`] the long one.
///
/// ```
/// use hotseat_holdem::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(card.name(), "Ace of Spades");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub fn name(self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // suit is always the last char, rank is whatever precedes it ("10" included)
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use hotseat_holdem::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_names_use_deuce() {
        assert_eq!(Rank::Two.name(), "Deuce");
        assert_eq!(Rank::Two.plural(), "Deuces");
        assert_eq!(Rank::Six.plural(), "Sixes");
        assert_eq!(Rank::Ace.name(), "Ace");
    }

    #[test]
    fn rank_from_value() {
        assert_eq!(Rank::try_from(14u8).unwrap(), Rank::Ace);
        assert_eq!(Rank::try_from(2u8).unwrap(), Rank::Two);
        assert_eq!(Rank::try_from(1u8), Err(RankParseError::OutOfRange(1)));
        assert_eq!(Rank::try_from(15u8), Err(RankParseError::OutOfRange(15)));
    }

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("t").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("AK").is_err());
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "s");
        assert_eq!(Suit::from_str("s").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("hearts").unwrap(), Suit::Hearts);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn card_short_and_long_forms() {
        let q = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(q.to_string(), "Qh");
        assert_eq!(q.name(), "Queen of Hearts");
        assert_eq!(Card::from_str("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(Card::from_str("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert!(Card::from_str("h").is_err());
        assert!(Card::from_str("").is_err());
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("As, Kd 10c").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[1], Card::new(Rank::King, Suit::Diamonds));
        assert!(parse_cards("As Zz").is_err());
    }
}
