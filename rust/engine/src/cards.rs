use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::rules::AceRule;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn all() -> [Suit; 4] {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
    }

    /// Parses a suit letter (`S`, `H`, `D`, `C`, any case) or symbol (`♠♥♦♣`).
    pub fn from_char(c: char) -> Result<Suit, ValidationError> {
        match c {
            'C' | 'c' | '♣' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' => Ok(Suit::Diamonds),
            'H' | 'h' | '♥' => Ok(Suit::Hearts),
            'S' | 's' | '♠' => Ok(Suit::Spades),
            _ => Err(ValidationError::InvalidSuit(c)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };
        write!(f, "{suit}")
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14, or 1 when played low)
    Ace,
}

impl Rank {
    pub fn all() -> [Rank; 13] {
        [
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
        ]
    }

    /// Numeric value of the rank under the given ace rule: 2..=14, with the
    /// Ace worth 1 when [`AceRule::Low`] is in effect.
    pub fn value(self, ace: AceRule) -> u8 {
        match (self, ace) {
            (Rank::Ace, AceRule::Low) => 1,
            (r, _) => r as u8,
        }
    }

    pub fn from_char(c: char) -> Result<Rank, ValidationError> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(ValidationError::InvalidRank(c)),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = ValidationError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 | 14 => Ok(Rank::Ace),
            2..=13 => Ok(Rank::all()[(v - 2) as usize]),
            _ => Err(ValidationError::Malformed(format!("rank value {v}"))),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{rank}")
    }
}

/// Represents a single playing card with a rank and suit.
///
/// Cards order by rank first, the suit only separates cards of equal rank so
/// that the ordering stays consistent with equality. Hand evaluation never
/// looks at suit order.
///
/// ```
/// use pokercards_engine::cards::{Card, Rank, Suit};
///
/// let ah: Card = "AH".parse().unwrap();
/// assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
/// assert!(ah > "KS".parse().unwrap());
/// assert_eq!(ah.to_string(), "AH");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Builds a card from separate rank and suit symbols.
    pub fn from_chars(rank: char, suit: char) -> Result<Card, ValidationError> {
        Ok(Card::new(Rank::from_char(rank)?, Suit::from_char(suit)?))
    }

    /// Parses a list of cards separated by whitespace or commas, e.g.
    /// `"KC QH JH"` or `"AS,KS"`.
    pub fn parse_list(s: &str) -> Result<Vec<Card>, ValidationError> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Card {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // "10" is accepted as an alternative to "T"
        let (rank, rest) = match s.strip_prefix("10") {
            Some(rest) => (Rank::Ten, rest),
            None => {
                let mut chars = s.chars();
                let r = chars
                    .next()
                    .ok_or_else(|| ValidationError::Malformed(s.to_string()))?;
                (Rank::from_char(r)?, chars.as_str())
            }
        };

        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(suit), None) => Ok(Card::new(rank, Suit::from_char(suit)?)),
            _ => Err(ValidationError::Malformed(s.to_string())),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// All 52 cards in canonical order: suits clubs to spades, ranks two to ace
/// within each suit.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &Suit::all() {
        for &r in &Rank::all() {
            v.push(Card::new(r, s));
        }
    }
    v
}

pub(crate) fn format_list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
