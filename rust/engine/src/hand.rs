use std::fmt;
use std::str::FromStr;

use crate::cards::{format_list, Card};
use crate::errors::PokerError;

/// The cards held by one player, all distinct.
///
/// A hand does not limit its size: how many cards a player may hold depends
/// on the game variant and is checked by the game logic.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, PokerError> {
        let mut hand = Self::new();
        for card in cards {
            hand.add(card)?;
        }
        Ok(hand)
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// [`PokerError::DuplicateCard`] if the hand already holds `card`.
    pub fn add(&mut self, card: Card) -> Result<(), PokerError> {
        if self.contains(&card) {
            return Err(PokerError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PokerError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cards(Card::parse_list(s)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", format_list(&self.cards))
    }
}
