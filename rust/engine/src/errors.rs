use thiserror::Error;

use crate::cards::Card;

/// Malformed card input: an unknown rank or suit symbol, or text that does
/// not describe a card at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid rank: {0:?}")]
    InvalidRank(char),
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(char),
    #[error("Malformed card: {0:?}")]
    Malformed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PokerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Cannot deal {requested} cards, only {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Card {0} is already present")]
    DuplicateCard(Card),
    #[error("Hand has {have} cards, at least {need} required")]
    IncompleteHand { have: usize, need: usize },
    #[error("Card {0} was not dealt or discarded from this deck")]
    CardNotRemoved(Card),
}

/// Failure to read or parse a rules file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read rules: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse rules: {0}")]
    Parse(#[from] toml::de::Error),
}
