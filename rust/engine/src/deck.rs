use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::cards::{full_deck, Card};
use crate::errors::PokerError;
use crate::hand::Hand;

/// Where returned cards are placed, for a deck lying face down.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Position {
    /// Returned cards are the next ones dealt.
    Top,
    /// Returned cards are dealt last.
    Bottom,
}

/// Card counts of the three piles a deck keeps track of.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DeckStats {
    /// Cards still available for dealing
    pub active: usize,
    /// Cards handed out by [`Deck::deal`] and friends
    pub dealt: usize,
    /// Cards burned with [`Deck::discard`]
    pub discarded: usize,
}

/// A single 52-card deck for one round.
///
/// Every card lives in exactly one pile: active, dealt or discarded. The
/// shuffle randomness is always supplied by the caller.
///
/// # Examples
///
/// ```
/// use pokercards_engine::deck::Deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let mut deck = Deck::new();
/// deck.shuffle(&mut rng);
///
/// let hole = deck.deal(2).unwrap();
/// assert_eq!(hole.len(), 2);
/// assert_eq!(deck.remaining(), 50);
/// assert!(deck.deal(51).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undealt cards, bottom first: the top card is the last element
    active: Vec<Card>,
    dealt: Vec<Card>,
    discarded: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// A fresh deck in canonical order; the first card dealt is the two of
    /// clubs and the last one the ace of spades.
    pub fn new() -> Self {
        let mut active = full_deck();
        active.reverse();
        Self {
            active,
            dealt: Vec::new(),
            discarded: Vec::new(),
        }
    }

    /// Randomly permutes the remaining cards. Dealt and discarded cards are
    /// not touched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.active.shuffle(rng);
        trace!(remaining = self.active.len(), "deck shuffled");
    }

    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Removes `n` cards from the top of the deck, returned in dealing order.
    ///
    /// # Errors
    ///
    /// [`PokerError::InsufficientCards`] when fewer than `n` cards remain, in
    /// which case the deck is left unchanged.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, PokerError> {
        let remaining = self.active.len();
        if n > remaining {
            return Err(PokerError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let mut cards = self.active.split_off(remaining - n);
        cards.reverse();
        self.dealt.extend_from_slice(&cards);
        trace!(n, remaining = self.active.len(), "dealt cards");
        Ok(cards)
    }

    pub fn deal_one(&mut self) -> Result<Card, PokerError> {
        let card = self.active.pop().ok_or(PokerError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;
        self.dealt.push(card);
        trace!(%card, remaining = self.active.len(), "dealt card");
        Ok(card)
    }

    /// Deals `n` cards straight into `hand`.
    ///
    /// Nothing is dealt if the hand already holds one of the top `n` cards.
    pub fn deal_into(&mut self, hand: &mut Hand, n: usize) -> Result<(), PokerError> {
        if let Some(&card) = self.iter().take(n).find(|c| hand.contains(c)) {
            return Err(PokerError::DuplicateCard(card));
        }
        for card in self.deal(n)? {
            hand.add(card)?;
        }
        Ok(())
    }

    /// Burns the top card to the discard pile and returns it.
    pub fn discard(&mut self) -> Result<Card, PokerError> {
        let card = self.active.pop().ok_or(PokerError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })?;
        self.discarded.push(card);
        trace!(%card, remaining = self.active.len(), "discarded card");
        Ok(card)
    }

    /// Puts previously dealt or discarded cards back into the deck, one at a
    /// time in the given order: with [`Position::Top`] the last card listed
    /// becomes the top card.
    ///
    /// # Errors
    ///
    /// [`PokerError::CardNotRemoved`] if any card is not currently out of
    /// this deck; no card is returned in that case.
    pub fn return_cards(&mut self, cards: &[Card], pos: Position) -> Result<(), PokerError> {
        let mut dealt = self.dealt.clone();
        let mut discarded = self.discarded.clone();
        for card in cards {
            if let Some(i) = discarded.iter().position(|c| c == card) {
                discarded.remove(i);
            } else if let Some(i) = dealt.iter().position(|c| c == card) {
                dealt.remove(i);
            } else {
                return Err(PokerError::CardNotRemoved(*card));
            }
        }
        self.dealt = dealt;
        self.discarded = discarded;
        self.place(cards, pos);
        Ok(())
    }

    pub fn return_dealt(&mut self, pos: Position) {
        let cards = std::mem::take(&mut self.dealt);
        self.place(&cards, pos);
    }

    pub fn return_discarded(&mut self, pos: Position) {
        let cards = std::mem::take(&mut self.discarded);
        self.place(&cards, pos);
    }

    /// Gathers the dealt cards then the discarded ones back into the deck.
    pub fn return_all(&mut self, pos: Position) {
        self.return_dealt(pos);
        self.return_discarded(pos);
    }

    pub fn remaining(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn stats(&self) -> DeckStats {
        DeckStats {
            active: self.active.len(),
            dealt: self.dealt.len(),
            discarded: self.discarded.len(),
        }
    }

    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Iterates the remaining cards from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.active.iter().rev()
    }

    fn place(&mut self, cards: &[Card], pos: Position) {
        match pos {
            Position::Top => self.active.extend_from_slice(cards),
            Position::Bottom => {
                for &card in cards {
                    self.active.insert(0, card);
                }
            }
        }
        trace!(
            n = cards.len(),
            ?pos,
            remaining = self.active.len(),
            "returned cards"
        );
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "[{}]", cards.join(" "))
    }
}
