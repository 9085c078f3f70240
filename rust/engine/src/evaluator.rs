use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{format_list, Card, Rank};
use crate::errors::PokerError;
use crate::hand::Hand;
use crate::rules::{AceRule, Rules};

/// Number of cards that make up a poker hand.
pub const HAND_SIZE: usize = 5;

/// Poker hand categories, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

/// Comparable strength of a hand: the category first, then the tiebreak
/// ranks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Ranking {
    pub category: Category,
    // rank values ordered high -> low for tiebreaks, zero padded
    pub tiebreak: [u8; 5],
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        let ranks = self
            .tiebreak
            .iter()
            .filter(|&&v| v != 0)
            .filter_map(|&v| Rank::try_from(v).ok())
            .map(|r| r.to_string())
            .collect::<Vec<_>>();
        write!(f, " ({})", ranks.join(","))
    }
}

/// Result of evaluating a hand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    /// Strength used to compare hands
    pub ranking: Ranking,
    /// The five cards that produce the ranking
    pub best: [Card; 5],
    /// Cards of `best` forming the category (the pair, the straight, ...)
    pub made: Vec<Card>,
    /// Remaining cards of `best`, high to low
    pub kickers: Vec<Card>,
}

impl Evaluation {
    pub fn category(&self) -> Category {
        self.ranking.category
    }
}

/// Classifies hands of five or more cards under a set of [`Rules`].
///
/// ```
/// use pokercards_engine::evaluator::{Category, HandEvaluator};
/// use pokercards_engine::hand::Hand;
///
/// let evaluator = HandEvaluator::default();
/// let hand: Hand = "KC QH JH TH 9H 8H 7H".parse().unwrap();
/// let eval = evaluator.evaluate(&hand).unwrap();
/// assert_eq!(eval.category(), Category::StraightFlush);
/// assert_eq!(eval.ranking.tiebreak[0], 12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator {
    rules: Rules,
}

impl HandEvaluator {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn evaluate(&self, hand: &Hand) -> Result<Evaluation, PokerError> {
        self.evaluate_cards(hand.cards())
    }

    /// Finds the best five-card hand among `cards`.
    ///
    /// # Errors
    ///
    /// - [`PokerError::IncompleteHand`] - fewer than five cards
    /// - [`PokerError::DuplicateCard`] - a card appears twice
    pub fn evaluate_cards(&self, cards: &[Card]) -> Result<Evaluation, PokerError> {
        if cards.len() < HAND_SIZE {
            return Err(PokerError::IncompleteHand {
                have: cards.len(),
                need: HAND_SIZE,
            });
        }
        check_distinct(cards)?;

        debug!(cards = %format_list(cards), "evaluating hand");

        let first = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        let (mut five, mut ranking) = (first, self.rank_distinct(&first));
        for_each_five(cards, |candidate| {
            let r = self.rank_distinct(&candidate);
            if r > ranking {
                five = candidate;
                ranking = r;
            }
        });
        let (made, kickers) = split_made(&five, &ranking, self.rules.ace);

        debug!(
            category = %ranking.category,
            made = %format_list(&made),
            kickers = %format_list(&kickers),
            "hand evaluated"
        );

        Ok(Evaluation {
            ranking,
            best: five,
            made,
            kickers,
        })
    }

    /// Ranks exactly five cards.
    ///
    /// # Errors
    ///
    /// [`PokerError::DuplicateCard`] if a card appears twice.
    pub fn rank_five(&self, cards: &[Card; 5]) -> Result<Ranking, PokerError> {
        check_distinct(cards)?;
        Ok(self.rank_distinct(cards))
    }

    fn rank_distinct(&self, cards: &[Card; 5]) -> Ranking {
        let ace = self.rules.ace;
        let mut values = cards.map(|c| c.rank().value(ace));
        values.sort_unstable_by(|a, b| b.cmp(a));

        // (count, value), most frequent first then highest
        let mut groups: Vec<(u8, u8)> = Vec::with_capacity(HAND_SIZE);
        for &v in &values {
            match groups.iter_mut().find(|g| g.1 == v) {
                Some(g) => g.0 += 1,
                None => groups.push((1, v)),
            }
        }
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let mut tiebreak = [0u8; 5];
        for (slot, &(_, v)) in tiebreak.iter_mut().zip(&groups) {
            *slot = v;
        }

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        if let Some(high) = straight_high(&values, self.rules.wheel_straight()) {
            let category = if flush {
                Category::StraightFlush
            } else {
                Category::Straight
            };
            return Ranking {
                category,
                tiebreak: [high, 0, 0, 0, 0],
            };
        }

        let category = match (groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
            (c, _) if c >= 4 => Category::FourOfAKind,
            (3, 2) => Category::FullHouse,
            _ if flush => Category::Flush,
            (3, _) => Category::ThreeOfAKind,
            (2, 2) => Category::TwoPair,
            (2, _) => Category::OnePair,
            _ => Category::HighCard,
        };
        Ranking { category, tiebreak }
    }

    pub fn compare(&self, a: &Hand, b: &Hand) -> Result<Ordering, PokerError> {
        Ok(self.evaluate(a)?.ranking.cmp(&self.evaluate(b)?.ranking))
    }

    /// Indices of the hands sharing the best ranking; more than one index
    /// means a split pot.
    pub fn winners(&self, hands: &[Hand]) -> Result<Vec<usize>, PokerError> {
        let rankings = hands
            .iter()
            .map(|h| self.evaluate(h).map(|e| e.ranking))
            .collect::<Result<Vec<_>, _>>()?;
        let Some(top) = rankings.iter().max() else {
            return Ok(Vec::new());
        };
        Ok(rankings
            .iter()
            .enumerate()
            .filter(|(_, r)| *r == top)
            .map(|(i, _)| i)
            .collect())
    }
}

/// Evaluates `cards` under the standard rules.
pub fn evaluate_hand(cards: &[Card]) -> Result<Evaluation, PokerError> {
    HandEvaluator::default().evaluate_cards(cards)
}

fn check_distinct(cards: &[Card]) -> Result<(), PokerError> {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(PokerError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// High card value of a straight, `values` sorted high to low.
fn straight_high(values: &[u8; 5], wheel: bool) -> Option<u8> {
    if values.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }
    if values[0] - values[4] == 4 {
        return Some(values[0]);
    }
    // Ace-low straight: A-2-3-4-5 with the ace valued 14
    if wheel && *values == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Calls `f` with every five-card combination of `cards`, in lexicographic
/// index order.
fn for_each_five<F: FnMut([Card; 5])>(cards: &[Card], mut f: F) {
    let n = cards.len();
    if n < HAND_SIZE {
        return;
    }
    let mut idx = [0, 1, 2, 3, 4];
    loop {
        f(idx.map(|i| cards[i]));

        // rightmost index that can still move
        let mut k = HAND_SIZE;
        loop {
            if k == 0 {
                return;
            }
            k -= 1;
            if idx[k] < n - HAND_SIZE + k {
                break;
            }
        }
        idx[k] += 1;
        for j in k + 1..HAND_SIZE {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

fn split_made(five: &[Card; 5], ranking: &Ranking, ace: AceRule) -> (Vec<Card>, Vec<Card>) {
    let value = |c: &Card| c.rank().value(ace);
    let count = |c: &Card| five.iter().filter(|&o| value(o) == value(c)).count();

    let mut sorted = five.to_vec();
    sorted.sort_by(|a, b| (count(b), value(b)).cmp(&(count(a), value(a))));

    match ranking.category {
        Category::Straight | Category::StraightFlush => {
            if ranking.tiebreak[0] == 5 && sorted[0].rank() == Rank::Ace {
                sorted.rotate_left(1);
            }
            (sorted, Vec::new())
        }
        Category::Flush | Category::FullHouse => (sorted, Vec::new()),
        Category::HighCard => {
            let kickers = sorted.split_off(1);
            (sorted, kickers)
        }
        _ => {
            let made_len = sorted.iter().take_while(|&c| count(c) >= 2).count();
            let kickers = sorted.split_off(made_len);
            (sorted, kickers)
        }
    }
}
