use pokercards_engine::cards::{Card, Rank as R, Suit as S};
use pokercards_engine::errors::{PokerError, ValidationError};
use pokercards_engine::hand::Hand;

fn c(s: S, r: R) -> Card {
    Card::new(r, s)
}

#[test]
fn add_rejects_duplicates() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    hand.add(c(S::Spades, R::Ace)).unwrap();
    hand.add(c(S::Hearts, R::Ace)).unwrap();
    assert_eq!(
        hand.add(c(S::Spades, R::Ace)),
        Err(PokerError::DuplicateCard(c(S::Spades, R::Ace)))
    );
    assert_eq!(hand.len(), 2);
    assert_eq!(
        hand.cards(),
        &[c(S::Spades, R::Ace), c(S::Hearts, R::Ace)]
    );
}

#[test]
fn from_cards_checks_every_card() {
    let cards = vec![c(S::Clubs, R::Two), c(S::Clubs, R::Three), c(S::Clubs, R::Two)];
    assert!(matches!(
        Hand::try_from(cards),
        Err(PokerError::DuplicateCard(_))
    ));

    let hand = Hand::from_cards([c(S::Clubs, R::Two), c(S::Diamonds, R::Two)]).unwrap();
    assert!(hand.contains(&c(S::Diamonds, R::Two)));
    assert!(!hand.contains(&c(S::Hearts, R::Two)));
}

#[test]
fn parses_and_displays_card_lists() {
    let hand: Hand = "AS KD 7h".parse().unwrap();
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.to_string(), "[AS,KD,7H]");

    assert_eq!(
        "AS QX".parse::<Hand>(),
        Err(PokerError::Validation(ValidationError::InvalidSuit('X')))
    );
    assert!(matches!(
        "AS AS".parse::<Hand>(),
        Err(PokerError::DuplicateCard(_))
    ));
}

#[test]
fn clear_empties_the_hand() {
    let mut hand: Hand = "2C 3C 4C".parse().unwrap();
    hand.clear();
    assert!(hand.is_empty());
    hand.add(c(S::Clubs, R::Two)).unwrap();
    assert_eq!(hand.len(), 1);
}
