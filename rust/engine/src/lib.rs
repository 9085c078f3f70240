//! # pokercards-engine: Cards, Decks and Poker Hands
//!
//! A small library to model french-design playing cards, deal them from a
//! deck and rank "high" poker hands of five or more cards. Randomness is
//! always supplied by the caller so shuffles are reproducible.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and display
//! - [`deck`] - 52-card deck with injected shuffling, dealing and burning
//! - [`hand`] - Distinct cards held by a player
//! - [`evaluator`] - Poker hand classification and comparison
//! - [`rules`] - Variant rules (ace handling) and their TOML form
//! - [`errors`] - Error types for card, deck and hand operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokercards_engine::deck::Deck;
//! use pokercards_engine::evaluator::HandEvaluator;
//! use pokercards_engine::hand::Hand;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng);
//!
//! let board = deck.deal(5).unwrap();
//! let mut hands = vec![Hand::new(), Hand::new()];
//! for hand in &mut hands {
//!     deck.deal_into(hand, 2).unwrap();
//!     for &card in &board {
//!         hand.add(card).unwrap();
//!     }
//! }
//!
//! let evaluator = HandEvaluator::default();
//! let winners = evaluator.winners(&hands).unwrap();
//! assert!(!winners.is_empty());
//! println!("{}", evaluator.evaluate(&hands[winners[0]]).unwrap().ranking);
//! ```
//!
//! ## Comparing Hands
//!
//! Rankings order by category, then by the ranks that break ties:
//!
//! ```rust
//! use pokercards_engine::evaluator::{evaluate_hand, Category};
//! use pokercards_engine::cards::Card;
//!
//! let wheel = evaluate_hand(&Card::parse_list("AH 2D 3C 4S 5H").unwrap()).unwrap();
//! let six_high = evaluate_hand(&Card::parse_list("2D 3C 4S 5H 6H").unwrap()).unwrap();
//! assert_eq!(wheel.category(), Category::Straight);
//! assert!(wheel.ranking < six_high.ranking);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod evaluator;
pub mod hand;
pub mod rules;
