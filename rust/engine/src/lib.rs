//! # crazyeights-engine: Crazy Eights Rules Engine
//!
//! Turn-sequential engine for Crazy Eights with two to seven players.
//! Owns the deck, enforces suit/rank following with wild Eights, handles
//! forced draws, reshuffles and passes, and keeps the running scores.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Draw and discard piles with seeded ChaCha20 shuffling
//! - [`engine`] - Round orchestration: deal, turns, scoring
//! - [`game`] - Seating order and dealer rotation
//! - [`player`] - Hands, seats and the [`player::Player`] decision trait
//! - [`rules`] - Play targets and table limits
//! - [`scoring`] - Hand values and the leaderboard
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use crazyeights_engine::cards::{Card, Rank, Suit};
//! use crazyeights_engine::rules::Target;
//! use crazyeights_engine::scoring::hand_value;
//!
//! let top = Card::new(Suit::Hearts, Rank::Ten);
//! let target = Target::follow(top);
//! assert!(target.accepts(Card::new(Suit::Spades, Rank::Eight)));
//!
//! let hand = [Card::new(Suit::Clubs, Rank::Ace), Card::new(Suit::Clubs, Rank::King)];
//! assert_eq!(hand_value(&hand), 11);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shuffles are reproducible with a seed:
//!
//! ```rust
//! use crazyeights_engine::deck::Deck;
//!
//! let a: Vec<_> = Deck::new_with_seed(42).draw_pile().copied().collect();
//! let b: Vec<_> = Deck::new_with_seed(42).draw_pile().copied().collect();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod player;
pub mod rules;
pub mod scoring;
