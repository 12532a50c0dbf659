//! # crazyeights-ai: Computer Opponents for Crazy Eights
//!
//! Bots implement the engine's [`Player`] trait, so the engine drives them
//! exactly like a human seat.
//!
//! ## Core Components
//!
//! - [`HeuristicBot`] - Plays whenever it can, preferring high cards of the target suit
//! - [`index`] - Per-suit and per-rank lookups the bot keeps beside its hand
//! - [`create_bot`] - Factory returning a boxed [`Player`]
//!
//! ## Quick Start
//!
//! ```rust
//! use crazyeights_ai::create_bot;
//! use crazyeights_engine::engine::Engine;
//!
//! let players = (1..=3).map(|n| create_bot(n, Some(n as u64))).collect();
//! let mut engine = Engine::new(Some(42), players).expect("valid table");
//! let result = engine.play_round().expect("round completes");
//! assert_eq!(engine.deck().draw_len(), 52);
//! println!("round took {} turns", result.turns);
//! ```

use crazyeights_engine::player::Player;

pub mod heuristic;
pub mod index;

pub use heuristic::HeuristicBot;

/// Creates bot number `number` (named `Bot <number>`).
///
/// Without a seed the bot's random choices come from OS entropy.
///
/// # Example
///
/// ```rust
/// use crazyeights_ai::create_bot;
/// use crazyeights_engine::player::Player;
///
/// let bot = create_bot(3, Some(7));
/// assert_eq!(bot.name(), "Bot 3");
/// assert!(bot.is_out());
/// ```
pub fn create_bot(number: usize, seed: Option<u64>) -> Box<dyn Player> {
    Box::new(HeuristicBot::new(number, seed.unwrap_or_else(rand::random)))
}
