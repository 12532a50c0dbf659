//! Heuristic bot that always plays when it can.
//!
//! The bot keeps a [`HandIndex`] beside its hand so each decision is a lookup
//! rather than a scan. Strategy, in order:
//!
//! 1. Play an Eight when it holds one and either a 1-in-[`EAGER_EIGHT_ODDS`]
//!    roll comes up or nothing else follows the target
//! 2. Play its highest card of the target suit
//! 3. Play the first card it received of the target rank
//! 4. Otherwise draw
//!
//! After an Eight it names the suit it holds most of.

use crazyeights_engine::cards::{all_suits, Card, Suit};
use crazyeights_engine::player::{Player, Seat};
use crazyeights_engine::rules::Target;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::index::HandIndex;

/// Chance (one in this many) that the bot spends an Eight it did not need.
pub const EAGER_EIGHT_ODDS: u32 = 7;

/// A computer player named `Bot <n>`.
///
/// # Example
///
/// ```rust
/// use crazyeights_ai::HeuristicBot;
/// use crazyeights_engine::cards::{Card, Rank, Suit};
/// use crazyeights_engine::player::Player;
/// use crazyeights_engine::rules::Target;
///
/// let mut bot = HeuristicBot::new(1, 42);
/// bot.add(Card::new(Suit::Hearts, Rank::Three));
/// bot.add(Card::new(Suit::Hearts, Rank::Queen));
///
/// let target = Target::follow(Card::new(Suit::Hearts, Rank::Ten));
/// assert_eq!(bot.name(), "Bot 1");
/// assert_eq!(bot.choose_play(&target), Some(Card::new(Suit::Hearts, Rank::Queen)));
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicBot {
    seat: Seat,
    index: HandIndex,
    rng: ChaCha20Rng,
    eager_odds: u32,
}

impl HeuristicBot {
    pub fn new(number: usize, seed: u64) -> Self {
        Self {
            seat: Seat::new(format!("Bot {}", number)),
            index: HandIndex::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            eager_odds: EAGER_EIGHT_ODDS,
        }
    }

    /// Sets the one-in-`odds` chance of playing an unneeded Eight; 0 disables it.
    pub fn with_eager_odds(mut self, odds: u32) -> Self {
        self.eager_odds = odds;
        self
    }

    pub fn index(&self) -> &HandIndex {
        &self.index
    }

    fn roll_eager(&mut self) -> bool {
        self.eager_odds > 0 && self.rng.random_range(0..self.eager_odds) == 0
    }

    fn pick(&mut self, target: &Target) -> Option<Card> {
        if let Some(eight) = self.index.eights().first().copied() {
            if self.roll_eager() || !self.index.has_natural_play(target) {
                return Some(eight);
            }
        }
        self.index
            .highest_of(target.suit)
            .or_else(|| target.rank.and_then(|r| self.index.first_of_rank(r)))
    }
}

impl Player for HeuristicBot {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn choose_play(&mut self, target: &Target) -> Option<Card> {
        if !self.index.can_play(target) {
            debug!(bot = self.seat.name(), %target, "nothing to play, drawing");
            return None;
        }
        let card = self.pick(target)?;
        self.index.remove(card);
        self.seat.hand_mut().remove(card);
        debug!(bot = self.seat.name(), %card, %target, "bot plays");
        Some(card)
    }

    fn choose_new_suit(&mut self) -> Suit {
        let suit = match self.index.longest_suit() {
            Some(suit) => suit,
            None => all_suits()[self.rng.random_range(0..4)],
        };
        debug!(bot = self.seat.name(), %suit, "bot names suit");
        suit
    }

    fn can_play(&self, target: &Target) -> bool {
        self.index.can_play(target)
    }

    fn add(&mut self, card: Card) {
        self.seat.hand_mut().add(card);
        self.index.insert(card);
    }

    fn clear(&mut self) -> Vec<Card> {
        self.index.clear();
        self.seat.hand_mut().drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crazyeights_engine::cards::Rank;

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn bot_with(cards: &[Card]) -> HeuristicBot {
        let mut bot = HeuristicBot::new(1, 7).with_eager_odds(0);
        for &card in cards {
            bot.add(card);
        }
        bot
    }

    #[test]
    fn lone_eight_is_played_on_anything() {
        let mut bot = bot_with(&[c(Suit::Spades, Rank::Eight)]);
        let target = Target::follow(c(Suit::Hearts, Rank::Ten));
        assert!(bot.can_play(&target));
        assert_eq!(bot.choose_play(&target), Some(c(Suit::Spades, Rank::Eight)));
        assert!(bot.is_out());
        assert!(bot.index().is_empty());
    }

    #[test]
    fn highest_of_suit_beats_rank_match_and_eight() {
        let mut bot = bot_with(&[
            c(Suit::Clubs, Rank::Ten),
            c(Suit::Hearts, Rank::Two),
            c(Suit::Hearts, Rank::King),
            c(Suit::Diamonds, Rank::Eight),
        ]);
        let target = Target::follow(c(Suit::Hearts, Rank::Ten));
        assert_eq!(bot.choose_play(&target), Some(c(Suit::Hearts, Rank::King)));
        assert_eq!(bot.choose_play(&target), Some(c(Suit::Hearts, Rank::Two)));
        assert_eq!(bot.choose_play(&target), Some(c(Suit::Clubs, Rank::Ten)));
        assert_eq!(bot.choose_play(&target), Some(c(Suit::Diamonds, Rank::Eight)));
        assert_eq!(bot.choose_play(&target), None);
    }

    #[test]
    fn rank_match_follows_arrival_order() {
        let mut bot = bot_with(&[c(Suit::Spades, Rank::Five), c(Suit::Clubs, Rank::Five)]);
        let target = Target::follow(c(Suit::Diamonds, Rank::Five));
        assert_eq!(bot.choose_play(&target), Some(c(Suit::Spades, Rank::Five)));
        assert_eq!(bot.hand().cards(), &[c(Suit::Clubs, Rank::Five)]);
    }

    #[test]
    fn wild_target_ignores_rank_bucket() {
        let mut bot = bot_with(&[c(Suit::Clubs, Rank::Nine)]);
        assert_eq!(bot.choose_play(&Target::wild(Suit::Hearts)), None);
        assert_eq!(bot.hand().len(), 1);
    }

    #[test]
    fn always_eager_bot_leads_with_eight() {
        let mut bot = HeuristicBot::new(2, 0).with_eager_odds(1);
        bot.add(c(Suit::Hearts, Rank::Ace));
        bot.add(c(Suit::Clubs, Rank::Eight));
        let target = Target::follow(c(Suit::Hearts, Rank::Ten));
        assert_eq!(bot.choose_play(&target), Some(c(Suit::Clubs, Rank::Eight)));
    }

    #[test]
    fn names_the_suit_it_holds_most_of() {
        let mut bot = bot_with(&[
            c(Suit::Spades, Rank::Two),
            c(Suit::Spades, Rank::Three),
            c(Suit::Hearts, Rank::Four),
            c(Suit::Hearts, Rank::Eight),
            c(Suit::Clubs, Rank::Eight),
        ]);
        assert_eq!(bot.choose_new_suit(), Suit::Spades);
    }

    #[test]
    fn only_eights_still_yields_a_suit() {
        let mut bot = bot_with(&[c(Suit::Hearts, Rank::Eight)]);
        let suit = bot.choose_new_suit();
        assert!(all_suits().contains(&suit));
    }

    #[test]
    fn same_seed_same_random_suit() {
        let mut a = HeuristicBot::new(1, 99);
        let mut b = HeuristicBot::new(1, 99);
        let picks_a: Vec<Suit> = (0..8).map(|_| a.choose_new_suit()).collect();
        let picks_b: Vec<Suit> = (0..8).map(|_| b.choose_new_suit()).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn clear_empties_hand_and_index() {
        let mut bot = bot_with(&[c(Suit::Clubs, Rank::Two), c(Suit::Clubs, Rank::Eight)]);
        let cards = bot.clear();
        assert_eq!(cards.len(), 2);
        assert!(bot.is_out());
        assert!(bot.index().is_empty());
        assert_eq!(bot.index().longest_suit(), None);
    }
}
