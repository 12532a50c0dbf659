use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The draw pile and discard pile of a 52-card deck.
///
/// Draws come from the front of the draw pile; the last card discarded is the
/// top of the discard pile. Cards never leave the game: they move between the
/// two piles here and the players' hands.
#[derive(Debug)]
pub struct Deck {
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// A freshly shuffled deck seeded from OS entropy.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// A freshly shuffled deck; the same seed always yields the same order.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self::stacked(full_deck(), seed);
        deck.shuffle();
        deck
    }

    /// A deck whose draw pile is exactly `cards`, front first, unshuffled.
    /// Later reshuffles and resets use `seed`.
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            draw_pile: cards.into(),
            discard_pile: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn shuffle(&mut self) {
        self.draw_pile.make_contiguous().shuffle(&mut self.rng);
    }

    /// True when the draw pile has no cards left.
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.draw_pile.pop_front().ok_or(GameError::EmptyDrawPile)
    }

    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    pub fn top_discard(&self) -> Result<Card, GameError> {
        self.discard_pile
            .last()
            .copied()
            .ok_or(GameError::EmptyDiscardPile)
    }

    /// Returns every discard except the top one to the draw pile and shuffles.
    pub fn reshuffle(&mut self) -> Result<(), GameError> {
        let top = self.discard_pile.pop().ok_or(GameError::EmptyDiscardPile)?;
        self.reset();
        self.discard_pile.push(top);
        debug!(top = %top, draw = self.draw_pile.len(), "reshuffled discard pile");
        Ok(())
    }

    /// Returns the whole discard pile to the draw pile and shuffles.
    pub fn reset(&mut self) {
        self.draw_pile.extend(self.discard_pile.drain(..));
        self.shuffle();
    }

    /// Moves every card of `hand` to the back of the draw pile, leaving it empty.
    pub fn absorb_hand(&mut self, hand: &mut Vec<Card>) {
        self.draw_pile.extend(hand.drain(..));
    }

    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Draw pile, front (next draw) first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw_pile.iter()
    }

    /// Discard pile, bottom first; the last item is the top card.
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
