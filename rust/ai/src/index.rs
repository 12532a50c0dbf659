//! Suit and rank lookups over a bot's hand.

use crazyeights_engine::cards::{all_suits, Card, Rank, Suit};
use crazyeights_engine::rules::Target;

/// Two views of the same cards, kept in step with the hand that owns them.
///
/// - `by_suit`: non-Eight cards of each suit, highest rank first
/// - `by_rank`: every card of each rank in arrival order; Eights live only here
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandIndex {
    by_suit: [Vec<Card>; 4],
    by_rank: [Vec<Card>; 13],
}

impl HandIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, card: Card) {
        if !card.is_eight() {
            let pile = &mut self.by_suit[card.suit.index()];
            let at = pile.partition_point(|c| c.rank > card.rank);
            pile.insert(at, card);
        }
        self.by_rank[card.rank.index()].push(card);
    }

    /// Removes `card` from both views; false if it was not indexed.
    pub fn remove(&mut self, card: Card) -> bool {
        let bucket = &mut self.by_rank[card.rank.index()];
        let Some(pos) = bucket.iter().position(|c| *c == card) else {
            return false;
        };
        bucket.remove(pos);
        if !card.is_eight() {
            self.by_suit[card.suit.index()].retain(|c| *c != card);
        }
        true
    }

    pub fn clear(&mut self) {
        self.by_suit.iter_mut().for_each(Vec::clear);
        self.by_rank.iter_mut().for_each(Vec::clear);
    }

    pub fn len(&self) -> usize {
        self.by_rank.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-Eight cards of `suit`, highest first.
    pub fn suit(&self, suit: Suit) -> &[Card] {
        &self.by_suit[suit.index()]
    }

    pub fn rank(&self, rank: Rank) -> &[Card] {
        &self.by_rank[rank.index()]
    }

    pub fn eights(&self) -> &[Card] {
        self.rank(Rank::Eight)
    }

    pub fn highest_of(&self, suit: Suit) -> Option<Card> {
        self.suit(suit).first().copied()
    }

    pub fn first_of_rank(&self, rank: Rank) -> Option<Card> {
        self.rank(rank).first().copied()
    }

    /// A non-Eight card follows `target` by suit or rank.
    pub fn has_natural_play(&self, target: &Target) -> bool {
        !self.suit(target.suit).is_empty()
            || target
                .rank
                .is_some_and(|r| r != Rank::Eight && !self.rank(r).is_empty())
    }

    pub fn can_play(&self, target: &Target) -> bool {
        !self.eights().is_empty() || self.has_natural_play(target)
    }

    /// Suit with the most non-Eight cards, earliest suit on ties. `None` when
    /// only Eights (or nothing) are held.
    pub fn longest_suit(&self) -> Option<Suit> {
        let mut best = None;
        let mut most = 0;
        for suit in all_suits() {
            let n = self.suit(suit).len();
            if n > most {
                most = n;
                best = Some(suit);
            }
        }
        best
    }
}
