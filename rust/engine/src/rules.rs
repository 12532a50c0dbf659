use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank, Suit};

/// Cards dealt to each player at the start of a round.
pub const HAND_SIZE: usize = 5;
/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 7;

/// The suit and (optional) rank a play has to match.
///
/// Following a regular card both are set. Following an Eight only the suit
/// nominated by whoever played it counts, so `rank` is `None`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub suit: Suit,
    pub rank: Option<Rank>,
}

impl Target {
    /// Follow suit or rank of `card`.
    pub fn follow(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: Some(card.rank),
        }
    }

    /// Follow a nominated suit, any rank.
    pub fn wild(suit: Suit) -> Self {
        Self { suit, rank: None }
    }

    /// Returns true if `card` may be played on this target.
    ///
    /// # Examples
    ///
    /// ```
    /// use crazyeights_engine::cards::{Card, Rank, Suit};
    /// use crazyeights_engine::rules::Target;
    ///
    /// let target = Target::follow(Card::new(Suit::Hearts, Rank::Ten));
    /// assert!(target.accepts(Card::new(Suit::Hearts, Rank::Two)));
    /// assert!(target.accepts(Card::new(Suit::Clubs, Rank::Ten)));
    /// assert!(target.accepts(Card::new(Suit::Spades, Rank::Eight)));
    /// assert!(!target.accepts(Card::new(Suit::Clubs, Rank::Nine)));
    /// ```
    pub fn accepts(&self, card: Card) -> bool {
        card.is_eight() || card.suit == self.suit || self.rank == Some(card.rank)
    }

    /// True if any card in `cards` may be played on this target.
    pub fn any_playable<'c>(&self, cards: impl IntoIterator<Item = &'c Card>) -> bool {
        cards.into_iter().any(|c| self.accepts(*c))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Some(rank) => write!(f, "{} of {}", rank, self.suit),
            None => write!(f, "any {}", self.suit),
        }
    }
}
