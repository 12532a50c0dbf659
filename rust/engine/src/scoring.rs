//! Hand values and the cumulative leaderboard.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Points a card left in hand is worth to the round winner.
pub fn card_points(card: Card) -> u32 {
    match card.rank {
        Rank::Ace => 1,
        Rank::Eight => 50,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        other => u32::from(other.value()),
    }
}

/// Sum of [`card_points`] over `cards`.
///
/// ```
/// use crazyeights_engine::cards::{Card, Rank, Suit};
/// use crazyeights_engine::scoring::hand_value;
///
/// let hand = [
///     Card::new(Suit::Clubs, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Eight),
///     Card::new(Suit::Spades, Rank::King),
/// ];
/// assert_eq!(hand_value(&hand), 61);
/// ```
pub fn hand_value<'c>(cards: impl IntoIterator<Item = &'c Card>) -> u32 {
    cards.into_iter().map(|c| card_points(*c)).sum()
}

/// One line of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    /// Cumulative points over all rounds
    pub score: u32,
}

/// Orders `(name, score)` entries by score, highest first. Entries with equal
/// scores keep their input order.
pub fn leaderboard<'n>(entries: impl IntoIterator<Item = (&'n str, u32)>) -> Vec<Standing> {
    let mut rows: Vec<(&str, u32)> = entries.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .enumerate()
        .map(|(i, (name, score))| Standing {
            rank: i + 1,
            name: name.to_string(),
            score,
        })
        .collect()
}
