use crate::cards::{Card, Suit};
use crate::rules::Target;
use crate::scoring::hand_value;

/// The cards a player holds, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first occurrence of `card`; returns false if it is not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|c| *c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the card at `index` (0-based).
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Crazy Eights value of the cards still held.
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// True if at least one held card may be played on `target`.
    pub fn has_play_for(&self, target: &Target) -> bool {
        target.any_playable(&self.cards)
    }

    /// Empties the hand, handing every card to the caller.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

/// State every player carries regardless of who makes its decisions.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    hand: Hand,
    /// Running total over all rounds, never reset
    score: u32,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

/// A participant in a game of Crazy Eights.
///
/// Implementors own a [`Seat`] and decide which card to play and which suit
/// to nominate after an Eight. The engine changes hands only through
/// [`add`](Player::add) and [`clear`](Player::clear), so an implementation that
/// keeps derived state about its cards overrides those two methods and never
/// sees its hand change behind its back.
///
/// # Example Implementation
///
/// ```rust
/// use crazyeights_engine::cards::{Card, Suit};
/// use crazyeights_engine::player::{Player, Seat};
/// use crazyeights_engine::rules::Target;
///
/// struct FirstLegal(Seat);
///
/// impl Player for FirstLegal {
///     fn seat(&self) -> &Seat {
///         &self.0
///     }
///     fn seat_mut(&mut self) -> &mut Seat {
///         &mut self.0
///     }
///     fn choose_play(&mut self, target: &Target) -> Option<Card> {
///         let card = *self.hand().cards().iter().find(|c| target.accepts(**c))?;
///         self.0.hand_mut().remove(card);
///         Some(card)
///     }
///     fn choose_new_suit(&mut self) -> Suit {
///         Suit::Clubs
///     }
/// }
/// ```
pub trait Player {
    fn seat(&self) -> &Seat;

    fn seat_mut(&mut self) -> &mut Seat;

    /// Picks a card legal on `target` and removes it from the hand, or returns
    /// `None` to draw instead.
    fn choose_play(&mut self, target: &Target) -> Option<Card>;

    /// Nominates the suit to follow after this player's Eight.
    fn choose_new_suit(&mut self) -> Suit;

    fn name(&self) -> &str {
        self.seat().name()
    }

    fn hand(&self) -> &Hand {
        self.seat().hand()
    }

    fn score(&self) -> u32 {
        self.seat().score()
    }

    fn hand_value(&self) -> u32 {
        self.hand().value()
    }

    /// The player has gone out.
    fn is_out(&self) -> bool {
        self.hand().is_empty()
    }

    fn can_play(&self, target: &Target) -> bool {
        self.hand().has_play_for(target)
    }

    fn add(&mut self, card: Card) {
        self.seat_mut().hand_mut().add(card);
    }

    /// Empties the hand, returning its cards.
    fn clear(&mut self) -> Vec<Card> {
        self.seat_mut().hand_mut().drain()
    }

    fn award_points(&mut self, points: u32) {
        self.seat_mut().award(points);
    }
}
