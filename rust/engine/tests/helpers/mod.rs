//! Minimal players and stacked decks shared by the engine integration tests.

#![allow(dead_code)]

use crazyeights_engine::cards::{full_deck, Card, Rank, Suit};
use crazyeights_engine::deck::Deck;
use crazyeights_engine::player::{Player, Seat};
use crazyeights_engine::rules::Target;

pub fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A deck whose draw pile starts with `front`, followed by every other card
/// in sorted order, so all 52 cards are present exactly once.
pub fn stacked_deck(front: &[Card]) -> Deck {
    let mut cards = front.to_vec();
    cards.extend(full_deck().into_iter().filter(|c| !front.contains(c)));
    Deck::stacked(cards, 99)
}

/// Interleaves per-seat hands into deal order (one card per seat per pass).
pub fn deal_order(hands: &[Vec<Card>]) -> Vec<Card> {
    let size = hands[0].len();
    let mut out = Vec::new();
    for i in 0..size {
        for hand in hands {
            out.push(hand[i]);
        }
    }
    out
}

/// Plays the first legal card in hand order and always names `suit`.
pub struct FirstLegal {
    seat: Seat,
    suit: Suit,
}

impl FirstLegal {
    pub fn boxed(name: &str, suit: Suit) -> Box<dyn Player> {
        Box::new(Self {
            seat: Seat::new(name),
            suit,
        })
    }
}

impl Player for FirstLegal {
    fn seat(&self) -> &Seat {
        &self.seat
    }
    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }
    fn choose_play(&mut self, target: &Target) -> Option<Card> {
        let card = *self.hand().cards().iter().find(|c| target.accepts(**c))?;
        self.seat.hand_mut().remove(card);
        Some(card)
    }
    fn choose_new_suit(&mut self) -> Suit {
        self.suit
    }
}

/// Never plays; always asks to draw.
pub struct Drawer {
    seat: Seat,
}

impl Drawer {
    pub fn boxed(name: &str) -> Box<dyn Player> {
        Box::new(Self {
            seat: Seat::new(name),
        })
    }
}

impl Player for Drawer {
    fn seat(&self) -> &Seat {
        &self.seat
    }
    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }
    fn choose_play(&mut self, _target: &Target) -> Option<Card> {
        None
    }
    fn choose_new_suit(&mut self) -> Suit {
        Suit::Clubs
    }
}

/// Plays its first card whether or not it matches.
pub struct Cheater {
    seat: Seat,
}

impl Cheater {
    pub fn boxed(name: &str) -> Box<dyn Player> {
        Box::new(Self {
            seat: Seat::new(name),
        })
    }
}

impl Player for Cheater {
    fn seat(&self) -> &Seat {
        &self.seat
    }
    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }
    fn choose_play(&mut self, _target: &Target) -> Option<Card> {
        self.seat.hand_mut().remove_at(0)
    }
    fn choose_new_suit(&mut self) -> Suit {
        Suit::Clubs
    }
}

/// Asserts the 52-card conservation invariant.
pub fn assert_conserved(cards: &[Card]) {
    assert_conserved_within(cards, &full_deck());
}

/// Asserts `cards` holds every card of `universe` exactly once.
pub fn assert_conserved_within(cards: &[Card], universe: &[Card]) {
    assert_eq!(cards.len(), universe.len(), "card count drifted");
    let mut sorted = cards.to_vec();
    sorted.sort();
    let mut expected = universe.to_vec();
    expected.sort();
    assert_eq!(sorted, expected, "duplicate or foreign cards in play");
}
