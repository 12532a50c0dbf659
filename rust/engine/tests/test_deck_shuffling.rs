use std::collections::HashSet;

use crazyeights_engine::cards::{Card, Rank, Suit};
use crazyeights_engine::deck::Deck;
use crazyeights_engine::errors::GameError;

fn draw_pile(deck: &Deck) -> Vec<Card> {
    deck.draw_pile().copied().collect()
}

#[test]
fn new_deck_has_52_unique_cards_and_no_discards() {
    let deck = Deck::new_with_seed(42);
    let set: HashSet<Card> = deck.draw_pile().copied().collect();
    assert_eq!(set.len(), 52);
    assert_eq!(deck.draw_len(), 52);
    assert_eq!(deck.discard_len(), 0);
    assert_eq!(deck.top_discard(), Err(GameError::EmptyDiscardPile));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let d1 = Deck::new_with_seed(12345);
    let d2 = Deck::new_with_seed(12345);
    assert_eq!(draw_pile(&d1), draw_pile(&d2), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let d1 = Deck::new_with_seed(1);
    let d2 = Deck::new_with_seed(2);
    assert_ne!(
        draw_pile(&d1),
        draw_pile(&d2),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn drawing_everything_then_one_more_fails() {
    let mut deck = Deck::new_with_seed(5);
    for _ in 0..52 {
        deck.draw().expect("should have 52 cards");
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(GameError::EmptyDrawPile));
}

#[test]
fn reshuffle_preserves_top_and_returns_the_rest() {
    let mut deck = Deck::new_with_seed(9);
    for _ in 0..20 {
        let c = deck.draw().unwrap();
        deck.discard(c);
    }
    let top = deck.top_discard().unwrap();
    deck.reshuffle().unwrap();

    assert_eq!(deck.top_discard(), Ok(top));
    assert_eq!(deck.discard_len(), 1);
    assert_eq!(deck.draw_len(), 51);
    let mut all = draw_pile(&deck);
    all.extend_from_slice(deck.discard_pile());
    let set: HashSet<Card> = all.into_iter().collect();
    assert_eq!(set.len(), 52);
}

#[test]
fn reshuffle_with_only_top_leaves_draw_pile_empty() {
    let top = Card::new(Suit::Hearts, Rank::Four);
    let mut deck = Deck::stacked(vec![top], 3);
    let c = deck.draw().unwrap();
    deck.discard(c);
    deck.reshuffle().unwrap();
    assert!(deck.is_empty());
    assert_eq!(deck.top_discard(), Ok(top));
}

#[test]
fn reset_drains_discard_into_draw_pile() {
    let mut deck = Deck::new_with_seed(77);
    let mut discarded = Vec::new();
    for _ in 0..10 {
        let c = deck.draw().unwrap();
        discarded.push(c);
        deck.discard(c);
    }
    deck.reset();
    assert_eq!(deck.discard_len(), 0);
    assert_eq!(deck.draw_len(), 52);
    let pile: HashSet<Card> = deck.draw_pile().copied().collect();
    assert!(discarded.iter().all(|c| pile.contains(c)));
}

#[test]
fn absorbed_hands_come_back_through_reset() {
    let mut deck = Deck::new_with_seed(8);
    let mut hand: Vec<Card> = (0..5).map(|_| deck.draw().unwrap()).collect();
    let c = deck.draw().unwrap();
    deck.discard(c);
    assert_eq!(deck.draw_len(), 46);

    deck.absorb_hand(&mut hand);
    assert!(hand.is_empty());
    assert_eq!(deck.draw_len(), 51);
    deck.reset();
    assert_eq!(deck.draw_len(), 52);
}
