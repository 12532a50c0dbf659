//! Text rendering for cards, hands, turn events and the leaderboard.
//!
//! Pure functions: they build strings and leave writing to the caller.
//!
//! ## Example
//!
//! ```rust
//! use crazyeights_engine::cards::{Card, Rank, Suit};
//! use crazyeights_engine::rules::Target;
//! use crazyeights_cli::formatters::describe_target;
//!
//! let target = Target::follow(Card::new(Suit::Hearts, Rank::Ten));
//! assert_eq!(describe_target(&target), "The top card is: Ten of Hearts");
//! assert_eq!(describe_target(&Target::wild(Suit::Clubs)), "The suit to play on is: Clubs");
//! ```

use std::io::Write;

use crazyeights_engine::cards::Card;
use crazyeights_engine::engine::TurnEvent;
use crazyeights_engine::player::Hand;
use crazyeights_engine::rules::Target;
use crazyeights_engine::scoring::Standing;

pub const WELCOME: &str = "\
Welcome to Crazy Eights, a program which
simulates the titular card game.
";

pub const RULES: &str = "\
RULES:
-----------------------------------------------------
After the first card is flipped, players must either
follow suit or rank, or draw. Players who are unable
to follow suit must draw a card, and if all cards in
the draw pile are exhausted, then the player will be
forced to pass. Eights are wild, meaning that players
may select a new suit of their choice.

A winner is determined by the first player to \"go out\";
that is, they are the first to play all of their cards.
";

pub const SCORING: &str = "\
SCORING:
-----------------------------------------------------
When a game ends, the winning player receives the sum
of all cards in the other players' hands. Apart from
face cards, which are worth 10 points, all cards are
worth their face value. Remaining eights are worth 50
points.
";

/// Writes the welcome banner, rules and scoring blocks, each followed by a
/// blank line.
pub fn write_rules(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", WELCOME)?;
    writeln!(out, "{}", RULES)?;
    writeln!(out, "{}", SCORING)
}

/// What the player has to match, as shown before a human's turn.
pub fn describe_target(target: &Target) -> String {
    match target.rank {
        Some(rank) => format!("The top card is: {}", Card::new(target.suit, rank)),
        None => format!("The suit to play on is: {}", target.suit),
    }
}

/// The hand as a numbered list starting at 1.
pub fn format_hand(hand: &Hand) -> Vec<String> {
    hand.cards()
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}. {}", i + 1, card))
        .collect()
}

/// One log line for a turn event. `name_of` maps a seat to a player name.
///
/// `WentOut` has no line of its own; the round summary announces the winner.
pub fn format_event<'n>(event: &TurnEvent, name_of: impl Fn(usize) -> &'n str) -> Option<String> {
    match *event {
        TurnEvent::SuitChosen { suit, .. } => Some(format!("The new suit is: {}", suit)),
        TurnEvent::Drew { seat, .. } => Some(format!("{} drew a card.", name_of(seat))),
        TurnEvent::Played { seat, card } => Some(format!("{} played: {}", name_of(seat), card)),
        TurnEvent::Passed { seat } => Some(format!("{} passed.", name_of(seat))),
        TurnEvent::WentOut { .. } => None,
        TurnEvent::Blocked => Some("Nobody can play or draw; the round is blocked.".to_string()),
    }
}

/// `"<rank>. <name> (<score> points)"`
pub fn format_standing(standing: &Standing) -> String {
    format!(
        "{}. {} ({} points)",
        standing.rank, standing.name, standing.score
    )
}

pub fn write_leaderboard(
    out: &mut dyn Write,
    title: &str,
    standings: &[Standing],
) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    for standing in standings {
        writeln!(out, "{}", format_standing(standing))?;
    }
    Ok(())
}
