//! Parsing of the answers typed at the interactive prompts.
//!
//! Each parser returns a small enum (or `Option`) instead of an error so the
//! caller can print the matching re-prompt and ask again.

use crazyeights_engine::cards::Suit;
use crazyeights_engine::rules::{MAX_PLAYERS, MIN_PLAYERS};

/// Outcome of the "which card?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayChoice {
    /// `D`: draw instead of playing
    Draw,
    /// `Q`: leave the game
    Quit,
    /// A 0-based index into the hand
    Card(usize),
    NotANumber,
    OutOfRange,
}

/// Parses a play prompt answer for a hand of `hand_len` cards.
///
/// Cards are numbered from 1 on screen; `D` and `Q` are case-insensitive.
///
/// # Example
///
/// ```rust
/// # use crazyeights_cli::validation::{parse_play_choice, PlayChoice};
/// assert_eq!(parse_play_choice("2", 3), PlayChoice::Card(1));
/// assert_eq!(parse_play_choice("d", 3), PlayChoice::Draw);
/// assert_eq!(parse_play_choice("4", 3), PlayChoice::OutOfRange);
/// assert_eq!(parse_play_choice("x", 3), PlayChoice::NotANumber);
/// ```
pub fn parse_play_choice(input: &str, hand_len: usize) -> PlayChoice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("d") {
        return PlayChoice::Draw;
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return PlayChoice::Quit;
    }
    match input.parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= hand_len as u64 => PlayChoice::Card(n as usize - 1),
        Ok(_) => PlayChoice::OutOfRange,
        Err(_) => PlayChoice::NotANumber,
    }
}

/// Accepts a suit name in any letter case.
pub fn parse_suit_choice(input: &str) -> Option<Suit> {
    input.parse().ok()
}

/// `Y`/`N` in either case; anything else is `None`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim() {
        s if s.eq_ignore_ascii_case("y") => Some(true),
        s if s.eq_ignore_ascii_case("n") => Some(false),
        _ => None,
    }
}

/// Outcome of the "how many players?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCount {
    Valid(usize),
    NotANumber,
    OutOfRange,
}

pub fn parse_player_count(input: &str) -> PlayerCount {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= MIN_PLAYERS as i64 && n <= MAX_PLAYERS as i64 => {
            PlayerCount::Valid(n as usize)
        }
        Ok(_) => PlayerCount::OutOfRange,
        Err(_) => PlayerCount::NotANumber,
    }
}

/// Player names need at least one visible character.
pub fn validate_name(input: &str) -> Result<String, String> {
    let name = input.trim();
    if name.is_empty() {
        Err("Names must be at least one character long.".to_string())
    } else {
        Ok(name.to_string())
    }
}

/// Checks a `--players` value against the table limits.
pub fn validate_player_count(players: usize) -> Result<usize, String> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        Ok(players)
    } else {
        Err(format!(
            "players must be between {} and {} (got {})",
            MIN_PLAYERS, MAX_PLAYERS, players
        ))
    }
}
