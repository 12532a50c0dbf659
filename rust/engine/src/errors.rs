use thiserror::Error;

use crate::cards::Card;
use crate::engine::Phase;
use crate::rules::Target;

/// Engine-level failures. Every variant is a broken precondition in the
/// caller (or a player implementation), never a user-input problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Draw pile is empty")]
    EmptyDrawPile,
    #[error("Discard pile is empty")]
    EmptyDiscardPile,
    #[error("Invalid player count: {count} (must be between {min} and {max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("{player} played {card}, which does not match {target}")]
    IllegalPlay {
        player: String,
        card: Card,
        target: Target,
    },
    #[error("Hands must be dealt before the round starts")]
    HandsNotDealt,
    #[error("Hands have already been dealt for this round")]
    AlreadyDealt,
    #[error("Operation requires phase {expected:?}, engine is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
}
