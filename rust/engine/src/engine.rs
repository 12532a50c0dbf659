use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{Card, Suit};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::TurnOrder;
use crate::player::Player;
use crate::rules::{Target, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::scoring::{leaderboard, Standing};

/// Where the engine is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Between rounds: hands may be dealt and the next round started
    Dealing,
    /// A round is running; call [`Engine::take_turn`]
    AwaitingPlay,
    /// Someone went out (or nobody can move); call [`Engine::end_round`]
    RoundOver,
}

/// Something that happened during a single turn, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The player who put down the last Eight nominated a suit
    SuitChosen { seat: usize, suit: Suit },
    Drew { seat: usize, card: Card },
    Played { seat: usize, card: Card },
    /// Nothing left to draw, so the turn ends without a play
    Passed { seat: usize },
    WentOut { seat: usize },
    /// Every player was forced to pass in succession, so the round cannot progress
    Blocked,
}

/// Outcome of [`Engine::take_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// 1-based turn number within the round
    pub turn: u32,
    /// Seat of the player who acted
    pub seat: usize,
    /// What the player had to match
    pub target: Target,
    pub events: Vec<TurnEvent>,
}

impl TurnReport {
    pub fn round_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TurnEvent::WentOut { .. } | TurnEvent::Blocked))
    }
}

/// Outcome of [`Engine::start_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStart {
    pub dealer: usize,
    /// Card turned up to begin the discard pile
    pub flipped: Card,
}

/// Outcome of [`Engine::end_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// `None` when the round was blocked
    pub winner: Option<usize>,
    /// Points awarded to the winner
    pub points: u32,
    pub turns: u32,
}

#[derive(Debug, Clone, Copy)]
struct RoundState {
    /// Seat that acted last (the dealer before the first turn)
    active: usize,
    /// An Eight was just put down and its suit has not been named yet
    eight_pending: bool,
    /// Suit in force while an Eight is on top of the discard pile
    wild_suit: Option<Suit>,
    turns: u32,
    passes_in_row: usize,
    winner: Option<usize>,
}

enum Resolution {
    Played(Card),
    Drew,
    /// Nothing to draw and nothing playable
    Passed,
    /// Nothing to draw, but the player held a legal card and kept it
    Declined,
}

/// Runs rounds of Crazy Eights between two to seven players.
///
/// The engine owns the deck and the players and advances one turn per call to
/// [`take_turn`](Engine::take_turn), so a front end can render between turns.
///
/// # Examples
///
/// ```
/// use crazyeights_engine::cards::{Card, Suit};
/// use crazyeights_engine::engine::{Engine, Phase};
/// use crazyeights_engine::player::{Player, Seat};
/// use crazyeights_engine::rules::Target;
///
/// struct FirstLegal(Seat);
///
/// impl Player for FirstLegal {
///     fn seat(&self) -> &Seat { &self.0 }
///     fn seat_mut(&mut self) -> &mut Seat { &mut self.0 }
///     fn choose_play(&mut self, target: &Target) -> Option<Card> {
///         let card = *self.hand().cards().iter().find(|c| target.accepts(**c))?;
///         self.0.hand_mut().remove(card);
///         Some(card)
///     }
///     fn choose_new_suit(&mut self) -> Suit { Suit::Hearts }
/// }
///
/// let players: Vec<Box<dyn Player>> = vec![
///     Box::new(FirstLegal(Seat::new("North"))),
///     Box::new(FirstLegal(Seat::new("South"))),
/// ];
/// let mut engine = Engine::new(Some(7), players).unwrap();
/// engine.deal().unwrap();
/// engine.start_round().unwrap();
/// while engine.phase() == Phase::AwaitingPlay {
///     engine.take_turn().unwrap();
/// }
/// let result = engine.end_round().unwrap();
/// assert!(result.turns > 0);
/// ```
pub struct Engine<'a> {
    deck: Deck,
    players: Vec<Box<dyn Player + 'a>>,
    order: TurnOrder,
    phase: Phase,
    round: Option<RoundState>,
}

impl<'a> Engine<'a> {
    /// Creates an engine with a freshly shuffled deck.
    pub fn new(seed: Option<u64>, players: Vec<Box<dyn Player + 'a>>) -> Result<Self, GameError> {
        let deck = seed.map(Deck::new_with_seed).unwrap_or_default();
        Self::with_deck(deck, players)
    }

    /// Creates an engine around an existing deck. The first player deals first.
    pub fn with_deck(deck: Deck, players: Vec<Box<dyn Player + 'a>>) -> Result<Self, GameError> {
        let count = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidPlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        Ok(Self {
            deck,
            players,
            order: TurnOrder::new(count),
            phase: Phase::Dealing,
            round: None,
        })
    }

    pub fn players(&self) -> &[Box<dyn Player + 'a>] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&(dyn Player + 'a)> {
        self.players.get(seat).map(|p| p.as_ref())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dealer(&self) -> usize {
        self.order.dealer()
    }

    /// Seat that acted most recently in the current round.
    pub fn active(&self) -> Option<usize> {
        self.round.map(|r| r.active)
    }

    pub fn turns(&self) -> u32 {
        self.round.map_or(0, |r| r.turns)
    }

    pub fn winner(&self) -> Option<usize> {
        self.round.and_then(|r| r.winner)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Gives every player [`HAND_SIZE`] cards, one at a time, starting with
    /// the dealer.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Dealing)?;
        if self.players.iter().any(|p| !p.hand().is_empty()) {
            return Err(GameError::AlreadyDealt);
        }
        let order = self.order;
        for _ in 0..HAND_SIZE {
            for seat in order.from_dealer() {
                let card = self.deck.draw()?;
                self.players[seat].add(card);
            }
        }
        debug!(
            players = self.players.len(),
            remaining = self.deck.draw_len(),
            "dealt hands"
        );
        Ok(())
    }

    /// Turns up the first discard. The player after the dealer moves first;
    /// if the flipped card is an Eight the dealer names its suit.
    pub fn start_round(&mut self) -> Result<RoundStart, GameError> {
        self.expect_phase(Phase::Dealing)?;
        if self.players.iter().any(|p| p.hand().is_empty()) {
            return Err(GameError::HandsNotDealt);
        }
        let flipped = self.deck.draw()?;
        self.deck.discard(flipped);
        let dealer = self.order.dealer();
        self.round = Some(RoundState {
            active: dealer,
            eight_pending: flipped.is_eight(),
            wild_suit: None,
            turns: 0,
            passes_in_row: 0,
            winner: None,
        });
        self.phase = Phase::AwaitingPlay;
        info!(
            dealer = self.players[dealer].name(),
            flipped = %flipped,
            "round started"
        );
        Ok(RoundStart { dealer, flipped })
    }

    /// Plays one turn for the next player in rotation.
    pub fn take_turn(&mut self) -> Result<TurnReport, GameError> {
        self.expect_phase(Phase::AwaitingPlay)?;
        let mut round = self.round.ok_or(GameError::WrongPhase {
            expected: Phase::AwaitingPlay,
            actual: self.phase,
        })?;
        let previous = round.active;
        let seat = self.order.next(previous);
        round.active = seat;
        round.turns += 1;
        let mut events = Vec::new();

        if round.eight_pending {
            let suit = self.players[previous].choose_new_suit();
            debug!(player = self.players[previous].name(), %suit, "suit chosen");
            round.wild_suit = Some(suit);
            round.eight_pending = false;
            events.push(TurnEvent::SuitChosen {
                seat: previous,
                suit,
            });
        }

        let top = self.deck.top_discard()?;
        let target = match round.wild_suit {
            Some(suit) if top.is_eight() => Target::wild(suit),
            _ => Target::follow(top),
        };

        match self.resolve_play(seat, &target, &mut events)? {
            Resolution::Played(card) => {
                round.passes_in_row = 0;
                round.eight_pending = card.is_eight();
            }
            Resolution::Drew | Resolution::Declined => round.passes_in_row = 0,
            Resolution::Passed => round.passes_in_row += 1,
        }

        if self.players[seat].is_out() {
            round.winner = Some(seat);
            events.push(TurnEvent::WentOut { seat });
            self.phase = Phase::RoundOver;
            info!(
                winner = self.players[seat].name(),
                turns = round.turns,
                "round over"
            );
        } else if round.passes_in_row >= self.players.len() {
            events.push(TurnEvent::Blocked);
            self.phase = Phase::RoundOver;
            info!(turns = round.turns, "round blocked, no player can move");
        }

        self.round = Some(round);
        Ok(TurnReport {
            turn: round.turns,
            seat,
            target,
            events,
        })
    }

    /// Asks `seat` for a card until it plays, draws a card after having had a
    /// legal play, or cannot draw at all.
    fn resolve_play(
        &mut self,
        seat: usize,
        target: &Target,
        events: &mut Vec<TurnEvent>,
    ) -> Result<Resolution, GameError> {
        let mut drew = false;
        loop {
            if self.deck.is_empty() {
                self.deck.reshuffle()?;
            }
            let player = &mut self.players[seat];
            if let Some(card) = player.choose_play(target) {
                if !target.accepts(card) {
                    player.add(card);
                    return Err(GameError::IllegalPlay {
                        player: player.name().to_string(),
                        card,
                        target: *target,
                    });
                }
                self.deck.discard(card);
                events.push(TurnEvent::Played { seat, card });
                return Ok(Resolution::Played(card));
            }
            if self.deck.is_empty() {
                let forced = !player.can_play(target);
                if forced {
                    debug!(player = player.name(), "forced to pass");
                } else {
                    debug!(player = player.name(), "passed holding a legal card");
                }
                events.push(TurnEvent::Passed { seat });
                return Ok(if drew {
                    Resolution::Drew
                } else if forced {
                    Resolution::Passed
                } else {
                    Resolution::Declined
                });
            }
            let could_play = player.can_play(target);
            let card = self.deck.draw()?;
            player.add(card);
            drew = true;
            events.push(TurnEvent::Drew { seat, card });
            if could_play {
                return Ok(Resolution::Drew);
            }
        }
    }

    /// Scores the finished round, gathers every card back into the deck and
    /// passes the deal on.
    pub fn end_round(&mut self) -> Result<RoundResult, GameError> {
        self.expect_phase(Phase::RoundOver)?;
        let round = self.round.take().ok_or(GameError::WrongPhase {
            expected: Phase::RoundOver,
            actual: self.phase,
        })?;
        let total: u32 = self.players.iter().map(|p| p.hand_value()).sum();
        let points = match round.winner {
            Some(winner) => {
                self.players[winner].award_points(total);
                total
            }
            None => 0,
        };
        for player in &mut self.players {
            let mut cards = player.clear();
            self.deck.absorb_hand(&mut cards);
        }
        self.deck.reset();
        self.order.rotate_dealer();
        self.phase = Phase::Dealing;
        debug!(points, next_dealer = self.order.dealer(), "round scored");
        Ok(RoundResult {
            winner: round.winner,
            points,
            turns: round.turns,
        })
    }

    /// Deals, plays turns until the round ends, and scores it.
    pub fn play_round(&mut self) -> Result<RoundResult, GameError> {
        self.deal()?;
        self.start_round()?;
        while self.phase == Phase::AwaitingPlay {
            self.take_turn()?;
        }
        self.end_round()
    }

    /// Cumulative scores, highest first.
    pub fn standings(&self) -> Vec<Standing> {
        leaderboard(self.players.iter().map(|p| (p.name(), p.score())))
    }

    /// Every card currently in a hand, the draw pile or the discard pile.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .players
            .iter()
            .flat_map(|p| p.hand().cards().iter().copied())
            .collect();
        cards.extend(self.deck.draw_pile().copied());
        cards.extend_from_slice(self.deck.discard_pile());
        cards
    }
}

impl fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.players.iter().map(|p| p.name()).collect();
        f.debug_struct("Engine")
            .field("players", &names)
            .field("dealer", &self.order.dealer())
            .field("phase", &self.phase)
            .field("draw_pile", &self.deck.draw_len())
            .field("discard_pile", &self.deck.discard_len())
            .finish()
    }
}
