//! The terminal seat: a shared console and the human [`Player`] that reads
//! its decisions from it.
//!
//! The session loop and the human player both write to the same console, so
//! it lives behind `Rc<RefCell<..>>`. Borrows are taken inside a single
//! prompt or render call and never held across an engine call.
//!
//! Once input ends (EOF) or the player types `Q`, the console is closed: the
//! human draws instead of playing, names the suit it holds most of, and the
//! session stops after the current turn.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crazyeights_engine::cards::{all_suits, Card, Suit};
use crazyeights_engine::player::{Hand, Player, Seat};
use crazyeights_engine::rules::Target;
use tracing::debug;

use crate::formatters::{describe_target, format_hand};
use crate::io_utils::read_stdin_line;
use crate::validation::{parse_play_choice, parse_suit_choice, PlayChoice};

pub type SharedConsole<'a> = Rc<RefCell<Console<'a>>>;

/// Line-based input and output for one interactive session.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
    closed: bool,
    /// First write failure; the console closes when one happens
    failure: Option<io::Error>,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self {
            input,
            output,
            closed: false,
            failure: None,
        }
    }

    pub fn shared(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> SharedConsole<'a> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn close(&mut self) {
        if !self.closed {
            debug!("console closed");
        }
        self.closed = true;
    }

    /// Next trimmed line, or `None` once input has ended. EOF closes the console.
    pub fn read_line(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }
        let line = read_stdin_line(self.input);
        if line.is_none() {
            self.close();
        }
        line
    }

    /// Writes `text` without a newline and flushes.
    pub fn prompt(&mut self, text: &str) {
        let result = write!(self.output, "{}", text).and_then(|_| self.output.flush());
        self.record(result);
    }

    pub fn say(&mut self, text: &str) {
        let result = writeln!(self.output, "{}", text);
        self.record(result);
    }

    /// Runs a writer function against the output, e.g. a block of text.
    pub fn with_output(&mut self, f: impl FnOnce(&mut dyn Write) -> io::Result<()>) {
        let result = f(&mut *self.output);
        self.record(result);
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.failure.is_none() {
                self.failure = Some(e);
            }
            self.close();
        }
    }

    /// Hands over the first write failure, if any.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}

/// A human at the terminal.
pub struct ConsolePlayer<'a> {
    seat: Seat,
    console: SharedConsole<'a>,
}

impl<'a> ConsolePlayer<'a> {
    pub fn new(name: impl Into<String>, console: SharedConsole<'a>) -> Self {
        Self {
            seat: Seat::new(name),
            console,
        }
    }
}

fn show_hand(console: &mut Console<'_>, hand: &Hand) {
    console.say("Current hand:");
    for line in format_hand(hand) {
        console.say(&line);
    }
    console.say("");
}

/// Suit with the most non-Eight cards in `hand`; earliest suit on ties.
fn most_held_suit(hand: &Hand) -> Suit {
    let mut best = Suit::Clubs;
    let mut most = 0;
    for suit in all_suits() {
        let n = hand
            .cards()
            .iter()
            .filter(|c| c.suit == suit && !c.is_eight())
            .count();
        if n > most {
            most = n;
            best = suit;
        }
    }
    best
}

impl Player for ConsolePlayer<'_> {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn choose_play(&mut self, target: &Target) -> Option<Card> {
        let mut console = self.console.borrow_mut();
        if console.is_closed() {
            return None;
        }
        let hand = self.seat.hand_mut();
        console.say("");
        console.say(&describe_target(target));
        show_hand(&mut console, hand);
        console.prompt("Enter the number of the card you wish to play or \"D\" to draw: ");
        loop {
            let line = console.read_line()?;
            match parse_play_choice(&line, hand.len()) {
                PlayChoice::Draw => {
                    console.say("");
                    return None;
                }
                PlayChoice::Quit => {
                    console.close();
                    return None;
                }
                PlayChoice::NotANumber => console.prompt("Please enter a valid option: "),
                PlayChoice::OutOfRange => console.prompt("Please enter a valid number: "),
                PlayChoice::Card(_) if !hand.has_play_for(target) => {
                    console.say("Sorry, you cannot play on the last card played.");
                    console.prompt("You must draw a card: ");
                }
                PlayChoice::Card(index) => match hand.get(index) {
                    Some(card) if target.accepts(card) => {
                        hand.remove_at(index);
                        console.say("");
                        return Some(card);
                    }
                    _ => console
                        .prompt("This card cannot be played. Please select another or draw: "),
                },
            }
        }
    }

    fn choose_new_suit(&mut self) -> Suit {
        let mut console = self.console.borrow_mut();
        let fallback = most_held_suit(self.seat.hand());
        if console.is_closed() {
            return fallback;
        }
        show_hand(&mut console, self.seat.hand());
        console.prompt("What would you like to be the new suit? ");
        loop {
            let Some(line) = console.read_line() else {
                return fallback;
            };
            if let Some(suit) = parse_suit_choice(&line) {
                console.say("");
                return suit;
            }
            console.prompt("Please enter a valid option (Clubs, Diamonds, Hearts, or Spades): ");
        }
    }
}
