//! # Play Command
//!
//! An interactive game at the terminal: one human in seat 0 against one to
//! six bots.
//!
//! The session prints the rules, asks for a name and a table size (unless a
//! flag or the configuration already supplies them), then plays rounds until
//! the player declines another one. The final leaderboard is printed on the
//! way out, including when input ends in the middle of a round.

use std::io::{BufRead, Write};
use std::rc::Rc;

use crazyeights_engine::engine::{Engine, Phase};
use crazyeights_engine::player::Player;
use tracing::info;

use super::seat_bots;
use crate::config::{self, ValueSource};
use crate::console::{Console, ConsolePlayer, SharedConsole};
use crate::error::CliError;
use crate::formatters::{format_event, write_leaderboard, write_rules};
use crate::ui;
use crate::validation::{
    parse_player_count, parse_yes_no, validate_name, validate_player_count, PlayerCount,
};

/// The human always sits first.
const HUMAN_SEAT: usize = 0;

const NAME_PROMPT: &str = "Enter a player name: ";
const PLAYERS_PROMPT: &str = "How many players (min 2, max 7)? ";

/// Command-line overrides for a play session.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub name: Option<String>,
    /// Seats at the table including the human
    pub players: Option<usize>,
    pub seed: Option<u64>,
}

enum RoundEnd {
    Finished,
    Interrupted,
}

/// Handle the play command: an interactive session on `stdin`/`out`.
///
/// # Returns
///
/// * `Ok(())` when the player declines another round (or input ends at that
///   question)
/// * `Err(CliError::Interrupted)` when input ends or the player quits before a
///   round is over; the leaderboard has been printed by then
/// * `Err(CliError::InvalidInput)` / `Err(CliError::Config)` for bad flags or
///   configuration
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(PlayOptions::default(), &mut stdout(), &mut stderr(), &mut input)?;
/// ```
pub fn handle_play_command<'a>(
    options: PlayOptions,
    out: &'a mut dyn Write,
    err: &mut dyn Write,
    stdin: &'a mut dyn BufRead,
) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;

    let seed = options.seed.or(config.seed).unwrap_or_else(rand::random);
    let preset_players = match options.players {
        Some(n) => Some(validate_player_count(n).map_err(CliError::InvalidInput)?),
        None => (sources.players != ValueSource::Default).then_some(config.players),
    };
    let preset_name = match options.name {
        Some(name) => Some(validate_name(&name).map_err(CliError::InvalidInput)?),
        None => config.name,
    };

    let console = Console::shared(stdin, out);
    console.borrow_mut().with_output(|out| write_rules(out));
    check_output(&console)?;

    let name = match preset_name {
        Some(name) => name,
        None => prompt_name(&console)?,
    };
    let players = match preset_players {
        Some(n) => n,
        None => prompt_player_count(&console)?,
    };
    info!(seed, players, "starting session");

    let mut seats: Vec<Box<dyn Player + 'a>> = Vec::with_capacity(players);
    seats.push(Box::new(ConsolePlayer::new(name, Rc::clone(&console))));
    seat_bots(&mut seats, players - 1, seed);
    let mut engine = Engine::new(Some(seed), seats)?;

    let mut interrupted = false;
    loop {
        if let RoundEnd::Interrupted = play_round(&mut engine, &console)? {
            interrupted = true;
            break;
        }
        if !ask_play_again(&console) {
            break;
        }
    }

    let standings = engine.standings();
    {
        let mut c = console.borrow_mut();
        c.say("");
        c.with_output(|out| write_leaderboard(out, "Final leaderboard:", &standings));
    }
    check_output(&console)?;

    if interrupted {
        ui::display_warning(err, "input closed before the round finished")?;
        return Err(CliError::Interrupted("input closed during play".into()));
    }
    Ok(())
}

/// Surfaces the first write failure on the console as an I/O error.
fn check_output(console: &SharedConsole<'_>) -> Result<(), CliError> {
    match console.borrow_mut().take_failure() {
        Some(e) => Err(CliError::Io(e)),
        None => Ok(()),
    }
}

fn closed_early() -> CliError {
    CliError::Interrupted("input closed before the game started".into())
}

fn prompt_name(console: &SharedConsole<'_>) -> Result<String, CliError> {
    let mut c = console.borrow_mut();
    c.prompt(NAME_PROMPT);
    loop {
        let line = c.read_line().ok_or_else(closed_early)?;
        match validate_name(&line) {
            Ok(name) => return Ok(name),
            Err(msg) => {
                c.say(&msg);
                c.prompt(NAME_PROMPT);
            }
        }
    }
}

fn prompt_player_count(console: &SharedConsole<'_>) -> Result<usize, CliError> {
    let mut c = console.borrow_mut();
    c.prompt(PLAYERS_PROMPT);
    loop {
        let line = c.read_line().ok_or_else(closed_early)?;
        match parse_player_count(&line) {
            PlayerCount::Valid(n) => return Ok(n),
            PlayerCount::NotANumber => c.prompt("Please enter a number: "),
            PlayerCount::OutOfRange => {
                c.say("Invalid number.");
                c.prompt(PLAYERS_PROMPT);
            }
        }
    }
}

/// Plays one round, rendering every turn. Stops early when the console
/// closes with the round still running.
fn play_round(engine: &mut Engine<'_>, console: &SharedConsole<'_>) -> Result<RoundEnd, CliError> {
    engine.deal()?;
    let start = engine.start_round()?;
    {
        let mut c = console.borrow_mut();
        c.say(&format!("{} is the dealer.", engine.players()[start.dealer].name()));
        c.say(&format!("A {} was flipped to begin.", start.flipped));
    }

    while engine.phase() == Phase::AwaitingPlay {
        let seats = engine.players().len();
        if engine.active().map(|seat| (seat + 1) % seats) == Some(HUMAN_SEAT) {
            let mut c = console.borrow_mut();
            if !c.is_closed() {
                c.say("");
                c.say(&format!("Cards left in draw pile: {}", engine.deck().draw_len()));
            }
        }

        let report = engine.take_turn()?;

        let mut c = console.borrow_mut();
        for event in &report.events {
            if let Some(line) = format_event(event, |seat| engine.players()[seat].name()) {
                c.say(&line);
            }
        }
        if let Some(e) = c.take_failure() {
            return Err(CliError::Io(e));
        }
        if c.is_closed() && engine.phase() == Phase::AwaitingPlay {
            return Ok(RoundEnd::Interrupted);
        }
    }

    let result = engine.end_round()?;
    let mut c = console.borrow_mut();
    c.say("");
    match result.winner {
        Some(seat) => {
            let name = engine.players()[seat].name();
            c.say(&format!("Game over: the winner is {}!", name));
            c.say(&format!("{} scores {} points.", name, result.points));
        }
        None => c.say("Game over: the round is blocked and nobody scores."),
    }
    c.say(&format!("The game lasted {} turns.", result.turns));
    if let Some(e) = c.take_failure() {
        return Err(CliError::Io(e));
    }
    Ok(if c.is_closed() {
        RoundEnd::Interrupted
    } else {
        RoundEnd::Finished
    })
}

/// `true` for another round. End of input counts as "no".
fn ask_play_again(console: &SharedConsole<'_>) -> bool {
    let mut c = console.borrow_mut();
    c.say("");
    c.say("Do you want to play again?");
    c.prompt("(\"Y\" for yes, \"N\" for no): ");
    loop {
        let Some(line) = c.read_line() else {
            return false;
        };
        if let Some(answer) = parse_yes_no(&line) {
            c.say("");
            return answer;
        }
        c.prompt("Please enter either \"Y\" or \"N\": ");
    }
}
