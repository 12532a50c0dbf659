//! # Crazy Eights CLI Library
//!
//! This library provides the command-line front end for the Crazy Eights
//! engine: an interactive console game against bots, bot-only simulations,
//! the rules text, and a configuration report.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["crazyeights", "sim", "--rounds", "10", "--seed", "7"];
//! let code = crazyeights_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds at the terminal against one to six bots
//! - `sim`: Play bot-only rounds and report the leaderboard
//! - `rules`: Print the rules and the scoring
//! - `cfg`: Display current configuration settings

#[macro_use]
mod macros;

use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;
pub mod cli;
mod commands;
pub mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, CrazyEightsCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_rules_command, handle_sim_command,
    PlayOptions,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "rules", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. `play` reads its answers from the process's stdin; use
/// [`run_with_input`] to supply another reader.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends in the
/// middle of a game
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["crazyeights", "rules"];
/// let code = crazyeights_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit input stream for the interactive prompts.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CrazyEightsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Crazy Eights CLI");
            write_or_exit!(err, "Usage: crazyeights <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: crazyeights --help");
            return exit_code::ERROR;
        }
    };

    debug!(command = cli.cmd.name(), "running command");
    let result = match cli.cmd {
        Commands::Play {
            name,
            players,
            seed,
        } => {
            let options = PlayOptions {
                name,
                players: players.map(usize::from),
                seed,
            };
            handle_play_command(options, out, err, stdin)
        }
        Commands::Sim {
            rounds,
            players,
            seed,
            json,
        } => handle_sim_command(rounds, players.map(usize::from), seed, json, out),
        Commands::Rules => handle_rules_command(out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            // Nothing more can be reported if stderr itself is gone.
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new("");
        let code = run_with_input(args.iter().copied(), &mut out, &mut err, &mut input);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["crazyeights", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_the_commands() {
        let (code, out, err) = run_args(&["crazyeights", "deal"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}\n", c)));
        }
    }

    #[test]
    #[serial]
    fn failed_command_reports_a_single_error_line() {
        let (code, out, err) = run_args(&["crazyeights", "play", "--name", "   "]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        assert_eq!(err.lines().count(), 1);
        assert!(err.starts_with("Error: "));
        assert!(err.contains("at least one character"));
    }

    #[test]
    fn rules_prints_the_rules() {
        let (code, out, _) = run_args(&["crazyeights", "rules"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("RULES:"));
        assert!(out.contains("SCORING:"));
    }

    #[test]
    fn command_list_matches_the_parser() {
        use clap::CommandFactory;
        let names: Vec<String> = CrazyEightsCli::command()
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .filter(|name| name != "help")
            .collect();
        assert_eq!(names, COMMANDS);
    }
}
