//! # Sim Command
//!
//! Plays a fixed number of bot-only rounds and reports each round's outcome
//! and the final leaderboard, as text or as JSON.

use std::io::Write;

use crazyeights_engine::engine::{Engine, RoundResult};
use crazyeights_engine::player::Player;
use crazyeights_engine::scoring::Standing;
use serde::Serialize;
use tracing::info;

use super::seat_bots;
use crate::config;
use crate::error::CliError;
use crate::formatters::write_leaderboard;
use crate::validation::validate_player_count;

#[derive(Debug, Serialize)]
struct SimReport {
    seed: u64,
    players: usize,
    rounds: Vec<RoundSummary>,
    blocked: usize,
    standings: Vec<Standing>,
}

#[derive(Debug, Serialize)]
struct RoundSummary {
    round: u32,
    /// Winner's name; `None` for a blocked round
    winner: Option<String>,
    points: u32,
    turns: u32,
}

/// Handle the sim command.
///
/// `players` and `seed` fall back to the configuration; without any seed a
/// random one is picked and reported so the run can be repeated.
pub fn handle_sim_command(
    rounds: u32,
    players: Option<usize>,
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be at least 1".into()));
    }
    let cfg = config::load()?;
    let players = validate_player_count(players.unwrap_or(cfg.players))
        .map_err(CliError::InvalidInput)?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut seats: Vec<Box<dyn Player>> = Vec::with_capacity(players);
    seat_bots(&mut seats, players, seed);
    let mut engine = Engine::new(Some(seed), seats)?;

    let mut summaries = Vec::with_capacity(rounds as usize);
    for round in 1..=rounds {
        let RoundResult {
            winner,
            points,
            turns,
        } = engine.play_round()?;
        summaries.push(RoundSummary {
            round,
            winner: winner.map(|seat| engine.players()[seat].name().to_string()),
            points,
            turns,
        });
    }
    let blocked = summaries.iter().filter(|s| s.winner.is_none()).count();
    info!(seed, players, rounds, blocked, "simulation finished");

    let report = SimReport {
        seed,
        players,
        rounds: summaries,
        blocked,
        standings: engine.standings(),
    };
    if json {
        let text = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
    } else {
        write_text(&report, out)?;
    }
    Ok(())
}

fn write_text(report: &SimReport, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "sim: players={} rounds={} seed={}",
        report.players,
        report.rounds.len(),
        report.seed
    )?;
    for r in &report.rounds {
        match &r.winner {
            Some(name) => writeln!(
                out,
                "Round {}: {} won {} points in {} turns",
                r.round, name, r.points, r.turns
            )?,
            None => writeln!(out, "Round {}: blocked after {} turns", r.round, r.turns)?,
        }
    }
    writeln!(out, "Blocked rounds: {}", report.blocked)?;
    write_leaderboard(out, "Final leaderboard:", &report.standings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_ENV, LOG_ENV, NAME_ENV, PLAYERS_ENV, SEED_ENV};
    use serial_test::serial;

    fn clear_env() {
        for key in [CONFIG_ENV, SEED_ENV, PLAYERS_ENV, NAME_ENV, LOG_ENV] {
            unsafe { std::env::remove_var(key) };
        }
    }

    fn run_sim(rounds: u32, players: Option<usize>, seed: u64, json: bool) -> String {
        let mut out = Vec::new();
        handle_sim_command(rounds, players, Some(seed), json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    #[serial]
    fn text_report_lists_every_round() {
        clear_env();
        let text = run_sim(4, Some(3), 21, false);
        assert!(text.starts_with("sim: players=3 rounds=4 seed=21\n"));
        for round in 1..=4 {
            assert!(text.contains(&format!("Round {}: ", round)));
        }
        assert!(text.contains("Final leaderboard:\n1. Bot "));
        assert!(text.contains("3. Bot "));
    }

    #[test]
    #[serial]
    fn json_report_is_reproducible() {
        clear_env();
        let first = run_sim(6, Some(5), 99, true);
        assert_eq!(first, run_sim(6, Some(5), 99, true));

        let v: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert_eq!(v["seed"], 99);
        assert_eq!(v["players"], 5);
        assert_eq!(v["rounds"].as_array().unwrap().len(), 6);
        let standings = v["standings"].as_array().unwrap();
        assert_eq!(standings.len(), 5);
        assert_eq!(standings[0]["rank"], 1);

        let total: u64 = standings.iter().map(|s| s["score"].as_u64().unwrap()).sum();
        let awarded: u64 = v["rounds"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["points"].as_u64().unwrap())
            .sum();
        assert_eq!(total, awarded);
    }

    #[test]
    #[serial]
    fn player_count_defaults_to_configuration() {
        clear_env();
        unsafe { std::env::set_var(PLAYERS_ENV, "6") };
        let text = run_sim(1, None, 2, false);
        clear_env();
        assert!(text.starts_with("sim: players=6 "));
    }

    #[test]
    #[serial]
    fn rejects_bad_arguments() {
        clear_env();
        let mut out = Vec::new();
        assert!(matches!(
            handle_sim_command(0, Some(3), Some(1), false, &mut out),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            handle_sim_command(1, Some(1), Some(1), false, &mut out),
            Err(CliError::InvalidInput(_))
        ));
        assert!(out.is_empty());
    }
}
