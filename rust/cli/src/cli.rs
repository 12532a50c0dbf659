//! Command-line argument definitions (clap derive).

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "crazyeights",
    version,
    about = "Crazy Eights at the terminal against computer opponents"
)]
pub struct CrazyEightsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game against bots
    Play {
        /// Your name at the table (prompted for when absent)
        #[arg(long)]
        name: Option<String>,
        /// Seats at the table including yours, 2 to 7 (prompted for when absent)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=7))]
        players: Option<u8>,
        /// Seed for the deck and the bots
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play bot-only rounds and report the leaderboard
    Sim {
        /// Number of rounds to play
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        /// Number of bots, 2 to 7
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=7))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the rules and the scoring
    Rules,
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Rules => "rules",
            Commands::Cfg => "cfg",
        }
    }
}
