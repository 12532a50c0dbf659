//! Command handler modules for the `crazyeights` CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//!   so tests can drive handlers with in-memory buffers

mod cfg;
mod play;
mod rules;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::{handle_play_command, PlayOptions};
pub use rules::handle_rules_command;
pub use sim::handle_sim_command;

use crazyeights_ai::create_bot;
use crazyeights_engine::player::Player;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Mixed into the session seed; the deck is seeded with the unsalted value.
const BOT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

fn bot_seeder(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed ^ BOT_SEED_SALT)
}

/// Appends `count` bots numbered from 1. Each bot gets its own seed drawn
/// from a ChaCha20 stream over the salted `seed`, so one session seed
/// reproduces every bot decision.
pub(crate) fn seat_bots<'a>(players: &mut Vec<Box<dyn Player + 'a>>, count: usize, seed: u64) {
    let mut seeder = bot_seeder(seed);
    for number in 1..=count {
        players.push(create_bot(number, Some(seeder.next_u64())));
    }
}
