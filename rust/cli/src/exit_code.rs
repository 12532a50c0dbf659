//! Process exit codes returned by [`crate::run`].

/// Command finished normally.
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or an I/O or engine failure.
pub const ERROR: i32 = 2;

/// Input ended or the player quit while a game was in progress.
pub const INTERRUPTED: i32 = 130;
