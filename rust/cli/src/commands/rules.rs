use std::io::Write;

use crate::error::CliError;
use crate::formatters::write_rules;

/// Prints the welcome banner, the rules and the scoring.
pub fn handle_rules_command(out: &mut dyn Write) -> Result<(), CliError> {
    write_rules(out)?;
    Ok(())
}
