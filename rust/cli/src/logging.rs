use crate::error::CliError;

/// Installs the global subscriber. Output goes to stderr so it never mixes
/// with the game dialogue on stdout.
pub fn init_logging(filter: &str) -> Result<(), CliError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter)
        .map_err(|e| CliError::Config(format!("invalid log filter {:?}: {}", filter, e)))?;

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Config(format!("logging already initialised: {}", e)))
}
