//! Layered settings: built-in defaults, then a TOML file named by
//! `CRAZYEIGHTS_CONFIG`, then `CRAZYEIGHTS_*` environment variables.
//! Command-line flags are applied by each command on top of the result.

use serde::{Deserialize, Serialize};
use std::fs;

use crazyeights_engine::rules::{MAX_PLAYERS, MIN_PLAYERS};

pub const CONFIG_ENV: &str = "CRAZYEIGHTS_CONFIG";
pub const SEED_ENV: &str = "CRAZYEIGHTS_SEED";
pub const PLAYERS_ENV: &str = "CRAZYEIGHTS_PLAYERS";
pub const NAME_ENV: &str = "CRAZYEIGHTS_NAME";
pub const LOG_ENV: &str = "CRAZYEIGHTS_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    /// Seats at the table, the human included
    pub players: usize,
    pub name: Option<String>,
    /// `tracing` filter directive
    pub log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub players: ValueSource,
    pub name: ValueSource,
    pub log: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            name: ValueSource::Default,
            log: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            players: 4,
            name: None,
            log: "warn".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.name {
            cfg.name = Some(v);
            sources.name = ValueSource::File;
        }
        if let Some(v) = f.log {
            cfg.log = v;
            sources.log = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var(PLAYERS_ENV)
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(name) = std::env::var(NAME_ENV)
        && !name.is_empty()
    {
        cfg.name = Some(name);
        sources.name = ValueSource::Env;
    }
    if let Ok(log) = std::env::var(LOG_ENV)
        && !log.is_empty()
    {
        cfg.log = log;
        sources.log = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    log: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if cfg.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: name must not be empty".into(),
        ));
    }
    if cfg.log.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: log filter must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [CONFIG_ENV, SEED_ENV, PLAYERS_ENV, NAME_ENV, LOG_ENV] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.players, ValueSource::Default);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 5\nplayers = 3\nname = \"Ann\"").unwrap();
        unsafe {
            std::env::set_var(CONFIG_ENV, file.path());
            std::env::set_var(SEED_ENV, "77");
        }

        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.seed, Some(77));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.players, 3);
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(resolved.config.name.as_deref(), Some("Ann"));
        assert_eq!(resolved.sources.log, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn rejects_player_count_out_of_range() {
        clear_env();
        unsafe { std::env::set_var(PLAYERS_ENV, "8") };
        let result = load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn rejects_garbage_seed() {
        clear_env();
        unsafe { std::env::set_var(SEED_ENV, "lots") };
        let result = load();
        clear_env();
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Invalid seed: lots");
    }

    #[test]
    #[serial]
    fn rejects_unknown_file_keys_and_blank_names() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_stack = 100").unwrap();
        unsafe { std::env::set_var(CONFIG_ENV, file.path()) };
        assert!(matches!(load(), Err(ConfigError::Parse(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"  \"").unwrap();
        unsafe { std::env::set_var(CONFIG_ENV, file.path()) };
        let result = load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn missing_file_is_an_io_error() {
        clear_env();
        unsafe { std::env::set_var(CONFIG_ENV, "/definitely/not/here.toml") };
        let result = load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
