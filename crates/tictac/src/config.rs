//! Front-end configuration loaded from TOML and overridden by CLI flags.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictac_core::StartEntryPolicy;
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// What selecting "Start Again?" in the history does.
    start_entry: StartEntryPolicy,

    /// Whether a finished game sets off confetti.
    confetti: bool,

    /// Particles per confetti burst.
    confetti_particles: usize,

    /// Input poll interval, which is also the animation tick.
    tick_ms: u64,

    /// File receiving tracing output.
    log_file: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            start_entry: StartEntryPolicy::default(),
            confetti: true,
            confetti_particles: 80,
            tick_ms: 50,
            log_file: PathBuf::from("tictac.log"),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be at least 1".to_string()));
        }

        info!(start_entry = %config.start_entry, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit config file, or [`DEFAULT_CONFIG_FILE`] if present.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file settings.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(policy) = cli.start_entry {
            debug!(%policy, "Overriding start entry policy");
            self.start_entry = policy;
        }
        if cli.no_confetti {
            self.confetti = false;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: TuiConfig = toml::from_str("start_entry = \"view\"").unwrap();
        assert_eq!(*config.start_entry(), StartEntryPolicy::View);
        assert!(*config.confetti());
        assert_eq!(*config.tick_ms(), 50);
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli::parse_from(["tictac", "--start-entry", "view", "--no-confetti"]);
        let config = TuiConfig::default().with_overrides(&cli);
        assert_eq!(*config.start_entry(), StartEntryPolicy::View);
        assert!(!*config.confetti());
    }
}
