//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Milliseconds between the bot deciding on a move and playing it.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_bot_delay_ms() -> u64 {
    xo_core::BOT_MOVE_DELAY.as_millis() as u64
}

fn default_log_file() -> PathBuf {
    PathBuf::from("game_xo.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: default_bot_delay_ms(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read, path, e.to_string()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse, path, e.message()))?;

        info!(bot_delay_ms = config.bot_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the bot delay.
    pub fn with_bot_delay_ms(mut self, bot_delay_ms: u64) -> Self {
        self.bot_delay_ms = bot_delay_ms;
        self
    }

    /// Bot delay as a [`Duration`].
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

/// Which stage of loading a config file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("read")]
    Read,
    /// The file is not valid TOML for [`GameConfig`].
    #[display("parse")]
    Parse,
}

/// Failure to load a config file, tagged with where it was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("Failed to {} config {}: {} (at {}:{})", kind, path.display(), message, file, line)]
pub struct ConfigError {
    /// Failed stage.
    pub kind: ConfigErrorKind,
    /// Config file being loaded.
    pub path: PathBuf,
    /// Underlying reason.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a config error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ConfigErrorKind, path: &Path, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            path: path.to_path_buf(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.bot_delay_ms(), 500);
        assert_eq!(config.bot_delay(), Duration::from_millis(500));
        assert_eq!(config.log_file(), &PathBuf::from("game_xo.log"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bot_delay_ms = 50").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.bot_delay_ms(), 50);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_invalid_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bot_delay_ms = \"soon\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
        assert_eq!(err.path, file.path());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path()).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Read);
        assert_eq!(err.path, dir.path());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
