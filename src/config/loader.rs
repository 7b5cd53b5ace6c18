use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::config::types::{Config, Preferences};
use crate::settings::{AutoSleepDraft, AutoSleepSchedule, SettingsDialog};

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {source}")]
    SerializeError {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/playprefs/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("playprefs").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `tick_rate_ms` is non-zero
    /// - seek and auto-rewind amounts are inside their dialog ranges
    /// - the auto-sleep window parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        let prefs = &self.preferences;
        for (dialog, value, key) in [
            (SettingsDialog::SeekTime, prefs.seek_time_seconds, "seek_time_seconds"),
            (
                SettingsDialog::AutoRewindAmount,
                prefs.auto_rewind_seconds,
                "auto_rewind_seconds",
            ),
        ] {
            let range = dialog.seconds_range();
            if !range.contains(&value) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "preferences.{} = {} is outside {}..={}",
                        key,
                        value,
                        range.start(),
                        range.end()
                    ),
                });
            }
        }

        let draft = AutoSleepDraft::from(&prefs.auto_sleep);
        AutoSleepSchedule::try_from(&draft).map_err(|e| ConfigError::ValidationError {
            message: format!("preferences.auto_sleep: {e}"),
        })?;

        Ok(())
    }
}

/// Writes `preferences` into the `[preferences]` table of the config file
/// at `path`, leaving every other table as it was.
///
/// Creates the file (and parent directories) when missing. The file is held
/// under an exclusive lock for the read-modify-write.
pub fn save_preferences(path: &Path, preferences: &Preferences) -> Result<(), ConfigError> {
    let write_error = |source: std::io::Error| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(write_error)?;
    FileExt::lock_exclusive(&file).map_err(write_error)?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let value =
        toml::Value::try_from(preferences).map_err(|e| ConfigError::SerializeError { source: e })?;
    table.insert("preferences".to_string(), value);
    let rendered =
        toml::to_string_pretty(&table).map_err(|e| ConfigError::SerializeError { source: e })?;

    rewrite(&mut file, rendered.as_bytes()).map_err(write_error)?;
    tracing::debug!("Saved preferences to {}", path.display());
    Ok(())
}

fn rewrite(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(bytes)?;
    file.sync_all()
}
