//! Configuration management for the moodgarden application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODGARDEN_DIR`: Path to the data directory (defaults to ~/.local/share/moodgarden)
//! - `MOODGARDEN_STORE`: Storage backend, `json` (default) or `sqlite`
//! - `MOODGARDEN_LOG_FORMAT`: Log output format, `text` (default) or `json`
//! - `MOODGARDEN_TODAY`: Pins the calendar date (YYYY-MM-DD)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which [`crate::store::KeyValueStore`] implementation holds the garden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// One JSON file per key in the data directory.
    #[default]
    Json,
    /// A SQLite database in the data directory.
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            constants::STORE_BACKEND_JSON => Ok(StoreBackend::Json),
            constants::STORE_BACKEND_SQLITE => Ok(StoreBackend::Sqlite),
            other => Err(AppError::Config(format!(
                "Unknown store backend '{}'. Expected '{}' or '{}'",
                other,
                constants::STORE_BACKEND_JSON,
                constants::STORE_BACKEND_SQLITE
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Json => f.write_str(constants::STORE_BACKEND_JSON),
            StoreBackend::Sqlite => f.write_str(constants::STORE_BACKEND_SQLITE),
        }
    }
}

/// Log output format for the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            constants::LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            constants::LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}'. Expected '{}' or '{}'",
                other,
                constants::LOG_FORMAT_TEXT,
                constants::LOG_FORMAT_JSON
            ))),
        }
    }
}

/// Configuration for the moodgarden application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodgarden::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/garden"),
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory where garden state is stored.
    pub data_dir: PathBuf,

    /// Storage backend used for the garden state.
    pub store_backend: StoreBackend,

    /// Output format for log lines.
    pub log_format: LogFormat,

    /// Calendar date to use instead of the system clock.
    pub today_override: Option<NaiveDate>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &constants::REDACTED_PLACEHOLDER)
            .field("store_backend", &self.store_backend)
            .field("log_format", &self.log_format)
            .field("today_override", &self.today_override)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            store_backend: StoreBackend::default(),
            log_format: LogFormat::default(),
            today_override: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `MOODGARDEN_STORE` or `MOODGARDEN_LOG_FORMAT` hold an unknown value
    /// - `MOODGARDEN_TODAY` is not a valid YYYY-MM-DD date
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moodgarden::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Using backend {}", config.store_backend),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(constants::ENV_VAR_MOODGARDEN_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let store_backend = match env::var(constants::ENV_VAR_MOODGARDEN_STORE) {
            Ok(value) => value.parse()?,
            Err(_) => StoreBackend::default(),
        };

        let log_format = match env::var(constants::ENV_VAR_MOODGARDEN_LOG_FORMAT) {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        let today_override = match env::var(constants::ENV_VAR_MOODGARDEN_TODAY) {
            Ok(value) => Some(
                NaiveDate::parse_from_str(value.trim(), constants::DATE_FORMAT_ISO).map_err(
                    |e| {
                        AppError::Config(format!(
                            "{} must be a YYYY-MM-DD date: {}",
                            constants::ENV_VAR_MOODGARDEN_TODAY,
                            e
                        ))
                    },
                )?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            data_dir,
            store_backend,
            log_format,
            today_override,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory is empty or relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Location of the SQLite database for the `sqlite` backend.
    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join(constants::SQLITE_DB_FILE)
    }
}
