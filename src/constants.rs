//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodgarden application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodgarden";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Grow a garden by checking in with your mood every day";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_MOODGARDEN_DIR: &str = "MOODGARDEN_DIR";
/// Environment variable selecting the storage backend (`json` or `sqlite`).
pub const ENV_VAR_MOODGARDEN_STORE: &str = "MOODGARDEN_STORE";
/// Environment variable selecting the log output format.
pub const ENV_VAR_MOODGARDEN_LOG_FORMAT: &str = "MOODGARDEN_LOG_FORMAT";
/// Environment variable pinning the calendar date (YYYY-MM-DD).
pub const ENV_VAR_MOODGARDEN_TODAY: &str = "MOODGARDEN_TODAY";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for application data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/moodgarden";
/// Backend identifier for the JSON file store.
pub const STORE_BACKEND_JSON: &str = "json";
/// Backend identifier for the SQLite store.
pub const STORE_BACKEND_SQLITE: &str = "sqlite";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// File extension for values written by the file store.
pub const STORE_FILE_EXTENSION: &str = ".json";
/// Name of the lock file guarding the file store directory.
pub const STORE_LOCK_FILE: &str = ".lock";
/// File name of the SQLite database inside the data directory.
pub const SQLITE_DB_FILE: &str = "moodgarden.db";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Persisted State Keys
pub const KEY_SCORE: &str = "score";
pub const KEY_STREAK: &str = "streak";
pub const KEY_LAST_STREAK_UPDATE: &str = "lastStreakUpdateDate";
pub const KEY_LAST_MOOD_SELECTION: &str = "lastMoodSelectionDate";
pub const KEY_JOURNAL_ENTRIES: &str = "journalEntries";
pub const KEY_MOOD_HISTORY: &str = "moodHistory";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Scoring
/// Minimum score for each garden level, indexed by level.
pub const GARDEN_LEVEL_THRESHOLDS: [u32; 8] = [0, 10, 30, 60, 100, 150, 220, 300];
/// Streak lengths that award a one-time bonus, paired with the bonus points.
pub const STREAK_MILESTONES: &[(u32, u32)] = &[(3, 25), (7, 50), (14, 100), (30, 250)];
/// Minimum trimmed length of a journal entry accepted by the CLI.
pub const MIN_JOURNAL_LENGTH: usize = 25;
/// Number of entries shown in the recent mood history.
pub const RECENT_MOOD_HISTORY_LEN: usize = 7;

// Word Search
/// Default side length of the word-search grid.
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Largest accepted side length of the word-search grid.
pub const MAX_GRID_SIZE: usize = 100;
/// Default number of words the generator tries to place.
pub const DEFAULT_WORDS_TO_PLACE: usize = 6;
/// Placement attempts per word before it is skipped.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
/// Letters used to fill cells no word occupies.
pub const FILL_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodgarden";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
