//! Error handling utilities for the moodgarden application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Engine operations never surface these errors to their callers: storage
//! failures are logged and the in-memory state carries on. The types here are
//! returned from the fallible edges (opening a store, loading configuration,
//! parsing user input).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur when locking the data directory.
///
/// # Examples
///
/// ```
/// use moodgarden::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/path/to/data/.lock"),
/// };
///
/// assert!(format!("{}", error).contains("in use by another process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process holds the store lock.
    #[error("Garden data at {path} is in use by another process. Close other moodgarden instances and try again.")]
    StoreBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check that the data directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents failures of the persistent key-value store.
///
/// # Examples
///
/// ```
/// use moodgarden::errors::StoreError;
///
/// let error = StoreError::Unavailable("disk full".to_string());
/// assert!(format!("{}", error).contains("disk full"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a value.
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// SQLite failure.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool failure.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// A stored value could not be encoded or decoded.
    #[error("Invalid stored value: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store directory is locked or the lock could not be taken.
    #[error("Store lock error: {0}")]
    Lock(#[from] LockError),

    /// The store cannot serve requests.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// A type alias for results of store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Represents all possible errors that can occur in the moodgarden application.
///
/// # Examples
///
/// ```
/// use moodgarden::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from the persistent store.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Unknown mood name.
    #[error("Mood error: {0}")]
    Mood(String),

    /// Invalid journal input (e.g. too short, unknown id).
    #[error("Journal error: {0}")]
    Journal(String),

    /// Unknown or non-completable activity.
    #[error("Activity error: {0}")]
    Activity(String),

    /// Invalid word-search parameters or selections.
    #[error("Puzzle error: {0}")]
    Puzzle(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
