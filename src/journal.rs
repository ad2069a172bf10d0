//! Gratitude journal entries.
//!
//! Entries are created once and deleted by id; they are never edited in place.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique id derived from the creation instant.
    pub id: String,
    /// When the entry was written.
    pub date: DateTime<Utc>,
    pub text: String,
}

impl JournalEntry {
    /// Builds an entry stamped with `created_at`, choosing an id that does not
    /// collide with any of `existing`.
    ///
    /// The id is the creation instant in RFC 3339 form with millisecond
    /// precision. Two entries created within the same millisecond get a
    /// numeric suffix (`-2`, `-3`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use moodgarden::journal::JournalEntry;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    /// let first = JournalEntry::new("Grateful for coffee", at, &[]);
    /// assert_eq!(first.id, "2024-01-15T09:30:00.000Z");
    ///
    /// let second = JournalEntry::new("And for sunshine", at, &[first.clone()]);
    /// assert_eq!(second.id, "2024-01-15T09:30:00.000Z-2");
    /// ```
    pub fn new(text: &str, created_at: DateTime<Utc>, existing: &[JournalEntry]) -> Self {
        let base = created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        let taken = |id: &str| existing.iter().any(|entry| entry.id == id);

        let mut id = base.clone();
        let mut suffix = 2;
        while taken(&id) {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        JournalEntry {
            id,
            date: created_at,
            text: text.to_string(),
        }
    }

    /// Length of the text ignoring surrounding whitespace, in characters.
    pub fn trimmed_len(text: &str) -> usize {
        text.trim().chars().count()
    }
}
