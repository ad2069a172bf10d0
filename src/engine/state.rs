//! The persisted garden state and its mapping onto store keys.

use super::streak::StreakState;
use crate::constants::{
    DATE_FORMAT_ISO, KEY_JOURNAL_ENTRIES, KEY_LAST_MOOD_SELECTION, KEY_LAST_STREAK_UPDATE,
    KEY_MOOD_HISTORY, KEY_SCORE, KEY_STREAK,
};
use crate::journal::JournalEntry;
use crate::mood::MoodEntry;
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// One persisted field of [`GardenState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Score,
    Streak,
    LastStreakUpdate,
    LastMoodSelection,
    JournalEntries,
    MoodHistory,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Score => KEY_SCORE,
            Field::Streak => KEY_STREAK,
            Field::LastStreakUpdate => KEY_LAST_STREAK_UPDATE,
            Field::LastMoodSelection => KEY_LAST_MOOD_SELECTION,
            Field::JournalEntries => KEY_JOURNAL_ENTRIES,
            Field::MoodHistory => KEY_MOOD_HISTORY,
        }
    }
}

/// Everything the engine remembers between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GardenState {
    pub score: u32,
    pub streak: StreakState,
    pub last_mood_selection: Option<NaiveDate>,
    /// One entry per day, oldest first.
    pub mood_history: Vec<MoodEntry>,
    pub journal_entries: Vec<JournalEntry>,
}

impl GardenState {
    /// Reads every field from `store`.
    ///
    /// Absent keys take their defaults. A key that cannot be read or decoded
    /// is logged and also falls back to its default, so a damaged store still
    /// yields a usable state.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let score = load_value::<u32, S>(store, KEY_SCORE).unwrap_or(0);
        let mut count = load_value::<u32, S>(store, KEY_STREAK).unwrap_or(0);
        let last_update = load_date(store, KEY_LAST_STREAK_UPDATE);

        if last_update.is_none() && count != 0 {
            warn!(
                streak = count,
                "Stored streak has no update date; starting the streak over"
            );
            count = 0;
        }

        let state = GardenState {
            score,
            streak: StreakState { count, last_update },
            last_mood_selection: load_date(store, KEY_LAST_MOOD_SELECTION),
            mood_history: load_value(store, KEY_MOOD_HISTORY).unwrap_or_default(),
            journal_entries: load_value(store, KEY_JOURNAL_ENTRIES).unwrap_or_default(),
        };
        debug!(
            score = state.score,
            streak = state.streak.count,
            journal_entries = state.journal_entries.len(),
            mood_days = state.mood_history.len(),
            "Loaded garden state"
        );
        state
    }

    /// JSON text for one field.
    pub fn encode(&self, field: Field) -> Result<String, serde_json::Error> {
        match field {
            Field::Score => serde_json::to_string(&self.score),
            Field::Streak => serde_json::to_string(&self.streak.count),
            Field::LastStreakUpdate => serde_json::to_string(&self.streak.last_update),
            Field::LastMoodSelection => serde_json::to_string(&self.last_mood_selection),
            Field::JournalEntries => serde_json::to_string(&self.journal_entries),
            Field::MoodHistory => serde_json::to_string(&self.mood_history),
        }
    }

    /// Writes the given fields to `store` in one `set_many` call.
    ///
    /// Failures are logged and swallowed; the in-memory state stays
    /// authoritative for the rest of the session.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, fields: &[Field]) {
        let mut entries = Vec::with_capacity(fields.len());
        for field in fields {
            match self.encode(*field) {
                Ok(value) => entries.push((field.key(), value)),
                Err(e) => error!(key = field.key(), error = %e, "Failed to encode field"),
            }
        }

        if entries.is_empty() {
            return;
        }

        match store.set_many(&entries) {
            Ok(()) => debug!(keys = entries.len(), "Saved garden state"),
            Err(e) => error!(
                keys = ?fields.iter().map(Field::key).collect::<Vec<_>>(),
                error = %e,
                "Failed to save garden state; changes will not survive a restart"
            ),
        }
    }
}

fn load_value<T: DeserializeOwned, S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            error!(key, error = %e, "Error reading from store; using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored value is not valid; using default");
            None
        }
    }
}

/// Dates are JSON strings, but a bare `YYYY-MM-DD` is accepted too.
fn load_date<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<NaiveDate> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            error!(key, error = %e, "Error reading from store; using default");
            return None;
        }
    };

    if let Ok(date) = serde_json::from_str::<Option<NaiveDate>>(&raw) {
        return date;
    }
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT_ISO) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(key, error = %e, "Stored date is not valid; using default");
            None
        }
    }
}
