//! The engagement engine: score, garden level, streak, mood history and journal.
//!
//! [`GardenEngine`] owns a [`GardenState`] together with the store it was
//! loaded from and the clock it reads "today" from. Every mutating operation
//! updates memory first and then writes the fields it touched before
//! returning. A failed write is logged and otherwise ignored, so the session
//! keeps working even when nothing can be persisted.
//!
//! # Example
//!
//! ```
//! use moodgarden::clock::FixedClock;
//! use moodgarden::engine::GardenEngine;
//! use moodgarden::mood::Mood;
//! use moodgarden::store::MemoryStore;
//! use chrono::NaiveDate;
//!
//! let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! let mut engine = GardenEngine::load(MemoryStore::new(), &clock);
//!
//! engine.complete_activity(15);
//! let outcome = engine.select_mood(Mood::Calm);
//! assert_eq!(outcome.bonus_points, 0);
//! assert_eq!(engine.streak(), 1);
//! assert!(engine.is_mood_selected_today());
//! assert_eq!(engine.garden_level(), 1);
//! ```

pub mod garden;
pub mod state;
pub mod streak;

pub use garden::{garden_level, points_to_next_level, GardenStage};
pub use state::{Field, GardenState};
pub use streak::{milestone_bonus, StreakState, StreakTransition};

use crate::clock::Clock;
use crate::journal::JournalEntry;
use crate::mood::{Mood, MoodEntry, MoodStats};
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Result of a mood check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodSelection {
    /// Milestone bonus awarded by this check-in (0 if none).
    pub bonus_points: u32,
    /// Streak after the check-in.
    pub streak: u32,
}

/// Owns the garden state and applies user actions to it.
pub struct GardenEngine<S, C> {
    store: S,
    clock: C,
    state: GardenState,
}

impl<S: KeyValueStore, C: Clock> GardenEngine<S, C> {
    /// Loads state from `store`, using defaults for anything missing or unreadable.
    pub fn load(store: S, clock: C) -> Self {
        let state = GardenState::load(&store);
        GardenEngine {
            store,
            clock,
            state,
        }
    }

    /// Adds `points` to the score. Zero points is ignored.
    pub fn complete_activity(&mut self, points: u32) {
        if points == 0 {
            debug!("Ignoring activity completion worth no points");
            return;
        }

        let before = self.garden_level();
        self.state.score = self.state.score.saturating_add(points);
        info!(points, score = self.state.score, "Activity completed");

        let after = self.garden_level();
        if after > before {
            info!(level = after, stage = %self.garden_stage(), "Garden grew");
        }

        self.persist(&[Field::Score]);
    }

    /// Records today's mood and advances the streak at most once per day.
    ///
    /// The first mood chosen on a day is the one kept in the history; later
    /// choices on the same day leave history, streak and score alone. When
    /// the streak lands exactly on a milestone the bonus is added to the
    /// score and reported in the returned [`MoodSelection`].
    pub fn select_mood(&mut self, mood: Mood) -> MoodSelection {
        let today = self.clock.today();
        let mut changed = Vec::with_capacity(5);

        if !self.state.mood_history.iter().any(|e| e.date == today) {
            self.state.mood_history.push(MoodEntry { date: today, mood });
            changed.push(Field::MoodHistory);
        }

        if self.state.last_mood_selection != Some(today) {
            self.state.last_mood_selection = Some(today);
            changed.push(Field::LastMoodSelection);
        }

        let yesterday = self.clock.yesterday();
        let bonus_points = match self.state.streak.transition(today, yesterday) {
            StreakTransition::AlreadyCounted => {
                debug!(%today, "Streak already counted today");
                0
            }
            StreakTransition::ClockWentBack => {
                warn!(
                    %today,
                    last_update = ?self.state.streak.last_update,
                    "Clock is earlier than the last streak update; leaving streak unchanged"
                );
                0
            }
            StreakTransition::Advanced { count, bonus } => {
                // The streak date goes first and the score last: a write that
                // stops partway can drop a bonus but never pay it twice.
                self.state.streak.apply(count, today);
                changed.push(Field::LastStreakUpdate);
                changed.push(Field::Streak);
                if bonus > 0 {
                    self.state.score = self.state.score.saturating_add(bonus);
                    changed.push(Field::Score);
                    info!(streak = count, bonus, "Streak milestone reached");
                }
                info!(streak = count, %mood, "Mood selected");
                bonus
            }
        };

        self.persist(&changed);

        MoodSelection {
            bonus_points,
            streak: self.state.streak.count,
        }
    }

    /// Whether a mood has been chosen on the clock's current day.
    pub fn is_mood_selected_today(&self) -> bool {
        self.state.last_mood_selection == Some(self.clock.today())
    }

    /// Appends a journal entry stamped with the current instant.
    ///
    /// No length rules are applied here; callers enforce their own minimums.
    pub fn add_journal_entry(&mut self, text: &str) -> JournalEntry {
        let entry = JournalEntry::new(text, self.clock.now(), &self.state.journal_entries);
        self.state.journal_entries.push(entry.clone());
        info!(id = %entry.id, "Journal entry added");
        self.persist(&[Field::JournalEntries]);
        entry
    }

    /// Removes the entry with `id`. Returns whether anything was removed;
    /// an unknown id is not an error.
    pub fn delete_journal_entry(&mut self, id: &str) -> bool {
        let Some(index) = self.state.journal_entries.iter().position(|e| e.id == id) else {
            debug!(id, "No journal entry to delete");
            return false;
        };

        self.state.journal_entries.remove(index);
        info!(id, "Journal entry deleted");
        self.persist(&[Field::JournalEntries]);
        true
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn streak(&self) -> u32 {
        self.state.streak.count
    }

    pub fn last_streak_update(&self) -> Option<NaiveDate> {
        self.state.streak.last_update
    }

    pub fn garden_level(&self) -> u8 {
        garden_level(self.state.score)
    }

    pub fn garden_stage(&self) -> GardenStage {
        GardenStage::from_score(self.state.score)
    }

    pub fn points_to_next_level(&self) -> Option<u32> {
        points_to_next_level(self.state.score)
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.state.journal_entries
    }

    pub fn mood_history(&self) -> &[MoodEntry] {
        &self.state.mood_history
    }

    pub fn mood_stats(&self) -> MoodStats {
        MoodStats::from_history(&self.state.mood_history)
    }

    pub fn state(&self) -> &GardenState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Gives the store back, e.g. to reload it in a fresh engine.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self, fields: &[Field]) {
        if !fields.is_empty() {
            self.state.save(&mut self.store, fields);
        }
    }
}
