//! Moods, the daily mood history, and summary statistics over it.

use crate::constants::RECENT_MOOD_HISTORY_LEN;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mood the user can check in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Calm,
    Stressed,
    Sad,
    Excited,
}

impl Mood {
    /// Every mood, in display order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Stressed,
        Mood::Sad,
        Mood::Excited,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Stressed => "Stressed",
            Mood::Sad => "Sad",
            Mood::Excited => "Excited",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Stressed => "😫",
            Mood::Sad => "😢",
            Mood::Excited => "🤩",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Mood::ALL.iter().map(Mood::name).collect();
                AppError::Mood(format!(
                    "Unknown mood '{}'. Choose one of: {}",
                    wanted,
                    names.join(", ")
                ))
            })
    }
}

/// The mood recorded for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
}

/// Summary of a mood history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodStats {
    /// Number of days with a recorded mood.
    pub days_logged: usize,
    /// Count per mood, in [`Mood::ALL`] order; moods never chosen count zero.
    pub counts: Vec<(Mood, usize)>,
    /// The most often chosen mood. Ties go to the mood listed first in
    /// [`Mood::ALL`]. `None` for an empty history.
    pub most_frequent: Option<Mood>,
    /// Up to the last seven entries, newest first.
    pub recent: Vec<MoodEntry>,
}

impl MoodStats {
    /// Computes statistics over a history ordered oldest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodgarden::mood::{Mood, MoodEntry, MoodStats};
    /// use chrono::NaiveDate;
    ///
    /// let history = vec![
    ///     MoodEntry { date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), mood: Mood::Calm },
    ///     MoodEntry { date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), mood: Mood::Calm },
    ///     MoodEntry { date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), mood: Mood::Sad },
    /// ];
    /// let stats = MoodStats::from_history(&history);
    /// assert_eq!(stats.days_logged, 3);
    /// assert_eq!(stats.most_frequent, Some(Mood::Calm));
    /// assert_eq!(stats.recent[0].mood, Mood::Sad);
    /// ```
    pub fn from_history(history: &[MoodEntry]) -> Self {
        let counts: Vec<(Mood, usize)> = Mood::ALL
            .into_iter()
            .map(|mood| (mood, history.iter().filter(|e| e.mood == mood).count()))
            .collect();

        let most_frequent = if history.is_empty() {
            None
        } else {
            let mut best: Option<(Mood, usize)> = None;
            for &(mood, count) in &counts {
                if best.map_or(true, |(_, max)| count > max) {
                    best = Some((mood, count));
                }
            }
            best.map(|(mood, _)| mood)
        };

        let recent = history
            .iter()
            .rev()
            .take(RECENT_MOOD_HISTORY_LEN)
            .cloned()
            .collect();

        MoodStats {
            days_logged: history.len(),
            counts,
            most_frequent,
            recent,
        }
    }

    /// Count for a single mood.
    pub fn count(&self, mood: Mood) -> usize {
        self.counts
            .iter()
            .find(|(m, _)| *m == mood)
            .map_or(0, |(_, count)| *count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, mood: Mood) -> MoodEntry {
        MoodEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            mood,
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!(" EXCITED ".parse::<Mood>().unwrap(), Mood::Excited);
        match "grumpy".parse::<Mood>() {
            Err(AppError::Mood(msg)) => assert!(msg.contains("Unknown mood")),
            _ => panic!("Expected error for unknown mood"),
        }
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&entry(5, Mood::Stressed)).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-05","mood":"Stressed"}"#);
    }

    #[test]
    fn test_empty_history_stats() {
        let stats = MoodStats::from_history(&[]);
        assert_eq!(stats.days_logged, 0);
        assert_eq!(stats.most_frequent, None);
        assert!(stats.recent.is_empty());
        assert_eq!(stats.counts.len(), Mood::ALL.len());
        assert!(stats.counts.iter().all(|(_, c)| *c == 0));
    }

    #[test]
    fn test_tie_goes_to_first_declared_mood() {
        let history = vec![entry(1, Mood::Sad), entry(2, Mood::Calm)];
        let stats = MoodStats::from_history(&history);
        assert_eq!(stats.most_frequent, Some(Mood::Calm));
        assert_eq!(stats.count(Mood::Sad), 1);
        assert_eq!(stats.count(Mood::Happy), 0);
    }

    #[test]
    fn test_recent_is_capped_and_newest_first() {
        let history: Vec<MoodEntry> = (1..=10).map(|d| entry(d, Mood::Happy)).collect();
        let stats = MoodStats::from_history(&history);
        assert_eq!(stats.recent.len(), 7);
        assert_eq!(stats.recent[0].date.to_string(), "2024-01-10");
        assert_eq!(stats.recent[6].date.to_string(), "2024-01-04");
    }
}
