//! Day-streak transitions and milestone bonuses.

use crate::constants::STREAK_MILESTONES;
use chrono::NaiveDate;

/// Consecutive-day streak and the day it last advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakState {
    pub count: u32,
    pub last_update: Option<NaiveDate>,
}

/// Outcome of checking in on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// The streak already advanced today.
    AlreadyCounted,
    /// Today is earlier than the last update; nothing changes.
    ClockWentBack,
    /// The streak moved to `count` as of today, earning `bonus` points.
    Advanced { count: u32, bonus: u32 },
}

/// Bonus for reaching exactly `streak` days, or 0 if it is not a milestone.
pub fn milestone_bonus(streak: u32) -> u32 {
    STREAK_MILESTONES
        .iter()
        .find(|(days, _)| *days == streak)
        .map_or(0, |(_, bonus)| *bonus)
}

impl StreakState {
    /// Works out what a check-in on `today` does to the streak.
    ///
    /// Yesterday continues the streak; any other earlier day (or no previous
    /// check-in) starts over at 1.
    pub fn transition(&self, today: NaiveDate, yesterday: NaiveDate) -> StreakTransition {
        match self.last_update {
            Some(last) if last == today => StreakTransition::AlreadyCounted,
            Some(last) if last > today => StreakTransition::ClockWentBack,
            last => {
                let count = if last == Some(yesterday) {
                    self.count.saturating_add(1)
                } else {
                    1
                };
                StreakTransition::Advanced {
                    count,
                    bonus: milestone_bonus(count),
                }
            }
        }
    }

    /// Applies an advanced transition.
    pub fn apply(&mut self, count: u32, today: NaiveDate) {
        self.count = count;
        self.last_update = Some(today);
    }
}
