//! Calendar access for the engine.
//!
//! The engine never reads the system clock directly. It asks a [`Clock`] for
//! today's calendar date and the current instant, so tests (and the
//! `MOODGARDEN_TODAY` override) can pin time to a known day.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use std::cell::Cell;

/// Source of "today" and "now".
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;

    /// The current instant, used to stamp journal entries.
    fn now(&self) -> DateTime<Utc>;

    /// The calendar day before [`Clock::today`].
    ///
    /// Falls back to `today` at the very start of the supported date range,
    /// where no earlier date exists.
    fn yesterday(&self) -> NaiveDate {
        let today = self.today();
        today.pred_opt().unwrap_or(today)
    }
}

/// Clock backed by the operating system, using the UTC calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a settable instant.
///
/// # Examples
///
/// ```
/// use moodgarden::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(clock.yesterday().to_string(), "2024-02-29");
///
/// clock.advance_days(1);
/// assert_eq!(clock.today().to_string(), "2024-03-02");
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        FixedClock {
            instant: Cell::new(instant),
        }
    }

    /// Creates a clock pinned to noon (UTC) on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self::at(Self::noon(date))
    }

    /// Moves the clock to noon on another date.
    pub fn set_date(&self, date: NaiveDate) {
        self.instant.set(Self::noon(date));
    }

    /// Moves the clock forward (or backward, for negative values) by whole days.
    pub fn advance_days(&self, days: i64) {
        self.instant
            .set(self.instant.get() + chrono::Duration::days(days));
    }

    fn noon(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.instant.get().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
