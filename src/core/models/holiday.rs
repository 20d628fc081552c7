//! Holiday calendar
//!
//! The set of local civil dates excluded from business days.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// Date format of every holiday list entry (`YYYY-MM-DD`)
pub const HOLIDAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Colombian public holidays for 2025, used whenever the remote list is
/// unavailable
pub const FALLBACK_HOLIDAYS: [&str; 16] = [
    "2025-01-01",
    "2025-01-06",
    "2025-03-24",
    "2025-04-17",
    "2025-04-18",
    "2025-05-01",
    "2025-06-02",
    "2025-06-23",
    "2025-07-20",
    "2025-08-07",
    "2025-08-18",
    "2025-10-13",
    "2025-11-03",
    "2025-11-17",
    "2025-12-08",
    "2025-12-25",
];

/// Set of excluded local calendar dates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Build a calendar from already-parsed dates
    #[must_use]
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Build a calendar from `YYYY-MM-DD` strings, skipping entries that do
    /// not parse
    pub fn from_strings<S: AsRef<str>>(entries: impl IntoIterator<Item = S>) -> Self {
        let dates = entries.into_iter().filter_map(|entry| {
            let entry = entry.as_ref().trim();
            match NaiveDate::parse_from_str(entry, HOLIDAY_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(e) => {
                    log::debug!("Skipping holiday entry {entry:?}: {e}");
                    None
                },
            }
        });
        Self::new(dates)
    }

    /// The embedded static calendar
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_strings(FALLBACK_HOLIDAYS)
    }

    /// Whether `date` is a holiday
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Whether `date` is a business day (Monday to Friday, not a holiday)
    #[must_use]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.contains(date)
    }

    /// Number of holidays
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the calendar has no holidays
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holidays in ascending order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}
