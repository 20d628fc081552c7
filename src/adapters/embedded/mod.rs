//! In-process holiday lists
//!
//! Implements `HolidaySource` without I/O, for offline runs and tests.

use crate::core::models::FALLBACK_HOLIDAYS;
use crate::core::ports::{CalendarFetchError, HolidaySource};

/// A fixed list of holiday strings
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    entries: Vec<String>,
}

impl StaticHolidaySource {
    /// Source serving exactly `entries`
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = S>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Source serving the embedded 2025 list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(FALLBACK_HOLIDAYS)
    }
}

impl HolidaySource for StaticHolidaySource {
    fn fetch(&self) -> Result<Vec<String>, CalendarFetchError> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("embedded list ({} entries)", self.entries.len())
    }
}
