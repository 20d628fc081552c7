//! Shared test helpers
//!
//! Instant builders for regional wall-clock times, calculators over fixed
//! holiday lists, and hand-written `HolidaySource` doubles.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use workdays::adapters::StaticHolidaySource;
use workdays::core::models::{from_local, to_local};
use workdays::core::ports::{CalendarFetchError, HolidaySource};
use workdays::core::services::{HolidayProvider, WorkingTimeCalculator};

/// Instant from an RFC 3339 string
pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// Instant from a regional wall-clock string (`YYYY-MM-DDTHH:MM:SS`)
pub fn local(s: &str) -> DateTime<Utc> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap();
    from_local(naive).unwrap()
}

/// Regional wall-clock rendering of an instant (`YYYY-MM-DDTHH:MM:SS`)
pub fn show_local(instant: DateTime<Utc>) -> String {
    to_local(instant).format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Calculator over the embedded 2025 calendar
pub fn offline_calculator() -> WorkingTimeCalculator {
    WorkingTimeCalculator::new(Arc::new(HolidayProvider::new(StaticHolidaySource::embedded())))
}

/// Calculator over an explicit holiday list
pub fn calculator_with(holidays: &[&str]) -> WorkingTimeCalculator {
    let source = StaticHolidaySource::new(holidays.iter().copied());
    WorkingTimeCalculator::new(Arc::new(HolidayProvider::new(source)))
}

/// Source that counts fetches and optionally stalls before answering
#[derive(Debug, Clone)]
pub struct CountingSource {
    entries: Vec<String>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(entries: &[&str]) -> Self {
        Self {
            entries: entries.iter().map(|s| (*s).to_string()).collect(),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shared handle on the fetch counter
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl HolidaySource for CountingSource {
    fn fetch(&self) -> Result<Vec<String>, CalendarFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        "counting source".to_string()
    }
}

/// Source that always fails the way an unreachable endpoint would
#[derive(Debug, Clone, Default)]
pub struct FailingSource {
    calls: Arc<AtomicUsize>,
}

impl FailingSource {
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl HolidaySource for FailingSource {
    fn fetch(&self) -> Result<Vec<String>, CalendarFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CalendarFetchError::Transport("connection refused".to_string()))
    }

    fn describe(&self) -> String {
        "failing source".to_string()
    }
}
