//! Holiday calendar provider
//!
//! Owns the holiday cache for one service instance. The first caller on an
//! empty cache fetches from the [`HolidaySource`]; any failure installs the
//! fallback calendar as if it were the resolved value. The cache lives until
//! [`HolidayProvider::clear_cache`] is called.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::core::models::{HolidayCalendar, to_local};
use crate::core::ports::{CalendarFetchError, HolidaySource};

/// Where the resolved calendar came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarOrigin {
    /// The configured source answered with a usable list
    Source,
    /// The source failed and the fallback calendar is in effect
    Fallback,
}

#[derive(Debug, Clone)]
struct Resolved {
    calendar: Arc<HolidayCalendar>,
    origin: CalendarOrigin,
}

/// Cached, fallback-backed access to the holiday calendar
pub struct HolidayProvider {
    source: Box<dyn HolidaySource>,
    fallback: Arc<HolidayCalendar>,
    cache: RwLock<Option<Resolved>>,
    fetch_lock: Mutex<()>,
}

impl std::fmt::Debug for HolidayProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayProvider")
            .field("source", &self.source.describe())
            .field("cached", &self.is_cached())
            .finish_non_exhaustive()
    }
}

impl HolidayProvider {
    /// Provider over `source` with the embedded calendar as fallback
    pub fn new(source: impl HolidaySource + 'static) -> Self {
        Self::with_fallback(source, HolidayCalendar::fallback())
    }

    /// Provider over `source` with a custom fallback calendar
    pub fn with_fallback(source: impl HolidaySource + 'static, fallback: HolidayCalendar) -> Self {
        Self {
            source: Box::new(source),
            fallback: Arc::new(fallback),
            cache: RwLock::new(None),
            fetch_lock: Mutex::new(()),
        }
    }

    /// The resolved holiday calendar
    ///
    /// Never fails. Concurrent misses on the same provider are collapsed into
    /// a single fetch.
    pub fn holidays(&self) -> Arc<HolidayCalendar> {
        self.resolve().calendar
    }

    /// Origin of the calendar in effect, resolving it first if needed
    pub fn origin(&self) -> CalendarOrigin {
        self.resolve().origin
    }

    /// Description of the configured source
    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Whether the local civil date of `instant` is a holiday
    pub fn is_holiday(&self, instant: DateTime<Utc>) -> bool {
        self.holidays().contains(to_local(instant).date())
    }

    /// Number of holidays in the resolved calendar
    pub fn holidays_count(&self) -> usize {
        self.holidays().len()
    }

    /// Drop the cached calendar; the next lookup fetches again
    pub fn clear_cache(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
        log::debug!("Holiday cache cleared");
    }

    /// Whether a calendar is currently cached
    pub fn is_cached(&self) -> bool {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    fn cached(&self) -> Option<Resolved> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn resolve(&self) -> Resolved {
        if let Some(resolved) = self.cached() {
            log::debug!("Holiday cache hit ({} dates)", resolved.calendar.len());
            return resolved;
        }

        let _guard = self.fetch_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have filled the cache while we waited
        if let Some(resolved) = self.cached() {
            return resolved;
        }

        log::debug!("Holiday cache miss, fetching from {}", self.source.describe());
        let resolved = match self.load() {
            Ok(calendar) => {
                log::info!("Loaded {} holidays from {}", calendar.len(), self.source.describe());
                Resolved {
                    calendar: Arc::new(calendar),
                    origin: CalendarOrigin::Source,
                }
            },
            Err(e) => {
                log::warn!("Failed to fetch holidays from {}: {e}", self.source.describe());
                log::info!("Using fallback holiday data ({} dates)", self.fallback.len());
                Resolved {
                    calendar: Arc::clone(&self.fallback),
                    origin: CalendarOrigin::Fallback,
                }
            },
        };

        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(resolved.clone());
        resolved
    }

    fn load(&self) -> Result<HolidayCalendar, CalendarFetchError> {
        let entries = self.source.fetch()?;
        if entries.is_empty() {
            return Err(CalendarFetchError::Malformed("empty list".to_string()));
        }

        let calendar = HolidayCalendar::from_strings(&entries);
        if calendar.is_empty() {
            return Err(CalendarFetchError::Malformed(format!(
                "none of {} entries is a YYYY-MM-DD date",
                entries.len()
            )));
        }
        Ok(calendar)
    }
}
