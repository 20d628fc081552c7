//! Working-time calculator
//!
//! Resolves the holiday calendar once per call, then runs the synchronous
//! normalizer and distributor against it in regional wall-clock time.
//! Instants are truncated to milliseconds on the way in, the precision of
//! the wire format.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};

use super::calendar::HolidayProvider;
use super::error::CalcError;
use super::{distributor, normalizer};
use crate::core::models::{WORKING_HOURS, WorkDuration, WorkingHours, from_local, to_local};

/// Business-time arithmetic over a shared holiday provider
#[derive(Debug, Clone)]
pub struct WorkingTimeCalculator {
    provider: Arc<HolidayProvider>,
    policy: WorkingHours,
}

impl WorkingTimeCalculator {
    /// Calculator using the standard working-hours policy
    #[must_use]
    pub const fn new(provider: Arc<HolidayProvider>) -> Self {
        Self {
            provider,
            policy: WORKING_HOURS,
        }
    }

    /// The holiday provider this calculator consults
    #[must_use]
    pub const fn provider(&self) -> &Arc<HolidayProvider> {
        &self.provider
    }

    /// Add business days and hours to `start`
    pub fn add_working_time(
        &self,
        start: DateTime<Utc>,
        duration: WorkDuration,
    ) -> Result<DateTime<Utc>, CalcError> {
        let start = start.trunc_subsecs(3);
        let calendar = self.provider.holidays();
        let local = distributor::add_working_time(to_local(start), duration, &calendar, &self.policy)?;
        let result = from_local(local).ok_or(CalcError::OutOfRange)?;
        log::debug!(
            "{start} + {} days {} hours -> {result}",
            duration.days,
            duration.hours
        );
        Ok(result)
    }

    /// Nearest business instant at or after `instant`
    pub fn normalize(&self, instant: DateTime<Utc>) -> Result<DateTime<Utc>, CalcError> {
        let calendar = self.provider.holidays();
        let local = normalizer::normalize(to_local(instant.trunc_subsecs(3)), &calendar, &self.policy)?;
        from_local(local).ok_or(CalcError::OutOfRange)
    }

    /// Whether `instant` falls on business time
    pub fn is_business_instant(&self, instant: DateTime<Utc>) -> bool {
        let calendar = self.provider.holidays();
        normalizer::is_business_instant(to_local(instant), &calendar, &self.policy)
    }
}
