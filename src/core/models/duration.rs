//! Requested amounts of business time
//!
//! A [`WorkDuration`] carries non-negative rational days and hours. Days are
//! split into whole days (calendar stepping) and a fractional remainder that
//! is converted to hours of a working day.

use super::working_hours::WorkingHours;

/// Absorbs binary representation error when converting decimal hours to
/// minutes, so `4.35` hours counts as 261 minutes and not 260.
const MINUTE_EPSILON: f64 = 1e-9;

/// A (days, hours) quantity of business time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkDuration {
    /// Working days, possibly fractional
    pub days: f64,
    /// Working hours, possibly fractional
    pub hours: f64,
}

impl WorkDuration {
    /// Create a duration from days and hours
    #[must_use]
    pub const fn new(days: f64, hours: f64) -> Self {
        Self { days, hours }
    }

    /// Duration of whole and fractional working days only
    #[must_use]
    pub const fn days(days: f64) -> Self {
        Self { days, hours: 0.0 }
    }

    /// Duration of working hours only
    #[must_use]
    pub const fn hours(hours: f64) -> Self {
        Self { days: 0.0, hours }
    }

    /// Whether both components are finite and non-negative
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.days.is_finite() && self.hours.is_finite() && self.days >= 0.0 && self.hours >= 0.0
    }

    /// Whether the duration moves time at all
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.days == 0.0 && self.hours == 0.0
    }

    /// Number of whole days to step over
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn whole_days(&self) -> u64 {
        self.days.trunc() as u64
    }

    /// Fractional part of `days`, in `[0, 1)`
    #[must_use]
    pub fn fractional_day(&self) -> f64 {
        self.days.fract()
    }

    /// Hours left to consume once whole days are stepped over
    ///
    /// This is `hours` plus the fractional day expressed in working hours.
    #[must_use]
    pub fn remaining_hours(&self, policy: &WorkingHours) -> f64 {
        self.hours + self.fractional_day() * f64::from(policy.day_hours())
    }

    /// Whole minutes to consume after the whole-day advance
    ///
    /// Sub-minute remainders are truncated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_minutes(&self, policy: &WorkingHours) -> u64 {
        (self.remaining_hours(policy) * 60.0 + MINUTE_EPSILON).floor() as u64
    }
}
