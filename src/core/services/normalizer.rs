//! Business-time normalizer
//!
//! Maps any wall-clock time to the nearest business instant at or after it.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::CalcError;
use crate::core::models::{DayPhase, HolidayCalendar, WorkingHours};

/// Move `local` forward to the nearest business instant
///
/// - non-business date: next date at day-open, re-checked
/// - before open: day-open, same date
/// - at or after close: next date at day-open, re-checked
/// - lunch: end of lunch, same date
/// - in session: unchanged
///
/// Never moves backwards, and `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(
    local: NaiveDateTime,
    calendar: &HolidayCalendar,
    policy: &WorkingHours,
) -> Result<NaiveDateTime, CalcError> {
    let mut current = local;
    loop {
        let date = current.date();
        if !calendar.is_business_day(date) {
            current = next_date(date)?.and_time(policy.open());
            continue;
        }

        match policy.phase(current.time()) {
            DayPhase::BeforeOpen => return Ok(date.and_time(policy.open())),
            DayPhase::AfterClose => current = next_date(date)?.and_time(policy.open()),
            DayPhase::Lunch => return Ok(date.and_time(policy.resume())),
            DayPhase::Morning | DayPhase::Afternoon => return Ok(current),
        }
    }
}

/// Whether `local` is a business instant
#[must_use]
pub fn is_business_instant(local: NaiveDateTime, calendar: &HolidayCalendar, policy: &WorkingHours) -> bool {
    calendar.is_business_day(local.date()) && policy.phase(local.time()).is_in_session()
}

/// The first business date strictly after `date`
pub fn next_business_date(date: NaiveDate, calendar: &HolidayCalendar) -> Result<NaiveDate, CalcError> {
    let mut next = next_date(date)?;
    while !calendar.is_business_day(next) {
        next = next_date(next)?;
    }
    Ok(next)
}

fn next_date(date: NaiveDate) -> Result<NaiveDate, CalcError> {
    date.succ_opt().ok_or(CalcError::OutOfRange)
}
