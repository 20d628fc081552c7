//! Duration distributor
//!
//! Applies a [`WorkDuration`] to a wall-clock time:
//!
//! 1. split days into whole days and a fractional remainder (converted to
//!    working hours)
//! 2. normalize the start
//! 3. step over whole business days, pinning the clock to day-open
//! 4. consume the remaining whole minutes inside working sessions only
//!
//! Step 4 advances a whole session at a time instead of minute by minute.
//! From an in-session instant `t` whose session closes at `B`, a
//! minute-by-minute scan takes exactly `ceil((B - t) / 1min)` steps before
//! leaving the session, so consuming `min(remaining, that)` minutes in one
//! jump lands on the same instant the scan would.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use super::error::CalcError;
use super::normalizer::{next_business_date, normalize};
use crate::core::models::{DayPhase, HolidayCalendar, WorkDuration, WorkingHours};

const NANOS_PER_MINUTE: u64 = 60_000_000_000;

/// Add `duration` of business time to `start`
pub fn add_working_time(
    start: NaiveDateTime,
    duration: WorkDuration,
    calendar: &HolidayCalendar,
    policy: &WorkingHours,
) -> Result<NaiveDateTime, CalcError> {
    if !duration.is_valid() {
        return Err(CalcError::InvalidDuration);
    }

    let mut current = normalize(start, calendar, policy)?;
    if duration.is_zero() {
        return Ok(current);
    }

    // Every business day or full session day takes at least one calendar day
    let whole_days = duration.whole_days();
    let minutes = duration.remaining_minutes(policy);
    let session_days = minutes / (u64::from(policy.day_hours()) * 60).max(1);
    if whole_days.saturating_add(session_days) > days_left(current.date()) {
        return Err(CalcError::OutOfRange);
    }

    if whole_days > 0 {
        let mut date = current.date();
        for _ in 0..whole_days {
            date = next_business_date(date, calendar)?;
        }
        current = date.and_time(policy.open());
    }

    consume_minutes(current, minutes, calendar, policy)
}

/// Calendar days between `date` and the last representable date
fn days_left(date: NaiveDate) -> u64 {
    u64::try_from((NaiveDate::MAX - date).num_days()).unwrap_or(0)
}

/// Walk `minutes` of in-session time forward from `start`
fn consume_minutes(
    start: NaiveDateTime,
    minutes: u64,
    calendar: &HolidayCalendar,
    policy: &WorkingHours,
) -> Result<NaiveDateTime, CalcError> {
    let mut current = start;
    let mut remaining = minutes;

    while remaining > 0 {
        let date = current.date();
        if !calendar.is_business_day(date) {
            current = next_business_date(date, calendar)?.and_time(policy.open());
            continue;
        }

        let phase = policy.phase(current.time());
        match phase {
            DayPhase::BeforeOpen => current = date.and_time(policy.open()),
            DayPhase::Lunch => current = date.and_time(policy.resume()),
            DayPhase::AfterClose => {
                current = next_business_date(date, calendar)?.and_time(policy.open());
            },
            DayPhase::Morning | DayPhase::Afternoon => {
                let close_hour = policy.session_close_hour(phase).ok_or(CalcError::OutOfRange)?;
                let close = date
                    .and_time(NaiveTime::MIN)
                    .checked_add_signed(TimeDelta::hours(i64::from(close_hour)))
                    .ok_or(CalcError::OutOfRange)?;
                let available = minutes_until(current, close);
                let step = remaining.min(available);

                let delta = i64::try_from(step)
                    .ok()
                    .and_then(TimeDelta::try_minutes)
                    .ok_or(CalcError::OutOfRange)?;
                current = current.checked_add_signed(delta).ok_or(CalcError::OutOfRange)?;
                remaining -= step;
            },
        }
    }

    Ok(current)
}

/// Whole minutes the scan would spend before reaching `close`, at least one
fn minutes_until(from: NaiveDateTime, close: NaiveDateTime) -> u64 {
    let nanos = (close - from).num_nanoseconds().unwrap_or(0);
    u64::try_from(nanos).unwrap_or(0).div_ceil(NANOS_PER_MINUTE).max(1)
}
