//! Working-hours policy
//!
//! Defines the fixed daily window in which business time accrues, the lunch
//! exclusion inside it, and the regional offset all wall-clock rules are
//! evaluated against.

use chrono::{FixedOffset, NaiveTime, Timelike};

/// Regional UTC offset in seconds (UTC-05:00, no daylight saving)
pub const REGION_OFFSET_SECS: i32 = -5 * 3600;

/// The fixed regional offset used for every civil-date and time-of-day test
pub const REGION_OFFSET: FixedOffset = match FixedOffset::east_opt(REGION_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("region offset out of range"),
};

/// Daily working-hours window on a 24-hour clock
///
/// Invariant: `start < lunch_start < lunch_end < end <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    /// Day-open hour
    pub start: u32,
    /// Hour the lunch exclusion begins
    pub lunch_start: u32,
    /// Hour the lunch exclusion ends
    pub lunch_end: u32,
    /// Day-close hour
    pub end: u32,
}

/// The one policy the service runs with
pub const WORKING_HOURS: WorkingHours = WorkingHours {
    start: 8,
    lunch_start: 12,
    lunch_end: 13,
    end: 17,
};

/// Where a local time-of-day falls relative to the working window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    /// Before day-open
    BeforeOpen,
    /// Morning session, `[start, lunch_start)`
    Morning,
    /// Lunch exclusion, `[lunch_start, lunch_end)`
    Lunch,
    /// Afternoon session, `[lunch_end, end)`
    Afternoon,
    /// At or after day-close
    AfterClose,
}

impl DayPhase {
    /// Whether time in this phase counts as business time
    #[must_use]
    pub const fn is_in_session(self) -> bool {
        matches!(self, Self::Morning | Self::Afternoon)
    }
}

impl WorkingHours {
    /// Net business hours per day (lunch excluded)
    #[must_use]
    pub const fn day_hours(&self) -> u32 {
        (self.end - self.start) - (self.lunch_end - self.lunch_start)
    }

    /// Whether the hour boundaries satisfy the ordering invariant
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.start < self.lunch_start
            && self.lunch_start < self.lunch_end
            && self.lunch_end < self.end
            && self.end <= 24
    }

    /// Day-open time
    #[must_use]
    pub fn open(&self) -> NaiveTime {
        hour_time(self.start)
    }

    /// End of lunch, where the afternoon session resumes
    #[must_use]
    pub fn resume(&self) -> NaiveTime {
        hour_time(self.lunch_end)
    }

    /// Classify a time-of-day
    ///
    /// Only the hour is consulted, so `11:59:59.999` is still morning and
    /// `12:00:00` is lunch.
    #[must_use]
    pub fn phase(&self, time: NaiveTime) -> DayPhase {
        let hour = time.hour();
        if hour < self.start {
            DayPhase::BeforeOpen
        } else if hour >= self.end {
            DayPhase::AfterClose
        } else if hour >= self.lunch_start && hour < self.lunch_end {
            DayPhase::Lunch
        } else if hour < self.lunch_start {
            DayPhase::Morning
        } else {
            DayPhase::Afternoon
        }
    }

    /// Hour that closes the session `phase` belongs to
    ///
    /// Returns `None` outside the two sessions. The hour may be 24 when the
    /// afternoon runs to midnight.
    #[must_use]
    pub const fn session_close_hour(&self, phase: DayPhase) -> Option<u32> {
        match phase {
            DayPhase::Morning => Some(self.lunch_start),
            DayPhase::Afternoon => Some(self.end),
            _ => None,
        }
    }
}

fn hour_time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}
