//! Domain models for business-time arithmetic
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`WorkingHours`] - The daily working window and lunch exclusion
//! - [`WorkDuration`] - A requested (days, hours) quantity
//! - [`HolidayCalendar`] - Dates excluded from business days
//! - [`instant`] helpers - Regional wall-clock conversion and formatting

mod duration;
mod holiday;
pub mod instant;
mod working_hours;

pub use duration::WorkDuration;
pub use holiday::{FALLBACK_HOLIDAYS, HOLIDAY_DATE_FORMAT, HolidayCalendar};
pub use instant::{ParseInstantError, format_instant, from_local, parse_instant, to_local};
pub use working_hours::{DayPhase, REGION_OFFSET, REGION_OFFSET_SECS, WORKING_HOURS, WorkingHours};
