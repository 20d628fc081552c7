//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the business-time core and
//! the outside world. Implementations live in the `adapters` module.
//!
//! The core depends only on these traits, so tests can substitute
//! in-memory sources for the remote holiday list.

mod holiday_source;

#[cfg(test)]
pub use holiday_source::MockHolidaySource;
pub use holiday_source::{CalendarFetchError, HolidaySource};
