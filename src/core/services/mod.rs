//! Business-time services
//!
//! - [`calendar`] - Cached holiday calendar with static fallback
//! - [`normalizer`] - Snap any instant forward to business time
//! - [`distributor`] - Apply a (days, hours) duration
//! - [`calculator`] - Facade tying the three together over UTC instants
//!
//! The normalizer and distributor are pure functions of a wall-clock time, a
//! resolved [`HolidayCalendar`](crate::core::models::HolidayCalendar) and the
//! working-hours policy.

pub mod calculator;
pub mod calendar;
pub mod distributor;
mod error;
pub mod normalizer;

pub use calculator::WorkingTimeCalculator;
pub use calendar::{CalendarOrigin, HolidayProvider};
pub use distributor::add_working_time;
pub use error::CalcError;
pub use normalizer::{is_business_instant, next_business_date, normalize};
