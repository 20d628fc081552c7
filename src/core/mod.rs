//! Core business-time logic
//!
//! This module contains the arithmetic engine. The only external input is
//! the holiday list, abstracted through the [`ports::HolidaySource`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (WorkingHours, WorkDuration, HolidayCalendar)
//! - `services/` - Normalizer, distributor and the cached holiday provider
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
