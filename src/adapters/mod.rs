//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - Remote holiday list fetched with `reqwest`
//! - `embedded/` - Static in-process holiday lists

pub mod embedded;
pub mod http;

pub use embedded::StaticHolidaySource;
pub use http::{DEFAULT_HOLIDAYS_URL, DEFAULT_TIMEOUT, RemoteHolidaySource};
