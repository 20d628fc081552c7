//! workdays - Business-time arithmetic service
//!
//! Given a reference instant and a quantity of working days and/or hours,
//! computes the resulting instant while honoring the daily working window,
//! the lunch exclusion, weekends and the holiday calendar.
//!
//! The library exposes the arithmetic core, the HTTP-agnostic API layer and
//! a `tiny_http` server adapter; the binary wraps them in a CLI.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod server;

use std::sync::Arc;

use crate::adapters::{RemoteHolidaySource, StaticHolidaySource};
use crate::config::HolidaysConfig;
use crate::core::services::{HolidayProvider, WorkingTimeCalculator};

/// Build a calculator whose holiday provider follows `config`
///
/// Offline mode serves the embedded calendar without network access. If the
/// HTTP client cannot be built the embedded calendar is used as well.
#[must_use]
pub fn build_calculator(config: &HolidaysConfig) -> WorkingTimeCalculator {
    let provider = if config.offline {
        HolidayProvider::new(StaticHolidaySource::embedded())
    } else {
        match RemoteHolidaySource::new(&config.url, config.timeout()) {
            Ok(source) => HolidayProvider::new(source),
            Err(e) => {
                log::warn!("Cannot reach {}: {e}", config.url);
                HolidayProvider::new(StaticHolidaySource::embedded())
            },
        }
    };
    WorkingTimeCalculator::new(Arc::new(provider))
}
