//! Holiday source port
//!
//! Defines the interface for obtaining the raw holiday list.

use thiserror::Error;

/// Errors a holiday source can report
///
/// These never reach callers of the calculator: the provider absorbs them
/// and installs the fallback calendar.
#[derive(Debug, Error)]
pub enum CalendarFetchError {
    /// Transport failure (connect, timeout, TLS)
    #[error("request failed: {0}")]
    Transport(String),

    /// The source answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not a usable list of dates
    #[error("malformed holiday list: {0}")]
    Malformed(String),
}

/// A place holiday dates come from
///
/// Implementations return the dates as `YYYY-MM-DD` strings exactly as the
/// source lists them; parsing and caching belong to the provider.
#[cfg_attr(test, mockall::automock)]
pub trait HolidaySource: Send + Sync {
    /// Fetch the holiday list in a single bounded attempt
    fn fetch(&self) -> Result<Vec<String>, CalendarFetchError>;

    /// Short human-readable description of the source, for logs
    fn describe(&self) -> String;
}
