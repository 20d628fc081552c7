//! Remote holiday list over HTTP
//!
//! Implements `HolidaySource` with a blocking `reqwest` client: one GET with
//! a bounded timeout, expecting a JSON array of `YYYY-MM-DD` strings.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::core::ports::{CalendarFetchError, HolidaySource};

/// Public list of Colombian holidays the service reads by default
pub const DEFAULT_HOLIDAYS_URL: &str = "https://content.capta.co/Recruitment/WorkingDays.json";

/// Per-attempt timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Holiday list fetched from a URL
#[derive(Debug, Clone)]
pub struct RemoteHolidaySource {
    client: Client,
    url: String,
}

impl RemoteHolidaySource {
    /// Source reading `url` with the given per-request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CalendarFetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CalendarFetchError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The URL this source reads
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl HolidaySource for RemoteHolidaySource {
    fn fetch(&self) -> Result<Vec<String>, CalendarFetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| CalendarFetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalendarFetchError::Status(status.as_u16()));
        }

        response
            .json::<Vec<String>>()
            .map_err(|e| CalendarFetchError::Malformed(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
