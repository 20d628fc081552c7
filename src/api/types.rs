//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Query parameters of the working-days endpoint
///
/// Values stay raw strings until a validation profile interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WorkingDaysQuery {
    /// Working days to add
    #[serde(default)]
    pub days: Option<String>,
    /// Working hours to add
    #[serde(default)]
    pub hours: Option<String>,
    /// Start instant (RFC 3339); "now" when absent
    #[serde(default)]
    pub date: Option<String>,
}

impl WorkingDaysQuery {
    /// Build a query from optional raw values
    #[must_use]
    pub fn new(days: Option<&str>, hours: Option<&str>, date: Option<&str>) -> Self {
        Self {
            days: days.map(String::from),
            hours: hours.map(String::from),
            date: date.map(String::from),
        }
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Working-days endpoint response data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysData {
    /// Resulting instant, `YYYY-MM-DDTHH:mm:ss.sssZ`
    pub date: String,
}

/// Health endpoint response data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
    /// Always `OK` while the process serves requests
    pub status: String,
    /// Human-readable status
    pub message: String,
}

/// Holiday listing response data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidaysData {
    /// Number of holidays
    pub count: usize,
    /// Holidays as `YYYY-MM-DD`, ascending
    pub holidays: Vec<String>,
}
