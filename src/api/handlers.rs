//! Pure API handlers
//!
//! These handlers contain the request logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use chrono::{DateTime, Utc};

use crate::core::models::{HOLIDAY_DATE_FORMAT, format_instant};
use crate::core::services::WorkingTimeCalculator;

use super::error::ApiError;
use super::types::{HealthData, HolidaysData, WorkingDaysData, WorkingDaysQuery};
use super::validation::{ValidatedRequest, ValidationProfile};

/// Message returned for every unexpected calculation failure
pub const CALCULATION_FAILED: &str = "Unable to calculate working days";

// =============================================================================
// WORKING DAYS
// =============================================================================

/// Add working days/hours to the query's date (or `now`)
///
/// Validation failures map to `InvalidParameters`; any fault inside the
/// calculation maps to `ServiceUnavailable` with a generic message, the
/// detail going to the log only.
pub fn calculate_working_days(
    calculator: &WorkingTimeCalculator,
    query: &WorkingDaysQuery,
    profile: ValidationProfile,
    now: DateTime<Utc>,
) -> Result<WorkingDaysData, ApiError> {
    let request = profile.validate(query)?;
    calculate_validated(calculator, request, now)
}

/// Add working days/hours for an already validated request
///
/// Callers that need the validated inputs themselves (the CLI echoes them)
/// validate once and come through here.
pub fn calculate_validated(
    calculator: &WorkingTimeCalculator,
    request: ValidatedRequest,
    now: DateTime<Utc>,
) -> Result<WorkingDaysData, ApiError> {
    let start = request.start.unwrap_or(now);

    let result = calculator.add_working_time(start, request.duration).map_err(|e| {
        log::error!("Error calculating working days from {start}: {e}");
        ApiError::service_unavailable(CALCULATION_FAILED)
    })?;

    Ok(WorkingDaysData {
        date: format_instant(result),
    })
}

// =============================================================================
// HEALTH
// =============================================================================

/// Liveness report
#[must_use]
pub fn health() -> HealthData {
    HealthData {
        status: "OK".to_string(),
        message: "Service is healthy".to_string(),
    }
}

// =============================================================================
// HOLIDAYS
// =============================================================================

/// The resolved holiday calendar
#[must_use]
pub fn list_holidays(calculator: &WorkingTimeCalculator) -> HolidaysData {
    let calendar = calculator.provider().holidays();
    HolidaysData {
        count: calendar.len(),
        holidays: calendar
            .iter()
            .map(|d| d.format(HOLIDAY_DATE_FORMAT).to_string())
            .collect(),
    }
}
