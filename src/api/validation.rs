//! Request validation profiles
//!
//! Deployments have disagreed on what the endpoint accepts, so the rules are
//! a pluggable profile:
//!
//! - [`ValidationProfile::Lenient`] - non-negative rational days and hours,
//!   dates with any explicit offset
//! - [`ValidationProfile::Strict`] - positive integer days, positive hours,
//!   dates in UTC (`Z`) only
//!
//! Both require at least one of `days`/`hours`. Empty values count as absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::types::WorkingDaysQuery;
use crate::core::models::{WorkDuration, parse_instant};

/// Which validation rules the boundary applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationProfile {
    /// Non-negative rationals, any explicit offset
    #[default]
    Lenient,
    /// Positive integer days, positive hours, `Z` dates
    Strict,
}

impl std::fmt::Display for ValidationProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for ValidationProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Invalid validation profile: {s}. Use: lenient, strict")),
        }
    }
}

/// A query that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    /// Duration to add
    pub duration: WorkDuration,
    /// Explicit start, if the query carried one
    pub start: Option<DateTime<Utc>>,
}

impl ValidationProfile {
    /// Check `query` and convert it into core inputs
    pub fn validate(self, query: &WorkingDaysQuery) -> Result<ValidatedRequest, ApiError> {
        let days = present(query.days.as_deref());
        let hours = present(query.hours.as_deref());
        if days.is_none() && hours.is_none() {
            return Err(ApiError::invalid_parameters(
                "At least one parameter (days or hours) must be provided",
            ));
        }

        let days = days.map(|raw| self.parse_days(raw)).transpose()?.unwrap_or(0.0);
        let hours = hours.map(|raw| self.parse_hours(raw)).transpose()?.unwrap_or(0.0);
        let start = query.date.as_deref().map(|raw| self.parse_date(raw)).transpose()?;

        Ok(ValidatedRequest {
            duration: WorkDuration::new(days, hours),
            start,
        })
    }

    fn parse_days(self, raw: &str) -> Result<f64, ApiError> {
        let value = parse_number(raw);
        match self {
            Self::Lenient => value
                .filter(|v| *v >= 0.0)
                .ok_or_else(|| ApiError::invalid_parameters("Days must be a non-negative number")),
            Self::Strict => value
                .filter(|v| *v > 0.0 && v.fract() == 0.0)
                .ok_or_else(|| ApiError::invalid_parameters("Days parameter must be a positive integer")),
        }
    }

    fn parse_hours(self, raw: &str) -> Result<f64, ApiError> {
        let value = parse_number(raw);
        match self {
            Self::Lenient => value
                .filter(|v| *v >= 0.0)
                .ok_or_else(|| ApiError::invalid_parameters("Hours must be a non-negative number")),
            Self::Strict => value
                .filter(|v| *v > 0.0)
                .ok_or_else(|| ApiError::invalid_parameters("Hours parameter must be a positive number")),
        }
    }

    fn parse_date(self, raw: &str) -> Result<DateTime<Utc>, ApiError> {
        match self {
            Self::Lenient => parse_instant(raw, false).map_err(|_| {
                ApiError::invalid_parameters(
                    "Date must be a valid ISO 8601 string with offset (e.g., '2025-04-10T15:00:00.000Z')",
                )
            }),
            Self::Strict => {
                if !raw.trim().ends_with('Z') {
                    return Err(ApiError::invalid_parameters(
                        "Date parameter must be a valid ISO 8601 string with Z suffix",
                    ));
                }
                parse_instant(raw, true)
                    .map_err(|_| ApiError::invalid_parameters("Date parameter must be a valid ISO 8601 date"))
            },
        }
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
