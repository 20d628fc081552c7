//! HTTP server adapters
//!
//! This module provides adapters that translate between HTTP frameworks
//! and the HTTP-agnostic API layer.
//!
//! Currently supported:
//! - `tiny_http` - Lightweight blocking HTTP server

pub mod tiny_http;

use chrono::{DateTime, Utc};

use crate::api::ValidationProfile;
use crate::core::services::WorkingTimeCalculator;

/// Everything a request handler needs, shared by all workers
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Business-time calculator (owns the holiday cache)
    pub calculator: WorkingTimeCalculator,
    /// Validation rules for incoming queries
    pub profile: ValidationProfile,
    /// Source of "now" for requests without a date
    pub clock: fn() -> DateTime<Utc>,
}

impl ServerState {
    /// State using the system clock
    #[must_use]
    pub fn new(calculator: WorkingTimeCalculator, profile: ValidationProfile) -> Self {
        Self {
            calculator,
            profile,
            clock: Utc::now,
        }
    }

    /// Replace the clock, for deterministic tests
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}
