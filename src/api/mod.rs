//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure handlers
//! that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by clients (the CLI `calc` command).
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation
//! - **Validation is pluggable**: `ValidationProfile` selects the accepted inputs

mod error;
mod handlers;
mod types;
mod validation;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{CALCULATION_FAILED, calculate_validated, calculate_working_days, health, list_holidays};
pub use types::{HealthData, HolidaysData, WorkingDaysData, WorkingDaysQuery};
pub use validation::{ValidatedRequest, ValidationProfile};
