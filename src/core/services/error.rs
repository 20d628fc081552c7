//! Errors raised by business-time arithmetic

use thiserror::Error;

/// Faults during a calculation
///
/// Callers treat every variant as an unexpected computation failure; the
/// holiday fetch never surfaces here.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Days or hours were negative, NaN or infinite
    #[error("duration must be finite and non-negative")]
    InvalidDuration,

    /// Date arithmetic ran past the representable range
    #[error("date arithmetic out of range")]
    OutOfRange,
}
