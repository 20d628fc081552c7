//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a working-time calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalcResult {
    /// Start instant used (explicit or "now"), UTC
    pub start: String,
    /// Working days added
    pub days: f64,
    /// Working hours added
    pub hours: f64,
    /// Resulting instant, UTC
    pub date: String,
}

/// A failed request, mirroring the HTTP error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResult {
    /// Error code string
    pub error: String,
    /// Human-readable message
    pub message: String,
}

/// Result of listing the holiday calendar
#[derive(Debug, Clone, Serialize)]
pub struct HolidayListResult {
    /// Where the calendar came from
    pub source: String,
    /// Number of holidays
    pub count: usize,
    /// Holidays as `YYYY-MM-DD`
    pub holidays: Vec<String>,
}

impl CalcResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => println!("{}", to_json(self)),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        format!(
            "{}\n  from {} + {} day(s) {} hour(s)",
            self.date.green().bold(),
            self.start,
            self.days,
            self.hours
        )
    }
}

impl ErrorResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => eprintln!("{}", self.to_human()),
            OutputMode::Json => println!("{}", to_json(self)),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        format!("{} {}", format!("{}:", self.error).red().bold(), self.message)
    }
}

impl HolidayListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => println!("{}", to_json(self)),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.holidays.is_empty() {
            return format!("No holidays from {}.", self.source);
        }

        let mut out = format!("{} holiday(s) from {}:\n", self.count, self.source);
        for date in &self.holidays {
            out.push_str("  ");
            out.push_str(date);
            out.push('\n');
        }
        out
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
