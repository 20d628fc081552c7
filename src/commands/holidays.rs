//! Holidays command - show the calendar in effect

use workdays::api;
use workdays::config::ServiceConfig;
use workdays::core::services::CalendarOrigin;
use workdays::output::{HolidayListResult, OutputMode};

/// Resolve the holiday calendar and print it with its actual origin
pub fn holidays(config: &ServiceConfig, output_mode: OutputMode) {
    let calculator = workdays::build_calculator(&config.holidays);
    let data = api::list_holidays(&calculator);

    let provider = calculator.provider();
    let source = match provider.origin() {
        CalendarOrigin::Source => provider.describe_source(),
        CalendarOrigin::Fallback => format!("fallback list ({} unavailable)", provider.describe_source()),
    };

    HolidayListResult {
        source,
        count: data.count,
        holidays: data.holidays,
    }
    .render(output_mode);
}
