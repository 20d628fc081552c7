//! Calc command - one calculation through the API handler

use std::process::ExitCode;

use chrono::{SubsecRound, Utc};

use workdays::api::{self, ApiErrorData, WorkingDaysQuery};
use workdays::config::ServiceConfig;
use workdays::core::models::format_instant;
use workdays::output::{CalcResult, ErrorResult, OutputMode};

/// Add working time and print the resulting instant
///
/// Invalid input or a failed calculation prints the error body and exits 1.
pub fn calc(
    config: &ServiceConfig,
    days: Option<String>,
    hours: Option<String>,
    date: Option<String>,
    output_mode: OutputMode,
) -> ExitCode {
    let calculator = workdays::build_calculator(&config.holidays);
    let profile = config.validation.profile;
    let query = WorkingDaysQuery { days, hours, date };
    let now = Utc::now().trunc_subsecs(3);

    let outcome = profile.validate(&query).and_then(|request| {
        api::calculate_validated(&calculator, request, now).map(|data| (request, data))
    });

    match outcome {
        Ok((request, data)) => {
            CalcResult {
                start: format_instant(request.start.unwrap_or(now)),
                days: request.duration.days,
                hours: request.duration.hours,
                date: data.date,
            }
            .render(output_mode);
            ExitCode::SUCCESS
        },
        Err(e) => {
            let body = ApiErrorData::from(&e);
            ErrorResult {
                error: body.error,
                message: body.message,
            }
            .render(output_mode);
            ExitCode::FAILURE
        },
    }
}
