//! Property-based tests for business-time arithmetic
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chrono::{DateTime, NaiveTime, TimeDelta, Timelike, Utc};
use proptest::prelude::*;
use workdays::core::models::{WorkDuration, format_instant, parse_instant, to_local};
use workdays::core::services::WorkingTimeCalculator;

use crate::common::{offline_calculator, utc};

/// Whole-minute instants spread over 2025
fn instant_2025() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365 * 24 * 60).prop_map(|minutes| utc("2025-01-01T00:00:00Z") + TimeDelta::minutes(minutes))
}

/// Hours in quarter-hour steps
fn quarter_hours(max: u32) -> impl Strategy<Value = f64> {
    (0..=max * 4).prop_map(|q| f64::from(q) / 4.0)
}

fn add(calculator: &WorkingTimeCalculator, start: DateTime<Utc>, days: f64, hours: f64) -> DateTime<Utc> {
    calculator
        .add_working_time(start, WorkDuration::new(days, hours))
        .unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

proptest! {
    /// Normalizing twice changes nothing
    #[test]
    fn normalize_is_idempotent(start in instant_2025()) {
        let calculator = offline_calculator();
        let once = calculator.normalize(start).unwrap();
        prop_assert_eq!(calculator.normalize(once).unwrap(), once);
    }

    /// A normalized instant is business time
    #[test]
    fn normalize_lands_on_business_time(start in instant_2025()) {
        let calculator = offline_calculator();
        let normalized = calculator.normalize(start).unwrap();
        prop_assert!(normalized >= start);
        prop_assert!(calculator.is_business_instant(normalized));
    }

    /// Adding business time never moves backwards, and more hours never end earlier
    #[test]
    fn adding_is_monotonic(
        start in instant_2025(),
        days in 0u32..10,
        hours in quarter_hours(40),
        extra in quarter_hours(10),
    ) {
        let calculator = offline_calculator();
        let days = f64::from(days);
        let result = add(&calculator, start, days, hours);
        prop_assert!(result >= start);
        prop_assert!(add(&calculator, start, days, hours + extra) >= result);
    }

    /// Results of a positive hour count fall in a session, never inside lunch
    #[test]
    fn result_is_inside_a_session(start in instant_2025(), hours in 1u32..60) {
        let calculator = offline_calculator();
        let result = to_local(add(&calculator, start, 0.0, f64::from(hours)));
        let time = result.time();
        let morning = time > hm(8, 0) && time <= hm(12, 0);
        let afternoon = time > hm(13, 0) && time <= hm(17, 0);
        prop_assert!(morning || afternoon, "landed at {}", result);
        prop_assert!(calculator.provider().holidays().is_business_day(result.date()));
    }

    /// Splitting hours into two additions gives the same result
    ///
    /// The second part must be positive: a zero addition normalizes, which
    /// moves an instant sitting exactly at noon or close.
    #[test]
    fn hours_are_additive(
        start in instant_2025(),
        first in quarter_hours(20),
        second in (1u32..=80).prop_map(|q| f64::from(q) / 4.0),
    ) {
        let calculator = offline_calculator();
        let split = add(&calculator, add(&calculator, start, 0.0, first), 0.0, second);
        prop_assert_eq!(split, add(&calculator, start, 0.0, first + second));
    }

    /// Half a day is four working hours from the normalized start
    #[test]
    fn half_day_is_four_hours(start in instant_2025()) {
        let calculator = offline_calculator();
        let normalized = calculator.normalize(start).unwrap();
        prop_assert_eq!(add(&calculator, start, 0.5, 0.0), add(&calculator, normalized, 0.0, 4.0));
    }

    /// Whole days land on a business day at opening time
    #[test]
    fn whole_days_land_on_open(start in instant_2025(), days in 1u32..30) {
        let calculator = offline_calculator();
        let result = to_local(add(&calculator, start, f64::from(days), 0.0));
        prop_assert_eq!(result.time(), hm(8, 0));
        prop_assert!(calculator.provider().holidays().is_business_day(result.date()));
    }

    /// Results survive a format and parse round trip
    #[test]
    fn format_round_trips(start in instant_2025(), hours in quarter_hours(30), nanos in 0u32..1_000_000_000) {
        let calculator = offline_calculator();
        let start = start.with_nanosecond(nanos).unwrap();
        let result = add(&calculator, start, 0.0, hours);
        let formatted = format_instant(result);
        prop_assert!(formatted.ends_with('Z'));
        prop_assert_eq!(parse_instant(&formatted, true).unwrap(), result);
    }
}
