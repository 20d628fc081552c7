//! Tests for start-instant normalization

use chrono::{NaiveDate, NaiveDateTime};
use workdays::core::models::{HolidayCalendar, WORKING_HOURS};
use workdays::core::services::{is_business_instant, next_business_date, normalize};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn norm(s: &str) -> NaiveDateTime {
    normalize(at(s), &HolidayCalendar::fallback(), &WORKING_HOURS).unwrap()
}

// =============================================================================
// NORMALIZE
// =============================================================================

#[test]
fn test_in_session_is_unchanged() {
    assert_eq!(norm("2025-04-09 10:15:42"), at("2025-04-09 10:15:42"));
    assert_eq!(norm("2025-04-09 13:00:00"), at("2025-04-09 13:00:00"));
    assert_eq!(norm("2025-04-09 16:59:59"), at("2025-04-09 16:59:59"));
}

#[test]
fn test_before_open_moves_to_open() {
    assert_eq!(norm("2025-04-09 07:30:00"), at("2025-04-09 08:00:00"));
    assert_eq!(norm("2025-04-09 00:00:00"), at("2025-04-09 08:00:00"));
}

#[test]
fn test_lunch_moves_to_resume() {
    assert_eq!(norm("2025-04-09 12:00:00"), at("2025-04-09 13:00:00"));
    assert_eq!(norm("2025-04-09 12:59:59"), at("2025-04-09 13:00:00"));
}

#[test]
fn test_close_moves_to_next_business_day() {
    assert_eq!(norm("2025-04-09 17:00:00"), at("2025-04-10 08:00:00"));
    assert_eq!(norm("2025-04-09 23:59:59"), at("2025-04-10 08:00:00"));
}

#[test]
fn test_friday_evening_moves_to_monday() {
    assert_eq!(norm("2025-04-11 17:00:00"), at("2025-04-14 08:00:00"));
}

#[test]
fn test_weekend_moves_to_monday_open() {
    assert_eq!(norm("2025-04-12 14:00:00"), at("2025-04-14 08:00:00"));
    assert_eq!(norm("2025-04-13 07:00:00"), at("2025-04-14 08:00:00"));
}

#[test]
fn test_holiday_run_is_skipped() {
    // Wednesday after close, then Thu 17 and Fri 18 are holidays
    assert_eq!(norm("2025-04-16 18:00:00"), at("2025-04-21 08:00:00"));
    assert_eq!(norm("2025-04-17 10:00:00"), at("2025-04-21 08:00:00"));
}

#[test]
fn test_normalize_is_idempotent() {
    for s in ["2025-04-09 07:00:00", "2025-04-09 12:30:00", "2025-04-11 20:00:00", "2025-12-24 17:00:00"] {
        let once = norm(s);
        let twice = normalize(once, &HolidayCalendar::fallback(), &WORKING_HOURS).unwrap();
        assert_eq!(once, twice, "{s}");
    }
}

#[test]
fn test_custom_calendar_is_honored() {
    let calendar = HolidayCalendar::from_strings(["2030-01-01"]);
    let result = normalize(at("2029-12-31 17:30:00"), &calendar, &WORKING_HOURS).unwrap();
    assert_eq!(result, at("2030-01-02 08:00:00"));
}

// =============================================================================
// BUSINESS INSTANTS AND DATES
// =============================================================================

#[test]
fn test_is_business_instant() {
    let calendar = HolidayCalendar::fallback();
    assert!(is_business_instant(at("2025-04-09 08:00:00"), &calendar, &WORKING_HOURS));
    assert!(is_business_instant(at("2025-04-09 11:59:59"), &calendar, &WORKING_HOURS));
    assert!(!is_business_instant(at("2025-04-09 12:00:00"), &calendar, &WORKING_HOURS));
    assert!(!is_business_instant(at("2025-04-09 17:00:00"), &calendar, &WORKING_HOURS));
    assert!(!is_business_instant(at("2025-04-12 10:00:00"), &calendar, &WORKING_HOURS));
    assert!(!is_business_instant(at("2025-04-17 10:00:00"), &calendar, &WORKING_HOURS));
}

#[test]
fn test_next_business_date() {
    let calendar = HolidayCalendar::fallback();
    assert_eq!(next_business_date(date("2025-04-09"), &calendar).unwrap(), date("2025-04-10"));
    assert_eq!(next_business_date(date("2025-04-11"), &calendar).unwrap(), date("2025-04-14"));
    assert_eq!(next_business_date(date("2025-04-16"), &calendar).unwrap(), date("2025-04-21"));
    assert_eq!(next_business_date(date("2025-12-24"), &calendar).unwrap(), date("2025-12-26"));
}
