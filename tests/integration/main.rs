//! Integration tests for the workdays CLI
//!
//! These run the built binary against the embedded holiday calendar, with a
//! config path inside a temp dir so no user configuration leaks in.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a workdays command with an isolated config
fn workdays(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("workdays"));
    cmd.arg("--config")
        .arg(temp.path().join("config.toml"))
        .env_remove("HOLIDAYS_API_URL");
    cmd
}

// =============================================================================
// CALC
// =============================================================================

#[test]
fn test_calc_friday_after_close() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .args(["calc", "--offline", "--hours", "1", "--date", "2025-04-11T22:00:00.000Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-14T14:00:00.000Z"));
}

#[test]
fn test_calc_json_output() {
    let temp = TempDir::new().unwrap();
    let output = workdays(&temp)
        .args(["--json", "calc", "--offline", "--days", "5", "--date", "2025-04-10T15:00:00.000Z"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["date"], "2025-04-21T13:00:00.000Z");
    assert_eq!(value["start"], "2025-04-10T15:00:00.000Z");
    assert_eq!(value["days"], 5.0);
}

#[test]
fn test_calc_short_hours_flag() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .args(["calc", "--offline", "-H", "20", "--date", "2025-04-09T19:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-14T14:00:00.000Z"));
}

#[test]
fn test_calc_without_quantity_fails() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .args(["calc", "--offline", "--date", "2025-04-09T19:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least one parameter (days or hours) must be provided"));
}

#[test]
fn test_calc_invalid_json_error() {
    let temp = TempDir::new().unwrap();
    let output = workdays(&temp)
        .args(["--json", "calc", "--offline", "--days=-2"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["error"], "InvalidParameters");
}

#[test]
fn test_calc_strict_profile_flag() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .args(["calc", "--offline", "--profile", "strict", "--days", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Days parameter must be a positive integer"));
}

#[test]
fn test_calc_profile_from_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[validation]\nprofile = \"strict\"\n\n[holidays]\noffline = true\n",
    )
    .unwrap();

    workdays(&temp)
        .args(["calc", "--hours", "1", "--date", "2025-04-10T10:00:00-05:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Z suffix"));
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[server\n").unwrap();

    workdays(&temp)
        .args(["calc", "--offline", "--hours", "1"])
        .assert()
        .failure();
}

// =============================================================================
// HOLIDAYS
// =============================================================================

#[test]
fn test_holidays_offline() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .args(["holidays", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16 holiday(s)"))
        .stdout(predicate::str::contains("2025-04-17"));
}

#[test]
fn test_holidays_json() {
    let temp = TempDir::new().unwrap();
    let output = workdays(&temp)
        .args(["holidays", "--offline", "--json"])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 16);
    assert_eq!(value["source"], "embedded list (16 entries)");
}

#[test]
fn test_holidays_unreachable_source_reports_fallback() {
    let temp = TempDir::new().unwrap();
    let output = workdays(&temp)
        .args(["holidays", "--json"])
        .env("HOLIDAYS_API_URL", "http://127.0.0.1:9/")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 16);
    assert_eq!(value["source"], "fallback list (http://127.0.0.1:9/ unavailable)");
}

// =============================================================================
// META
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("calc"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    workdays(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("workdays serve"));
}
