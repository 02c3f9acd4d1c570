//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. All commands
//! run with ALTERA_ENV=dev so they touch the development data directory
//! only.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "altera-cli", "--"])
        .args(args)
        .env("ALTERA_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_timer_start_emits_started_event() {
    let (stdout, _stderr, code) = run_cli(&["timer", "start", "-c", "cli-e2e", "-q", "0"]);
    assert_eq!(code, 0, "Timer start failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).expect("expected JSON event");
    assert_eq!(event["type"], "TimerStarted");
    assert_eq!(event["candidate_id"], "cli-e2e");
}

#[test]
fn test_timer_status_reports_snapshot() {
    let _ = run_cli(&["timer", "start", "-c", "cli-e2e-status", "-q", "1"]);
    let (stdout, _stderr, code) = run_cli(&["timer", "status", "-c", "cli-e2e-status", "-q", "1"]);
    assert_eq!(code, 0, "Timer status failed");
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).expect("expected JSON");
    assert_eq!(snapshot["question_index"], 1);
    assert_eq!(snapshot["is_active"], true);
}

#[test]
fn test_timer_pause_then_resume() {
    let _ = run_cli(&["timer", "start", "-c", "cli-e2e-pause", "-q", "0"]);
    let (stdout, _stderr, code) = run_cli(&["timer", "pause", "-c", "cli-e2e-pause", "-q", "0"]);
    assert_eq!(code, 0, "Timer pause failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "TimerPaused");

    let (stdout, _stderr, code) = run_cli(&["timer", "resume", "-c", "cli-e2e-pause", "-q", "0"]);
    assert_eq!(code, 0, "Timer resume failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "TimerResumed");
}

#[test]
fn test_timer_time_prints_display_format() {
    let _ = run_cli(&["timer", "start", "-c", "cli-e2e-time", "-q", "0"]);
    let (stdout, _stderr, code) = run_cli(&["timer", "time", "-c", "cli-e2e-time", "-q", "0"]);
    assert_eq!(code, 0, "Timer time failed");
    let display = stdout.trim();
    let (minutes, seconds) = display.split_once(':').expect("expected M:SS");
    assert!(minutes.parse::<u64>().is_ok());
    assert_eq!(seconds.len(), 2);
}

#[test]
fn test_timer_stop_discards_session() {
    let _ = run_cli(&["timer", "start", "-c", "cli-e2e-stop", "-q", "0"]);
    let (stdout, _stderr, code) = run_cli(&["timer", "stop", "-c", "cli-e2e-stop", "-q", "0"]);
    assert_eq!(code, 0, "Timer stop failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "TimerStopped");

    // The next start is a fresh session, not a restore.
    let (stdout, _stderr, code) = run_cli(&["timer", "start", "-c", "cli-e2e-stop", "-q", "0"]);
    assert_eq!(code, 0);
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["restored"], false);
}

#[test]
fn test_analytics_roi_is_computed_locally() {
    let (stdout, _stderr, code) = run_cli(&["analytics", "roi", "--applicants", "120", "--diamonds", "6"]);
    assert_eq!(code, 0, "Analytics roi failed");
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["calculated"]["time_saved_hours"], 19.5);
    assert_eq!(report["calculated"]["speed_improvement"], 40.0);
}

#[test]
fn test_config_get() {
    let (stdout, _stderr, code) = run_cli(&["config", "get", "api.base_url"]);
    assert_eq!(code, 0, "Config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_set() {
    let (_stdout, _stderr, code) = run_cli(&["config", "set", "api.tenant", "acme"]);
    assert_eq!(code, 0, "Config set failed");
    let (stdout, _stderr, code) = run_cli(&["config", "get", "api.tenant"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "acme");
}

#[test]
fn test_config_list() {
    let (stdout, _stderr, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "Config list failed");
    assert!(stdout.contains("[api]"));
    assert!(stdout.contains("[timer]"));
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_stdout, stderr, code) = run_cli(&["config", "get", "api.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}
