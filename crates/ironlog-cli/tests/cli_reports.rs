//! CLI E2E tests for the block reports.
//!
//! Each test writes logs and programs into a temp dir and runs the built
//! `ironlog` binary against them.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

const LOGS: &str = r#"[
  { "id": "a1", "programId": "A", "date": "2024-01-01",
    "exercises": [
      { "name": "Competition Squat", "sets": [ { "weight": 300, "reps": 5, "rpe": 7 } ] },
      { "name": "Pause Squat", "sets": [ { "weight": "250", "reps": "3", "rpe": "7" } ] }
    ] },
  { "id": "a20", "programId": "A", "date": "2024-01-20",
    "exercises": [
      { "name": "Competition Squat", "sets": [ { "weight": 310, "reps": 3, "rpe": 9 } ] }
    ] },
  { "id": "b1", "programId": "B", "date": "2024-03-01",
    "exercises": [
      { "name": "Squat", "sets": [ { "weight": 200, "reps": 5, "rpe": 8 } ] },
      { "name": "Front Squat", "sets": [ { "weight": 150, "reps": 3, "rpe": 7 } ] }
    ] },
  { "id": "b2", "programId": "B", "date": "2024-03-21",
    "exercises": [
      { "name": "Squat", "sets": [ { "weight": 220, "reps": 5, "rpe": 8 } ] }
    ] }
]"#;

const PROGRAMS: &str = r#"[
  { "id": "A", "name": "Block A", "startDate": "2024-01-01", "endDate": "2024-01-31" },
  { "id": "B", "name": "Block B", "startDate": "2024-03-01", "endDate": "2024-03-31" }
]"#;

struct Fixture {
    _dir: TempDir,
    logs: PathBuf,
    programs: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs.json");
        let programs = dir.path().join("programs.json");
        std::fs::write(&logs, LOGS).unwrap();
        std::fs::write(&programs, PROGRAMS).unwrap();
        Self {
            _dir: dir,
            logs,
            programs,
        }
    }

    fn logs(&self) -> &str {
        self.logs.to_str().unwrap()
    }

    fn programs(&self) -> &str {
        self.programs.to_str().unwrap()
    }
}

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ironlog"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_meta_report() {
    let fx = Fixture::new();
    let out = run_json(&[
        "meta", "--logs", fx.logs(), "--programs", fx.programs(), "--lift", "squat", "--block", "A",
    ]);

    let block = &out["blocks"][0];
    assert_eq!(block["startE1RM"], 380.0);
    assert_eq!(block["peakE1RM"], 380.0);
    assert_eq!(block["endE1RM"], 351.3);
    assert_eq!(block["gain"], -28.7);
    assert_eq!(out["blocks"].as_array().unwrap().len(), 1);
    assert_eq!(out["assists"][0]["name"], "Pause Squat");
}

#[test]
fn test_meta_ascii_and_errors() {
    let fx = Fixture::new();
    let (stdout, _, code) = run_cli(&[
        "meta", "--logs", fx.logs(), "--programs", fx.programs(), "--lift", "squat", "--ascii",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Squat Block Heatmap"));

    let (_, stderr, code) = run_cli(&[
        "meta", "--logs", fx.logs(), "--programs", fx.programs(), "--lift", "squat", "--block", "Z",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown block: Z"));

    let (_, _, code) = run_cli(&["meta", "--logs", fx.logs(), "--lift", "squat"]);
    assert_eq!(code, 1);

    let (_, _, code) = run_cli(&[
        "meta", "--logs", fx.logs(), "--programs", fx.programs(), "--lift", "curl",
    ]);
    assert_ne!(code, 0);
}

#[test]
fn test_variations_and_balance() {
    let fx = Fixture::new();
    let rows = run_json(&["variations", "--logs", fx.logs(), "--programs", fx.programs()]);
    let rows = rows.as_array().unwrap();
    // Front squat rides block B's +10%, pause squat block A's drop
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Front Squat");
    assert!((rows[0]["avgGain"].as_f64().unwrap() - 10.0).abs() < 1e-9);
    assert_eq!(rows[1]["name"], "Pause Squat");
    assert!(rows[1]["avgGain"].as_f64().unwrap() < 0.0);

    let points = run_json(&["balance", "--logs", fx.logs(), "--programs", fx.programs()]);
    let points = points.as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1]["label"], "Block B");
    assert_eq!(points[1]["y"], 10.0);
}

#[test]
fn test_date_filter_and_progress() {
    let fx = Fixture::new();
    let series = run_json(&[
        "progress", "--logs", fx.logs(), "--start", "2024-03-01", "--end", "2024-03-31",
    ]);
    let squat = series["Squat"].as_array().unwrap();
    assert_eq!(squat.len(), 2);
    assert_eq!(squat[0]["displayDate"], "Mar 1");

    let (_, stderr, code) = run_cli(&[
        "progress", "--logs", fx.logs(), "--start", "2024-04-01", "--end", "2024-03-01",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("start"));
}

#[test]
fn test_huge_day_window_keeps_everything() {
    let fx = Fixture::new();
    let rows = run_json(&[
        "variations", "--logs", fx.logs(), "--programs", fx.programs(), "--days", "4294967295",
    ]);
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[test]
fn test_intensity_and_sessions() {
    let fx = Fixture::new();
    let rows = run_json(&["intensity", "--logs", fx.logs(), "--programs", fx.programs()]);
    assert!(!rows.as_array().unwrap().is_empty());

    let loads = run_json(&["sessions", "--logs", fx.logs()]);
    assert_eq!(loads.as_array().unwrap().len(), 4);
    assert_eq!(loads[0]["logId"], "a1");

    let categories = run_json(&["sessions", "--logs", fx.logs(), "--by-category"]);
    assert_eq!(categories[0]["category"], "Knee");
}

#[test]
fn test_missing_input_file() {
    let (_, stderr, code) = run_cli(&["variations", "--logs", "/nonexistent/logs.json"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("IO error"));
}
