//! Integration tests that run the trace_airflow CLI on the model fixtures in
//! tests/integration/, and the library entry points on the same files.

use std::path::{Path, PathBuf};
use std::process::Command;

use hvac_airflow::{ElementId, SearchConfig, SearchError, model_io, run_airflow_search};

fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("integration")
    .join(name)
}

/// Runs the trace_airflow binary. Returns (stdout, stderr, success).
fn run_trace_airflow(args: &[&str], env: &[(&str, &str)]) -> (String, String, bool) {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_trace_airflow"));
  cmd
    .args(args)
    .env_remove("AIRFLOW_TARGET_CATEGORY")
    .env_remove("AIRFLOW_FLOW_ATTRIBUTE")
    .env("RUST_LOG", "warn");
  for (k, v) in env {
    cmd.env(k, v);
  }
  let out = cmd.output().expect("run trace_airflow");
  (
    String::from_utf8_lossy(&out.stdout).into_owned(),
    String::from_utf8_lossy(&out.stderr).into_owned(),
    out.status.success(),
  )
}

// ---- CLI ----

#[test]
fn cli_two_branches_prints_count_and_total() {
  let path = fixture("two_branches.json");
  let (stdout, stderr, success) = run_trace_airflow(&[path.to_str().unwrap(), "1"], &[]);
  assert!(success, "stderr={stderr}");
  assert!(stdout.contains("No of air terminals: 2"), "stdout={stdout}");
  assert!(stdout.contains("Total airflow: 56.634 L/S"), "stdout={stdout}");
}

#[test]
fn cli_json_report() {
  let path = fixture("two_branches.json");
  let (stdout, stderr, success) =
    run_trace_airflow(&["--json", path.to_str().unwrap(), "1"], &[]);
  assert!(success, "stderr={stderr}");
  let report: serde_json::Value = serde_json::from_str(&stdout).expect("json report");
  assert_eq!(report["terminal_count"], 2);
  assert_eq!(report["total_airflow"], 56.634);
  assert_eq!(report["target_category"], "Air Terminals");
}

#[test]
fn cli_category_flag_and_env_override() {
  let path = fixture("two_branches.json");
  let (stdout, _, success) = run_trace_airflow(
    &["--json", "--category", "Ducts", path.to_str().unwrap(), "20"],
    &[],
  );
  assert!(success);
  let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
  assert_eq!(report["target_category"], "Ducts");
  assert_eq!(report["terminal_count"], 2);
  assert_eq!(report["total_airflow"], 0.0);

  let (stdout, _, success) = run_trace_airflow(
    &["--json", "--category", "Ducts", path.to_str().unwrap(), "20"],
    &[("AIRFLOW_TARGET_CATEGORY", "Mechanical Equipment")],
  );
  assert!(success);
  let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
  assert_eq!(report["target_category"], "Mechanical Equipment");
  assert_eq!(report["terminals"], serde_json::json!([1]));
}

#[test]
fn cli_hosted_start_reenters_through_host() {
  let path = fixture("hosted_damper.json");
  let (stdout, stderr, success) = run_trace_airflow(&[path.to_str().unwrap(), "2"], &[]);
  assert!(success, "stderr={stderr}");
  assert!(stdout.contains("No of air terminals: 2"), "stdout={stdout}");
  assert!(stdout.contains("Total airflow: 14.158 L/S"), "stdout={stdout}");
}

#[test]
fn cli_inappropriate_start_fails() {
  let path = fixture("wall.json");
  let (_, stderr, success) = run_trace_airflow(&[path.to_str().unwrap(), "3"], &[]);
  assert!(!success);
  assert!(stderr.contains("Inappropriate element"), "stderr={stderr}");
}

#[test]
fn cli_unknown_start_fails() {
  let path = fixture("two_branches.json");
  let (_, stderr, success) = run_trace_airflow(&[path.to_str().unwrap(), "999"], &[]);
  assert!(!success);
  assert!(stderr.contains("999"), "stderr={stderr}");
}

#[test]
fn cli_missing_model_fails() {
  let path = fixture("does_not_exist.json");
  let (_, stderr, success) = run_trace_airflow(&[path.to_str().unwrap(), "1"], &[]);
  assert!(!success);
  assert!(stderr.contains("Error reading"), "stderr={stderr}");
}

// ---- library on fixtures ----

#[test]
fn library_run_on_fixture_matches_cli() {
  let model = model_io::load_model(&fixture("two_branches.json")).unwrap();
  let report = run_airflow_search(&model, ElementId(1), &SearchConfig::default()).unwrap();
  assert_eq!(report.terminal_count, 2);
  assert_eq!(report.total_airflow, 56.634);
  assert!(report.failures.is_empty());
}

#[test]
fn library_rejects_start_without_connectors() {
  let model = model_io::load_model(&fixture("wall.json")).unwrap();
  let err = run_airflow_search(&model, ElementId(3), &SearchConfig::default()).unwrap_err();
  assert_eq!(
    err,
    SearchError::NoConnectorsFound {
      element: ElementId(3)
    }
  );
}
