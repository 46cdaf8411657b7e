//! Integration tests for the guardian CLI
//!
//! `pass_test` drives whole passes through scripted mocks; the tests below
//! run the real binary against a temporary project root with a cleared
//! environment, so nothing goes out to the network.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;


use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use chrono::Utc;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a guardian command with an empty environment
fn guardian(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("guardian"));
    cmd.env_clear().arg("--root").arg(root);
    cmd
}

/// Project root whose settings keep a pass offline
fn offline_root() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::write(temp.path().join("config/guardian.toml"), "tracked_repos = []\n").unwrap();
    temp
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    guardian(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("guardian v"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    guardian(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dead-man switch"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    guardian(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("guardian --help"));
}

// =============================================================================
// RUN
// =============================================================================

#[test]
fn test_run_without_endpoints_writes_status_file() {
    let temp = offline_root();

    guardian(temp.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("UI: - code=none ok=false"))
        .stdout(predicate::str::contains("ADMIN bootstrap: skipped (no API_BASE)"))
        .stdout(predicate::str::contains("Redeploy: no deploy hooks configured"))
        .stdout(predicate::str::contains("Dead-man: days_since_ack="))
        .stdout(predicate::str::contains("Status written to"));

    let date = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let status = temp.path().join(format!("docs/status/{date}.md"));
    let content = fs::read_to_string(status).unwrap();
    assert!(content.starts_with(&format!("# Guardian Status — {date} UTC")));
    assert!(content.contains("ADMIN bootstrap: skipped (no API_BASE)"));
}

#[test]
fn test_run_no_write_leaves_root_untouched() {
    let temp = offline_root();

    guardian(temp.path())
        .args(["run", "--no-write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status written to").not());

    assert!(!temp.path().join("docs").exists());
}

#[test]
fn test_run_json_output() {
    let temp = offline_root();

    let output = guardian(temp.path()).args(["--json", "run", "--no-write"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"]["bootstrap"]["status"], "skipped_no_api_base");
    assert_eq!(json["outcome"]["ui"]["configured"], false);
    assert!(json["status_file"].is_null());
}

#[test]
fn test_invalid_threshold_fails_before_pass() {
    let temp = offline_root();

    guardian(temp.path())
        .env("GUARDIAN_DAYS_NO_ACK", "soon")
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GUARDIAN_DAYS_NO_ACK"))
        .stdout(predicate::str::contains("Dead-man").not());
}

// =============================================================================
// CANDIDATES
// =============================================================================

#[test]
fn test_candidates_offline() {
    let temp = TempDir::new().unwrap();

    guardian(temp.path())
        .args(["candidates", "talk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("StegVerse-Talk"));
}

#[test]
fn test_candidates_json_order() {
    let temp = TempDir::new().unwrap();

    let output = guardian(temp.path()).args(["--json", "candidates", "talk"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["candidates"],
        serde_json::json!(["talk", "StegVerse-talk", "Talk", "StegVerse-Talk"])
    );
}

#[test]
fn test_candidates_follow_alias_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::write(
        temp.path().join("config/repo_aliases.json"),
        r#"{"repos": {"tv": ["TVSite"]}}"#,
    )
    .unwrap();

    guardian(temp.path())
        .args(["candidates", "tv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TVSite"))
        .stdout(predicate::str::contains("TV-Site").not());
}

#[test]
fn test_org_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();

    guardian(temp.path())
        .env("ORG_GITHUB", "StegVerse")
        .args(["--org", "Acme", "candidates", "talk", "--orgs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("StegVerse").not());
}

#[test]
fn test_resolve_requires_hints() {
    let temp = TempDir::new().unwrap();
    guardian(temp.path()).arg("resolve").assert().failure();
}
