//! Integration tests for the episode commands.
//!
//! The store is seeded per invocation, so every command starts from the
//! same two sample episodes. These tests cover:
//! - `sr list` with and without status filtering, in both output formats
//! - `sr show` for present and absent episodes
//! - `sr create` argument handling and validation
//! - `sr version` build metadata

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::Value;

/// Parse JSON output from a command.
fn parse_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_list_returns_seeded_episodes() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["episodes"][0]["id"], "1");
    assert_eq!(json["episodes"][0]["name"], "Episode 12: Winter Drop");
    assert_eq!(json["episodes"][0]["status"], "launched");
    assert_eq!(json["episodes"][0]["budget"], 25000);
    assert_eq!(json["episodes"][0]["target_revenue"], 75000);
    assert_eq!(json["episodes"][0]["team_size"], 3);
    assert_eq!(json["episodes"][1]["id"], "2");
    assert_eq!(json["episodes"][1]["status"], "planning");
}

#[test]
fn test_list_filters_by_status() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .args(["list", "--status", "launched"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["count"], 1);
    assert_eq!(json["episodes"][0]["id"], "1");
}

#[test]
fn test_list_filter_with_no_matches_is_empty() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .args(["list", "--status", "completed"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["count"], 0);
    assert_eq!(json["episodes"].as_array().unwrap().len(), 0);
}

#[test]
fn test_list_rejects_unknown_status() {
    let env = TestEnv::new();
    env.sr()
        .args(["list", "--status", "shipped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_list_human_format() {
    let env = TestEnv::new();
    env.sr()
        .args(["-H", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 episode(s)"))
        .stdout(predicate::str::contains("$25,000"))
        .stdout(predicate::str::contains("Jan 15, 2024"));
}

// ============================================================================
// Show Tests
// ============================================================================

#[test]
fn test_show_returns_full_episode() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .args(["show", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["id"], "1");
    assert_eq!(json["status"], "launched");
    assert_eq!(json["budget"], 25000);
    assert_eq!(json["target_revenue"], 75000);
    assert_eq!(json["team_members"].as_array().unwrap().len(), 3);
    assert_eq!(json["team_members"][0]["name"], "Alex Chen");
    assert_eq!(json["team_members"][0]["role"], "Creative Director");
}

#[test]
fn test_show_human_renders_roster() {
    let env = TestEnv::new();
    env.sr()
        .args(["-H", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Episode 12: Winter Drop"))
        .stdout(predicate::str::contains("Team (3):"))
        .stdout(predicate::str::contains("Alex Chen (Creative Director)"));
}

#[test]
fn test_show_missing_episode_fails() {
    let env = TestEnv::new();
    env.sr()
        .args(["show", "99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Episode not found: 99"));
}

#[test]
fn test_show_missing_episode_human_error() {
    let env = TestEnv::new();
    env.sr()
        .args(["-H", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

// ============================================================================
// Create Tests
// ============================================================================

#[test]
fn test_create_with_full_arguments() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .args([
            "create",
            "Episode 13: Spring Capsule",
            "--concept",
            "Pastel knitwear for the new season",
            "--status",
            "production",
            "--start",
            "2024-02-01",
            "--launch",
            "2024-03-01",
            "--budget",
            "30000",
            "--target",
            "90000",
            "--member",
            "Avery Quinn:Designer",
            "--member",
            "Rio Park:Producer",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert!(json["id"].as_str().unwrap().starts_with("ep-"));
    assert_eq!(json["name"], "Episode 13: Spring Capsule");
    assert_eq!(json["status"], "production");
    assert_eq!(json["team_size"], 2);
    assert_eq!(json["count"], 3);
}

#[test]
fn test_create_defaults_to_planning() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .args(["create", "Episode 13", "--concept", "Minimal essentials"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["status"], "planning");
    assert_eq!(json["team_size"], 0);
}

#[test]
fn test_create_human_confirmation() {
    let env = TestEnv::new();
    env.sr()
        .args(["-H", "create", "Episode 13", "--concept", "Minimal essentials"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created episode ep-"));
}

#[test]
fn test_create_rejects_bad_member_spec() {
    let env = TestEnv::new();
    env.sr()
        .args(["create", "Ep", "--concept", "C", "--member", "NoColonHere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name:Role"));
}

#[test]
fn test_create_rejects_bad_date() {
    let env = TestEnv::new();
    env.sr()
        .args(["create", "Ep", "--concept", "C", "--launch", "03/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_create_rejects_blank_name() {
    let env = TestEnv::new();
    env.sr()
        .args(["create", "  ", "--concept", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be non-empty"));
}

#[test]
fn test_create_rejects_unknown_status() {
    let env = TestEnv::new();
    env.sr()
        .args(["create", "Ep", "--concept", "C", "--status", "shipped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Version Tests
// ============================================================================

#[test]
fn test_version_reports_build_metadata() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .arg("version")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["commit"].is_string());
    assert!(json["built"].is_string());
}

#[test]
fn test_version_human_format() {
    let env = TestEnv::new();
    env.sr()
        .args(["-H", "version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sr "));
}
