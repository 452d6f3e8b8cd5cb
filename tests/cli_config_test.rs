//! Integration tests for configuration handling.
//!
//! These tests verify:
//! - `sr config show` source reporting and `sr config path`
//! - Precedence: CLI flag > config.kdl > built-in defaults
//! - Display settings (currency symbol, date format) reaching command output
//! - Passphrase hygiene: the value itself is never printed
//! - Malformed or invalid config files failing loudly

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::Value;

/// Parse JSON output from a command.
fn parse_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

// ============================================================================
// Config Path Tests
// ============================================================================

#[test]
fn test_config_path_respects_env_override() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .args(["config", "path"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    let path = json["path"].as_str().unwrap();
    assert!(path.starts_with(env.config_dir.path().to_str().unwrap()));
    assert!(path.ends_with("config.kdl"));
}

#[test]
fn test_config_path_human_prints_bare_path() {
    let env = TestEnv::new();
    env.sr()
        .args(["-H", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.kdl"))
        .stdout(predicate::str::contains("{").not());
}

// ============================================================================
// Config Show Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();
    let output = env
        .sr()
        .args(["config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["output_format"]["value"], "json");
    assert_eq!(json["output_format"]["source"], "default");
    assert_eq!(json["currency_symbol"]["value"], "$");
    assert_eq!(json["currency_symbol"]["source"], "default");
    assert_eq!(json["date_format"]["source"], "default");
    assert_eq!(json["edit_passphrase_set"], false);
}

#[test]
fn test_config_show_reports_file_sources() {
    let env = TestEnv::new();
    env.write_config("currency-symbol \"€\"\ndate-format \"%d/%m/%Y\"\n");

    let output = env
        .sr()
        .args(["config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["currency_symbol"]["value"], "€");
    assert_eq!(json["currency_symbol"]["source"], "file");
    assert_eq!(json["date_format"]["value"], "%d/%m/%Y");
    assert_eq!(json["date_format"]["source"], "file");
    // Keys the file doesn't set stay at defaults
    assert_eq!(json["output_format"]["source"], "default");
}

#[test]
fn test_config_show_human_annotates_sources() {
    let env = TestEnv::new();
    env.write_config("currency-symbol \"€\"\n");

    env.sr()
        .args(["-H", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("currency-symbol"))
        .stdout(predicate::str::contains("(file)"))
        .stdout(predicate::str::contains("(default)"))
        .stdout(predicate::str::contains("(not set)"));
}

// ============================================================================
// Precedence Tests
// ============================================================================

#[test]
fn test_config_file_output_format_applies() {
    let env = TestEnv::new();
    env.write_config("output-format \"human\"\n");

    // Human output without -H because the file asked for it
    env.sr()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("episode(s)"));
}

#[test]
fn test_cli_flag_beats_config_file() {
    let env = TestEnv::new();
    env.write_config("output-format \"json\"\n");

    env.sr()
        .args(["-H", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("episode(s)"));
}

#[test]
fn test_config_currency_reaches_command_output() {
    let env = TestEnv::new();
    env.write_config("currency-symbol \"€\"\n");

    env.sr()
        .args(["-H", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€25,000"));
}

#[test]
fn test_config_date_format_reaches_command_output() {
    let env = TestEnv::new();
    env.write_config("date-format \"%Y-%m-%d\"\n");

    env.sr()
        .args(["-H", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15"));
}

// ============================================================================
// Passphrase Hygiene Tests
// ============================================================================

#[test]
fn test_passphrase_never_echoed_in_json() {
    let env = TestEnv::new();
    env.write_config("edit-passphrase \"winter-drop\"\n");

    let output = env
        .sr()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("winter-drop").not())
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["edit_passphrase_set"], true);
}

#[test]
fn test_passphrase_never_echoed_in_human_output() {
    let env = TestEnv::new();
    env.write_config("edit-passphrase \"winter-drop\"\n");

    env.sr()
        .args(["-H", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(set)"))
        .stdout(predicate::str::contains("winter-drop").not());
}

// ============================================================================
// Invalid Config Tests
// ============================================================================

#[test]
fn test_malformed_config_fails_loudly() {
    let env = TestEnv::new();
    env.write_config("output-format \"unterminated");

    env.sr()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_invalid_date_format_value_fails() {
    let env = TestEnv::new();
    env.write_config("date-format \"%Q\"\n");

    env.sr()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("date-format"));
}

#[test]
fn test_unknown_config_keys_are_ignored() {
    let env = TestEnv::new();
    env.write_config("future-setting \"whatever\"\ncurrency-symbol \"£\"\n");

    let output = env
        .sr()
        .args(["config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = parse_json(&output);
    assert_eq!(json["currency_symbol"]["value"], "£");
}
