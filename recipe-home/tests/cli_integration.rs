//! CLI integration tests for recipe-home

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Config pointing at a closed local port, so every fetch fails fast
const OFFLINE_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:9"
timeout_secs = 2

[defaults]
category = "Beef"
"#;

/// Helper to write a config file and return its path
fn write_config(temp_dir: &TempDir, contents: &str) -> String {
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, contents).unwrap();
    config_path.to_string_lossy().to_string()
}

#[test]
fn test_help_flag_output() {
    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe browser"))
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_help_shows_exit_codes() {
    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES"))
        .stdout(predicate::str::contains("0 - Success"))
        .stdout(predicate::str::contains("1 - Every section failed"))
        .stdout(predicate::str::contains("2 - Configuration error"))
        .stdout(predicate::str::contains("3 - Invalid input"));
}

#[test]
fn test_version_flag_output() {
    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe-home"));
}

#[test]
fn test_invalid_format() {
    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .code(3) // Invalid input exit code
        .stderr(predicate::str::contains("Invalid format 'yaml'"));
}

#[test]
fn test_empty_category_rejected() {
    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.arg("--category")
        .arg("   ")
        .assert()
        .failure()
        .code(3) // Invalid input exit code
        .stderr(predicate::str::contains("Category cannot be empty"));
}

#[test]
fn test_every_section_failing_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, OFFLINE_CONFIG);

    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.env("RECIPEBUDDY_CONFIG", config_path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Categories unavailable"))
        .stdout(predicate::str::contains("Featured meal unavailable"))
        .stdout(predicate::str::contains("Beef meals unavailable"));
}

#[test]
fn test_category_flag_overrides_configured_default() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, OFFLINE_CONFIG);

    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.env("RECIPEBUDDY_CONFIG", config_path)
        .arg("--category")
        .arg("Dessert")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Dessert meals unavailable"));
}

#[test]
fn test_json_output_carries_section_status() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, OFFLINE_CONFIG);

    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    let output = cmd
        .env("RECIPEBUDDY_CONFIG", config_path)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    // Even a fully failed screen renders as valid JSON
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["selected_category"], "Beef");
    assert_eq!(parsed["categories"]["status"], "error");
    assert_eq!(parsed["featured"]["status"], "error");
    assert_eq!(parsed["category_meals"]["status"], "error");
}

#[test]
fn test_unreadable_config_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(&temp_dir, "this is not [ valid toml");

    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.env("RECIPEBUDDY_CONFIG", config_path)
        .assert()
        .failure()
        .code(2) // Configuration error exit code
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_zero_timeout_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        &temp_dir,
        r#"
[api]
timeout_secs = 0
"#,
    );

    let mut cmd = Command::cargo_bin("recipe-home").unwrap();

    cmd.env("RECIPEBUDDY_CONFIG", config_path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("timeout_secs"));
}
