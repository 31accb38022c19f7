use crate::support::{arbor, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_config_sets_default_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    let output = arbor()
        .arg("--config")
        .arg(&path)
        .args(["map", "--put", "1=a"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["size"], 1);
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    arbor()
        .arg("--config")
        .arg(&path)
        .args(["--format", "human", "map", "--put", "1=a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("size: 1"));
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "[grid]\ndefault_weight = 5\n").unwrap();

    arbor()
        .env("ARBOR_CONFIG", &path)
        .args([
            "grid", "dijkstra", "--width", "3", "--height", "1", "--from", "0,0", "--to", "2,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cost 10)"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "[output\n").unwrap();

    arbor()
        .arg("--config")
        .arg(&path)
        .arg("map")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempdir().unwrap();
    arbor()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("map")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}
