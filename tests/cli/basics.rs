use crate::support::arbor;
use predicates::prelude::*;

// ============================================================================
// Help, version and usage errors
// ============================================================================

#[test]
fn test_help_flag() {
    arbor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: arbor"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("map"))
        .stdout(predicate::str::contains("graph"))
        .stdout(predicate::str::contains("grid"));
}

#[test]
fn test_version_flag() {
    arbor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_banner() {
    arbor()
        .assert()
        .success()
        .stdout(predicate::str::contains("arbor --help"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    arbor().arg("prune").assert().code(2);
}

#[test]
fn test_unknown_format_is_usage_error() {
    arbor()
        .args(["--format", "yaml", "map"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_usage_error_as_json_envelope() {
    let output = arbor()
        .args(["--format", "json", "graph", "dijkstra", "--edge", "A-B"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], 2);
    assert_eq!(error["error"]["type"], "usage_error");
}
