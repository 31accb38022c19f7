use crate::support::{arbor, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Map command tests
// ============================================================================

#[test]
fn test_map_put_remove_get_range() {
    arbor()
        .args([
            "map", "--put", "5=five", "--put", "3=three", "--put", "8=eight", "--put", "1=one",
            "--remove", "3", "--get", "1", "--get", "3", "--range", "2..8",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed 3 = three"))
        .stdout(predicate::str::contains("size: 3"))
        .stdout(predicate::str::contains("keys: 1, 5, 8"))
        .stdout(predicate::str::contains("get 1 = one"))
        .stdout(predicate::str::contains("get 3: not present"))
        .stdout(predicate::str::contains("range 2..8: 5, 8"));
}

#[test]
fn test_map_overwrite_keeps_size() {
    arbor()
        .args(["map", "--put", "1=a", "--put", "1=b", "--get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("size: 1"))
        .stdout(predicate::str::contains("get 1 = b"));
}

#[test]
fn test_map_remove_missing_is_not_an_error() {
    arbor()
        .args(["map", "--put", "1=a", "--remove", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remove 9: not present"))
        .stdout(predicate::str::contains("size: 1"));
}

#[test]
fn test_map_json() {
    let output = arbor()
        .args([
            "--format", "json", "map", "--put", "2=b", "--put", "1=a", "--get", "7", "--range",
            "1..1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["size"], 2);
    assert_eq!(json["keys"], serde_json::json!([1, 2]));
    assert_eq!(json["entries"][0], serde_json::json!({"key": 1, "value": "a"}));
    assert_eq!(json["lookups"][0]["value"], serde_json::Value::Null);
    assert_eq!(json["range"]["keys"], serde_json::json!([1]));
}

#[test]
fn test_map_records() {
    arbor()
        .args(["--format", "records", "map", "--put", "1=hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H arbor=1 records=1 mode=map size=1"))
        .stdout(predicate::str::contains("K key=1 value=\"hello world\""));
}

#[test]
fn test_map_bad_pair_is_usage_error() {
    arbor().args(["map", "--put", "one=1"]).assert().code(2);
}
