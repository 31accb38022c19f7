use crate::support::{arbor, stdout_json, triangle_args};
use predicates::prelude::*;

// ============================================================================
// Graph command tests
// ============================================================================

#[test]
fn test_graph_dijkstra_human() {
    arbor()
        .args(["graph", "dijkstra"])
        .args(triangle_args())
        .args(["--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "dijkstra_begun\nvertex_finished A 0\nvertex_finished B 1\nvertex_finished C 3\ndijkstra_over A -> B -> C\n",
        ))
        .stdout(predicate::str::contains("path: A -> B -> C (cost 3)"));
}

#[test]
fn test_graph_bfs_stops_at_end() {
    arbor()
        .args(["graph", "bfs"])
        .args(triangle_args())
        .args(["--from", "A", "--to", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs_begun\nvisit A\nvisit B\nsearch_over\n"))
        .stdout(predicate::str::contains("found B after visiting 2 vertices"));
}

#[test]
fn test_graph_dfs_unreachable_end() {
    arbor()
        .args(["graph", "dfs"])
        .args(triangle_args())
        .args(["--from", "C", "--to", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search_over").not())
        .stdout(predicate::str::contains("A not reachable from C"));
}

#[test]
fn test_graph_quiet_hides_events() {
    arbor()
        .args(["--quiet", "graph", "dijkstra"])
        .args(triangle_args())
        .args(["--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vertex_finished").not())
        .stdout(predicate::str::contains("path: A -> B -> C (cost 3)"));
}

#[test]
fn test_graph_dijkstra_json() {
    let output = arbor()
        .args(["--format", "json", "graph", "dijkstra"])
        .args(triangle_args())
        .args(["--from", "A", "--to", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["cost"], 3);
    assert_eq!(json["events"][0]["event"], "dijkstra_begun");
    assert_eq!(
        json["events"][1],
        serde_json::json!({"event": "vertex_finished", "vertex": "A", "cost": 0})
    );
    assert_eq!(json["finished"].as_array().unwrap().len(), 3);
}

#[test]
fn test_graph_records() {
    arbor()
        .args(["--format", "records", "graph", "bfs"])
        .args(triangle_args())
        .args(["--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H arbor=1 records=1 mode=graph algorithm=bfs from=\"A\" to=\"C\"",
        ))
        .stdout(predicate::str::contains("E visit vertex=\"A\""))
        .stdout(predicate::str::contains("S found=true visited=\"A B C\""));
}

#[test]
fn test_graph_duplicate_vertex_is_data_error() {
    arbor()
        .args(["graph", "bfs", "--vertex", "A", "--vertex", "A", "--from", "A", "--to", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: vertex already present"));
}

#[test]
fn test_graph_negative_weight_is_data_error() {
    arbor()
        .args([
            "graph", "dijkstra", "--vertex", "A", "--vertex", "B", "--edge", "A:B:-4", "--from",
            "A", "--to", "B",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight -4"));
}

#[test]
fn test_graph_oversized_weight_is_data_error() {
    arbor()
        .args([
            "graph",
            "dijkstra",
            "--vertex",
            "A",
            "--vertex",
            "B",
            "--edge",
            "A:B:9223372036854775807",
            "--from",
            "A",
            "--to",
            "B",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "weight 9223372036854775807 exceeds 4294967295",
        ));
}

#[test]
fn test_graph_unknown_start_is_data_error() {
    arbor()
        .args(["graph", "bfs"])
        .args(triangle_args())
        .args(["--from", "Q", "--to", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not in graph"));
}

#[test]
fn test_graph_dijkstra_unreachable_json_error() {
    let output = arbor()
        .args(["--format", "json", "graph", "dijkstra"])
        .args(triangle_args())
        .args(["--from", "C", "--to", "A"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "unreachable_target");
}

#[test]
fn test_graph_missing_algorithm_is_usage_error() {
    arbor()
        .args(["graph", "--vertex", "A", "--from", "A", "--to", "A"])
        .assert()
        .code(2);
}
