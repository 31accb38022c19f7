use crate::support::arbor;
use predicates::prelude::*;

// ============================================================================
// Grid command tests
// ============================================================================

#[test]
fn test_grid_dijkstra_around_wall() {
    arbor()
        .args([
            "grid", "dijkstra", "--width", "2", "--height", "2", "--wall", "0,1:above", "--from",
            "0,0", "--to", "0,1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: 0,0 -> 1,0 -> 1,1 -> 0,1 (cost 3)"));
}

#[test]
fn test_grid_weight_flag() {
    arbor()
        .args([
            "grid", "dijkstra", "--width", "3", "--height", "1", "--weight", "4", "--from", "0,0",
            "--to", "2,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cost 8)"));
}

#[test]
fn test_grid_bfs_blocked() {
    arbor()
        .args([
            "grid", "bfs", "--width", "2", "--height", "1", "--wall", "1,0:left", "--from", "0,0",
            "--to", "1,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("not reachable"));
}

#[test]
fn test_grid_cell_outside_is_data_error() {
    arbor()
        .args([
            "grid", "bfs", "--width", "2", "--height", "2", "--from", "0,0", "--to", "5,5",
        ])
        .assert()
        .code(3);
}

#[test]
fn test_grid_bad_wall_is_usage_error() {
    arbor()
        .args([
            "grid", "bfs", "--width", "2", "--height", "2", "--wall", "1,1:right", "--from", "0,0",
            "--to", "1,1",
        ])
        .assert()
        .code(2);
}
