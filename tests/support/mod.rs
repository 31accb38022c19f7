use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for arbor with no config file inherited from the environment
pub fn arbor() -> Command {
    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.env_remove("ARBOR_CONFIG")
        .env_remove("ARBOR_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Arguments building the A/B/C triangle: A->B (1), B->C (2), A->C (5)
pub fn triangle_args() -> Vec<&'static str> {
    vec![
        "--vertex", "A", "--vertex", "B", "--vertex", "C", "--edge", "A:B:1", "--edge",
        "B:C:2", "--edge", "A:C:5",
    ]
}

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
