//! Integration test: binary metadata and fatal input errors

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_roster"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version, but got: {}",
        stdout
    );
}

#[test]
fn missing_file_exits_with_error() {
    let log_dir = std::env::temp_dir().join("roster_version_test_logs");
    let output = Command::new(env!("CARGO_BIN_EXE_roster"))
        .arg("/nonexistent/students.json")
        .env("ROSTER_CONFIG", "/nonexistent/config.toml")
        .env("XDG_STATE_HOME", &log_dir)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("/nonexistent/students.json"),
        "Expected error to name the file, got: {}",
        stderr
    );
    let _ = std::fs::remove_dir_all(&log_dir);
}

#[test]
fn zero_page_size_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(["--page-size", "0", "students.json"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--page-size"));
}
