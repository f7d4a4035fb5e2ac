//! Startup behaviour of the dashboard binary.

use std::process::Command;

#[test]
fn missing_data_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_co2-atlas"))
        .current_dir(dir.path())
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("co2_data_clean.csv"), "stderr: {stderr}");
    assert!(!stderr.contains("listening"), "stderr: {stderr}");
    assert_eq!(stderr.matches("is unavailable").count(), 1, "stderr: {stderr}");
}
