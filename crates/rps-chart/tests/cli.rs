// File: crates/rps-chart/tests/cli.rs
// Purpose: Run the built binary and check exit status and side effects.

use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rps-chart"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("spawn rps-chart")
}

#[test]
fn writes_png_with_legacy_flags() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("bench.csv"), "A,1,100\nB,2,200\nA,3,150\n").unwrap();

    let out = run(dir.path(), &["-csv", "bench.csv", "-png", "chart.png"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let png = std::fs::read(dir.path().join("chart.png")).expect("png written");
    assert!(png.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn uses_default_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("requests.csv"), "GET,1,10\nGET,2,18\n").unwrap();

    let out = run(dir.path(), &["--quiet"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.path().join("output.png").exists());
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = run(dir.path(), &["--csv", "absent.csv", "--png", "out.png"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("out.png").exists());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("absent.csv"), "stderr: {stderr}");
}

#[test]
fn malformed_input_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("requests.csv"), "A,1,100\nA,2\n").unwrap();
    let out = run(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("output.png").exists());
}

#[test]
fn bad_flag_is_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = run(dir.path(), &["--order", "random"]);
    assert_eq!(out.status.code(), Some(2));
}
