//! Tests for the `farmfog-report` binary
//!
//! The binary runs without arguments and writes into its working directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use farmfog_report::report::{ENERGY_FILE, EXECUTION_TIME_FILE, NETWORK_FILE};
use tempfile::TempDir;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_farmfog-report"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn expected_stdout() -> String {
    format!("Saved '{EXECUTION_TIME_FILE}'\nSaved '{ENERGY_FILE}'\nSaved '{NETWORK_FILE}'\n")
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_binary_writes_charts_to_working_dir() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_stdout());
    assert_eq!(
        file_names(dir.path()),
        vec![
            EXECUTION_TIME_FILE.to_string(),
            NETWORK_FILE.to_string(),
            ENERGY_FILE.to_string(),
        ]
    );
    for name in [EXECUTION_TIME_FILE, ENERGY_FILE, NETWORK_FILE] {
        let bytes = fs::read(dir.path().join(name)).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}

#[test]
fn test_binary_rerun_overwrites_same_files() {
    let dir = TempDir::new().unwrap();

    let first = run_in(dir.path());
    let second = run_in(dir.path());

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8(second.stdout).unwrap(), expected_stdout());
    assert_eq!(file_names(dir.path()).len(), 3);
}
