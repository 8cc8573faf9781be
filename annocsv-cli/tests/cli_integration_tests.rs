//! Integration tests for the annocsv CLI
//!
//! Tests command-line interface functionality including:
//! - Argument parsing and defaults
//! - CSV generation from annotation/text pairs
//! - Progress and summary output
//! - Error handling for unreadable inputs and outputs

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

const TEXT: &str = "John\n\nsaid hi\n\n\neasy\n\n\n\n\n";

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_annocsv"))
}

/// Test helper to create a temporary directory
fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

/// Test helper to run CLI command and return output
fn run_cli_command(args: &[&str]) -> Result<std::process::Output> {
    let output = Command::new(get_cli_path()).args(args).output()?;
    Ok(output)
}

/// Test helper to write an annotation/text pair
fn write_pair(dir: &Path, stem: &str, ann: &str, txt: &str) -> PathBuf {
    fs::write(dir.join(format!("{stem}.ann")), ann).expect("Failed to write .ann");
    let text = dir.join(format!("{stem}.txt"));
    fs::write(&text, txt).expect("Failed to write .txt");
    text
}

/// Canonical form of a path, as the CLI reports it
fn canonical(path: &Path) -> String {
    path.canonicalize()
        .expect("Failed to canonicalize")
        .display()
        .to_string()
}

#[test]
fn test_cli_generates_csv() {
    let temp_dir = setup_temp_dir();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    let text = write_pair(&data, "doc", "T1\tPERSON 0 4;\tJohn\n", TEXT);
    let csv_path = temp_dir.path().join("out.csv");

    let output = run_cli_command(&[
        data.to_str().unwrap(),
        "-o",
        csv_path.to_str().unwrap(),
    ])
    .expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");

    let csv = fs::read_to_string(&csv_path).expect("CSV should be written");
    let filename = canonical(&text);
    let expected = format!(
        "\"filename\",\"line_num\",\"types\",\"annotation_difficulty\",\"text\"\n\
         \"{filename}\",1,\"PERSON\",\"n_a\",\"John\"\n\
         \"{filename}\",2,\"n_a\",\"n_a\",\"said hi\"\n"
    );
    assert_eq!(csv, expected);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processing: \""));
    assert!(stdout.contains("1 annotation file(s) processed successfully; 0 skipped (empty)."));
    assert!(stdout.contains(&format!("Result in \"{}\"", csv_path.display())));
}

#[test]
fn test_cli_skips_empty_annotations() {
    let temp_dir = setup_temp_dir();
    write_pair(temp_dir.path(), "empty", "", TEXT);
    write_pair(temp_dir.path(), "full", "T1\tPERSON 0 4\tJohn\n", TEXT);
    let csv_path = temp_dir.path().join("out.csv");

    let output = run_cli_command(&[
        temp_dir.path().to_str().unwrap(),
        "--out",
        csv_path.to_str().unwrap(),
        "--verbose",
    ])
    .expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("empty.ann"), "Verbose mode lists files");
    assert!(stdout.contains("✘ File is empty, skipped."));
    assert!(stdout.contains("✓"));
    assert!(stdout.contains("1 annotation file(s) processed successfully; 1 skipped (empty)."));

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 3, "Header plus two rows");
    assert!(!csv.contains("empty.txt"));
}

#[test]
fn test_cli_missing_text_file_is_not_fatal() {
    let temp_dir = setup_temp_dir();
    fs::write(temp_dir.path().join("orphan.ann"), "T1\tX 0 1\tx\n").unwrap();
    write_pair(temp_dir.path(), "doc", "T1\tPERSON 0 4\tJohn\n", TEXT);
    let csv_path = temp_dir.path().join("out.csv");

    let output = run_cli_command(&[
        temp_dir.path().to_str().unwrap(),
        "-o",
        csv_path.to_str().unwrap(),
    ])
    .expect("CLI command should run");

    assert!(output.status.success(), "A bad document must not stop the run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 annotation file(s) processed successfully; 0 skipped (empty); 1 failed."));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("orphan.txt"), "Failure is logged with the path");

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_cli_custom_trailer_and_sentinel() {
    let temp_dir = setup_temp_dir();
    write_pair(
        temp_dir.path(),
        "doc",
        "T1\tPERSON 0 4\tJohn\n",
        "John\n\nsaid hi\n\n",
    );
    let csv_path = temp_dir.path().join("out.csv");

    let output = run_cli_command(&[
        temp_dir.path().to_str().unwrap(),
        "-o",
        csv_path.to_str().unwrap(),
        "--trailer-lines",
        "0",
        "--no-type",
        "none",
    ])
    .expect("CLI command should run");

    assert!(output.status.success());

    let csv = fs::read_to_string(&csv_path).unwrap();
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    // with no trailer only the final blank line is dropped, leaving
    // "said hi" without a closing blank line
    assert_eq!(rows.len(), 1);
    assert!(rows[0].ends_with(",1,\"PERSON\",\"none\",\"John\""));
}

#[test]
fn test_cli_default_output_in_current_directory() {
    let temp_dir = setup_temp_dir();
    write_pair(temp_dir.path(), "doc", "T1\tPERSON 0 4\tJohn\n", TEXT);

    let output = Command::new(get_cli_path())
        .current_dir(temp_dir.path())
        .output()
        .expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    assert!(temp_dir.path().join("annotations.csv").exists());
}

#[test]
fn test_cli_missing_directory() {
    let temp_dir = setup_temp_dir();
    let missing = temp_dir.path().join("nope");

    let output = run_cli_command(&[missing.to_str().unwrap()]).expect("CLI command should run");

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot open directory"));
}

#[test]
fn test_cli_unwritable_output() {
    let temp_dir = setup_temp_dir();
    write_pair(temp_dir.path(), "doc", "T1\tPERSON 0 4\tJohn\n", TEXT);
    let csv_path = temp_dir.path().join("missing_dir/out.csv");

    let output = run_cli_command(&[
        temp_dir.path().to_str().unwrap(),
        "-o",
        csv_path.to_str().unwrap(),
    ])
    .expect("CLI command should run");

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("✘ Error while writing"));
}

#[test]
fn test_cli_help_command() {
    let output = run_cli_command(&["--help"]).expect("CLI command should run");

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--out"));
    assert!(stdout.contains("--verbose"));
    assert!(stdout.contains("--trailer-lines"));
    assert!(stdout.contains("--no-type"));
}

#[test]
fn test_cli_version_command() {
    let output = run_cli_command(&["--version"]).expect("CLI command should run");

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("annocsv"));
}
