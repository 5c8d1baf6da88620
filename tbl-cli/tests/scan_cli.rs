//! End-to-end tests for the tblscan binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn tblscan(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tblscan").unwrap();
    // Keep runs independent of any tblscan.toml in the repository
    cmd.current_dir(dir.path());
    cmd
}

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn clean_file_exits_zero_with_success_message() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "clean.tbl", "1 2 3\n4 5 6\n");

    tblscan(&dir)
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No errors detected in file."));
}

#[test]
fn bad_data_reports_line_number_and_text() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "bad.tbl", "a b c\n# BAD_DATA\nx BAD_DATA y\n");

    tblscan(&dir)
        .arg(&data)
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("bad data detected at line 3:")
                .and(predicate::str::contains("x BAD_DATA y")),
        )
        .stdout(predicate::str::contains("No errors detected").not());
}

#[test]
fn commented_sentinel_is_ignored() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "comments.tbl", "# BAD_DATA BAD_DATA\nok row\n");

    tblscan(&dir).arg(&data).assert().success();
}

#[test]
fn sentinel_must_match_a_whole_field() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "near_miss.tbl", "BAD_DATA123 BAD_DATAX xBAD_DATA\n");

    tblscan(&dir).arg(&data).assert().success();
}

#[test]
fn empty_file_is_clean() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "empty.tbl", "");

    tblscan(&dir)
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No errors detected in file."));
}

#[test]
fn missing_file_is_a_fatal_read_error() {
    let dir = TempDir::new().unwrap();

    tblscan(&dir)
        .arg("no/such/file.tbl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading 'no/such/file.tbl'"))
        .stdout(predicate::str::contains("No errors detected").not());
}

#[test]
fn missing_path_argument_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    tblscan(&dir).assert().failure();
}

#[test]
fn json_format_reports_clean_status() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "clean.tbl", "1 2 3\n4 5 6\n");

    tblscan(&dir)
        .arg(&data)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"status\": \"clean\"")
                .and(predicate::str::contains("\"lines\": 2")),
        );
}

#[test]
fn json_format_reports_bad_data_on_stdout_with_failure_code() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "bad.tbl", "x BAD_DATA y\n");

    tblscan(&dir)
        .arg(&data)
        .args(["--format", "json"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("\"status\": \"bad-data\"")
                .and(predicate::str::contains("\"line_number\": 1")),
        );
}

#[test]
fn unknown_format_lists_known_formats() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "clean.tbl", "1 2 3\n");

    tblscan(&dir)
        .arg(&data)
        .args(["--format", "yaml"])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("unknown report format 'yaml'")
                .and(predicate::str::contains("Available report formats:")),
        );
}

#[test]
fn sentinel_override_changes_the_marker() {
    let dir = TempDir::new().unwrap();
    let data = fixture(&dir, "na.tbl", "wt 412 NA\n");

    // NA is harmless under the default rules
    tblscan(&dir).arg(&data).assert().success();

    // With the override, NA is the marker and BAD_DATA is an ordinary field
    tblscan(&dir)
        .arg(&data)
        .args(["--sentinel", "NA"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad data detected at line 1:"));

    let default_marker = fixture(&dir, "bd.tbl", "wt 412 BAD_DATA\n");
    tblscan(&dir)
        .arg(&default_marker)
        .args(["--sentinel", "NA"])
        .assert()
        .success();
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = fixture(
        &dir,
        "strict.toml",
        "[scan]\nsentinel = \"MISSING\"\ncomment_prefix = \";\"\n",
    );
    let data = fixture(&dir, "data.tbl", "; BAD_DATA is fine here\nwt MISSING 97\n");

    tblscan(&dir)
        .arg(&data)
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad data detected at line 2:"));
}

#[test]
fn list_formats_names_every_format() {
    let dir = TempDir::new().unwrap();

    tblscan(&dir)
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text").and(predicate::str::contains("json")));
}
