mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_malformed_grade_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("report.txt");
    common::write_lines(
        &input,
        &[
            "1,Carol,85",
            // Missing score
            "7,Alice",
            // Non-numeric id
            "x,Bob,90",
            // Score out of range
            "8,Gina,140",
            "2,Dan,55",
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("entity-store"));
    cmd.arg("grades").arg(&input).arg(&output);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Skipping student record"))
        .stderr(predicate::str::contains("expected 3 fields, found 2"))
        .stderr(predicate::str::contains("invalid id 'x'"))
        .stdout(predicate::str::contains("2 student(s), 3 line(s) skipped"));

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("Carol (ID: 1): Score = 85, Grade = A"));
    assert!(report.contains("Dan (ID: 2): Score = 55, Grade = D"));
    assert!(!report.contains("Bob"));
}

#[test]
fn test_missing_input_file_is_reported() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("entity-store"));
    cmd.arg("grades")
        .arg(dir.path().join("nope.txt"))
        .arg(dir.path().join("report.txt"));

    cmd.assert().failure();
}

#[test]
fn test_unwritable_report_path_is_reported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("students.txt");
    common::write_lines(&input, &["1,Carol,85"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("entity-store"));
    cmd.arg("grades")
        .arg(&input)
        .arg(dir.path().join("missing_dir").join("report.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
