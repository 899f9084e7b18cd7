#![allow(deprecated)] // assert_cmd::Command::cargo_bin

use predicates::prelude::*;
use std::fs;

fn linefix_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("linefix").unwrap()
}

#[test]
fn test_help_flag() {
    linefix_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SOURCE LINE FIXER"));
}

#[test]
fn test_man_flag() {
    linefix_cmd()
        .arg("--man")
        .assert()
        .success()
        .stdout(predicate::str::contains("LINEFIX(1)"))
        .stdout(predicate::str::contains("--tab-width"));
}

#[test]
fn test_stdin_to_stdout() {
    linefix_cmd()
        .write_stdin("foo   \n   \nif(x){\n")
        .assert()
        .success()
        .stdout("foo\n\nif (x) {\n");
}

#[test]
fn test_stdin_expand() {
    linefix_cmd()
        .args(["--expand", "--tab-width", "4"])
        .write_stdin("\tfoo\n")
        .assert()
        .success()
        .stdout("    foo\n");
}

#[test]
fn test_stdin_expand_wins_over_unexpand() {
    linefix_cmd()
        .args(["-e", "-u", "-t", "2"])
        .write_stdin("\tfoo\n")
        .assert()
        .success()
        .stdout("  foo\n");
}

#[test]
fn test_zero_tab_width_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("a.c");
    fs::write(&path, "x;   \n").unwrap();

    linefix_cmd()
        .args(["--tab-width", "0"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("탭 너비"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "x;   \n");
}

#[test]
fn test_missing_path_fails_with_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("ghost.m");

    linefix_cmd()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost.m"));
}

#[test]
fn test_preview_prints_markers_and_keeps_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("a.c");
    fs::write(&path, "x;   \n").unwrap();

    linefix_cmd()
        .arg("--preview")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("### BEGIN"))
        .stdout(predicate::str::contains("x;\n### END"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "x;   \n");
}

#[test]
fn test_in_place_with_backup() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("a.m");
    fs::write(&path, "}else{  \n").unwrap();

    linefix_cmd()
        .arg("--backup")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&path).unwrap(), "} else {\n");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.m.bak")).unwrap(),
        "}else{  \n"
    );
}

#[test]
fn test_disallowed_extension_skipped_with_notice() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "keep   \n").unwrap();

    linefix_cmd()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("notes.txt"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "keep   \n");
}

#[test]
fn test_backup_failure_aborts_with_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("a.c");
    fs::write(&path, "x;   \n").unwrap();
    fs::create_dir(temp_dir.path().join("a.c.bak")).unwrap();

    linefix_cmd()
        .arg("--backup")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("a.c.bak"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "x;   \n");
}

#[test]
fn test_huge_tab_width_rejected() {
    linefix_cmd()
        .args(["--expand", "--tab-width", "18446744073709551615"])
        .write_stdin("\tfoo\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("탭 너비"));
}

#[test]
fn test_summary_printed_without_verbose() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("a.c"), "x;   \n").unwrap();

    linefix_cmd()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("처리 통계"));
}
