//! Integration tests for the `dump` command.

mod common;

use common::{APP_INI, fixture_dir, ini_cmd_in};
use predicates::prelude::*;

#[test]
fn test_dump_json() {
    let dir = fixture_dir(&[("app", APP_INI)]);
    let output = ini_cmd_in(dir.path())
        .args(["dump", "app"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["server"]["port"], "8080");
    assert_eq!(value["db"]["name"], "main");
}

#[test]
fn test_dump_section_as_ini() {
    let dir = fixture_dir(&[("app", APP_INI)]);
    ini_cmd_in(dir.path())
        .args(["dump", "app", "--section", "db", "-o", "ini"])
        .assert()
        .success()
        .stdout("[db]\nname = main\n");
}

#[test]
fn test_dump_unknown_section_is_not_found() {
    let dir = fixture_dir(&[("app", APP_INI)]);
    ini_cmd_in(dir.path())
        .args(["dump", "app", "--section", "cache"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Section 'cache' is not defined"));
}

#[test]
fn test_dump_missing_file_prints_empty_object() {
    let dir = fixture_dir(&[]);
    ini_cmd_in(dir.path())
        .args(["dump", "ghost"])
        .assert()
        .success()
        .stdout("{}\n")
        .stderr(predicate::str::contains("No parameters found"));
}
