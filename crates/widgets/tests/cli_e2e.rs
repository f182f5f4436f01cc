#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn widgets_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("widgets"));
    cmd.env_remove("WIDGETS_LOG")
        .env_remove("WIDGETS_QUOTA_BYTES")
        .env("WIDGETS_DEBOUNCE_MS", "20")
        .arg("--data")
        .arg(data.path());
    cmd
}

fn list_json(data: &TempDir) -> Value {
    let output = widgets_cmd(data)
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn first_id(data: &TempDir) -> String {
    list_json(data)["listed_widgets"][0]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_add_list_view_delete_workflow() {
    let data = TempDir::new().unwrap();

    widgets_cmd(&data)
        .args(["add", "buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget created"));

    widgets_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"));

    let id = first_id(&data);
    widgets_cmd(&data)
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("created"));

    widgets_cmd(&data).args(["delete", &id]).assert().success();

    widgets_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("No widgets yet"));
}

#[test]
fn test_files_are_written_to_data_dir() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data).args(["add", "hello"]).assert().success();

    let primary = fs::read_to_string(data.path().join("text-widgets.json")).unwrap();
    let backup = fs::read_to_string(data.path().join("text-widgets-backup.json")).unwrap();
    assert!(primary.contains("\"createdAt\""));
    assert!(backup.contains("\"version\":\"1.0\""));
}

#[test]
fn test_add_from_stdin_is_sanitized() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data)
        .arg("add")
        .write_stdin("  piped\n\n   note  \n")
        .assert()
        .success();

    assert_eq!(list_json(&data)["listed_widgets"][0]["content"], "piped note");
}

#[test]
fn test_update_from_args_and_stdin() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data).args(["add", "v1"]).assert().success();
    let id = first_id(&data);

    widgets_cmd(&data).args(["update", &id, "v2"]).assert().success();
    assert_eq!(list_json(&data)["listed_widgets"][0]["content"], "v2");

    widgets_cmd(&data)
        .args(["update", &id])
        .write_stdin("v3\n")
        .assert()
        .success();
    assert_eq!(list_json(&data)["listed_widgets"][0]["content"], "v3");
}

#[test]
fn test_update_rejects_non_utf8_stdin() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data).args(["add", "text"]).assert().success();
    let id = first_id(&data);

    widgets_cmd(&data)
        .args(["update", &id])
        .write_stdin(vec![0xff, 0xfe, 0x00])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_CONTENT"));
}

#[test]
fn test_unknown_id_fails_with_message() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data)
        .args(["view", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_corrupt_primary_recovers_and_doctor_repairs() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data).args(["add", "precious"]).assert().success();
    fs::write(data.path().join("text-widgets.json"), "invalid json {[").unwrap();

    widgets_cmd(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("precious"));

    widgets_cmd(&data)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 widget(s)"));

    let primary = fs::read_to_string(data.path().join("text-widgets.json")).unwrap();
    assert!(primary.contains("precious"));
}

#[test]
fn test_doctor_reports_unrecoverable_data() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("text-widgets.json"), "garbage").unwrap();

    widgets_cmd(&data)
        .arg("doctor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable backup"));
    assert_eq!(
        fs::read_to_string(data.path().join("text-widgets.json")).unwrap(),
        "garbage"
    );
}

#[test]
fn test_export_then_import() {
    let source = TempDir::new().unwrap();
    widgets_cmd(&source).args(["add", "one"]).assert().success();
    widgets_cmd(&source).args(["add", "two"]).assert().success();
    let export_file = source.path().join("export.json");

    widgets_cmd(&source)
        .arg("export")
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 widget(s)"));

    let target = TempDir::new().unwrap();
    widgets_cmd(&target)
        .arg("import")
        .arg(&export_file)
        .assert()
        .success();

    let listed = list_json(&target);
    assert_eq!(listed["listed_widgets"].as_array().unwrap().len(), 2);
    assert_eq!(listed["listed_widgets"][1]["content"], "two");
}

#[test]
fn test_import_rejects_non_array() {
    let data = TempDir::new().unwrap();
    let file = data.path().join("bad.json");
    fs::write(&file, r#"{"not":"an array"}"#).unwrap();

    widgets_cmd(&data)
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_TYPE"));
}

#[test]
fn test_check_reports_length() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data)
        .args(["check", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 characters"));
}

#[test]
fn test_edit_session_saves_last_line() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data).args(["add", "draft"]).assert().success();
    let id = first_id(&data);

    widgets_cmd(&data)
        .args(["edit", &id])
        .write_stdin("d\ndr\ndra\ndraft two\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 edit(s)"));

    assert_eq!(list_json(&data)["listed_widgets"][0]["content"], "draft two");
}

#[test]
fn test_quota_error_is_recoverable() {
    let data = TempDir::new().unwrap();
    widgets_cmd(&data)
        .env("WIDGETS_QUOTA_BYTES", "32")
        .args(["add", "this content will not fit in thirty two bytes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("QUOTA_EXCEEDED"))
        .stderr(predicate::str::contains("try again"));
}

#[test]
fn test_add_refuses_to_overwrite_unreadable_data() {
    let data = TempDir::new().unwrap();
    let primary = data.path().join("text-widgets.json");
    fs::write(&primary, r#"[{"id":"x","content":"important""#).unwrap();

    widgets_cmd(&data)
        .args(["add", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PARSE_ERROR"))
        .stderr(predicate::str::contains("widgets doctor"));
    assert_eq!(
        fs::read_to_string(&primary).unwrap(),
        r#"[{"id":"x","content":"important""#
    );
}
