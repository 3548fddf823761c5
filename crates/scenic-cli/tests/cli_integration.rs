use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scenic_cmd() -> Command {
    let mut cmd = Command::cargo_bin("scenic").unwrap();
    cmd.args(["-s", "scenic-cli-test"]);
    cmd
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("scenic")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scenic"));
}

#[test]
fn test_run_same_screen_scenario() {
    scenic_cmd()
        .args(["run", fixture_path("change_text_same_screen.scn").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario passed"));
}

#[test]
fn test_run_new_screen_scenario() {
    scenic_cmd()
        .args(["run", fixture_path("change_text_new_screen.scn").to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_run_empty_input_scenario() {
    scenic_cmd()
        .args(["run", fixture_path("empty_input.scn").to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_run_json_output() {
    let assert = scenic_cmd()
        .args([
            "-f",
            "json",
            "run",
            fixture_path("change_text_same_screen.scn").to_str().unwrap(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["steps"], 4);
}

#[test]
fn test_run_from_stdin() {
    scenic_cmd()
        .arg("run")
        .write_stdin(r#"expect("message-label", "Hello World!")"#)
        .assert()
        .success();
}

#[test]
fn test_failing_expectation_exits_one() {
    scenic_cmd()
        .args(["run", fixture_path("failing_expectation.scn").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Step failed at line 3"));
}

#[test]
fn test_bad_syntax_exits_two() {
    scenic_cmd()
        .args(["run", fixture_path("bad_syntax.scn").to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_unknown_command_exits_three() {
    scenic_cmd()
        .arg("run")
        .write_stdin(r#"swipe("up")"#)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn test_missing_file_exits_four() {
    scenic_cmd()
        .args(["run", "does-not-exist.scn"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_check_valid_scenario() {
    scenic_cmd()
        .args(["check", fixture_path("change_text_new_screen.scn").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 4 command(s)"));
}

#[test]
fn test_check_does_not_run() {
    // A failing expectation still checks clean; check only parses.
    scenic_cmd()
        .args(["check", fixture_path("failing_expectation.scn").to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_screen_info_text() {
    scenic_cmd()
        .arg("screen-info")
        .assert()
        .success()
        .stdout(predicate::str::contains("message-label"))
        .stdout(predicate::str::contains("Hello World!"));
}

#[test]
fn test_screen_info_json() {
    let assert = scenic_cmd()
        .args(["-f", "json", "screen-info"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let tree: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(tree[0]["id"], "main-screen");
    let children = tree[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 4);
}

#[test]
fn test_quiet_suppresses_output() {
    scenic_cmd()
        .args([
            "-q",
            "run",
            fixture_path("change_text_same_screen.scn").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_completions_generate() {
    Command::cargo_bin("scenic")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scenic"));
}
