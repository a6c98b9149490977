use assert_cmd::Command;
use predicates::prelude::*;

const CONFIG_VARS: [&str; 4] = ["SERVER_URL", "USERNAME", "PASSWORD", "OBJECT_STORE"];

fn content_mcp() -> Command {
    let mut cmd = Command::cargo_bin("content-mcp").unwrap();
    for key in CONFIG_VARS {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_help_lists_commands() {
    content_mcp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_version() {
    content_mcp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("content-mcp"));
}

#[test]
fn test_no_subcommand_prints_help() {
    content_mcp()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_bash_completion() {
    content_mcp()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("content-mcp"));
}

#[test]
fn test_unknown_subcommand_fails() {
    content_mcp().arg("frobnicate").assert().failure();
}

#[test]
fn test_doctor_reports_missing_configuration() {
    let home = tempfile::tempdir().unwrap();
    content_mcp()
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("doctor")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("SERVER_URL"))
        .stdout(predicate::str::contains("not set"))
        .stdout(predicate::str::contains("Repository connectivity"));
}

#[test]
fn test_serve_without_configuration_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    content_mcp()
        .env("HOME", home.path())
        .arg("serve")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}
