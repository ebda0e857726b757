//! Tests for error handling, suggestions and exit codes.

mod common;

use predicates::prelude::*;

use common::Sandbox;

#[test]
fn test_error_invalid_project_name() {
    let sandbox = Sandbox::new();
    sandbox
        .goginit()
        .args(["init", "--name", ".hidden", "--framework", "gin", "--no-db"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_missing_framework() {
    let sandbox = Sandbox::new();
    sandbox
        .goginit()
        .args(["init", "--name", "blog"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No framework selected"));
    assert!(!sandbox.path().join("blog").exists());
}

#[test]
fn test_start_without_project_only_reports() {
    let sandbox = Sandbox::new();
    sandbox
        .goginit()
        .args(["start", "blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running server").not())
        .stdout(predicate::str::contains("Failed to run server"))
        .stdout(predicate::str::contains("Entry point not found"))
        .stdout(predicate::str::contains("cmd/blog/main.go"));
}

#[test]
fn test_error_missing_config_file() {
    let sandbox = Sandbox::new();
    let mut cmd = sandbox.goginit();
    cmd.args(["--config", "/nonexistent/goginit.toml", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_unknown_config_key() {
    let sandbox = Sandbox::new();
    sandbox
        .goginit()
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_verbose_hint_hidden_with_verbose() {
    let sandbox = Sandbox::new();
    sandbox
        .goginit()
        .args(["-v", "start", "blog"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}

#[test]
fn test_error_unknown_subcommand_is_usage_error() {
    let sandbox = Sandbox::new();
    sandbox.goginit().arg("new").assert().code(2);
}
