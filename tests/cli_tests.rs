//! CLI integration tests using the REAL aide binary

mod common;

use common::aide_cmd;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    aide_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("agent instructions"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn test_version_output() {
    aide_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aide"))
        .stdout(predicate::str::contains("Build info"))
        .stdout(predicate::str::contains("Template version: 1"));
}

#[test]
fn test_completions_bash() {
    aide_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aide"));
}

#[test]
fn test_completions_unknown_shell() {
    aide_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_builtin_template_output() {
    aide_cmd()
        .args(["template", "--builtin"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# AIDE Agent Instructions\n"))
        .stdout(predicate::str::contains("<!-- AIDE:templateVersion=1 -->"))
        .stdout(predicate::str::contains("<!-- AIDE:END Coding conventions -->"));
}

#[test]
fn test_unknown_command_fails() {
    aide_cmd().arg("install").assert().failure();
}

#[test]
fn test_missing_workspace_fails() {
    aide_cmd()
        .args(["--workspace", "/definitely/not/a/workspace", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workspace not found"));
}
