//! # CLI Tests
//!
//! End-to-end tests driving the `todo` binary against a temporary database
//! selected via the `TODO_DB` environment variable.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Cli {
    _dir: TempDir,
    db_path: std::path::PathBuf,
}

impl Cli {
    fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let db_path = dir.path().join("todos.db");
        Self { _dir: dir, db_path }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("todo").expect("binary should build");
        cmd.env("TODO_DB", &self.db_path);
        cmd
    }
}

#[test]
fn test_no_args_prints_usage_and_exits_zero() {
    let cli = Cli::new();
    cli.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: todo <command>"));
}

#[test]
fn test_universal_help_and_version_flags() {
    let cli = Cli::new();
    cli.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: todo <command>"));

    cli.cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version: 1.0.0"));
}

#[test]
fn test_add_then_list_round_trip() {
    let cli = Cli::new();

    cli.cmd()
        .args(["add", "Buy milk", "Two liters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created successfully"))
        .stdout(predicate::str::contains("Buy milk"));

    cli.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("1 pending"))
        .stdout(predicate::str::contains("0 completed"));
}

#[test]
fn test_complete_and_delete_lifecycle() {
    let cli = Cli::new();

    cli.cmd().args(["add", "Task one"]).assert().success();

    cli.cmd()
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as completed"));

    // Completing twice is a validation failure.
    cli.cmd()
        .args(["complete", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("already completed"));

    cli.cmd()
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted successfully"));

    cli.cmd()
        .args(["delete", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_aliases_reach_the_same_handlers() {
    let cli = Cli::new();

    cli.cmd().args(["a", "Via alias"]).assert().success();
    cli.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Via alias"));
    cli.cmd().args(["done", "1"]).assert().success();
    cli.cmd().args(["rm", "1"]).assert().success();
}

#[test]
fn test_search_outcomes() {
    let cli = Cli::new();

    cli.cmd().args(["add", "Buy groceries"]).assert().success();

    cli.cmd()
        .args(["search", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Results for: groceries"));

    // No matches is informational, exit 0.
    cli.cmd()
        .args(["search", "nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todo items found matching"));

    // An explicit empty query is rejected, exit 1.
    cli.cmd()
        .args(["search", ""])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("cannot be empty"));
}

#[test]
fn test_unknown_command_exits_one() {
    let cli = Cli::new();
    cli.cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Unknown command"));
}

#[test]
fn test_invalid_id_reported_as_validation() {
    let cli = Cli::new();
    cli.cmd()
        .args(["complete", "42abc"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid ID format"));
}

#[test]
fn test_per_verb_help_flag() {
    let cli = Cli::new();
    cli.cmd()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Help for: list"));
}

#[test]
fn test_list_invalid_filter() {
    let cli = Cli::new();
    cli.cmd()
        .args(["list", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid filter"));
}

#[test]
fn test_database_persists_across_invocations() {
    let cli = Cli::new();

    cli.cmd().args(["add", "Durable task"]).assert().success();
    cli.cmd().args(["add", "Another task"]).assert().success();

    cli.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2 items"));
}
