// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn without_arguments_shows_usage_and_fails() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_lists_commands_and_quickstart() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopen accepted issues whose snooze has expired"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("completion"))
        .stdout(predicate::str::contains("snooze_<days>"));
}

#[parameterized(
    run = { "run" },
    status = { "status" },
    completion = { "completion" },
)]
fn command_supports_help_flag(command: &str) {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .args([command, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[parameterized(
    url = { "--url" },
    default_days = { "--default-days" },
    timeout = { "--timeout" },
    jobs = { "--jobs" },
    dry_run = { "--dry-run" },
    verbose = { "--verbose" },
    config = { "--config" },
)]
fn run_help_shows_option(flag: &str) {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(flag));
}

#[test]
fn help_does_not_offer_token_flag() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--token").not());
}

#[test]
fn version_flag_prints_version() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("snooze "));
}

#[test]
fn unknown_command_fails() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .arg("sleep")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
