// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `snooze status` against a fake tracker.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

fn tracker() -> FakeTracker {
    FakeTracker::builder()
        .page(&[
            ("KEY-1", &["snooze_10"]),
            ("KEY-2", &["snooze_99999"]),
            ("KEY-3", &["security"]),
            ("KEY-4", &["snooze"]),
        ])
        .accepted("KEY-1", LONG_AGO)
        .accepted("KEY-2", LONG_AGO)
        .start()
}

#[test]
fn text_output_lists_snoozed_issues() {
    let home = TempDir::new().unwrap();
    let tracker = tracker();

    let output = snooze(&home)
        .args(["status", "--url", &tracker.url])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "{stdout}");
    assert!(lines[0].starts_with("KEY"));
    assert!(lines[0].contains("DEADLINE"));
    assert!(lines[1].starts_with("KEY-1") && lines[1].contains("expired"));
    assert!(lines[1].contains("2020-01-11T00:00:00+00:00"));
    assert!(lines[2].starts_with("KEY-2") && lines[2].contains("snoozed"));
    assert!(lines[3].starts_with("KEY-4") && lines[3].contains("no-history"));
    assert!(!stdout.contains("KEY-3"));
}

#[test]
fn json_output_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let tracker = tracker();

    let output = snooze(&home)
        .args(["status", "--url", &tracker.url, "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["key"], "KEY-1");
    assert_eq!(rows[0]["state"], "expired");
    assert_eq!(rows[0]["label"], "snooze_10");
    assert_eq!(rows[0]["days"], 10);
    assert_eq!(rows[1]["state"], "snoozed");
    assert_eq!(rows[2]["state"], "no-history");
    assert_eq!(rows[2]["days"], 30);
    assert!(rows[2].get("label").is_none());
}

#[test]
fn status_never_mutates() {
    let home = TempDir::new().unwrap();
    let tracker = tracker();

    snooze(&home)
        .args(["status", "--url", &tracker.url])
        .assert()
        .success();

    assert!(tracker.mutations().is_empty());
}

#[test]
fn empty_tracker_prints_placeholder() {
    let home = TempDir::new().unwrap();
    let tracker = FakeTracker::builder().start();

    snooze(&home)
        .args(["status", "--url", &tracker.url])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snoozed issues"));
}

#[test]
fn unreachable_tracker_fails() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .args(["status", "--url", &unreachable_url()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to fetch suppressed issues"));
}

#[test]
fn invalid_output_format_is_rejected() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .args(["status", "-o", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
