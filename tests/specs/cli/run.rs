// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `snooze run` against a fake tracker.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

fn mixed_tracker() -> FakeTracker {
    FakeTracker::builder()
        .page(&[
            ("KEY-1", &["snooze_10"]),
            ("KEY-2", &["snooze_99999"]),
            ("KEY-3", &["security"]),
        ])
        .page(&[("KEY-4", &["snooze_5"])])
        .accepted("KEY-1", LONG_AGO)
        .accepted("KEY-2", LONG_AGO)
        .start()
}

#[test]
fn reopens_expired_issue_and_removes_its_label() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();

    snooze(&home)
        .args(["run", "--url", &tracker.url])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reopened 1, left alone 1, skipped 1, failed 0 (3 snoozed, 1 without snooze label)",
        ));

    assert_eq!(
        tracker.mutations(),
        vec![
            "/api/issues/do_transition issue=KEY-1&transition=reopen".to_string(),
            "/api/issues/tags/remove issue=KEY-1&tags=snooze_10".to_string(),
        ]
    );
}

#[test]
fn reads_every_page_before_acting() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();

    snooze(&home)
        .args(["run", "--url", &tracker.url])
        .assert()
        .success();

    let requests = tracker.requests();
    let searches: Vec<String> = requests
        .iter()
        .filter(|r| r.path == "/api/issues/search")
        .map(|r| param(&r.query, "p").unwrap())
        .collect();
    assert_eq!(searches, vec!["1", "2"]);
    let first_mutation = requests.iter().position(Recorded::is_mutation).unwrap();
    let last_search = requests
        .iter()
        .rposition(|r| r.path == "/api/issues/search")
        .unwrap();
    assert!(last_search < first_mutation);
}

#[test]
fn never_requests_changelog_of_unlabelled_issue() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();

    snooze(&home)
        .args(["run", "--url", &tracker.url])
        .assert()
        .success();

    assert!(!tracker
        .requests()
        .iter()
        .any(|r| r.path == "/api/issues/changelog" && r.query.contains("KEY-3")));
}

#[test]
fn dry_run_sends_no_mutation() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();

    snooze(&home)
        .args(["run", "--dry-run", "--url", &tracker.url])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Would reopen 1,"));

    assert!(tracker.mutations().is_empty());
}

#[test]
fn sends_bearer_token_from_environment() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();

    snooze(&home)
        .args(["run", "--url", &tracker.url])
        .env("SONAR_TOKEN", "squ_secret")
        .assert()
        .success();

    let requests = tracker.requests();
    assert!(!requests.is_empty());
    assert!(requests
        .iter()
        .all(|r| r.auth.as_deref() == Some("Bearer squ_secret")));
}

#[test]
fn url_can_come_from_environment() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();

    snooze(&home)
        .arg("run")
        .env("SONARQUBE_URL", &tracker.url)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened 1"));
}

#[test]
fn settings_can_come_from_config_file() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();
    let config = home.path().join("snooze.toml");
    std::fs::write(
        &config,
        format!("url = \"{}\"\ndefault_snooze_days = 1\njobs = 2\n", tracker.url),
    )
    .unwrap();

    snooze(&home)
        .args(["run", "--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened 1"));
}

#[test]
fn negative_default_days_expire_malformed_labels() {
    let home = TempDir::new().unwrap();
    let tracker = FakeTracker::builder()
        .page(&[("KEY-9", &["snooze_soon"])])
        .accepted("KEY-9", LONG_AGO)
        .start();

    snooze(&home)
        .args(["run", "--url", &tracker.url, "--default-days", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened 1"));

    // No numeric label, so there is no label to remove.
    assert_eq!(
        tracker.mutations(),
        vec!["/api/issues/do_transition issue=KEY-9&transition=reopen".to_string()]
    );
}

#[test]
fn failed_reopen_is_reported_without_failing_the_run() {
    let home = TempDir::new().unwrap();
    let tracker = FakeTracker::builder()
        .page(&[("KEY-1", &["snooze_10"]), ("KEY-2", &["snooze_1"])])
        .accepted("KEY-1", LONG_AGO)
        .accepted("KEY-2", LONG_AGO)
        .fail_transition("KEY-1")
        .start();

    snooze(&home)
        .args(["run", "--url", &tracker.url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened 1,"))
        .stdout(predicate::str::contains("failed 1"))
        .stderr(predicate::str::contains("KEY-1"));

    // The label of the issue that stayed accepted is kept.
    assert!(!tracker
        .mutations()
        .iter()
        .any(|m| m.contains("tags=snooze_10")));
}

#[test]
fn parallel_jobs_produce_the_same_summary() {
    let home = TempDir::new().unwrap();
    let tracker = mixed_tracker();

    snooze(&home)
        .args(["run", "--url", &tracker.url, "-j", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reopened 1, left alone 1, skipped 1, failed 0 (3 snoozed, 1 without snooze label)",
        ));
}

#[test]
fn unreachable_tracker_fails_the_run() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .args(["run", "--url", &unreachable_url(), "--timeout", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "error: failed to fetch suppressed issues",
        ));
}

#[yare::parameterized(
    zero_jobs = { "SNOOZE_JOBS", "0" },
    text_jobs = { "SNOOZE_JOBS", "many" },
    zero_timeout = { "SNOOZE_TIMEOUT_SECS", "0" },
    text_days = { "DEFAULT_SNOOZE_DAYS", "thirty" },
    bad_url = { "SONARQUBE_URL", "sonar.example.com" },
)]
fn invalid_environment_setting_fails(var: &str, value: &str) {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .arg("run")
        .env(var, value)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: invalid"));
}

#[test]
fn missing_config_file_fails() {
    let home = TempDir::new().unwrap();

    snooze(&home)
        .args(["run", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
