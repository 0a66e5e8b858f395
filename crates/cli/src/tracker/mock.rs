// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory tracker for tests.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use snooze_core::{Changelog, ChangelogEntry, FieldDiff, Issue, Paging, SearchPage};

use super::transport::{Tracker, TransportError, TransportResult};

/// A call received by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search { page: u32, page_size: u32 },
    Changelog(String),
    Reopen(String),
    RemoveTag(String, String),
}

/// Mock tracker that serves canned pages and changelogs and records calls.
#[derive(Default)]
pub struct MockTracker {
    pages: Vec<Vec<Issue>>,
    total_pages: Option<u32>,
    changelogs: HashMap<String, Vec<ChangelogEntry>>,
    failing_pages: HashSet<u32>,
    failing_changelogs: HashSet<String>,
    failing_reopens: HashSet<String>,
    failing_tag_removals: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl MockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a search page.
    pub fn with_page(mut self, issues: Vec<Issue>) -> Self {
        self.pages.push(issues);
        self
    }

    /// Overrides the total page count reported (defaults to the page count).
    pub fn with_total_pages(mut self, total: u32) -> Self {
        self.total_pages = Some(total);
        self
    }

    /// Sets the changelog of an issue.
    pub fn with_history(mut self, key: &str, entries: Vec<ChangelogEntry>) -> Self {
        self.changelogs.insert(key.to_string(), entries);
        self
    }

    pub fn fail_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn fail_changelog(mut self, key: &str) -> Self {
        self.failing_changelogs.insert(key.to_string());
        self
    }

    pub fn fail_reopen(mut self, key: &str) -> Self {
        self.failing_reopens.insert(key.to_string());
        self
    }

    pub fn fail_tag_removal(mut self, key: &str) -> Self {
        self.failing_tag_removals.insert(key.to_string());
        self
    }

    /// Returns every call received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns only the mutating calls (reopen, tag removal).
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Reopen(_) | Call::RemoveTag(..)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error(endpoint: &str) -> TransportError {
    TransportError::Status {
        endpoint: endpoint.to_string(),
        code: 500,
        body: "mock failure".to_string(),
    }
}

impl Tracker for MockTracker {
    fn search_suppressed(&self, page: u32, page_size: u32) -> TransportResult<SearchPage> {
        self.record(Call::Search { page, page_size });
        if self.failing_pages.contains(&page) {
            return Err(server_error("/api/issues/search"));
        }
        let issues = self
            .pages
            .get((page as usize).saturating_sub(1))
            .cloned()
            .unwrap_or_default();
        Ok(SearchPage {
            issues,
            paging: Paging {
                page_index: Some(page),
                page_size: Some(page_size),
                total: self.total_pages.unwrap_or(self.pages.len() as u32),
            },
        })
    }

    fn changelog(&self, issue_key: &str) -> TransportResult<Changelog> {
        self.record(Call::Changelog(issue_key.to_string()));
        if self.failing_changelogs.contains(issue_key) {
            return Err(server_error("/api/issues/changelog"));
        }
        Ok(Changelog {
            changelog: self.changelogs.get(issue_key).cloned().unwrap_or_default(),
        })
    }

    fn reopen(&self, issue_key: &str) -> TransportResult<()> {
        self.record(Call::Reopen(issue_key.to_string()));
        if self.failing_reopens.contains(issue_key) {
            return Err(server_error("/api/issues/do_transition"));
        }
        Ok(())
    }

    fn remove_tag(&self, issue_key: &str, tag: &str) -> TransportResult<()> {
        self.record(Call::RemoveTag(issue_key.to_string(), tag.to_string()));
        if self.failing_tag_removals.contains(issue_key) {
            return Err(TransportError::Transport("mock timeout".to_string()));
        }
        Ok(())
    }
}

/// Builds an issue with the given labels.
pub fn issue(key: &str, tags: &[&str]) -> Issue {
    Issue::new(key, tags.iter().map(|t| t.to_string()).collect())
}

/// A changelog entry accepting the issue at `at`.
pub fn accepted_at(at: &str) -> ChangelogEntry {
    ChangelogEntry {
        creation_date: at.to_string(),
        user: Some("tester".to_string()),
        diffs: vec![FieldDiff {
            key: "issueStatus".to_string(),
            old_value: Some("OPEN".to_string()),
            new_value: Some("ACCEPTED".to_string()),
        }],
    }
}

/// A changelog entry that does not touch the status.
pub fn commented_at(at: &str) -> ChangelogEntry {
    ChangelogEntry {
        creation_date: at.to_string(),
        user: Some("tester".to_string()),
        diffs: vec![FieldDiff {
            key: "severity".to_string(),
            old_value: Some("MAJOR".to_string()),
            new_value: Some("MINOR".to_string()),
        }],
    }
}
