// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue types as reported by the tracker's search endpoint.
//!
//! Only the fields the snooze engine needs are modelled; everything else the
//! tracker sends is ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::policy::has_snooze_label;

/// Lifecycle state of an issue.
///
/// Only the open and accepted (suppressed) states matter to the engine; any
/// other status the tracker reports is carried through opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Open, awaiting triage or a fix.
    Open,
    /// Accepted: temporarily suppressed ("snoozed").
    Accepted,
    /// Any other tracker status, kept verbatim.
    Other(String),
}

impl Status {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Open => "OPEN",
            Status::Accepted => "ACCEPTED",
            Status::Other(s) => s,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "OPEN" => Status::Open,
            "ACCEPTED" => Status::Accepted,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

/// A tracker issue, as a transient snapshot for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique tracker key.
    pub key: String,
    /// Labels ("tags" on the wire), unordered.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Current lifecycle state, when the tracker reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_status: Option<Status>,
}

impl Issue {
    /// Creates an issue with the given key and labels and no status.
    pub fn new(key: impl Into<String>, tags: Vec<String>) -> Self {
        Issue {
            key: key.into(),
            tags,
            issue_status: None,
        }
    }

    /// Returns true if any label marks this issue as snoozed.
    pub fn is_snoozed(&self) -> bool {
        has_snooze_label(&self.tags)
    }
}

/// Pagination block of a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// 1-based index of the returned page, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size the server applied, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Total page count; pagination stops once the page index reaches it.
    pub total: u32,
}

/// One page of the tracker's issue search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub issues: Vec<Issue>,
    pub paging: Paging,
}

impl SearchPage {
    /// Returns true if no page follows this one.
    ///
    /// `requested` is the page index that was asked for; the server's own
    /// index wins when present.
    pub fn is_last(&self, requested: u32) -> bool {
        let index = self.paging.page_index.unwrap_or(requested);
        index >= self.paging.total || self.issues.is_empty()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
