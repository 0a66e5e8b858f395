// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue changelog (audit trail) types.
//!
//! The changelog is the ordered list of changes the tracker recorded for one
//! issue. The engine only needs one fact from it: when the issue entered the
//! accepted state.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timestamp::parse_timestamp;

/// Changelog field holding the issue status.
pub const STATUS_FIELD: &str = "issueStatus";

/// Status value recorded when an issue is accepted (suppressed).
pub const SUPPRESSED_MARKER: &str = "ACCEPTED";

/// Response body of the changelog endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Changelog {
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
}

impl Changelog {
    /// Returns when the issue was first accepted, if ever.
    pub fn suppressed_at(&self) -> Result<Option<DateTime<FixedOffset>>> {
        find_suppression_timestamp(&self.changelog)
    }
}

/// One recorded change, possibly touching several fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    /// When the change happened, as reported. Parsed on demand so that a
    /// malformed date only matters on the entry that is actually used.
    pub creation_date: String,
    /// Login of the user who made the change.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub diffs: Vec<FieldDiff>,
}

impl ChangelogEntry {
    /// Returns true if this change moved the issue into the accepted state.
    pub fn enters_suppression(&self) -> bool {
        self.diffs.iter().any(FieldDiff::enters_suppression)
    }

    /// Parses the creation date, keeping the reported offset.
    pub fn created_at(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.creation_date)
    }
}

/// A single field change within a changelog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDiff {
    pub key: String,
    #[serde(default)]
    pub new_value: Option<String>,
    #[serde(default)]
    pub old_value: Option<String>,
}

impl FieldDiff {
    /// Returns true if this diff sets the status field to accepted.
    pub fn enters_suppression(&self) -> bool {
        self.key == STATUS_FIELD && self.new_value.as_deref() == Some(SUPPRESSED_MARKER)
    }
}

/// Finds the moment an issue entered the accepted state.
///
/// Entries are scanned in the order received (chronological); the first one
/// that accepts the issue is authoritative, later re-acceptances are
/// ignored. `None` means the history holds no acceptance at all. Only the
/// accepting entry's date is parsed; an invalid date there is an error.
pub fn find_suppression_timestamp(
    entries: &[ChangelogEntry],
) -> Result<Option<DateTime<FixedOffset>>> {
    entries
        .iter()
        .find(|entry| entry.enters_suppression())
        .map(ChangelogEntry::created_at)
        .transpose()
}

#[cfg(test)]
#[path = "changelog_tests.rs"]
mod tests;
