// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snooze policy extraction from issue labels.
//!
//! A label containing `snooze` marks an issue as snoozed. The duration in
//! days is the second `_`-separated segment (`snooze_14` is 14 days). The
//! first label that yields a duration wins; when none does, the configured
//! default applies and no label is recorded as the source.

use serde::Serialize;

/// Substring that marks a label as a snooze label.
pub const SNOOZE_MARKER: &str = "snooze";

/// Classification of a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnoozeTag {
    /// A snooze label with a usable duration.
    Parsed { days: i64 },
    /// A snooze label whose duration segment is missing or not an integer.
    Malformed,
    /// Not a snooze label.
    Absent,
}

impl SnoozeTag {
    /// Classifies one label.
    pub fn classify(label: &str) -> Self {
        if !label.contains(SNOOZE_MARKER) {
            return SnoozeTag::Absent;
        }
        match label.split('_').nth(1).map(str::parse::<i64>) {
            Some(Ok(days)) => SnoozeTag::Parsed { days },
            _ => SnoozeTag::Malformed,
        }
    }
}

/// Snooze duration for one issue and the label it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnoozePolicy {
    /// Duration in calendar days. May be negative.
    pub days: i64,
    /// Label the duration was parsed from; `None` when the default applied.
    pub source: Option<String>,
}

impl SnoozePolicy {
    /// The fallback policy: default duration, no source label.
    pub fn fallback(default_days: i64) -> Self {
        SnoozePolicy {
            days: default_days,
            source: None,
        }
    }
}

/// Returns true if any label contains the snooze marker.
pub fn has_snooze_label<S: AsRef<str>>(labels: &[S]) -> bool {
    labels
        .iter()
        .any(|l| l.as_ref().contains(SNOOZE_MARKER))
}

/// Derives the snooze policy from an issue's labels.
///
/// Malformed snooze labels are passed over; only once every label has been
/// examined does the default apply.
pub fn parse_policy<S: AsRef<str>>(labels: &[S], default_days: i64) -> SnoozePolicy {
    labels
        .iter()
        .find_map(|label| match SnoozeTag::classify(label.as_ref()) {
            SnoozeTag::Parsed { days } => Some(SnoozePolicy {
                days,
                source: Some(label.as_ref().to_string()),
            }),
            SnoozeTag::Malformed | SnoozeTag::Absent => None,
        })
        .unwrap_or_else(|| SnoozePolicy::fallback(default_days))
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
