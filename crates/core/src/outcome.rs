// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue results of a sweep and the run summary.
//!
//! Every candidate issue ends in exactly one terminal state: skipped (no
//! acceptance in its history), left alone (still snoozed) or transitioned
//! (reopened). Transport failures are tracked beside those states.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Terminal state of one evaluated issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The changelog holds no acceptance; nothing was done.
    Skipped,
    /// The snooze has not expired.
    LeftAlone {
        deadline: Option<DateTime<FixedOffset>>,
    },
    /// The issue was reopened; `cleared_tag` is the snooze label removed.
    Transitioned {
        deadline: Option<DateTime<FixedOffset>>,
        cleared_tag: Option<String>,
    },
}

impl Outcome {
    /// Short name used in logs and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Skipped => "skipped",
            Outcome::LeftAlone { .. } => "left_alone",
            Outcome::Transitioned { .. } => "transitioned",
        }
    }
}

/// Summary of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Issues without any snooze label; never evaluated.
    pub ignored: usize,
    pub skipped: usize,
    pub left_alone: usize,
    pub transitioned: usize,
    /// Issues whose processing failed, with the error message.
    pub failures: Vec<(String, String)>,
}

impl SweepReport {
    /// Records the terminal state of one issue.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::LeftAlone { .. } => self.left_alone += 1,
            Outcome::Transitioned { .. } => self.transitioned += 1,
        }
    }

    /// Records a failed issue.
    pub fn record_failure(&mut self, key: impl Into<String>, error: impl ToString) {
        self.failures.push((key.into(), error.to_string()));
    }

    /// Number of issues that were evaluated, failed ones included.
    pub fn evaluated(&self) -> usize {
        self.skipped + self.left_alone + self.transitioned + self.failures.len()
    }

    /// Returns true if every evaluated issue reached a terminal state.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
