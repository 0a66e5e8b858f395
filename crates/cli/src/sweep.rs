// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The snooze sweep: per-issue evaluation and reopening.
//!
//! For each snoozed issue the sweep reads its changelog, finds when it was
//! accepted, derives the snooze duration from its labels and, once the
//! deadline has passed, reopens it and removes the snooze label.
//!
//! ```text
//! CANDIDATE ──► SKIPPED              (no acceptance in history)
//!     │
//!     └──────► EVALUATED ──► LEFT_ALONE     (deadline not passed)
//!                    │
//!                    └─────► TRANSITIONED   (reopened, label cleared)
//! ```
//!
//! Issues are independent: a failure on one is recorded in the report and
//! the sweep moves on.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use snooze_core::{evaluate, parse_policy, Clock, ExpirationDecision, Issue, Outcome, SnoozePolicy, SweepReport};

use crate::pool::map_bounded;
use crate::tracker::{Tracker, TransportError, TransportResult};

/// Everything known about one issue before any transition is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub key: String,
    pub policy: SnoozePolicy,
    /// When the issue was first accepted; `None` when the history has no
    /// acceptance.
    pub suppressed_at: Option<DateTime<FixedOffset>>,
    /// Present whenever `suppressed_at` is.
    pub decision: Option<ExpirationDecision>,
}

impl Evaluation {
    /// Returns true if the issue should be reopened.
    pub fn is_expired(&self) -> bool {
        self.decision.is_some_and(|d| d.expired)
    }
}

/// Runs the snooze engine against one tracker.
pub struct Sweep<'a, T: Tracker + ?Sized, C: Clock> {
    tracker: &'a T,
    clock: C,
    default_days: i64,
}

impl<'a, T: Tracker + ?Sized, C: Clock> Sweep<'a, T, C> {
    pub fn new(tracker: &'a T, clock: C, default_days: i64) -> Self {
        Sweep {
            tracker,
            clock,
            default_days,
        }
    }

    /// Reads an issue's history and decides whether its snooze is over.
    ///
    /// Performs exactly one tracker call (the changelog fetch).
    pub fn evaluate(&self, issue: &Issue) -> TransportResult<Evaluation> {
        let changelog = self.tracker.changelog(&issue.key)?;
        let policy = parse_policy(&issue.tags, self.default_days);
        let suppressed_at = changelog
            .suppressed_at()
            .map_err(|e| TransportError::Decode {
                endpoint: format!("changelog of {}", issue.key),
                reason: e.to_string(),
            })?;
        let decision = suppressed_at.map(|at| evaluate(at, policy.days, self.clock.now()));
        Ok(Evaluation {
            key: issue.key.clone(),
            policy,
            suppressed_at,
            decision,
        })
    }

    /// Evaluates one issue and reopens it if its snooze has expired.
    pub fn process(&self, issue: &Issue) -> TransportResult<Outcome> {
        let evaluation = self.evaluate(issue)?;
        self.apply(&evaluation)
    }

    /// Turns an evaluation into a terminal state, calling the tracker when
    /// the snooze is over.
    ///
    /// The snooze label is removed only after a successful reopen, and only
    /// when the duration came from a label.
    pub fn apply(&self, evaluation: &Evaluation) -> TransportResult<Outcome> {
        let key = &evaluation.key;
        let Some(decision) = evaluation.decision else {
            tracing::warn!("no acceptance found in history of {}; skipping", key);
            return Ok(Outcome::Skipped);
        };

        let deadline = decision.deadline;
        if !decision.expired {
            tracing::debug!(
                "{} stays snoozed until {}",
                key,
                deadline.map_or_else(|| "never".to_string(), |d| d.to_rfc3339())
            );
            return Ok(Outcome::LeftAlone { deadline });
        }

        tracing::info!("reopening {} (snooze expired)", key);
        self.tracker.reopen(key)?;
        tracing::info!("{} reopened", key);

        let cleared_tag = match &evaluation.policy.source {
            Some(tag) => {
                self.tracker.remove_tag(key, tag)?;
                tracing::info!("tag {} removed from {}", tag, key);
                Some(tag.clone())
            }
            None => None,
        };

        Ok(Outcome::Transitioned {
            deadline,
            cleared_tag,
        })
    }

    /// Processes every snoozed issue with up to `jobs` workers.
    ///
    /// Issues without a snooze label are counted as ignored and never
    /// touched. Failures are isolated per issue.
    pub fn run(&self, issues: &[Issue], jobs: usize) -> SweepReport {
        let (candidates, ignored): (Vec<&Issue>, Vec<&Issue>) =
            issues.iter().partition(|issue| issue.is_snoozed());
        tracing::info!(
            "{} of {} suppressed issues carry a snooze label",
            candidates.len(),
            issues.len()
        );

        let results = map_bounded(&candidates, jobs, |issue| self.process(issue));

        let mut report = SweepReport {
            ignored: ignored.len(),
            ..SweepReport::default()
        };
        for (issue, result) in candidates.iter().zip(results) {
            match result {
                Ok(outcome) => report.record(&outcome),
                Err(e) => {
                    tracing::error!("failed to process {}: {}", issue.key, e);
                    report.record_failure(issue.key.as_str(), e);
                }
            }
        }
        report
    }

    /// Evaluates every snoozed issue without changing anything.
    pub fn survey(&self, issues: &[Issue], jobs: usize) -> Vec<(String, TransportResult<Evaluation>)> {
        let candidates: Vec<&Issue> = issues.iter().filter(|i| i.is_snoozed()).collect();
        let results = map_bounded(&candidates, jobs, |issue| self.evaluate(issue));
        candidates
            .iter()
            .map(|issue| issue.key.clone())
            .zip(results)
            .collect()
    }
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
