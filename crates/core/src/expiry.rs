// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snooze expiration.
//!
//! The deadline is the suppression instant plus the snooze duration in
//! calendar days. An issue is expired strictly after its deadline; at the
//! deadline itself it is still snoozed.
//!
//! All arithmetic and the comparison happen in the offset of the
//! suppression timestamp: `now` is converted into that offset first, so the
//! result never depends on the local timezone of the host.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use serde::Serialize;

/// Result of evaluating one issue's snooze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpirationDecision {
    /// True once `now` is past the deadline.
    pub expired: bool,
    /// The computed deadline; `None` when it is beyond the representable range.
    pub deadline: Option<DateTime<FixedOffset>>,
}

/// Computes the deadline for a snooze of `days` starting at `suppressed_at`.
///
/// Negative durations are taken at face value. Returns `None` when the
/// deadline cannot be represented.
pub fn deadline(suppressed_at: DateTime<FixedOffset>, days: i64) -> Option<DateTime<FixedOffset>> {
    TimeDelta::try_days(days).and_then(|delta| suppressed_at.checked_add_signed(delta))
}

/// Returns true if a snooze of `days` starting at `suppressed_at` is over.
pub fn is_expired(suppressed_at: DateTime<FixedOffset>, days: i64, now: DateTime<Utc>) -> bool {
    evaluate(suppressed_at, days, now).expired
}

/// Computes the deadline and compares it with `now`.
///
/// An unrepresentable deadline lies in the far future for positive
/// durations (never expired) and in the far past for negative ones.
pub fn evaluate(
    suppressed_at: DateTime<FixedOffset>,
    days: i64,
    now: DateTime<Utc>,
) -> ExpirationDecision {
    let now = now.with_timezone(suppressed_at.offset());
    let deadline = deadline(suppressed_at, days);
    let expired = match deadline {
        Some(d) => now > d,
        None => days < 0,
    };
    ExpirationDecision { expired, deadline }
}

#[cfg(test)]
#[path = "expiry_tests.rs"]
mod tests;
