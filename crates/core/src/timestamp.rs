// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of tracker timestamps.
//!
//! The tracker reports instants as ISO 8601 strings carrying their own UTC
//! offset (`2024-01-01T00:00:00+0100`). The offset is kept as-is: deadlines
//! are computed and compared in the offset the tracker reported.

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};

/// Native tracker format; `%z` also accepts the `+hh:mm` form.
const TRACKER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parses a tracker timestamp, preserving its offset.
///
/// Accepts `+hhmm`, `+hh:mm` and RFC 3339 forms (including `Z`).
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    DateTime::parse_from_str(trimmed, TRACKER_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
        .map_err(|_| Error::InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
