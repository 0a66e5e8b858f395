// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker abstraction.
//!
//! Provides a trait-based seam over the tracker's HTTP API that enables:
//! - A real HTTP client for production
//! - Mock trackers for unit testing

use snooze_core::{Changelog, SearchPage};

/// Issues requested per search page.
pub const PAGE_SIZE: u32 = 500;

/// Error type for tracker calls.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The tracker answered with a non-success status.
    #[error("{endpoint} returned HTTP {code}{}", body_suffix(.body))]
    Status {
        endpoint: String,
        code: u16,
        body: String,
    },

    /// The request never completed (connection refused, timeout, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("invalid response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

/// Result type for tracker calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Operations the snooze engine needs from the tracker.
///
/// Implementations must be shareable across worker threads; every call is
/// attempted exactly once.
pub trait Tracker: Send + Sync {
    /// Fetches one page (1-based) of accepted issues.
    fn search_suppressed(&self, page: u32, page_size: u32) -> TransportResult<SearchPage>;

    /// Fetches the full changelog of one issue.
    fn changelog(&self, issue_key: &str) -> TransportResult<Changelog>;

    /// Applies the reopen transition to an issue.
    fn reopen(&self, issue_key: &str) -> TransportResult<()>;

    /// Removes one tag from an issue.
    fn remove_tag(&self, issue_key: &str, tag: &str) -> TransportResult<()>;
}

impl<T: Tracker + ?Sized> Tracker for &T {
    fn search_suppressed(&self, page: u32, page_size: u32) -> TransportResult<SearchPage> {
        (**self).search_suppressed(page, page_size)
    }

    fn changelog(&self, issue_key: &str) -> TransportResult<Changelog> {
        (**self).changelog(issue_key)
    }

    fn reopen(&self, issue_key: &str) -> TransportResult<()> {
        (**self).reopen(issue_key)
    }

    fn remove_tag(&self, issue_key: &str, tag: &str) -> TransportResult<()> {
        (**self).remove_tag(issue_key, tag)
    }
}

impl<T: Tracker + ?Sized> Tracker for Box<T> {
    fn search_suppressed(&self, page: u32, page_size: u32) -> TransportResult<SearchPage> {
        (**self).search_suppressed(page, page_size)
    }

    fn changelog(&self, issue_key: &str) -> TransportResult<Changelog> {
        (**self).changelog(issue_key)
    }

    fn reopen(&self, issue_key: &str) -> TransportResult<()> {
        (**self).reopen(issue_key)
    }

    fn remove_tag(&self, issue_key: &str, tag: &str) -> TransportResult<()> {
        (**self).remove_tag(issue_key, tag)
    }
}
