// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker wrapper that reads for real and only logs mutations.

use snooze_core::{Changelog, SearchPage};

use super::transport::{Tracker, TransportResult};

/// Passes reads through to the inner tracker; reopen and tag removal are
/// logged and reported as successful without being sent.
pub struct DryRun<T> {
    inner: T,
}

impl<T: Tracker> DryRun<T> {
    pub fn new(inner: T) -> Self {
        DryRun { inner }
    }

    /// Returns the wrapped tracker.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Tracker> Tracker for DryRun<T> {
    fn search_suppressed(&self, page: u32, page_size: u32) -> TransportResult<SearchPage> {
        self.inner.search_suppressed(page, page_size)
    }

    fn changelog(&self, issue_key: &str) -> TransportResult<Changelog> {
        self.inner.changelog(issue_key)
    }

    fn reopen(&self, issue_key: &str) -> TransportResult<()> {
        tracing::info!("dry run: would reopen {}", issue_key);
        Ok(())
    }

    fn remove_tag(&self, issue_key: &str, tag: &str) -> TransportResult<()> {
        tracing::info!("dry run: would remove tag {} from {}", tag, issue_key);
        Ok(())
    }
}
