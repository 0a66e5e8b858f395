// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy pagination over the accepted-issue search.

use snooze_core::{Issue, SearchPage};

use super::transport::{Tracker, TransportResult, PAGE_SIZE};

/// Iterator over search pages.
///
/// Requests page 1 first and stops after the page whose index reaches the
/// reported total, or after the first error. An empty page also ends the
/// sequence even when the reported total is higher: no further data can
/// follow it, and a server that over-reports its total would otherwise be
/// polled for blank pages. Each call to [`pages`] starts a fresh sequence.
pub struct Pages<'a, T: Tracker + ?Sized> {
    tracker: &'a T,
    page_size: u32,
    next: Option<u32>,
}

impl<'a, T: Tracker + ?Sized> Pages<'a, T> {
    /// Creates an iterator with a custom page size.
    pub fn with_page_size(tracker: &'a T, page_size: u32) -> Self {
        Pages {
            tracker,
            page_size,
            next: Some(1),
        }
    }
}

impl<T: Tracker + ?Sized> Iterator for Pages<'_, T> {
    type Item = TransportResult<SearchPage>;

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.next.take()?;
        tracing::info!("fetching suppressed issues, page {}", page);
        let result = self.tracker.search_suppressed(page, self.page_size);
        if let Ok(ref search) = result {
            tracing::debug!(
                "page {} returned {} issues (total pages: {})",
                page,
                search.issues.len(),
                search.paging.total
            );
            if !search.is_last(page) {
                self.next = page.checked_add(1);
            }
        }
        Some(result)
    }
}

/// Returns a fresh page iterator using the standard page size.
pub fn pages<T: Tracker + ?Sized>(tracker: &T) -> Pages<'_, T> {
    Pages::with_page_size(tracker, PAGE_SIZE)
}

/// Fetches every accepted issue, in page order.
///
/// Fails as a whole on the first failed page; no partial result is
/// returned.
pub fn fetch_suppressed_issues<T: Tracker + ?Sized>(tracker: &T) -> TransportResult<Vec<Issue>> {
    let mut issues = Vec::new();
    for page in pages(tracker) {
        issues.extend(page?.issues);
    }
    tracing::info!("fetched {} suppressed issues", issues.len());
    Ok(issues)
}
