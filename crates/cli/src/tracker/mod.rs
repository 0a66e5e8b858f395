// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client side of the remote issue tracker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Sweep    │────►│   Tracker   │────►│   Tracker   │
//! │  (engine)   │◄────│   (trait)   │◄────│   Service   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   ▲
//!        ▼                   │
//! ┌─────────────┐     ┌─────────────┐
//! │    Pages    │     │   DryRun    │  (logs mutations instead of sending)
//! │ (iterator)  │     │  (wrapper)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Features
//!
//! - Paginated search for accepted issues, consumed lazily
//! - Changelog retrieval per issue
//! - Reopen transition and tag removal
//! - Bearer authentication and a per-request timeout
//! - Injectable tracker trait for testing

mod dry_run;
mod http;
mod pages;
mod transport;

pub use dry_run::DryRun;
pub use http::HttpTracker;
pub use pages::{fetch_suppressed_issues, pages, Pages};
pub use transport::{Tracker, TransportError, TransportResult, PAGE_SIZE};

#[cfg(test)]
pub(crate) mod mock;
