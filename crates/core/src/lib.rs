// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! snooze-core: Domain logic for the snooze expiration engine.
//!
//! This crate decides, without touching the network, whether a suppressed
//! issue has outlived its snooze: it locates the suppression moment in the
//! issue's changelog, derives the snooze duration from its labels and
//! compares the resulting deadline with the current time.

pub mod changelog;
pub mod clock;
pub mod error;
pub mod expiry;
pub mod issue;
pub mod outcome;
pub mod policy;
pub mod timestamp;

pub use changelog::{find_suppression_timestamp, Changelog, ChangelogEntry, FieldDiff};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use expiry::{deadline, evaluate, is_expired, ExpirationDecision};
pub use issue::{Issue, Paging, SearchPage, Status};
pub use outcome::{Outcome, SweepReport};
pub use policy::{has_snooze_label, parse_policy, SnoozePolicy, SnoozeTag};
