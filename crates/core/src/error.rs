// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for snooze-core operations.

use thiserror::Error;

/// All possible errors that can occur in snooze-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid timestamp '{value}'\n  hint: expected ISO 8601 with an explicit offset, e.g. 2024-01-01T00:00:00+0000")]
    InvalidTimestamp { value: String },
}

/// A specialized Result type for snooze-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
