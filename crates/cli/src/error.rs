// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::tracker::TransportError;

/// All possible errors that can occur in the snoozers library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}\n  hint: pass an existing file to --config or unset SNOOZE_CONFIG")]
    ConfigNotFound(String),

    #[error("invalid {setting}: '{value}'\n  hint: {hint}")]
    InvalidSetting {
        setting: &'static str,
        value: String,
        hint: &'static str,
    },

    #[error("failed to fetch suppressed issues: {0}")]
    Fetch(#[source] TransportError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for snoozers operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
