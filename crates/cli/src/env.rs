// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by snooze are defined here with
//! typed accessor functions. The variable name constants are generated by
//! `build.rs` and live in the [`vars`] submodule. Empty values count as
//! unset.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `SONARQUBE_URL` if set.
pub fn tracker_url() -> Option<String> {
    non_empty(vars::SONARQUBE_URL)
}

/// Returns the value of `SONAR_TOKEN` if set.
pub fn token() -> Option<String> {
    non_empty(vars::SONAR_TOKEN)
}

/// Returns the raw value of `DEFAULT_SNOOZE_DAYS` if set.
pub fn default_snooze_days() -> Option<String> {
    non_empty(vars::DEFAULT_SNOOZE_DAYS)
}

/// Returns the raw value of `SNOOZE_TIMEOUT_SECS` if set.
pub fn timeout_secs() -> Option<String> {
    non_empty(vars::SNOOZE_TIMEOUT_SECS)
}

/// Returns the raw value of `SNOOZE_JOBS` if set.
pub fn jobs() -> Option<String> {
    non_empty(vars::SNOOZE_JOBS)
}

/// Returns the value of `SNOOZE_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    non_empty(vars::SNOOZE_CONFIG).map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
