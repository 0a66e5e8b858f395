// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod run;
pub mod status;

use std::path::Path;

use snooze_core::Issue;

use crate::config::{Config, Overrides};
use crate::error::{Error, Result};
use crate::tracker::{fetch_suppressed_issues, Tracker};

/// Resolves the configuration for a command invocation.
pub fn load_config(config_path: Option<&Path>, overrides: &Overrides) -> Result<Config> {
    let config = Config::load(config_path, overrides)?;
    tracing::debug!(
        "tracker {} (default {} days, {} jobs, timeout {:?})",
        config.url,
        config.default_snooze_days,
        config.jobs,
        config.timeout
    );
    Ok(config)
}

/// Fetches every suppressed issue, failing the command if any page fails.
pub fn fetch_all<T: Tracker + ?Sized>(tracker: &T) -> Result<Vec<Issue>> {
    fetch_suppressed_issues(tracker).map_err(Error::Fetch)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
