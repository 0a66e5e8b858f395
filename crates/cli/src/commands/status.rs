// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use snooze_core::{Clock, SystemClock};

use crate::cli::{ConnectionArgs, OutputFormat};
use crate::config::Config;
use crate::display::{format_status_table, StatusRow};
use crate::error::Result;
use crate::sweep::Sweep;
use crate::tracker::{HttpTracker, Tracker};

use super::{fetch_all, load_config};

pub fn run(
    config_path: Option<&Path>,
    connection: &ConnectionArgs,
    output: OutputFormat,
) -> Result<()> {
    let config = load_config(config_path, &connection.overrides())?;
    let tracker = HttpTracker::new(&config);
    let rows = collect(&tracker, SystemClock, &config)?;
    println!("{}", render(&rows, output)?);
    Ok(())
}

/// Evaluates every snoozed issue without changing anything.
pub fn collect<T: Tracker + ?Sized, C: Clock>(
    tracker: &T,
    clock: C,
    config: &Config,
) -> Result<Vec<StatusRow>> {
    let issues = fetch_all(tracker)?;
    let rows = Sweep::new(tracker, clock, config.default_snooze_days)
        .survey(&issues, config.jobs)
        .into_iter()
        .map(|(key, result)| StatusRow::new(key, &result))
        .collect();
    Ok(rows)
}

pub fn render(rows: &[StatusRow], output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_status_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
