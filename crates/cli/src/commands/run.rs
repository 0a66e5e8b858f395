// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use snooze_core::{Clock, SweepReport, SystemClock};

use crate::cli::ConnectionArgs;
use crate::config::Config;
use crate::display::format_summary;
use crate::error::Result;
use crate::sweep::Sweep;
use crate::tracker::{DryRun, HttpTracker, Tracker};

use super::{fetch_all, load_config};

pub fn run(config_path: Option<&Path>, connection: &ConnectionArgs, dry_run: bool) -> Result<()> {
    let config = load_config(config_path, &connection.overrides())?;
    let http = HttpTracker::new(&config);
    let tracker: Box<dyn Tracker> = if dry_run {
        tracing::info!("dry run: no issue will be changed");
        Box::new(DryRun::new(http))
    } else {
        Box::new(http)
    };

    let report = sweep(tracker.as_ref(), SystemClock, &config)?;
    println!("{}", format_summary(&report, dry_run));
    Ok(())
}

/// Fetches the suppressed issues and reopens the expired ones.
///
/// Only a failed fetch is an error; per-issue failures land in the report.
pub fn sweep<T: Tracker + ?Sized, C: Clock>(
    tracker: &T,
    clock: C,
    config: &Config,
) -> Result<SweepReport> {
    let issues = fetch_all(tracker)?;
    let report = Sweep::new(tracker, clock, config.default_snooze_days).run(&issues, config.jobs);
    if !report.is_clean() {
        tracing::warn!("{} issues failed", report.failures.len());
    }
    Ok(report)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
