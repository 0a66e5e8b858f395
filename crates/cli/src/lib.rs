// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! snoozers - reopen accepted issues whose snooze has expired.
//!
//! This crate provides the `snooze` CLI on top of [`snooze_core`]: it pages
//! through every accepted issue of a SonarQube-compatible tracker, reads the
//! `snooze_<days>` label and the acceptance time from the changelog, and
//! reopens the issue once the snooze is over.
//!
//! # Main Components
//!
//! - [`Config`] - Layered settings (flags, environment, TOML file)
//! - [`tracker`] - The [`Tracker`](tracker::Tracker) seam and its HTTP client
//! - [`sweep`] - The per-issue engine and the run loop
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use snoozers::{Config, Overrides};
//! use snoozers::sweep::Sweep;
//! use snoozers::tracker::{fetch_suppressed_issues, HttpTracker};
//! use snooze_core::SystemClock;
//!
//! let config = Config::load(None, &Overrides::default())?;
//! let tracker = HttpTracker::new(&config);
//! let issues = fetch_suppressed_issues(&tracker)?;
//! let report = Sweep::new(&tracker, SystemClock, config.default_snooze_days)
//!     .run(&issues, config.jobs);
//! ```

mod cli;
mod commands;
mod display;
mod env;
pub mod logging;
mod pool;

pub mod config;
pub mod error;
pub mod sweep;
pub mod tracker;

pub use cli::{Cli, Command, ConnectionArgs, OutputFormat};
pub use config::{Config, Overrides};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Run {
            dry_run,
            connection,
        } => commands::run::run(config_path, &connection, dry_run),
        Command::Status { connection, output } => {
            commands::status::run(config_path, &connection, output)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "snooze", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
