// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::Overrides;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  export SONARQUBE_URL=https://sonar.example.com
  export SONAR_TOKEN=squ_...
  snooze status            Show snoozed issues and their deadlines
  snooze run --dry-run     Show what would be reopened
  snooze run               Reopen issues whose snooze expired

Label accepted issues with snooze_<days> (e.g. snooze_14) to set the
snooze duration; other snooze labels use the default duration.";

#[derive(Parser)]
#[command(name = "snooze")]
#[command(version)]
#[command(about = "Reopen accepted issues whose snooze has expired")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Tracker connection and engine settings shared by commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// Tracker base URL [env: SONARQUBE_URL]
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Snooze duration for labels without a valid day count [env: DEFAULT_SNOOZE_DAYS]
    #[arg(long, value_name = "DAYS", allow_negative_numbers = true)]
    pub default_days: Option<i64>,

    /// Per-request timeout in seconds [env: SNOOZE_TIMEOUT_SECS]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Number of issues processed concurrently [env: SNOOZE_JOBS]
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

impl ConnectionArgs {
    /// Converts the flags into configuration overrides.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            default_snooze_days: self.default_days,
            timeout_secs: self.timeout,
            jobs: self.jobs,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Reopen accepted issues whose snooze has expired
    #[command(after_help = "Examples:\n  \
        snooze run                     Reopen expired issues\n  \
        snooze run --dry-run           Log what would change, change nothing\n  \
        snooze run -j 4                Process four issues at a time")]
    Run {
        /// Evaluate everything but send no reopen or tag removal
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// List snoozed issues with their deadlines
    Status {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
