// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration.
//!
//! Settings come from four layers, highest precedence first:
//! - command-line flags ([`Overrides`])
//! - environment variables ([`EnvSettings`])
//! - an optional TOML file ([`FileConfig`])
//! - built-in defaults
//!
//! The resolved [`Config`] is built once per run and handed to the tracker
//! client and the sweep.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "snooze";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Tracker URL used when none is configured.
pub const DEFAULT_URL: &str = "http://localhost:9000";
/// Snooze duration for issues whose snooze label carries no valid duration.
pub const DEFAULT_SNOOZE_DAYS: i64 = 30;
/// Per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Issues processed concurrently; 1 keeps the sweep sequential.
pub const DEFAULT_JOBS: usize = 1;

/// Contents of the optional `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Tracker base URL.
    pub url: Option<String>,
    /// Bearer token.
    pub token: Option<String>,
    pub default_snooze_days: Option<i64>,
    pub timeout_secs: Option<u64>,
    pub jobs: Option<usize>,
}

impl FileConfig {
    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Settings read from the environment, unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub url: Option<String>,
    pub token: Option<String>,
    pub default_snooze_days: Option<String>,
    pub timeout_secs: Option<String>,
    pub jobs: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl EnvSettings {
    /// Captures the current process environment.
    pub fn capture() -> Self {
        EnvSettings {
            url: env::tracker_url(),
            token: env::token(),
            default_snooze_days: env::default_snooze_days(),
            timeout_secs: env::timeout_secs(),
            jobs: env::jobs(),
            config_path: env::config_path(),
        }
    }
}

/// Settings given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub url: Option<String>,
    pub default_snooze_days: Option<i64>,
    pub timeout_secs: Option<u64>,
    pub jobs: Option<usize>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracker base URL without trailing slash.
    pub url: String,
    /// Bearer token; `None` sends unauthenticated requests.
    pub token: Option<String>,
    pub default_snooze_days: i64,
    /// Timeout applied to every tracker request.
    pub timeout: Duration,
    pub jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            token: None,
            default_snooze_days: DEFAULT_SNOOZE_DAYS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            jobs: DEFAULT_JOBS,
        }
    }
}

impl Config {
    /// Loads the configuration from the environment, the config file and
    /// the given command-line overrides.
    pub fn load(explicit_path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let env = EnvSettings::capture();
        let file = match locate_config_file(explicit_path, env.config_path.as_deref())? {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };
        Config::resolve(file, &env, overrides)
    }

    /// Merges the configuration layers.
    pub fn resolve(file: FileConfig, env: &EnvSettings, overrides: &Overrides) -> Result<Self> {
        let url = overrides
            .url
            .clone()
            .or_else(|| env.url.clone())
            .or(file.url)
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let url = normalize_url(&url)?;

        let token = env
            .token
            .clone()
            .or(file.token)
            .filter(|t| !t.trim().is_empty());

        let default_snooze_days = match overrides.default_snooze_days {
            Some(days) => days,
            None => match &env.default_snooze_days {
                Some(raw) => parse_setting(raw, "default snooze days", "expected a whole number of days")?,
                None => file.default_snooze_days.unwrap_or(DEFAULT_SNOOZE_DAYS),
            },
        };

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match &env.timeout_secs {
                Some(raw) => parse_setting(raw, "timeout", "expected a number of seconds")?,
                None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
        };
        if timeout_secs == 0 {
            return Err(Error::InvalidSetting {
                setting: "timeout",
                value: "0".to_string(),
                hint: "requests need a timeout of at least 1 second",
            });
        }

        let jobs = match overrides.jobs {
            Some(jobs) => jobs,
            None => match &env.jobs {
                Some(raw) => parse_setting(raw, "jobs", "expected a positive number of workers")?,
                None => file.jobs.unwrap_or(DEFAULT_JOBS),
            },
        };
        if jobs == 0 {
            return Err(Error::InvalidSetting {
                setting: "jobs",
                value: "0".to_string(),
                hint: "use 1 for a sequential sweep",
            });
        }

        Ok(Config {
            url,
            token,
            default_snooze_days,
            timeout: Duration::from_secs(timeout_secs),
            jobs,
        })
    }
}

/// Default config file location under the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Picks the config file to read, if any.
///
/// An explicitly requested file (flag or `SNOOZE_CONFIG`) must exist; the
/// default location is used only when present.
pub fn locate_config_file(
    explicit: Option<&Path>,
    from_env: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit.or(from_env) {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        return Ok(Some(path.to_path_buf()));
    }
    Ok(default_config_path().filter(|p| p.is_file()))
}

fn normalize_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::InvalidSetting {
            setting: "tracker url",
            value: url.to_string(),
            hint: "must start with http:// or https://",
        });
    }
    Ok(trimmed.to_string())
}

fn parse_setting<T: std::str::FromStr>(
    raw: &str,
    setting: &'static str,
    hint: &'static str,
) -> Result<T> {
    raw.trim().parse().map_err(|_| Error::InvalidSetting {
        setting,
        value: raw.to_string(),
        hint,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
