// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human- and machine-readable output for the `run` and `status` commands.

use serde::Serialize;
use snooze_core::SweepReport;

use crate::sweep::Evaluation;
use crate::tracker::TransportResult;

/// Snooze state of one issue as shown by `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnoozeState {
    /// Past its deadline; the next `run` reopens it.
    Expired,
    /// Still within its snooze.
    Snoozed,
    /// No acceptance found in its history; `run` skips it.
    NoHistory,
    /// Its changelog could not be read.
    Error,
}

impl SnoozeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnoozeState::Expired => "expired",
            SnoozeState::Snoozed => "snoozed",
            SnoozeState::NoHistory => "no-history",
            SnoozeState::Error => "error",
        }
    }
}

/// One line of `status` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub key: String,
    pub state: SnoozeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusRow {
    pub fn new(key: String, result: &TransportResult<Evaluation>) -> Self {
        let evaluation = match result {
            Ok(evaluation) => evaluation,
            Err(e) => {
                return StatusRow {
                    key,
                    state: SnoozeState::Error,
                    label: None,
                    days: None,
                    suppressed_at: None,
                    deadline: None,
                    error: Some(e.to_string()),
                }
            }
        };

        let state = match evaluation.decision {
            None => SnoozeState::NoHistory,
            Some(d) if d.expired => SnoozeState::Expired,
            Some(_) => SnoozeState::Snoozed,
        };
        StatusRow {
            key,
            state,
            label: evaluation.policy.source.clone(),
            days: Some(evaluation.policy.days),
            suppressed_at: evaluation.suppressed_at.map(|t| t.to_rfc3339()),
            deadline: evaluation
                .decision
                .and_then(|d| d.deadline)
                .map(|t| t.to_rfc3339()),
            error: None,
        }
    }
}

const EMPTY_CELL: &str = "-";

/// Formats status rows as an aligned text table.
pub fn format_status_table(rows: &[StatusRow]) -> String {
    if rows.is_empty() {
        return "No snoozed issues".to_string();
    }

    let header = ["KEY", "STATE", "LABEL", "DAYS", "SUPPRESSED", "DEADLINE"];
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.key.clone(),
                row.state.as_str().to_string(),
                row.label.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
                row.days
                    .map_or_else(|| EMPTY_CELL.to_string(), |d| d.to_string()),
                row.suppressed_at
                    .clone()
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
                row.deadline
                    .clone()
                    .or_else(|| row.error.clone())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = Vec::with_capacity(cells.len() + 1);
    out.push(format_line(&header.map(String::from), &widths));
    for line in &cells {
        out.push(format_line(line, &widths));
    }
    out.join("\n")
}

fn format_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// One-line summary of a sweep.
pub fn format_summary(report: &SweepReport, dry_run: bool) -> String {
    let verb = if dry_run { "Would reopen" } else { "Reopened" };
    format!(
        "{} {}, left alone {}, skipped {}, failed {} ({} snoozed, {} without snooze label)",
        verb,
        report.transitioned,
        report.left_alone,
        report.skipped,
        report.failures.len(),
        report.evaluated(),
        report.ignored
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
