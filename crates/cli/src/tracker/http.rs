// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of [`Tracker`] using `ureq`.

use serde::de::DeserializeOwned;
use snooze_core::{Changelog, SearchPage};

use super::transport::{Tracker, TransportError, TransportResult};
use crate::config::Config;

const SEARCH_PATH: &str = "/api/issues/search";
const CHANGELOG_PATH: &str = "/api/issues/changelog";
const TRANSITION_PATH: &str = "/api/issues/do_transition";
const REMOVE_TAGS_PATH: &str = "/api/issues/tags/remove";

/// Issue status the search is filtered on.
const SUPPRESSED_STATUS: &str = "ACCEPTED";
/// Transition applied to expired issues.
const REOPEN_TRANSITION: &str = "reopen";

/// Error bodies are cut to this many characters in error messages.
const MAX_ERROR_BODY: usize = 512;

/// Tracker client over HTTP.
///
/// Holds one connection-pooling agent; it is safe to share across worker
/// threads.
#[derive(Clone)]
pub struct HttpTracker {
    base_url: String,
    token: Option<String>,
    agent: ureq::Agent,
}

impl HttpTracker {
    /// Creates a client for the configured tracker.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        if config.token.is_none() {
            tracing::warn!("no tracker token configured; sending unauthenticated requests");
        }
        HttpTracker {
            base_url: config.url.clone(),
            token: config.token.clone(),
            agent,
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let url = format!("{}{}", self.base_url, path);
        let req = self.agent.request(method, &url);
        match &self.token {
            Some(token) => req.set("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    fn read_json<T: DeserializeOwned>(
        path: &str,
        result: Result<ureq::Response, ureq::Error>,
    ) -> TransportResult<T> {
        let response = result.map_err(|e| map_error(path, e))?;
        response.into_json().map_err(|e| TransportError::Decode {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn expect_success(path: &str, result: Result<ureq::Response, ureq::Error>) -> TransportResult<()> {
        let response = result.map_err(|e| map_error(path, e))?;
        // Drain the body so the connection returns to the pool.
        let _ = response.into_string();
        Ok(())
    }
}

impl Tracker for HttpTracker {
    fn search_suppressed(&self, page: u32, page_size: u32) -> TransportResult<SearchPage> {
        let result = self
            .request("GET", SEARCH_PATH)
            .query("issueStatuses", SUPPRESSED_STATUS)
            .query("ps", &page_size.to_string())
            .query("p", &page.to_string())
            .call();
        Self::read_json(SEARCH_PATH, result)
    }

    fn changelog(&self, issue_key: &str) -> TransportResult<Changelog> {
        let result = self
            .request("GET", CHANGELOG_PATH)
            .query("issue", issue_key)
            .call();
        Self::read_json(CHANGELOG_PATH, result)
    }

    fn reopen(&self, issue_key: &str) -> TransportResult<()> {
        let result = self
            .request("POST", TRANSITION_PATH)
            .send_form(&[("issue", issue_key), ("transition", REOPEN_TRANSITION)]);
        Self::expect_success(TRANSITION_PATH, result)
    }

    fn remove_tag(&self, issue_key: &str, tag: &str) -> TransportResult<()> {
        let result = self
            .request("POST", REMOVE_TAGS_PATH)
            .query("issue", issue_key)
            .query("tags", tag)
            .call();
        Self::expect_success(REMOVE_TAGS_PATH, result)
    }
}

fn map_error(path: &str, err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Status(code, response) => {
            let body: String = response
                .into_string()
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            TransportError::Status {
                endpoint: path.to_string(),
                code,
                body,
            }
        }
        ureq::Error::Transport(transport) => {
            TransportError::Transport(format!("{}: {}", path, transport))
        }
    }
}
