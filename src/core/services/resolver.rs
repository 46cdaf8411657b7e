//! Repository name resolution
//!
//! Walks organization candidates (outer loop) and repository candidates
//! (inner loop), checking each URL once, and stops at the first one that
//! answers. A failed check is treated as "does not exist" for that pair only.

use std::time::Duration;

use log::debug;

use super::CandidateGenerator;
use crate::core::models::ResolutionResult;
use crate::core::ports::{RequestOptions, Transport};

/// Code host used when none is configured
pub const DEFAULT_CODE_HOST: &str = "https://github.com";

/// Timeout for each existence check
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(8);

/// Resolves loose hints to live repositories on the code host
#[derive(Debug)]
pub struct RepoResolver<'a, T: Transport> {
    generator: &'a CandidateGenerator,
    transport: &'a T,
    host: String,
    options: RequestOptions,
}

impl<'a, T: Transport> RepoResolver<'a, T> {
    /// Create a resolver against the default code host
    pub fn new(generator: &'a CandidateGenerator, transport: &'a T) -> Self {
        Self {
            generator,
            transport,
            host: DEFAULT_CODE_HOST.to_string(),
            options: RequestOptions::with_timeout(DEFAULT_RESOLVE_TIMEOUT),
        }
    }

    /// Use another code host (scheme and authority, e.g. `https://github.com`)
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    /// Use another timeout for each existence check
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// URL of a repository on the code host
    #[must_use]
    pub fn repo_url(&self, org: &str, repo: &str) -> String {
        format!("{}/{org}/{repo}", self.host)
    }

    /// Whether a URL answers with a success or redirect status
    pub fn url_exists(&self, url: &str) -> bool {
        match self.transport.get(url, &self.options) {
            Ok(response) => response.is_success(),
            Err(err) => {
                debug!("existence check failed for {url}: {err}");
                false
            },
        }
    }

    /// Find the first live `(org, repo)` pair for a hint, org-major
    pub fn resolve(&self, hint: &str) -> Option<ResolutionResult> {
        for org in self.generator.org_candidates() {
            for repo in self.generator.candidates(hint) {
                let url = self.repo_url(&org, &repo);
                if self.url_exists(&url) {
                    debug!("resolved {hint} -> {org}/{repo}");
                    return Some(ResolutionResult { org, repo, url });
                }
            }
        }
        debug!("no live repository for {hint}");
        None
    }
}
