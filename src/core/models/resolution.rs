//! Repository resolution results

use serde::Serialize;

/// A verified organization/repository pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    /// Organization spelling that answered
    pub org: String,
    /// Repository spelling that answered
    pub repo: String,
    /// URL that was verified
    pub url: String,
}

/// Resolution attempt for one tracked hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoResolution {
    /// The loose hint that was searched
    pub hint: String,
    /// The first verified hit, if any
    pub found: Option<ResolutionResult>,
}

impl RepoResolution {
    /// Format the report line for this attempt
    #[must_use]
    pub fn report_line(&self) -> String {
        match &self.found {
            Some(hit) => format!("RepoResolve[{}]: FOUND {}/{}", self.hint, hit.org, hit.repo),
            None => format!("RepoResolve[{}]: not found", self.hint),
        }
    }
}
