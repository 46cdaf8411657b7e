//! Guardian configuration
//!
//! Settings are resolved once at startup, in increasing precedence:
//! built-in defaults, `config/guardian.toml`, then environment values.
//! Command-line overrides are applied by the caller on the resolved value.
//! The resolved [`GuardianConfig`] is passed by reference to every component;
//! nothing reads the environment after this point.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{DEFAULT_ORG, DeployHooks, HookProvider};
use crate::core::ports::{DEFAULT_TIMEOUT, RequestOptions};
use crate::core::services::{DEFAULT_CODE_HOST, DEFAULT_RESOLVE_TIMEOUT};
use crate::paths;

/// Environment value names
pub mod env {
    /// Base URL of the API (trailing slashes are dropped)
    pub const API_BASE: &str = "API_BASE";
    /// Health URL of the UI
    pub const UI_HEALTH: &str = "UI_HEALTH";
    /// Route appended to `API_BASE` for the admin bootstrap call
    pub const ADMIN_BOOTSTRAP_ROUTE: &str = "ADMIN_BOOTSTRAP_ROUTE";
    /// Organization hint for repository resolution
    pub const ORG_GITHUB: &str = "ORG_GITHUB";
    /// Phrase that marks a trusted acknowledgment
    pub const TRUSTED_PHRASE: &str = "TRUSTED_PHRASE";
    /// Days without acknowledgment before the dead-man switch fires
    pub const DAYS_NO_ACK: &str = "GUARDIAN_DAYS_NO_ACK";
    /// JSON file holding redeploy hook URLs
    pub const SECRETS_FILE: &str = "TV_SECRETS_FILE";
    /// Comma-separated repository hints to resolve
    pub const TRACKED_REPOS: &str = "GUARDIAN_TRACKED_REPOS";
    /// Code host used for repository resolution
    pub const CODE_HOST: &str = "GUARDIAN_CODE_HOST";
    /// `owner/name` of the repository whose issues carry acknowledgments
    pub const ISSUE_REPO: &str = "GUARDIAN_ISSUE_REPO";
    /// Timeout for probes and remediation calls, in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "GUARDIAN_HTTP_TIMEOUT_SECS";
    /// Timeout for each repository existence check, in seconds
    pub const RESOLVE_TIMEOUT_SECS: &str = "GUARDIAN_RESOLVE_TIMEOUT_SECS";
}

/// Admin bootstrap route used when none is configured
pub const DEFAULT_BOOTSTRAP_ROUTE: &str = "/v1/ops/config/bootstrap";

/// Dead-man threshold used when none is configured
pub const DEFAULT_DAYS_NO_ACK: u32 = 3;

/// Repository hints resolved on every pass unless configured otherwise
pub const DEFAULT_TRACKED_REPOS: [&str; 5] = ["continuity", "talk", "tv", "stegverse-scw", "site"];

/// Errors raised while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`SettingsFile`]
    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },

    /// A numeric setting is not a whole number
    #[error("{key} must be a whole number, got {value:?}")]
    InvalidNumber {
        /// Setting name
        key: &'static str,
        /// Offending value
        value: String,
    },
}

/// Contents of `config/guardian.toml`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    /// See [`env::API_BASE`]
    pub api_base: Option<String>,
    /// See [`env::UI_HEALTH`]
    pub ui_health: Option<String>,
    /// See [`env::ADMIN_BOOTSTRAP_ROUTE`]
    pub admin_bootstrap_route: Option<String>,
    /// See [`env::ORG_GITHUB`]
    pub org: Option<String>,
    /// See [`env::TRUSTED_PHRASE`]
    pub trusted_phrase: Option<String>,
    /// See [`env::DAYS_NO_ACK`]
    pub days_no_ack: Option<u32>,
    /// See [`env::TRACKED_REPOS`]
    pub tracked_repos: Option<Vec<String>>,
    /// See [`env::SECRETS_FILE`]
    pub secrets_file: Option<PathBuf>,
    /// See [`env::CODE_HOST`]
    pub code_host: Option<String>,
    /// See [`env::ISSUE_REPO`]
    pub issue_repo: Option<String>,
    /// See [`env::HTTP_TIMEOUT_SECS`]
    pub http_timeout_secs: Option<u64>,
    /// See [`env::RESOLVE_TIMEOUT_SECS`]
    pub resolve_timeout_secs: Option<u64>,
}

impl SettingsFile {
    /// Load a settings file; a missing file yields empty settings
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved guardian settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianConfig {
    /// API base URL without trailing slash
    pub api_base: Option<String>,
    /// UI health URL
    pub ui_health: Option<String>,
    /// Route appended to the API base for admin bootstrap
    pub admin_bootstrap_route: String,
    /// Organization hint for repository resolution
    pub org_hint: String,
    /// Phrase that marks a trusted acknowledgment (empty = none trusted)
    pub trusted_phrase: String,
    /// Days without acknowledgment before the dead-man switch fires
    pub days_no_ack: u32,
    /// Repository hints resolved on every pass
    pub tracked_repos: Vec<String>,
    /// JSON file with redeploy hook URLs
    pub secrets_file: Option<PathBuf>,
    /// Per-hook fallbacks taken from the environment
    pub hook_fallbacks: DeployHooks,
    /// Code host for repository resolution
    pub code_host: String,
    /// Repository whose issues are scanned (tracker default when absent)
    pub issue_repo: Option<String>,
    /// Timeout for probes and remediation calls
    pub http_timeout: Duration,
    /// Timeout for each repository existence check
    pub resolve_timeout: Duration,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            ui_health: None,
            admin_bootstrap_route: DEFAULT_BOOTSTRAP_ROUTE.to_string(),
            org_hint: DEFAULT_ORG.to_string(),
            trusted_phrase: String::new(),
            days_no_ack: DEFAULT_DAYS_NO_ACK,
            tracked_repos: DEFAULT_TRACKED_REPOS.iter().map(ToString::to_string).collect(),
            secrets_file: None,
            hook_fallbacks: DeployHooks::default(),
            code_host: DEFAULT_CODE_HOST.to_string(),
            issue_repo: None,
            http_timeout: DEFAULT_TIMEOUT,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
        }
    }
}

impl GuardianConfig {
    /// Load settings for a project root from its settings file and the
    /// process environment
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let file = SettingsFile::load(&paths::settings_file(root))?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Resolve settings from a settings file and an environment lookup.
    ///
    /// Empty environment values count as unset.
    pub fn resolve(
        file: SettingsFile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_base = get(env::API_BASE)
            .or(file.api_base)
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty());

        let days_no_ack = match get(env::DAYS_NO_ACK) {
            Some(raw) => parse_number(env::DAYS_NO_ACK, &raw)?,
            None => file.days_no_ack.unwrap_or(defaults.days_no_ack),
        };

        let http_timeout = match get(env::HTTP_TIMEOUT_SECS) {
            Some(raw) => Duration::from_secs(parse_number(env::HTTP_TIMEOUT_SECS, &raw)?),
            None => file.http_timeout_secs.map_or(defaults.http_timeout, Duration::from_secs),
        };

        let resolve_timeout = match get(env::RESOLVE_TIMEOUT_SECS) {
            Some(raw) => Duration::from_secs(parse_number(env::RESOLVE_TIMEOUT_SECS, &raw)?),
            None => file.resolve_timeout_secs.map_or(defaults.resolve_timeout, Duration::from_secs),
        };

        let tracked_repos = get(env::TRACKED_REPOS)
            .map(|raw| split_list(&raw))
            .or(file.tracked_repos)
            .unwrap_or(defaults.tracked_repos);

        let hook_fallbacks = DeployHooks {
            render: get(HookProvider::Render.env_var()).unwrap_or_default(),
            netlify: get(HookProvider::Netlify.env_var()).unwrap_or_default(),
            vercel: get(HookProvider::Vercel.env_var()).unwrap_or_default(),
        };

        Ok(Self {
            api_base,
            ui_health: get(env::UI_HEALTH).or(file.ui_health).filter(|u| !u.is_empty()),
            admin_bootstrap_route: get(env::ADMIN_BOOTSTRAP_ROUTE)
                .or(file.admin_bootstrap_route)
                .unwrap_or(defaults.admin_bootstrap_route),
            org_hint: get(env::ORG_GITHUB).or(file.org).unwrap_or(defaults.org_hint),
            trusted_phrase: get(env::TRUSTED_PHRASE)
                .or(file.trusted_phrase)
                .unwrap_or_default(),
            days_no_ack,
            tracked_repos,
            secrets_file: get(env::SECRETS_FILE).map(PathBuf::from).or(file.secrets_file),
            hook_fallbacks,
            code_host: get(env::CODE_HOST).or(file.code_host).unwrap_or(defaults.code_host),
            issue_repo: get(env::ISSUE_REPO).or(file.issue_repo),
            http_timeout,
            resolve_timeout,
        })
    }

    /// URL probed for API health (`API_BASE/whoami`)
    #[must_use]
    pub fn whoami_url(&self) -> Option<String> {
        self.api_base.as_ref().map(|base| format!("{base}/whoami"))
    }

    /// Request options for probes and remediation calls
    #[must_use]
    pub const fn request_options(&self) -> RequestOptions {
        RequestOptions::with_timeout(self.http_timeout)
    }
}

fn parse_number<N: std::str::FromStr>(key: &'static str, raw: &str) -> Result<N, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}
