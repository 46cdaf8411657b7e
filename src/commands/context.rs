//! Everything a command needs, loaded once per invocation

use std::path::{Path, PathBuf};

use guardian::adapters::{GhIssueTracker, load_alias_config, resolve_hooks};
use guardian::config::GuardianConfig;
use guardian::core::models::DeployHooks;
use guardian::core::services::CandidateGenerator;
use guardian::paths;
use log::debug;

/// Loaded configuration and the adapters built from it
#[derive(Debug)]
pub struct Context {
    /// Project root
    pub root: PathBuf,
    /// Resolved settings
    pub config: GuardianConfig,
    /// Candidate generator over the alias configuration
    pub generator: CandidateGenerator,
    /// Redeploy hook URLs
    pub hooks: DeployHooks,
    /// Issue tracker for the dead-man switch
    pub tracker: GhIssueTracker,
}

impl Context {
    /// Load settings under `root`; `org` overrides the configured org hint
    pub fn load(root: &Path, org: Option<&str>) -> anyhow::Result<Self> {
        let mut config = GuardianConfig::load(root)?;
        if let Some(org) = org.filter(|o| !o.trim().is_empty()) {
            config.org_hint = org.to_string();
        }
        debug!("loaded config for {}: {config:?}", root.display());

        let aliases = load_alias_config(&paths::repo_aliases(root), &config.org_hint);
        let hooks = resolve_hooks(config.secrets_file.as_deref(), &config.hook_fallbacks);
        let tracker = GhIssueTracker::new(config.issue_repo.clone());

        Ok(Self {
            root: root.to_path_buf(),
            config,
            generator: CandidateGenerator::new(aliases),
            hooks,
            tracker,
        })
    }
}
