//! Redeploy hook secrets
//!
//! Hook URLs come from a JSON secrets file (`{"render": .., "netlify": ..,
//! "vercel": ..}`) first, then from per-hook environment fallbacks.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::core::models::DeployHooks;

/// Secrets file contents; a null or absent key leaves that hook unset
#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(default)]
    render: Option<String>,
    #[serde(default)]
    netlify: Option<String>,
    #[serde(default)]
    vercel: Option<String>,
}

impl From<SecretsFile> for DeployHooks {
    fn from(file: SecretsFile) -> Self {
        Self {
            render: file.render.unwrap_or_default(),
            netlify: file.netlify.unwrap_or_default(),
            vercel: file.vercel.unwrap_or_default(),
        }
    }
}

/// Read hooks from a secrets file; `None` if it is missing or unparsable
#[must_use]
pub fn load_secrets_file(path: &Path) -> Option<DeployHooks> {
    if !path.exists() {
        return None;
    }
    let content = fs::read_to_string(path)
        .map_err(|e| warn!("cannot read secrets file {}: {e}", path.display()))
        .ok()?;
    serde_json::from_str::<SecretsFile>(&content)
        .map(DeployHooks::from)
        .map_err(|e| warn!("ignoring secrets file {}: {e}", path.display()))
        .ok()
}

/// Resolve hook URLs: secrets file first, then the fallbacks, per hook
#[must_use]
pub fn resolve_hooks(secrets_file: Option<&Path>, fallbacks: &DeployHooks) -> DeployHooks {
    secrets_file
        .and_then(load_secrets_file)
        .unwrap_or_default()
        .or_fallback(fallbacks)
}
