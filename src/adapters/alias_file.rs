//! Alias overlay file
//!
//! Reads `config/repo_aliases.json`. The file is optional and advisory: if
//! it is missing or malformed the built-in defaults are used.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::core::models::{AliasConfig, AliasOverlay};

/// Load alias configuration for an org hint, overlaying the file at `path`
#[must_use]
pub fn load_alias_config(path: &Path, org_hint: &str) -> AliasConfig {
    let defaults = AliasConfig::for_org(org_hint);
    if !path.exists() {
        debug!("no alias file at {}, using defaults", path.display());
        return defaults;
    }

    match fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| Ok(serde_json::from_str::<AliasOverlay>(&content)?))
    {
        Ok(overlay) => defaults.merge(overlay),
        Err(e) => {
            warn!("ignoring alias file {}: {e}", path.display());
            defaults
        },
    }
}
