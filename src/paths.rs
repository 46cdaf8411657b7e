//! Centralized path definitions for the guardian
//!
//! Every file the guardian reads or writes lives under a project root
//! (the current directory unless `--root` says otherwise).
//!
//! ## Layout
//!
//! ```text
//! root/
//! ├── config/
//! │   ├── guardian.toml          # Optional settings (env values override)
//! │   └── repo_aliases.json      # Optional alias overlay for repo resolution
//! └── docs/
//!     └── status/
//!         └── 2025-06-10.md      # One status report per UTC day
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Configuration directory name
const CONFIG_DIR: &str = "config";

/// Settings filename
const SETTINGS_FILE: &str = "guardian.toml";

/// Alias overlay filename
const ALIASES_FILE: &str = "repo_aliases.json";

/// Status report directory, relative to the root
const STATUS_DIR: &str = "docs/status";

/// Get path to `config/`.
#[must_use]
pub fn config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

/// Get path to `config/guardian.toml`.
#[must_use]
pub fn settings_file(root: &Path) -> PathBuf {
    config_dir(root).join(SETTINGS_FILE)
}

/// Get path to `config/repo_aliases.json`.
///
/// Top-level keys `org`, `repos` and `rules` each replace the built-in
/// default when present.
#[must_use]
pub fn repo_aliases(root: &Path) -> PathBuf {
    config_dir(root).join(ALIASES_FILE)
}

/// Get path to `docs/status/`.
#[must_use]
pub fn status_dir(root: &Path) -> PathBuf {
    root.join(STATUS_DIR)
}

/// Get path to the status report for a UTC date.
#[must_use]
pub fn status_file(root: &Path, date: NaiveDate) -> PathBuf {
    status_dir(root).join(format!("{}.md", date.format("%Y-%m-%d")))
}
