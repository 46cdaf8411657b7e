//! Alias configuration model
//!
//! Describes how a loose repository hint maps onto the real organization and
//! repository names on the code host. Loaded once per run and never mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Organization used when no hint is configured
pub const DEFAULT_ORG: &str = "StegVerse";

/// Name prefixes tried for every repository candidate, in order
pub const DEFAULT_PREFIXES: [&str; 2] = ["", "StegVerse-"];

/// Hyphen styles tried for every repository candidate, in order
pub const DEFAULT_HYPHEN_STYLES: [&str; 2] = ["-", ""];

/// A letter-case transform applied to a candidate name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// Leave the name untouched
    AsIs,
    /// Lower-case every letter
    Lower,
    /// Upper-case the first letter of each word, lower-case the rest
    Title,
}

impl CaseStyle {
    /// All case styles, in the order candidates are produced
    pub const ALL: [Self; 3] = [Self::AsIs, Self::Lower, Self::Title];

    /// Apply this case style to a name
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::AsIs => name.to_string(),
            Self::Lower => name.to_lowercase(),
            Self::Title => title_case(name),
        }
    }
}

impl std::fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AsIs => write!(f, "as_is"),
            Self::Lower => write!(f, "lower"),
            Self::Title => write!(f, "title"),
        }
    }
}

/// Title-case a name.
///
/// A word is a maximal run of cased letters: its first letter is upper-cased
/// and the rest are lower-cased. Digits, hyphens and other uncased characters
/// end a word, so `"stegverse-talk"` becomes `"Stegverse-Talk"`.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for ch in name.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if !cased {
            out.push(ch);
            in_word = false;
        } else if in_word {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
            in_word = true;
        }
    }
    out
}

/// Organization spellings to try, canonical first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgAliases {
    /// The spelling tried before any alternate
    pub canonical: String,
    /// Other spellings, tried in order after the canonical one
    #[serde(default)]
    pub alternates: Vec<String>,
}

impl OrgAliases {
    /// Build the default org aliases for a hint: the hint itself, then its
    /// lower-case and title-case spellings
    #[must_use]
    pub fn from_hint(hint: &str) -> Self {
        Self {
            canonical: hint.to_string(),
            alternates: vec![hint.to_lowercase(), title_case(hint)],
        }
    }

    /// Canonical spelling followed by the alternates
    pub fn all(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.alternates.iter().map(String::as_str))
    }
}

/// Transform rules applied when generating repository candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRules {
    /// Enabled case styles
    #[serde(default = "default_cases", alias = "try_cases")]
    pub cases: Vec<CaseStyle>,
    /// Prefixes prepended to each name, in order
    #[serde(default = "default_prefixes", alias = "try_prefixes")]
    pub prefixes: Vec<String>,
    /// Hyphen styles: `"-"` enables kebab forms, `""` enables stripped forms
    #[serde(default = "default_hyphen_styles", alias = "try_hyphens")]
    pub hyphen_styles: Vec<String>,
}

fn default_cases() -> Vec<CaseStyle> {
    CaseStyle::ALL.to_vec()
}

fn default_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.iter().map(ToString::to_string).collect()
}

fn default_hyphen_styles() -> Vec<String> {
    DEFAULT_HYPHEN_STYLES.iter().map(ToString::to_string).collect()
}

impl Default for AliasRules {
    fn default() -> Self {
        Self {
            cases: default_cases(),
            prefixes: default_prefixes(),
            hyphen_styles: default_hyphen_styles(),
        }
    }
}

impl AliasRules {
    /// Whether a case style is enabled
    #[must_use]
    pub fn allows_case(&self, style: CaseStyle) -> bool {
        self.cases.contains(&style)
    }

    /// Whether hyphens may be inserted at camel-case boundaries
    #[must_use]
    pub fn allows_kebab(&self) -> bool {
        self.hyphen_styles.iter().any(|s| s == "-")
    }

    /// Whether existing hyphens may be stripped
    #[must_use]
    pub fn allows_stripped(&self) -> bool {
        self.hyphen_styles.iter().any(String::is_empty)
    }
}

/// Complete alias configuration for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    /// Organization spellings
    pub org: OrgAliases,
    /// Repository hint -> alternate names
    #[serde(default)]
    pub repos: BTreeMap<String, Vec<String>>,
    /// Candidate transform rules
    #[serde(default)]
    pub rules: AliasRules,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self::for_org(DEFAULT_ORG)
    }
}

/// Organization block of an alias file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrgOverlay {
    /// Canonical spelling; the org hint when absent
    #[serde(default)]
    pub canonical: Option<String>,
    /// Other spellings, tried in order after the canonical one
    #[serde(default)]
    pub alternates: Vec<String>,
}

/// Alias file contents; every present key replaces the matching default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasOverlay {
    /// Replacement organization aliases
    #[serde(default)]
    pub org: Option<OrgOverlay>,
    /// Replacement repository alias map
    #[serde(default)]
    pub repos: Option<BTreeMap<String, Vec<String>>>,
    /// Replacement transform rules
    #[serde(default)]
    pub rules: Option<AliasRules>,
}

impl AliasConfig {
    /// Built-in defaults for an organization hint
    #[must_use]
    pub fn for_org(org_hint: &str) -> Self {
        Self {
            org: OrgAliases::from_hint(org_hint),
            repos: BTreeMap::new(),
            rules: AliasRules::default(),
        }
    }

    /// Overlay file contents on top of this config, key by key
    #[must_use]
    pub fn merge(self, overlay: AliasOverlay) -> Self {
        let org = match overlay.org {
            Some(block) => OrgAliases {
                canonical: block.canonical.unwrap_or(self.org.canonical),
                alternates: block.alternates,
            },
            None => self.org,
        };
        Self {
            org,
            repos: overlay.repos.unwrap_or(self.repos),
            rules: overlay.rules.unwrap_or(self.rules),
        }
    }

    /// Find the alias entry a hint belongs to.
    ///
    /// A hint matches an entry when it equals the key or one of its
    /// alternates, ignoring case. Entries are searched in key order.
    #[must_use]
    pub fn alias_entry(&self, hint: &str) -> Option<(&str, &[String])> {
        let wanted = hint.to_lowercase();
        self.repos
            .iter()
            .find(|(key, alternates)| {
                key.to_lowercase() == wanted || alternates.iter().any(|a| a.to_lowercase() == wanted)
            })
            .map(|(key, alternates)| (key.as_str(), alternates.as_slice()))
    }
}
