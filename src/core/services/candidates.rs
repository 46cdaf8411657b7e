//! Candidate generation for repository and organization names
//!
//! Produces, in strict priority order, the name spellings worth checking for
//! a loose hint. Generation and deduplication are separate steps:
//! [`CandidateGenerator::raw_candidates`] may repeat a name, and [`Dedup`]
//! drops repeats while keeping first-seen order.
//!
//! # Examples
//!
//! ```
//! use guardian::core::models::AliasConfig;
//! use guardian::core::services::CandidateGenerator;
//!
//! let generator = CandidateGenerator::new(AliasConfig::for_org("StegVerse"));
//! let names: Vec<String> = generator.candidates("talk").collect();
//! assert_eq!(names, ["talk", "StegVerse-talk", "Talk", "StegVerse-Talk"]);
//! ```

use std::collections::HashSet;
use std::iter;

use crate::core::models::{AliasConfig, CaseStyle};

/// The three case forms of a name: unchanged, lower, title.
///
/// Always yields exactly three items, duplicates included.
pub fn case_variants(name: &str) -> impl Iterator<Item = String> + '_ {
    CaseStyle::ALL.into_iter().map(move |style| style.apply(name))
}

/// Hyphenation forms of a name, the name itself first.
///
/// A hyphenated name also yields its hyphen-stripped form. Otherwise the
/// name is split at camel-case boundaries (an uppercase letter directly after
/// a lowercase letter or digit): first at every boundary, then at the last
/// boundary only. A leading uppercase run such as `"TVSite"` has no boundary
/// and is left alone.
///
/// Do not simplify this to "hyphen before every non-initial capital". That
/// rule turns `"TVSite"` into `"T-V-Site"` and `"StegVerseTV"` into
/// `"Steg-Verse-T-V"`, and never yields `"StegVerse-Talk"` from
/// `"StegVerseTalk"`.
pub fn hyphen_variants(name: &str) -> impl Iterator<Item = String> {
    let mut forms = vec![name.to_string()];

    if name.contains('-') {
        forms.push(name.replace('-', ""));
    } else {
        let boundaries = camel_boundaries(name);
        if let Some(&last) = boundaries.last() {
            let kebab = insert_hyphens(name, &boundaries);
            let tail = insert_hyphens(name, &[last]);
            let split_once = tail != kebab;
            forms.push(kebab);
            if split_once {
                forms.push(tail);
            }
        }
    }

    forms.into_iter()
}

/// Byte offsets of uppercase letters that directly follow a lowercase letter
/// or a digit
fn camel_boundaries(name: &str) -> Vec<usize> {
    let mut boundaries = Vec::new();
    let mut prev: Option<char> = None;
    for (idx, ch) in name.char_indices() {
        if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            boundaries.push(idx);
        }
        prev = Some(ch);
    }
    boundaries
}

fn insert_hyphens(name: &str, at: &[usize]) -> String {
    let mut out = String::with_capacity(name.len() + at.len());
    let mut start = 0;
    for &idx in at {
        out.push_str(&name[start..idx]);
        out.push('-');
        start = idx;
    }
    out.push_str(&name[start..]);
    out
}

/// Iterator adapter that drops strings it has already yielded
#[derive(Debug)]
pub struct Dedup<I> {
    inner: I,
    seen: HashSet<String>,
}

impl<I> Dedup<I> {
    /// Wrap an iterator
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for Dedup<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for candidate in self.inner.by_ref() {
            if self.seen.insert(candidate.clone()) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Builds candidate sequences from an [`AliasConfig`]
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    config: AliasConfig,
}

impl CandidateGenerator {
    /// Create a generator over a fixed alias configuration
    #[must_use]
    pub const fn new(config: AliasConfig) -> Self {
        Self { config }
    }

    /// The alias configuration in use
    #[must_use]
    pub const fn config(&self) -> &AliasConfig {
        &self.config
    }

    /// The configured prefixes applied to a name, in order
    pub fn prefix_variants<'a>(&'a self, name: &'a str) -> impl Iterator<Item = String> + 'a {
        self.config.rules.prefixes.iter().map(move |prefix| format!("{prefix}{name}"))
    }

    /// Names the hint expands to before any transform.
    ///
    /// An aliased hint expands to `[key, alternates.., hint]`; anything else
    /// is searched as-is.
    #[must_use]
    pub fn base_names(&self, hint: &str) -> Vec<String> {
        match self.config.alias_entry(hint) {
            Some((key, alternates)) => iter::once(key.to_string())
                .chain(alternates.iter().cloned())
                .chain(iter::once(hint.to_string()))
                .collect(),
            None => vec![hint.to_string()],
        }
    }

    /// Every transformed name, in priority order, repeats included.
    ///
    /// For each base name: case, then hyphenation, then prefix.
    pub fn raw_candidates(&self, hint: &str) -> impl Iterator<Item = String> + '_ {
        self.base_names(hint).into_iter().flat_map(move |base| {
            self.case_forms(&base).into_iter().flat_map(move |cased| {
                self.hyphen_forms(&cased)
                    .into_iter()
                    .flat_map(move |form| self.prefix_variants(&form).collect::<Vec<_>>())
            })
        })
    }

    /// Repository candidates for a hint, deduplicated
    pub fn candidates(&self, hint: &str) -> Dedup<impl Iterator<Item = String> + '_> {
        Dedup::new(self.raw_candidates(hint))
    }

    /// Organization candidates: every org spelling in its case forms,
    /// deduplicated, canonical first
    pub fn org_candidates(&self) -> Dedup<impl Iterator<Item = String> + '_> {
        Dedup::new(
            self.config
                .org
                .all()
                .flat_map(|org| case_variants(org).collect::<Vec<_>>()),
        )
    }

    fn case_forms(&self, name: &str) -> Vec<String> {
        CaseStyle::ALL
            .into_iter()
            .filter(|style| self.config.rules.allows_case(*style))
            .map(|style| style.apply(name))
            .collect()
    }

    fn hyphen_forms(&self, name: &str) -> Vec<String> {
        let rules = &self.config.rules;
        let hyphens = name.matches('-').count();
        hyphen_variants(name)
            .filter(|form| {
                let count = form.matches('-').count();
                if count > hyphens {
                    rules.allows_kebab()
                } else if count < hyphens {
                    rules.allows_stripped()
                } else {
                    true
                }
            })
            .collect()
    }
}
