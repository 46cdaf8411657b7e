//! Property-based tests for candidate generation
//!
//! Uses proptest to verify properties that should hold for all hints.

use guardian::core::models::AliasConfig;
use guardian::core::services::{CandidateGenerator, case_variants, hyphen_variants};
use proptest::prelude::*;
use std::collections::HashSet;

fn generator() -> CandidateGenerator {
    CandidateGenerator::new(AliasConfig::for_org("StegVerse"))
}

proptest! {
    /// Candidates never repeat
    #[test]
    fn candidates_have_no_duplicates(hint in "[A-Za-z0-9]{1,8}(-[A-Za-z0-9]{1,8}){0,2}") {
        let names: Vec<String> = generator().candidates(&hint).collect();
        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }

    /// The hint itself is always searched, and searched first
    #[test]
    fn candidates_start_with_hint(hint in "[A-Za-z][A-Za-z0-9-]{0,15}") {
        let names: Vec<String> = generator().candidates(&hint).collect();
        prop_assert_eq!(names.first(), Some(&hint));
    }

    /// Case variants always yield exactly three forms
    #[test]
    fn case_variants_yield_three(name in "\\PC{0,12}") {
        prop_assert_eq!(case_variants(&name).count(), 3);
    }

    /// Hyphenation keeps the name first and never changes its letters
    #[test]
    fn hyphen_variants_only_move_hyphens(name in "[A-Za-z0-9-]{1,16}") {
        let forms: Vec<String> = hyphen_variants(&name).collect();
        prop_assert_eq!(&forms[0], &name);
        let letters: String = name.chars().filter(|c| *c != '-').collect();
        for form in &forms {
            let form_letters: String = form.chars().filter(|c| *c != '-').collect();
            prop_assert_eq!(&form_letters, &letters);
        }
    }

    /// Organization candidates never repeat and start with the canonical spelling
    #[test]
    fn org_candidates_unique(org in "[A-Za-z]{1,10}") {
        let generator = CandidateGenerator::new(AliasConfig::for_org(&org));
        let orgs: Vec<String> = generator.org_candidates().collect();
        let unique: HashSet<&String> = orgs.iter().collect();
        prop_assert_eq!(unique.len(), orgs.len());
        prop_assert_eq!(&orgs[0], &org);
    }
}
