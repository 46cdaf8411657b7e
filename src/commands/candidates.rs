//! Candidates command - show probe order without going online

use guardian::output::{CandidateList, OutputMode};

use super::Context;

/// Print repository (or organization) candidates in probe order
pub fn candidates(ctx: &Context, hint: &str, orgs: bool, mode: OutputMode) {
    let result = if orgs {
        CandidateList {
            source: format!("org {}", ctx.generator.config().org.canonical),
            candidates: ctx.generator.org_candidates().collect(),
        }
    } else {
        CandidateList {
            source: hint.to_string(),
            candidates: ctx.generator.candidates(hint).collect(),
        }
    };
    result.render(mode);
}
