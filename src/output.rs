//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{DeadManState, HealthState, PassOutcome, RepoResolution};
use crate::core::services::{API_LABEL, UI_LABEL};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Colour a report line by what it says
#[must_use]
pub fn colorize_line(line: &str) -> ColoredString {
    let bad = ["not found", "ok=false", "triggered=true", "unavailable", "error="];
    if bad.iter().any(|marker| line.contains(marker)) {
        line.red()
    } else if line.contains("FOUND") || line.contains("ok=true") || line.contains("triggered=false") {
        line.green()
    } else {
        line.normal()
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of a full guardian pass
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// What the pass observed and did
    pub outcome: PassOutcome,
    /// Where the status file was written, if it was
    pub status_file: Option<String>,
}

impl RunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for line in self.outcome.report.lines() {
            println!("{}", colorize_line(line));
        }
        if let Some(path) = &self.status_file {
            println!("\nStatus written to {path}");
        }
    }
}

/// Result of resolving explicit hints
#[derive(Debug, Serialize)]
pub struct ResolveResult {
    /// One attempt per hint, in argument order
    pub resolutions: Vec<RepoResolution>,
}

impl ResolveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for resolution in &self.resolutions {
                    println!("{}", colorize_line(&resolution.report_line()));
                    if let Some(hit) = &resolution.found {
                        println!("  {}", hit.url);
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Ordered spelling candidates
#[derive(Debug, Serialize)]
pub struct CandidateList {
    /// What the candidates were generated from
    pub source: String,
    /// Candidates in probe order
    pub candidates: Vec<String>,
}

impl CandidateList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Candidates for {} ({}):", self.source, self.candidates.len());
                for candidate in &self.candidates {
                    println!("  {candidate}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Health of both endpoints
#[derive(Debug, Serialize)]
pub struct ProbeResult {
    /// UI health
    pub ui: HealthState,
    /// API health
    pub api: HealthState,
}

impl ProbeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", colorize_line(&self.ui.report_line(UI_LABEL)));
                println!("{}", colorize_line(&self.api.report_line(API_LABEL)));
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Dead-man switch evaluation
#[derive(Debug, Serialize)]
pub struct DeadManResult {
    /// The evaluated state
    #[serde(flatten)]
    pub state: DeadManState,
}

impl DeadManResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if let Some(reason) = &self.state.unavailable {
                    println!("{}", format!("Issue tracker unavailable: {reason}").yellow());
                }
                println!("{}", colorize_line(&self.state.report_line()));
            },
            OutputMode::Json => print_json(self),
        }
    }
}
