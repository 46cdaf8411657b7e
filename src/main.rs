//! guardian - Continuity guardian for a small web deployment
//!
//! Each pass resolves tracked repositories, probes UI and API health,
//! attempts bootstrap or redeploy when something is down, evaluates a
//! dead-man switch and writes a dated status report.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the guardian CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
