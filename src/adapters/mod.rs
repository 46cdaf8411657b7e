//! Adapter implementations for port traits
//!
//! This module contains the concrete code that performs I/O:
//!
//! - `http` - `Transport` over reqwest's blocking client
//! - `gh` - `IssueTracker` over the GitHub CLI
//! - `status_file` - `ReportSink` writing dated Markdown files
//! - `alias_file` - Alias overlay loading
//! - `secrets` - Redeploy hook resolution

pub mod alias_file;
pub mod gh;
pub mod http;
pub mod secrets;
pub mod status_file;

pub use alias_file::load_alias_config;
pub use gh::GhIssueTracker;
pub use http::ReqwestTransport;
pub use secrets::resolve_hooks;
pub use status_file::StatusFileWriter;
