//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the core guardian logic
//! and external systems (HTTP, the issue tracker, report storage).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. Tests drive the whole pass through scripted mocks.
//!
//! The guardian runs one blocking call at a time, so the traits carry no
//! `Send + Sync` bound.

mod issue_tracker;
mod report_sink;
mod transport;

pub use issue_tracker::IssueTracker;
pub use report_sink::ReportSink;
pub use transport::{
    DEFAULT_TIMEOUT, HttpResponse, RequestBody, RequestOptions, Transport, TransportError,
    USER_AGENT,
};
