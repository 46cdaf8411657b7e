//! Mock implementations of port traits for testing
//!
//! These mocks provide scripted behavior for unit testing
//! without real network or process I/O.

use std::cell::RefCell;
use std::path::PathBuf;

use chrono::NaiveDate;
use guardian::core::models::{GuardianReport, IssueRecord, TrackerOutcome};
use guardian::core::ports::{
    HttpResponse, IssueTracker, ReportSink, RequestBody, RequestOptions, Transport, TransportError,
};

/// One request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<RequestBody>,
}

/// Scripted reply for a URL prefix
#[derive(Debug, Clone)]
enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

/// Mock implementation of Transport.
///
/// Replies are matched by URL prefix, most recently scripted first. Any
/// unscripted URL answers 404.
pub struct MockTransport {
    replies: RefCell<Vec<(String, Reply)>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Answer requests to URLs starting with `prefix`
    pub fn respond(self, prefix: &str, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push((prefix.to_string(), Reply::Respond(HttpResponse::new(status, body))));
        self
    }

    /// Fail requests to URLs starting with `prefix` without a response
    pub fn fail(self, prefix: &str, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push((prefix.to_string(), Reply::Fail(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.url.clone()).collect()
    }

    pub fn posts(&self) -> Vec<RecordedCall> {
        self.calls.borrow().iter().filter(|c| c.method == "POST").cloned().collect()
    }

    fn reply(
        &self,
        method: &'static str,
        url: &str,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });
        let replies = self.replies.borrow();
        match replies.iter().rev().find(|(prefix, _)| url.starts_with(prefix.as_str())) {
            Some((_, Reply::Respond(response))) => Ok(response.clone()),
            Some((_, Reply::Fail(message))) => Err(TransportError::new(message.clone())),
            None => Ok(HttpResponse::new(404, "Not Found")),
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str, _options: &RequestOptions) -> Result<HttpResponse, TransportError> {
        self.reply("GET", url, None)
    }

    fn post(
        &self,
        url: &str,
        _options: &RequestOptions,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse, TransportError> {
        self.reply("POST", url, body)
    }
}

/// Mock implementation of IssueTracker
pub struct MockIssueTracker {
    outcome: TrackerOutcome,
    queries: RefCell<usize>,
}

impl MockIssueTracker {
    pub fn with_issues(issues: Vec<IssueRecord>) -> Self {
        Self {
            outcome: TrackerOutcome::Issues(issues),
            queries: RefCell::new(0),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            outcome: TrackerOutcome::Unavailable(reason.to_string()),
            queries: RefCell::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        *self.queries.borrow()
    }
}

impl IssueTracker for MockIssueTracker {
    fn recent_issues(&self) -> TrackerOutcome {
        *self.queries.borrow_mut() += 1;
        self.outcome.clone()
    }
}

/// Mock implementation of ReportSink that keeps reports in memory
pub struct MemoryReportSink {
    persisted: RefCell<Vec<(NaiveDate, GuardianReport)>>,
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self {
            persisted: RefCell::new(Vec::new()),
        }
    }

    pub fn persisted(&self) -> Vec<(NaiveDate, GuardianReport)> {
        self.persisted.borrow().clone()
    }
}

impl ReportSink for MemoryReportSink {
    fn persist(&self, report: &GuardianReport, date: NaiveDate) -> anyhow::Result<PathBuf> {
        self.persisted.borrow_mut().push((date, report.clone()));
        Ok(PathBuf::from(format!("memory/{date}.md")))
    }
}

/// Issue record helper
pub fn issue(number: u64, title: &str, body: Option<&str>, updated_at: &str) -> IssueRecord {
    IssueRecord {
        number,
        title: title.to_string(),
        body: body.map(String::from),
        updated_at: updated_at.parse().unwrap(),
    }
}
