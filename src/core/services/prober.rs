//! Health probing
//!
//! Classifies an endpoint as healthy or not from one GET request.

use log::debug;

use crate::core::models::{HealthCheck, HealthState};
use crate::core::ports::{RequestOptions, Transport};

/// Body words that mark a healthy response (matched case-insensitively)
pub const HEALTH_TOKENS: [&str; 2] = ["ok", "healthy"];

/// Whether a response body reports health
#[must_use]
pub fn body_reports_healthy(body: &str) -> bool {
    let body = body.to_lowercase();
    HEALTH_TOKENS.iter().any(|token| body.contains(token))
}

/// Probes endpoints through a transport
#[derive(Debug)]
pub struct HealthProber<'a, T: Transport> {
    transport: &'a T,
    options: RequestOptions,
}

impl<'a, T: Transport> HealthProber<'a, T> {
    /// Create a prober
    pub const fn new(transport: &'a T, options: RequestOptions) -> Self {
        Self { transport, options }
    }

    /// Probe one endpoint.
    ///
    /// `setting` names the configuration value the URL comes from and is
    /// used in the "not configured" detail.
    pub fn probe(&self, setting: &str, url: Option<&str>, check: HealthCheck) -> HealthState {
        let Some(url) = url.filter(|u| !u.is_empty()) else {
            return HealthState::not_configured(setting);
        };

        match self.transport.get(url, &self.options) {
            Ok(response) => {
                let ok = response.is_success()
                    && match check {
                        HealthCheck::Reachable => true,
                        HealthCheck::BodyToken => body_reports_healthy(&response.body),
                    };
                debug!("probe {url}: status={} ok={ok}", response.status);
                let detail = if ok {
                    String::new()
                } else if response.is_success() {
                    "no health token in body".to_string()
                } else {
                    format!("HTTP {}", response.status)
                };
                HealthState {
                    target: url.to_string(),
                    status_code: Some(response.status),
                    ok,
                    detail,
                    configured: true,
                }
            },
            Err(err) => {
                debug!("probe {url} failed: {err}");
                HealthState {
                    target: url.to_string(),
                    status_code: None,
                    ok: false,
                    detail: err.to_string(),
                    configured: true,
                }
            },
        }
    }
}
