//! Remediation - admin bootstrap and redeploy hooks
//!
//! Every action is a single fire-and-forget POST. The guardian never retries
//! and never checks whether the action had an effect; it only records the
//! response code.

use log::{info, warn};
use serde_json::json;

use crate::core::models::{BootstrapOutcome, DeployHooks, HookAttempt, RedeployOutcome};
use crate::core::ports::{RequestBody, RequestOptions, Transport};

/// Reason sent with the bootstrap request
pub const BOOTSTRAP_REASON: &str = "guardian-autoboot";

/// Longest response message kept in the report, in characters
pub const MESSAGE_PREVIEW_CHARS: usize = 160;

/// Triggers corrective actions through a transport
#[derive(Debug)]
pub struct Remediator<'a, T: Transport> {
    transport: &'a T,
    options: RequestOptions,
}

impl<'a, T: Transport> Remediator<'a, T> {
    /// Create a remediator
    pub const fn new(transport: &'a T, options: RequestOptions) -> Self {
        Self { transport, options }
    }

    /// Ask the API to bootstrap its admin configuration when it is unhealthy
    pub fn maybe_bootstrap(
        &self,
        api_base: Option<&str>,
        route: &str,
        api_ok: bool,
    ) -> BootstrapOutcome {
        if api_ok {
            return BootstrapOutcome::NotNeeded;
        }
        let Some(base) = api_base.filter(|b| !b.is_empty()) else {
            return BootstrapOutcome::SkippedNoApiBase;
        };

        let url = format!("{base}{route}");
        let body = RequestBody::Json(json!({ "reason": BOOTSTRAP_REASON }));
        info!("requesting admin bootstrap at {url}");
        match self.transport.post(&url, &self.options, Some(&body)) {
            Ok(response) => BootstrapOutcome::Attempted {
                code: Some(response.status),
                message: truncate_chars(&response.body, MESSAGE_PREVIEW_CHARS),
            },
            Err(err) => {
                warn!("admin bootstrap failed: {err}");
                BootstrapOutcome::Attempted {
                    code: None,
                    message: truncate_chars(err.message(), MESSAGE_PREVIEW_CHARS),
                }
            },
        }
    }

    /// Call every configured redeploy hook when either endpoint is unhealthy.
    ///
    /// Hooks are independent: a failed call never stops the next one.
    pub fn maybe_redeploy(&self, hooks: &DeployHooks, ui_ok: bool, api_ok: bool) -> RedeployOutcome {
        if ui_ok && api_ok {
            return RedeployOutcome::NotNeeded;
        }

        let attempts = hooks
            .configured()
            .map(|(provider, url)| {
                info!("triggering {provider} redeploy");
                match self.transport.post(url, &self.options, None) {
                    Ok(response) => HookAttempt {
                        provider,
                        code: Some(response.status),
                        error: None,
                    },
                    Err(err) => {
                        warn!("{provider} redeploy failed: {err}");
                        HookAttempt {
                            provider,
                            code: None,
                            error: Some(err.to_string()),
                        }
                    },
                }
            })
            .collect();

        RedeployOutcome::Triggered(attempts)
    }
}

/// Keep at most `max` characters of `text`
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
