//! Guardian loop - one pass over every check and action
//!
//! A pass runs these stages in a fixed order, one blocking call at a time:
//!
//! 1. Resolve each tracked repository hint
//! 2. Probe UI health, then API health
//! 3. Admin bootstrap (uses the API result from step 2)
//! 4. Redeploy hooks (uses both results from step 2)
//! 5. Dead-man switch
//!
//! Every stage degrades to a report line; nothing aborts the pass.

use chrono::{DateTime, Utc};
use log::{info, warn};

use super::{CandidateGenerator, HealthProber, Remediator, RepoResolver, dead_man};
use crate::config::GuardianConfig;
use crate::core::models::{
    DeadManState, DeployHooks, GuardianReport, HealthCheck, HealthState, PassOutcome,
    RepoResolution,
};
use crate::core::ports::{IssueTracker, Transport};

/// Label of the UI line in the report
pub const UI_LABEL: &str = "UI";

/// Label of the API line in the report
pub const API_LABEL: &str = "API";

/// Runs guardian passes against one configuration
#[derive(Debug)]
pub struct Guardian<'a, T: Transport, I: IssueTracker> {
    config: &'a GuardianConfig,
    generator: &'a CandidateGenerator,
    hooks: &'a DeployHooks,
    transport: &'a T,
    tracker: &'a I,
}

impl<'a, T: Transport, I: IssueTracker> Guardian<'a, T, I> {
    /// Wire a guardian from its collaborators
    pub const fn new(
        config: &'a GuardianConfig,
        generator: &'a CandidateGenerator,
        hooks: &'a DeployHooks,
        transport: &'a T,
        tracker: &'a I,
    ) -> Self {
        Self {
            config,
            generator,
            hooks,
            transport,
            tracker,
        }
    }

    /// Resolve every tracked repository hint, in configured order
    pub fn resolve_repos(&self) -> Vec<RepoResolution> {
        self.resolve_hints(&self.config.tracked_repos)
    }

    /// Resolve the given hints, in order
    pub fn resolve_hints(&self, hints: &[String]) -> Vec<RepoResolution> {
        let resolver = RepoResolver::new(self.generator, self.transport)
            .with_host(&self.config.code_host)
            .with_timeout(self.config.resolve_timeout);
        hints
            .iter()
            .map(|hint| RepoResolution {
                hint: hint.clone(),
                found: resolver.resolve(hint),
            })
            .collect()
    }

    /// Probe the UI health URL (body must carry a health token)
    pub fn probe_ui(&self) -> HealthState {
        self.prober().probe("UI_HEALTH", self.config.ui_health.as_deref(), HealthCheck::BodyToken)
    }

    /// Probe `API_BASE/whoami` (reachability only)
    pub fn probe_api(&self) -> HealthState {
        self.prober().probe(
            "API_BASE",
            self.config.whoami_url().as_deref(),
            HealthCheck::Reachable,
        )
    }

    /// Evaluate the dead-man switch as of `now`
    pub fn check_dead_man(&self, now: DateTime<Utc>) -> DeadManState {
        let outcome = self.tracker.recent_issues();
        dead_man::evaluate(&outcome, &self.config.trusted_phrase, self.config.days_no_ack, now)
    }

    /// Run one full pass
    pub fn run_pass(&self, now: DateTime<Utc>) -> PassOutcome {
        let mut report = GuardianReport::new();

        let resolutions = self.resolve_repos();
        report.extend(resolutions.iter().map(RepoResolution::report_line));

        let ui = self.probe_ui();
        report.push(ui.report_line(UI_LABEL));
        let api = self.probe_api();
        report.push(api.report_line(API_LABEL));

        let remediator = Remediator::new(self.transport, self.config.request_options());
        let bootstrap = remediator.maybe_bootstrap(
            self.config.api_base.as_deref(),
            &self.config.admin_bootstrap_route,
            api.ok,
        );
        report.push(bootstrap.report_line());

        let redeploy = remediator.maybe_redeploy(self.hooks, ui.ok, api.ok);
        report.extend(redeploy.report_lines());

        let dead_man = self.check_dead_man(now);
        if let Some(reason) = &dead_man.unavailable {
            warn!("issue tracker unavailable: {reason}");
            report.push(format!("Dead-man: issue tracker unavailable ({reason})"));
        }
        report.push(dead_man.report_line());

        info!(
            "pass complete: ui_ok={} api_ok={} dead_man_triggered={}",
            ui.ok, api.ok, dead_man.triggered
        );

        PassOutcome {
            started_at: now,
            resolutions,
            ui,
            api,
            bootstrap,
            redeploy,
            dead_man,
            report,
        }
    }

    fn prober(&self) -> HealthProber<'a, T> {
        HealthProber::new(self.transport, self.config.request_options())
    }
}
