//! Run command - one full guardian pass

use chrono::Utc;
use guardian::adapters::{ReqwestTransport, StatusFileWriter};
use guardian::core::ports::ReportSink;
use guardian::core::services::Guardian;
use guardian::output::{OutputMode, RunResult};

use super::Context;

/// Run one pass, render the report, then persist it when `write` is set.
///
/// The report is printed before persisting so a write failure never hides it.
pub fn run(ctx: &Context, write: bool, mode: OutputMode) -> anyhow::Result<()> {
    let transport = ReqwestTransport::new()?;
    let guardian = Guardian::new(&ctx.config, &ctx.generator, &ctx.hooks, &transport, &ctx.tracker);

    let now = Utc::now();
    let outcome = guardian.run_pass(now);

    if !write {
        RunResult {
            outcome,
            status_file: None,
        }
        .render(mode);
        return Ok(());
    }

    let persisted = StatusFileWriter::new(&ctx.root).persist(&outcome.report, now.date_naive());
    let status_file = persisted.as_ref().ok().map(|path| path.display().to_string());
    RunResult {
        outcome,
        status_file,
    }
    .render(mode);
    persisted.map(|_| ())
}
