//! Probe command - UI and API health only

use guardian::adapters::ReqwestTransport;
use guardian::core::services::Guardian;
use guardian::output::{OutputMode, ProbeResult};

use super::Context;

/// Probe both endpoints and print their health
pub fn probe(ctx: &Context, mode: OutputMode) -> anyhow::Result<()> {
    let transport = ReqwestTransport::new()?;
    let guardian = Guardian::new(&ctx.config, &ctx.generator, &ctx.hooks, &transport, &ctx.tracker);

    ProbeResult {
        ui: guardian.probe_ui(),
        api: guardian.probe_api(),
    }
    .render(mode);
    Ok(())
}
