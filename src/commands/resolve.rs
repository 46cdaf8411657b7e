//! Resolve command - repository resolution only

use guardian::adapters::ReqwestTransport;
use guardian::core::services::Guardian;
use guardian::output::{OutputMode, ResolveResult};

use super::Context;

/// Resolve each hint against the code host
pub fn resolve(ctx: &Context, hints: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let transport = ReqwestTransport::new()?;
    let guardian = Guardian::new(&ctx.config, &ctx.generator, &ctx.hooks, &transport, &ctx.tracker);

    ResolveResult {
        resolutions: guardian.resolve_hints(hints),
    }
    .render(mode);
    Ok(())
}
