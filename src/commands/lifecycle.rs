// ABOUTME: Delete, start, and stop command implementations.
// ABOUTME: Each maps to a single runtime call on the named container.

use super::Context;
use crate::cli::NameArgs;
use crate::error::Result;

/// Remove the named container.
pub async fn delete(ctx: &Context<'_>, args: &NameArgs) -> Result<()> {
    single(ctx, "rm", &args.name).await
}

pub async fn start(ctx: &Context<'_>, args: &NameArgs) -> Result<()> {
    single(ctx, "start", &args.name).await
}

pub async fn stop(ctx: &Context<'_>, args: &NameArgs) -> Result<()> {
    single(ctx, "stop", &args.name).await
}

async fn single(ctx: &Context<'_>, verb: &str, name: &str) -> Result<()> {
    let invocation = ctx.runtime_command()?.arg(verb).arg(name);
    ctx.run(&invocation).await
}
