// ABOUTME: Shell command implementation.
// ABOUTME: Opens an interactive bash session inside a running container.

use super::Context;
use crate::cli::NameArgs;
use crate::error::Result;

const SHELL: &str = "/bin/bash";

pub async fn shell(ctx: &Context<'_>, args: &NameArgs) -> Result<()> {
    let invocation = ctx
        .runtime_command()?
        .args(["exec", "-it", args.name.as_str(), SHELL]);
    ctx.run(&invocation).await
}
