// ABOUTME: Ping command implementation.
// ABOUTME: Installs iputils in the source container, then pings the target from it.

use super::Context;
use crate::cli::PingArgs;
use crate::error::Result;
use crate::runtime::Invocation;

/// Only works for yum-based images (e.g. CentOS 7), which ship without
/// `ping` but can install it from the `iputils` package.
pub async fn ping(ctx: &Context<'_>, args: &PingArgs) -> Result<()> {
    let base = ctx.runtime_command()?;
    ctx.run_sequence(&invocations(base, args)).await
}

fn invocations(base: Invocation, args: &PingArgs) -> [Invocation; 2] {
    let exec = base.args(["exec", "-t", args.from.as_str()]);

    let install = exec.clone().args(["yum", "-y", "install", "iputils"]);
    let ping = exec.args(["ping", args.to.as_str()]);

    [install, ping]
}
