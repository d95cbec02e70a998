// ABOUTME: Get command implementation.
// ABOUTME: Lists networks or running containers, or inspects one container.

use super::Context;
use crate::cli::GetArgs;
use crate::error::Result;
use crate::runtime::{Invocation, RuntimeType};

/// Network listing always goes through Docker, whatever runtime was selected.
/// Podman's CLI had no compatible `network ls` when this was written
/// (containers/libpod#2909).
pub const NETWORK_LISTING_RUNTIME: RuntimeType = RuntimeType::Docker;

/// What a `get` invocation resolves to. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetAction<'a> {
    ListNetworks,
    ListRunning,
    Inspect(&'a str),
    Nothing,
}

impl<'a> GetAction<'a> {
    /// Priority: `--network`, then `--running`, then `--name`.
    pub fn resolve(args: &'a GetArgs) -> Self {
        if args.network {
            GetAction::ListNetworks
        } else if args.running {
            GetAction::ListRunning
        } else if let Some(name) = args.name.as_deref() {
            GetAction::Inspect(name)
        } else {
            GetAction::Nothing
        }
    }
}

pub async fn get(ctx: &Context<'_>, args: &GetArgs) -> Result<()> {
    let invocation = match GetAction::resolve(args) {
        GetAction::ListNetworks => {
            Invocation::new(NETWORK_LISTING_RUNTIME.binary_name()).args(["network", "ls"])
        }
        GetAction::ListRunning => ctx.runtime_command()?.arg("ps"),
        GetAction::Inspect(name) => ctx.runtime_command()?.arg("inspect").arg(name),
        GetAction::Nothing => {
            ctx.output()
                .warning("nothing to get: pass --name, --running or --network");
            return Ok(());
        }
    };

    ctx.run(&invocation).await
}
