// ABOUTME: Create command implementation.
// ABOUTME: Pulls the base image, then creates a named interactive container from it.

use super::Context;
use crate::cli::CreateArgs;
use crate::error::Result;
use crate::runtime::Invocation;
use crate::types::ImageRef;

/// Pull `<image>:<tag>` and create the container. Create is skipped if the
/// pull fails; a failed create leaves the pulled image in place.
pub async fn create(ctx: &Context<'_>, args: &CreateArgs) -> Result<()> {
    let base = ctx.runtime_command()?;
    ctx.run_sequence(&invocations(base, args)).await
}

fn invocations(base: Invocation, args: &CreateArgs) -> [Invocation; 2] {
    let image = ImageRef::new(&args.image, &args.tag).to_string();

    let pull = base.clone().arg("pull").arg(&image);
    let create = base.args(["create", "-i", "--name", args.name.as_str(), image.as_str()]);

    [pull, create]
}
