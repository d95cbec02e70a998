// ABOUTME: Command handlers for the cntnr CLI.
// ABOUTME: Dispatches a parsed sub-command to its handler.

mod context;
mod create;
mod get;
mod lifecycle;
mod ping;
mod shell;

pub use context::Context;
pub use create::create;
pub use get::{GetAction, NETWORK_LISTING_RUNTIME, get};
pub use lifecycle::{delete, start, stop};
pub use ping::ping;
pub use shell::shell;

use crate::cli::Commands;
use crate::error::Result;

/// Run the handler for `command`.
pub async fn dispatch(ctx: &Context<'_>, command: &Commands) -> Result<()> {
    match command {
        Commands::Create(args) => create(ctx, args).await,
        Commands::Delete(args) => delete(ctx, args).await,
        Commands::Get(args) => get(ctx, args).await,
        Commands::Ping(args) => ping(ctx, args).await,
        Commands::Shell(args) => shell(ctx, args).await,
        Commands::Start(args) => start(ctx, args).await,
        Commands::Stop(args) => stop(ctx, args).await,
    }
}
