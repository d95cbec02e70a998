// ABOUTME: Entry point for the cntnr CLI application.
// ABOUTME: Selects the runtime, parses arguments, and dispatches to a handler.

use clap::Parser;
use cntnr::cli::Cli;
use cntnr::commands::{self, Context};
use cntnr::output::Output;
use cntnr::runtime::{CommandRunner, DryRunRunner, ProcessRunner, select_runtime_from_env};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output_mode());
    let runtime = select_runtime_from_env(&cli.runtime_config());

    let runner: &dyn CommandRunner = if cli.dry_run {
        &DryRunRunner
    } else {
        &ProcessRunner
    };

    let ctx = Context::new(runtime, runner, output);

    if let Err(e) = commands::dispatch(&ctx, &cli.command).await {
        output.error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
