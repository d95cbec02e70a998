// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the seven container sub-commands and global flags.

use crate::output::OutputMode;
use crate::runtime::{RuntimeConfig, RuntimeType};
use crate::types::DEFAULT_TAG;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cntnr")]
#[command(about = "Wrapper to perform basic container management tasks with Podman or Docker")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print progress and errors as JSON lines on stderr
    #[arg(long, global = true)]
    pub json: bool,

    /// Print the runtime commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Use this runtime instead of searching PATH
    #[arg(long, global = true, value_enum, env = "CNTNR_RUNTIME")]
    pub runtime: Option<RuntimeType>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new container
    Create(CreateArgs),

    /// Delete an existing container
    Delete(NameArgs),

    /// Get info about containers or container host
    Get(GetArgs),

    /// Ping between two running containers to test connectivity
    Ping(PingArgs),

    /// Open interactive shell of a running container
    Shell(NameArgs),

    /// Start a container
    Start(NameArgs),

    /// Stop a container
    Stop(NameArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Name/URL of base image
    #[arg(short = 'i', long = "base-image", value_name = "IMAGE_NAME")]
    pub image: String,

    /// Name of new container
    #[arg(short, long, value_name = "CONTAINER_NAME")]
    pub name: String,

    /// Image tag to use
    #[arg(short = 't', long = "base-image-tag", value_name = "TAG", default_value = DEFAULT_TAG)]
    pub tag: String,
}

#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// Name of container
    #[arg(short, long, value_name = "CONTAINER_NAME")]
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Name of container to inspect
    #[arg(short, long, value_name = "CONTAINER_NAME")]
    pub name: Option<String>,

    /// (Docker only!) List available network connections
    #[arg(long)]
    pub network: bool,

    /// List all running containers
    #[arg(short, long)]
    pub running: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PingArgs {
    /// Name of container to send ping from
    #[arg(short, long, value_name = "CONTAINER_NAME")]
    pub from: String,

    /// Name of container to ping
    #[arg(short, long, value_name = "CONTAINER_NAME")]
    pub to: String,
}
