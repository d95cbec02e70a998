// ABOUTME: Seam for executing invocations against the host.
// ABOUTME: Spawns real foreground child processes, or prints them in dry-run mode.

use super::error::{RuntimeError, SpawnSnafu};
use super::invocation::{ChildStatus, Invocation};
use async_trait::async_trait;
use snafu::ResultExt;
use std::process::Stdio;
use tokio::process::Command;

/// Runs one invocation to completion and reports its exit status.
///
/// A non-zero status is returned as `Ok`; only failure to run the program at
/// all is an error.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ChildStatus, RuntimeError>;
}

/// Spawns the runtime as a foreground child sharing our stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ChildStatus, RuntimeError> {
        tracing::debug!(command = %invocation, "spawning");

        let status = Command::new(invocation.program())
            .args(invocation.arguments())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .context(SpawnSnafu {
                program: invocation.program(),
            })?;

        let status = ChildStatus::from(status);
        tracing::debug!(command = %invocation, code = ?status.code(), "child exited");
        Ok(status)
    }
}

/// Prints each invocation to stdout instead of running it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

#[async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ChildStatus, RuntimeError> {
        println!("{invocation}");
        Ok(ChildStatus::from_code(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn process_runner_reports_exit_code() {
        let status = ProcessRunner
            .run(&Invocation::new("sh").args(["-c", "exit 3"]))
            .await
            .unwrap();
        assert_eq!(status.code(), Some(3));
        assert!(!status.success());
    }

    #[tokio::test]
    async fn process_runner_success() {
        let status = ProcessRunner
            .run(&Invocation::new("sh").args(["-c", "true"]))
            .await
            .unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let err = ProcessRunner
            .run(&Invocation::new("cntnr-test-no-such-binary"))
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Spawn { .. }));
    }

    #[tokio::test]
    async fn dry_run_always_succeeds() {
        let status = DryRunRunner
            .run(&Invocation::new("podman").args(["rm", "web"]))
            .await
            .unwrap();
        assert!(status.success());
    }
}
