// ABOUTME: Per-process execution context shared by every command handler.
// ABOUTME: Carries the resolved runtime and runs invocations in strict sequence.

use crate::error::Result;
use crate::output::Output;
use crate::runtime::{CommandRunner, Invocation, RuntimeError, RuntimeType};

/// Everything a handler needs to reach the container runtime.
///
/// The runtime choice is resolved once before dispatch and never changes.
pub struct Context<'a> {
    runtime: Option<RuntimeType>,
    runner: &'a dyn CommandRunner,
    output: Output,
}

impl<'a> Context<'a> {
    pub fn new(
        runtime: Option<RuntimeType>,
        runner: &'a dyn CommandRunner,
        output: Output,
    ) -> Self {
        Self {
            runtime,
            runner,
            output,
        }
    }

    /// The selected runtime, or `NotFound` if detection came up empty.
    pub fn runtime(&self) -> Result<RuntimeType> {
        self.runtime.ok_or_else(|| RuntimeError::NotFound.into())
    }

    /// Start an invocation of the selected runtime binary.
    pub fn runtime_command(&self) -> Result<Invocation> {
        Ok(Invocation::new(self.runtime()?.binary_name()))
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Run one invocation, failing if the child exits non-zero.
    pub async fn run(&self, invocation: &Invocation) -> Result<()> {
        self.output.invocation(invocation);

        let status = self.runner.run(invocation).await?;
        if !status.success() {
            tracing::warn!(command = %invocation, code = ?status.code(), "runtime command failed");
            return Err(RuntimeError::Exited {
                command: invocation.to_string(),
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }

    /// Run invocations in order, stopping at the first failure.
    pub async fn run_sequence(&self, invocations: &[Invocation]) -> Result<()> {
        for invocation in invocations {
            self.run(invocation).await?;
        }
        Ok(())
    }
}
